//! Favicon availability probe
//!
//! The original surface delegated icon loading to the presentation layer's
//! image machinery with a single onError fallback. The terminal rendition
//! keeps the same asynchronous boundary: one fire-and-forget HTTP HEAD per
//! card, reporting failures back into the TEA loop where the one-shot
//! placeholder substitution is applied. No retry, no backoff, no ordering
//! guarantee across cards.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;

/// Probe every icon address and report unloadable ones.
///
/// `targets` is a list of `(site name, icon address)` pairs. Each address is
/// checked independently on its own task; a failed or non-success response
/// produces exactly one [`Message::IconUnavailable`].
pub async fn probe_icons(
    targets: Vec<(String, String)>,
    timeout: Duration,
    tx: mpsc::Sender<Message>,
) {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "could not build probe client, skipping icon probe");
            return;
        }
    };

    debug!(count = targets.len(), "probing icon addresses");
    for (site, address) in targets {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ok = match client.head(&address).send().await {
                Ok(response) => response.status().is_success(),
                Err(_) => false,
            };
            if !ok {
                // The receiver may already be gone during shutdown
                let _ = tx.send(Message::IconUnavailable { site }).await;
            }
        });
    }
}
