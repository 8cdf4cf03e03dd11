//! Engine - shared orchestration state for the TUI runner
//!
//! The Engine owns the TEA state and the unified message channel. It
//! performs the startup sequence: load settings-driven datasets, build the
//! initial state, create the channel, and optionally kick off the icon
//! probe.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use safeplace_core::dataset::load_datasets;
use safeplace_core::Result;

use crate::config::Settings;
use crate::message::Message;
use crate::probe;
use crate::state::AppState;

/// Capacity of the unified message channel.
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for SafePlace.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (terminal poller, probe tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,
}

impl Engine {
    /// Create a new Engine: load datasets per the settings and build the
    /// initial state. Dataset errors are fatal here, before the terminal is
    /// taken over.
    pub fn new(settings: Settings) -> Result<Self> {
        let datasets = load_datasets(
            settings.datasets.sites.as_deref(),
            settings.datasets.chains.as_deref(),
        )?;
        let state = AppState::new(datasets, settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
        })
    }

    /// Kick off the background icon probe, if enabled.
    ///
    /// Fire-and-forget: failures arrive as [`Message::IconUnavailable`] on
    /// the message channel; nothing is awaited.
    pub fn spawn_icon_probe(&self) {
        if !self.state.settings.icons.probe {
            info!("icon probe disabled");
            return;
        }
        let targets = self.state.icons.probe_targets();
        let timeout = Duration::from_millis(self.state.settings.icons.probe_timeout_ms);
        let tx = self.msg_tx.clone();
        tokio::spawn(probe::probe_icons(targets, timeout, tx));
    }
}
