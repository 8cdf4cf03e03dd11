//! Per-card icon addresses with the one-shot placeholder substitution
//!
//! Every site gets its icon address resolved once at startup. If an address
//! later turns out to be unloadable, it is swapped for the placeholder
//! exactly once; the swap is idempotent so a card can never cycle between
//! addresses.

use std::collections::HashMap;

use safeplace_core::{resolve_favicon, Site, PLACEHOLDER_ICON};

#[derive(Debug, Clone)]
struct IconEntry {
    address: String,
    fell_back: bool,
}

/// Icon address book keyed by site name (the rendering key).
#[derive(Debug, Clone, Default)]
pub struct IconBook {
    entries: HashMap<String, IconEntry>,
}

impl IconBook {
    /// Resolve an icon address for every site.
    pub fn new(sites: &[Site]) -> Self {
        let entries = sites
            .iter()
            .map(|site| {
                let address = resolve_favicon(&site.url);
                // A malformed URL already resolved to the placeholder; there
                // is nothing left to fall back to
                let fell_back = address == PLACEHOLDER_ICON;
                (site.name.clone(), IconEntry { address, fell_back })
            })
            .collect();
        Self { entries }
    }

    /// Current icon address for a site. Unknown names get the placeholder.
    pub fn address(&self, site_name: &str) -> &str {
        self.entries
            .get(site_name)
            .map(|e| e.address.as_str())
            .unwrap_or(PLACEHOLDER_ICON)
    }

    /// Whether the card already shows the placeholder.
    pub fn fell_back(&self, site_name: &str) -> bool {
        self.entries
            .get(site_name)
            .map(|e| e.fell_back)
            .unwrap_or(true)
    }

    /// Substitute the placeholder for a card whose address failed to load.
    ///
    /// Returns `true` if a swap happened. At most one swap per card; later
    /// calls are no-ops.
    pub fn mark_unavailable(&mut self, site_name: &str) -> bool {
        match self.entries.get_mut(site_name) {
            Some(entry) if !entry.fell_back => {
                entry.address = PLACEHOLDER_ICON.to_string();
                entry.fell_back = true;
                true
            }
            _ => false,
        }
    }

    /// Addresses worth probing: every card not already at the placeholder.
    pub fn probe_targets(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|(_, e)| !e.fell_back)
            .map(|(name, e)| (name.clone(), e.address.clone()))
            .collect()
    }
}
