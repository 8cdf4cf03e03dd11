//! Dataset loading and validation
//!
//! Two read-only lists are supplied at startup: site records and chain
//! records. Defaults are embedded in the binary; either list can be
//! overridden with a JSON file. Required-field and uniqueness validation
//! happens here, at load time -- after [`load_datasets`] returns, both lists
//! are immutable for the process lifetime.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::{Chain, Site};

/// Bundled site dataset.
pub const DEFAULT_SITES_JSON: &str = include_str!("../data/sites.json");

/// Bundled chain dataset.
pub const DEFAULT_CHAINS_JSON: &str = include_str!("../data/blockchains.json");

/// The two immutable lists the whole application renders from.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub sites: Vec<Site>,
    pub chains: Vec<Chain>,
}

impl Datasets {
    /// Whether a chain id exists in the chain dataset.
    pub fn has_chain(&self, id: &str) -> bool {
        self.chains.iter().any(|c| c.id == id)
    }
}

/// Parse and validate a site dataset from JSON.
pub fn parse_sites(json: &str) -> Result<Vec<Site>> {
    let sites: Vec<Site> = serde_json::from_str(json)?;
    validate_sites(&sites)?;
    Ok(sites)
}

/// Parse and validate a chain dataset from JSON.
pub fn parse_chains(json: &str) -> Result<Vec<Chain>> {
    let chains: Vec<Chain> = serde_json::from_str(json)?;
    validate_chains(&chains)?;
    Ok(chains)
}

/// Load both datasets, preferring override files when given.
///
/// Missing override files are a fatal error; the embedded defaults are only
/// used for lists with no override. Sites referencing chain ids absent from
/// the chain dataset are tolerated with a warning -- such ids simply never
/// match a pill.
pub fn load_datasets(
    sites_path: Option<&Path>,
    chains_path: Option<&Path>,
) -> Result<Datasets> {
    let sites = match sites_path {
        Some(path) => parse_sites(&read_dataset_file(path)?)?,
        None => parse_sites(DEFAULT_SITES_JSON)?,
    };
    let chains = match chains_path {
        Some(path) => parse_chains(&read_dataset_file(path)?)?,
        None => parse_chains(DEFAULT_CHAINS_JSON)?,
    };

    let datasets = Datasets { sites, chains };
    warn_unknown_chain_refs(&datasets);
    info!(
        sites = datasets.sites.len(),
        chains = datasets.chains.len(),
        "datasets loaded"
    );
    Ok(datasets)
}

fn read_dataset_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::dataset_not_found(path));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Required fields non-empty, `name` unique (it is the rendering key).
fn validate_sites(sites: &[Site]) -> Result<()> {
    let mut seen = HashSet::new();
    for site in sites {
        if site.name.trim().is_empty() {
            return Err(Error::dataset("site record with empty name"));
        }
        if site.url.trim().is_empty() {
            return Err(Error::dataset(format!(
                "site {:?} has an empty url",
                site.name
            )));
        }
        if !seen.insert(site.name.as_str()) {
            return Err(Error::dataset(format!(
                "duplicate site name: {}",
                site.name
            )));
        }
    }
    Ok(())
}

/// Required fields non-empty, `id` unique.
fn validate_chains(chains: &[Chain]) -> Result<()> {
    let mut seen = HashSet::new();
    for chain in chains {
        if chain.id.trim().is_empty() {
            return Err(Error::dataset("chain record with empty id"));
        }
        if chain.name.trim().is_empty() {
            return Err(Error::dataset(format!(
                "chain {:?} has an empty name",
                chain.id
            )));
        }
        if !seen.insert(chain.id.as_str()) {
            return Err(Error::dataset(format!("duplicate chain id: {}", chain.id)));
        }
    }
    Ok(())
}

/// A site may list a chain id the chain dataset doesn't know. No
/// referential-integrity enforcement -- log it once at load and move on.
fn warn_unknown_chain_refs(datasets: &Datasets) {
    for site in &datasets.sites {
        for id in site.chains.ids() {
            if !datasets.has_chain(id) {
                warn!(site = %site.name, chain = %id, "site references unknown chain id");
            }
        }
    }
}
