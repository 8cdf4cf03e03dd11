//! # safeplace-core - Core Domain Types
//!
//! Foundation crate for SafePlace. Provides the site/chain domain types,
//! dataset loading and validation, the filtering predicates, and favicon
//! resolution.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, url, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Site`] - A directory entry: display name, external URL, category, chains
//! - [`Chain`] - A blockchain network with a stable id and display name
//! - [`Category`] - Closed set of protocol-type tags (swap, staking, ...)
//! - [`ChainSet`] - A site's chain membership, or the all-chains sentinel
//!
//! ### Datasets (`dataset`)
//! - [`Datasets`] - The two immutable lists loaded at startup
//! - [`load_datasets()`] - Load from embedded defaults or override files
//!
//! ### Filtering (`filter`)
//! - [`Selection`] - The four-field UI selection state
//! - [`filter_sites()`], [`filter_chains()`] - Pure, order-preserving filters
//!
//! ### Favicons (`favicon`)
//! - [`resolve_favicon()`] - Icon-service address for a site URL, with a
//!   deterministic placeholder for malformed URLs
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use safeplace_core::prelude::*;
//! ```

pub mod dataset;
pub mod error;
pub mod favicon;
pub mod filter;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all SafePlace crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use dataset::{load_datasets, Datasets, DEFAULT_CHAINS_JSON, DEFAULT_SITES_JSON};
pub use error::{Error, Result, ResultExt};
pub use favicon::{resolve_favicon, site_host, ICON_SIZE, PLACEHOLDER_ICON};
pub use filter::{filter_chains, filter_sites, CategoryFilter, ChainFilter, Selection};
pub use types::{Category, Chain, ChainSet, Site};
