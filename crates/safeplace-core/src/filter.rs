//! Pure filtering predicates over the site and chain datasets
//!
//! Both filters are order-preserving subsequence selections, recomputed from
//! the immutable datasets and the current [`Selection`] on every state
//! change. Absent/empty inputs degrade to "match everything" for that
//! predicate.

use crate::types::{Category, Chain, Site};

/// Category predicate: everything, or exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, site: &Site) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => site.category == *cat,
        }
    }
}

/// Chain predicate: everything, or one chain id.
///
/// Selection accepts any id, including ones currently hidden by the
/// chain-search filter -- the pill list is a display subset, not the
/// candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChainFilter {
    #[default]
    All,
    Only(String),
}

impl ChainFilter {
    fn matches(&self, site: &Site) -> bool {
        match self {
            ChainFilter::All => true,
            // The all-chains sentinel on a site matches any selected pill
            ChainFilter::Only(id) => site.chains.covers(id),
        }
    }
}

/// The four-field UI selection state.
///
/// Initialized to empty/All at session start, mutated only by user input,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub search_term: String,
    pub chain_search_term: String,
    pub category: CategoryFilter,
    pub chain: ChainFilter,
}

impl Selection {
    /// Reset every field back to the initial empty/All state.
    pub fn clear(&mut self) {
        *self = Selection::default();
    }
}

/// Case-insensitive substring containment.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter sites by the full selection: name search, category, chain.
///
/// A site passes iff ALL active predicates match. Original dataset order is
/// retained.
pub fn filter_sites<'a>(sites: &'a [Site], selection: &Selection) -> Vec<&'a Site> {
    sites
        .iter()
        .filter(|site| {
            contains_ignore_case(&site.name, &selection.search_term)
                && selection.category.matches(site)
                && selection.chain.matches(site)
        })
        .collect()
}

/// Filter chains by case-insensitive name containment.
pub fn filter_chains<'a>(chains: &'a [Chain], term: &str) -> Vec<&'a Chain> {
    chains
        .iter()
        .filter(|chain| contains_ignore_case(&chain.name, term))
        .collect()
}
