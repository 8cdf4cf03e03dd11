//! Domain types for the site and chain datasets

use serde::{Deserialize, Serialize};

/// Sentinel chain id meaning "applies to every chain" in a site record,
/// matching any selected chain pill.
pub const ALL_CHAINS: &str = "all";

/// Protocol-type tag classifying a site. Closed set -- an unknown tag in a
/// dataset is a load-time error, not a runtime fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Swap,
    Staking,
    Lending,
    Bridge,
    Future,
    Cex,
    Infos,
    Gaming,
    Nft,
    Launchpad,
    Social,
    Wallet,
    Infra,
}

impl Category {
    /// Every category, in the order the sidebar presents them.
    pub const ALL: [Category; 13] = [
        Category::Swap,
        Category::Staking,
        Category::Lending,
        Category::Bridge,
        Category::Future,
        Category::Cex,
        Category::Infos,
        Category::Gaming,
        Category::Nft,
        Category::Launchpad,
        Category::Social,
        Category::Wallet,
        Category::Infra,
    ];

    /// The dataset tag (lowercase, as stored in JSON).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Swap => "swap",
            Category::Staking => "staking",
            Category::Lending => "lending",
            Category::Bridge => "bridge",
            Category::Future => "future",
            Category::Cex => "cex",
            Category::Infos => "infos",
            Category::Gaming => "gaming",
            Category::Nft => "nft",
            Category::Launchpad => "launchpad",
            Category::Social => "social",
            Category::Wallet => "wallet",
            Category::Infra => "infra",
        }
    }

    /// Display label (first letter capitalized, like the sidebar buttons).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Swap => "Swap",
            Category::Staking => "Staking",
            Category::Lending => "Lending",
            Category::Bridge => "Bridge",
            Category::Future => "Future",
            Category::Cex => "Cex",
            Category::Infos => "Infos",
            Category::Gaming => "Gaming",
            Category::Nft => "Nft",
            Category::Launchpad => "Launchpad",
            Category::Social => "Social",
            Category::Wallet => "Wallet",
            Category::Infra => "Infra",
        }
    }
}

/// Chain membership of a site: an explicit id set, or the all-chains sentinel.
///
/// Serialized as a plain JSON list of ids; any list containing `"all"`
/// collapses to the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum ChainSet {
    /// The site applies to every chain.
    All,
    /// The site applies to exactly these chain ids.
    Ids(Vec<String>),
}

impl ChainSet {
    /// Whether this set covers the given chain id.
    ///
    /// The all-chains sentinel covers everything, including ids absent from
    /// the chain dataset.
    pub fn covers(&self, chain_id: &str) -> bool {
        match self {
            ChainSet::All => true,
            ChainSet::Ids(ids) => ids.iter().any(|id| id == chain_id),
        }
    }

    /// Whether this is the all-chains sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, ChainSet::All)
    }

    /// The explicit ids, empty for the sentinel.
    pub fn ids(&self) -> &[String] {
        match self {
            ChainSet::All => &[],
            ChainSet::Ids(ids) => ids,
        }
    }
}

impl From<Vec<String>> for ChainSet {
    fn from(ids: Vec<String>) -> Self {
        if ids.iter().any(|id| id == ALL_CHAINS) {
            ChainSet::All
        } else {
            ChainSet::Ids(ids)
        }
    }
}

impl From<ChainSet> for Vec<String> {
    fn from(set: ChainSet) -> Self {
        match set {
            ChainSet::All => vec![ALL_CHAINS.to_string()],
            ChainSet::Ids(ids) => ids,
        }
    }
}

/// A directory entry: one crypto-related website.
///
/// `name` is the rendering key and must be unique within the dataset.
/// `url` is tolerated even when unparseable -- the favicon resolver falls
/// back to a placeholder instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub url: String,
    pub category: Category,
    pub chains: ChainSet,
}

/// A blockchain network: stable id used for filtering, display name used
/// for the chain search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: String,
    pub name: String,
}
