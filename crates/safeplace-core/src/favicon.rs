//! Favicon resolution
//!
//! Derives a best-effort icon address from a site URL's host. Malformed URLs
//! are an expected condition: every one of them resolves to the same
//! placeholder, deterministically. The core never touches the network --
//! address construction only.

use url::Url;

/// Fixed size parameter passed to the icon service.
pub const ICON_SIZE: u32 = 128;

/// Placeholder icon address used for malformed URLs and load failures.
pub const PLACEHOLDER_ICON: &str = "https://via.placeholder.com/128?text=W3";

/// Icon-service address for the given site URL.
///
/// Parses `site_url` as an absolute URL and parameterizes the icon service
/// with its host. Returns [`PLACEHOLDER_ICON`] when the URL does not parse
/// or has no host.
pub fn resolve_favicon(site_url: &str) -> String {
    match site_host(site_url) {
        Some(host) => format!(
            "https://www.google.com/s2/favicons?domain={host}&sz={ICON_SIZE}"
        ),
        None => PLACEHOLDER_ICON.to_string(),
    }
}

/// Host component of a site URL, if it parses as an absolute URL.
///
/// Also used by the card widget to show the host under the site name.
pub fn site_host(site_url: &str) -> Option<String> {
    Url::parse(site_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_favicon_extracts_host() {
        assert_eq!(
            resolve_favicon("https://app.uniswap.org/swap"),
            "https://www.google.com/s2/favicons?domain=app.uniswap.org&sz=128"
        );
    }

    #[test]
    fn test_resolve_favicon_ignores_path_and_query() {
        assert_eq!(
            resolve_favicon("https://dune.com/browse/dashboards?q=eth"),
            resolve_favicon("https://dune.com")
        );
    }

    #[test]
    fn test_resolve_favicon_malformed_url_is_placeholder() {
        assert_eq!(resolve_favicon("not a url"), PLACEHOLDER_ICON);
        assert_eq!(resolve_favicon(""), PLACEHOLDER_ICON);
        // Relative URLs are not absolute URLs
        assert_eq!(resolve_favicon("/swap"), PLACEHOLDER_ICON);
    }

    #[test]
    fn test_resolve_favicon_is_deterministic() {
        assert_eq!(resolve_favicon("::nope::"), resolve_favicon("::nope::"));
        assert_eq!(resolve_favicon("::nope::"), resolve_favicon("also bad"));
    }

    #[test]
    fn test_resolve_favicon_hostless_url_is_placeholder() {
        // Parses as a URL but carries no host
        assert_eq!(resolve_favicon("mailto:team@safeplace.example"), PLACEHOLDER_ICON);
    }

    #[test]
    fn test_site_host() {
        assert_eq!(
            site_host("https://app.aave.com/markets"),
            Some("app.aave.com".to_string())
        );
        assert_eq!(site_host("garbage"), None);
    }
}
