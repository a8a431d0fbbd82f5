//! Root-relative asset URL utilities.
//!
//! Content documents reference assets as `/images/a/b.webp`: a leading slash,
//! forward slashes, relative to the static-asset root (`public/`).

use std::path::{Component, Path, PathBuf};

/// Strip leading slashes from a URL path.
///
/// `"/images/a.webp"` -> `"images/a.webp"`
#[inline]
pub fn strip_leading_slash(url: &str) -> &str {
    url.trim_start_matches('/')
}

/// Resolve a root-relative URL to a filesystem path under `public`.
///
/// `resolve_url("/srv/public", "/images/a.webp")` -> `/srv/public/images/a.webp`
pub fn resolve_url(public: &Path, url: &str) -> PathBuf {
    public.join(strip_leading_slash(url))
}

/// Convert a filesystem path under `public` to its root-relative URL.
///
/// Returns `None` when `path` is not inside `public`.
///
/// `to_root_url("/srv/public", "/srv/public/images/a.webp")` -> `Some("/images/a.webp")`
pub fn to_root_url(public: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(public).ok()?;
    let mut url = String::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            url.push('/');
            url.push_str(&part.to_string_lossy());
        }
    }
    if url.is_empty() {
        url.push('/');
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/images/a.webp"), "images/a.webp");
        assert_eq!(strip_leading_slash("images/a.webp"), "images/a.webp");
        assert_eq!(strip_leading_slash("/"), "");
    }

    #[test]
    fn test_resolve_url() {
        let resolved = resolve_url(Path::new("/srv/public"), "/images/胶片.webp");
        assert_eq!(resolved, PathBuf::from("/srv/public/images/胶片.webp"));
    }

    #[test]
    fn test_to_root_url() {
        let url = to_root_url(
            Path::new("/srv/public"),
            Path::new("/srv/public/images/gallery/a.webp"),
        );
        assert_eq!(url.as_deref(), Some("/images/gallery/a.webp"));
    }

    #[test]
    fn test_to_root_url_outside() {
        assert!(to_root_url(Path::new("/srv/public"), Path::new("/tmp/a.webp")).is_none());
    }

    #[test]
    fn test_to_root_url_root_itself() {
        let url = to_root_url(Path::new("/srv/public"), Path::new("/srv/public"));
        assert_eq!(url.as_deref(), Some("/"));
    }
}
