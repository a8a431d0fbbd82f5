//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`)
//! - [`url`]: Root-relative asset URLs (`to_root_url`, `resolve_url`)

pub mod fs;
pub mod url;

pub use fs::normalize_path;
pub use url::{resolve_url, to_root_url};
