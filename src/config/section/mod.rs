//! Configuration section definitions.
//!
//! Each module corresponds to a section in `phototidy.toml`:
//!
//! | Module     | TOML Section   | Purpose                                |
//! |------------|----------------|----------------------------------------|
//! | `paths`    | `[paths]`      | Static-asset root and content dir      |
//! | `content`  | `[content]`    | JSON document file names               |
//! | `clean`    | `[clean]`      | Disallowed extensions, duplicates      |
//! | `convert`  | `[convert]`    | JPEG → WebP roots and filters          |
//! | `rename`   | `[rename]`     | Transliteration dictionary and filters |
//! | `rewrite`  | `[rewrite]`    | JSON reference rewrite strategy        |
//! | `relocate` | `[relocate]`   | Static old → new path table            |

mod clean;
mod content;
mod convert;
mod paths;
mod relocate;
mod rename;
mod rewrite;

pub use clean::{CleanConfig, DuplicateMode};
pub use content::ContentConfig;
pub use convert::ConvertConfig;
pub use paths::PathsConfig;
pub use relocate::{RelocateConfig, RelocateEntry};
pub use rename::{FallbackMode, RenameConfig, TermOrder};
pub use rewrite::{RewriteConfig, RewriteStrategy};
