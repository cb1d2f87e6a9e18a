//! Rust normalizer for GPS tracks saved in `.gpx` files.
//!
//! Some recording devices write `<time>` values with a local numeric UTC
//! offset (e.g. `2023-08-26T13:14:31.012000+0200`) instead of the canonical
//! `Z`-suffixed UTC form most GPX consumers expect. This crate rewrites
//! every such value to `2023-08-26T11:14:31Z` form, leaving the rest of the
//! document byte-for-byte untouched.

pub(crate) mod core;
pub mod rewrite;
pub mod types;

pub use rewrite::{from_gpx_file, rewrite_times};
pub use types::errors::GpxRewriteError;
