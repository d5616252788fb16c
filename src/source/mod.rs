//! # Question Sources
//!
//! Where the question JSON comes from. The rotator never sees these types;
//! the TUI spawns a single `fetch()` and turns the result into an `Action`.

pub mod file;
pub mod http;
pub mod provider;

use std::sync::Arc;

pub use file::FileSource;
pub use http::HttpSource;
pub use provider::{LoadError, QuestionSource};

/// Pick a source for a location: `http://` and `https://` go over the
/// network, anything else is read from disk.
pub fn build_source(location: &str) -> Arc<dyn QuestionSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpSource::new(location.to_string()))
    } else {
        Arc::new(FileSource::new(location))
    }
}
