//! git-find-core: Core types, configuration, and logging for git-find.

pub mod config;
pub mod entry;
pub mod error;
pub mod filter;
pub mod logging;

pub use config::Config;
pub use entry::Entry;
pub use error::{Error, Result};
pub use filter::filter_entries;
