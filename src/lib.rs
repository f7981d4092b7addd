//! Scan a directory tree for archives and extract each one in place with an
//! external `unrar` binary, marking finished directories with a `.unrared`
//! file so scheduled re-runs skip them.

pub mod args;
pub mod config;
pub mod detector;
pub mod error;
pub mod extensions;
pub mod extractor;
pub mod locator;
pub mod processor;

pub use error::{Error, Result};
