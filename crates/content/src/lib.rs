//! Content store for the portfolio page.
//!
//! The page content (profile, contact links, experience, projects, education,
//! technology lists and navigation thresholds) lives in a YAML document that
//! is compiled into the binary. This crate parses that document, validates it
//! and hands out read-only views of it. Tooling can also load an edited copy
//! from disk to check it before rebuilding.

mod error;
mod store;
mod validation;

pub use error::ContentError;
pub use store::{CONTENT_PATH_ENV, ContentSource, ContentStore, parse_json, parse_yaml};
pub use validation::validate;
