//! Shared type definitions for the folio workspace.
//!
//! The content records, section identifiers and navigation messages defined
//! here are consumed by the content store, the navigation engine, the web
//! front end and the CLI.

mod content;
mod navigation;
mod section;

pub use content::{
    ContactKind, ContactLink, EducationRecord, ExperienceRecord, Portfolio, Profile, ProjectRecord, TagGroup,
    TechnologyCatalog,
};
pub use navigation::{Effect, LayoutStrategy, Msg, NavigationConfig, ViewportClass};
pub use section::{Icon, ParseSectionError, Section};
