//! # Folio Engine
//!
//! Browser-free navigation logic for the portfolio page.
//!
//! - [`NavigationState`] is the single source of truth for the active
//!   section, viewport class and tablet menu flag. Clicks, scroll offsets,
//!   intersection reports and resizes arrive as [`Msg`](folio_types::Msg)
//!   values; the reducer returns [`Effect`](folio_types::Effect) values for
//!   the web layer to execute.
//! - [`classify_viewport`] maps a width to a device class and
//!   [`layout_for`] maps that class to a navigation layout.
//! - [`PageGeometry`] is the seam through which the reducer reads region
//!   positions, so everything here is testable without a DOM.

mod nav_items;
mod shell;
mod state;
mod tracker;
mod viewport;

pub use nav_items::NavItem;
pub use shell::ShellState;
pub use state::NavigationState;
pub use tracker::{ActiveSection, PageGeometry, SectionTracker};
pub use viewport::{classify_viewport, layout_for};
