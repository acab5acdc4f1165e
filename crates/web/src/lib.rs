//! # Folio Web
//!
//! Leptos front end for the portfolio page.
//!
//! - [`App`] renders the adaptive navigation shell and the content sections.
//! - The `hydrate` feature builds the browser client: it installs logging to
//!   the developer console and hydrates the pre-rendered markup.
//! - The `ssr` feature exposes [`render_page`] for static export.
//!
//! All navigation decisions live in `folio-engine`; this crate only turns
//! browser events into messages and executes the resulting effects.

mod app;
mod browser;
pub mod components;
mod controller;

pub use app::{App, PortfolioPage, observer_root_margin};
pub use controller::NavigationController;

/// Renders the page to HTML with the initial navigation state (desktop
/// layout, home active).
#[cfg(feature = "ssr")]
pub fn render_page() -> String {
    use leptos::prelude::*;

    Owner::new().with(|| view! { <App /> }.to_html())
}

/// Browser entry point.
#[cfg(feature = "hydrate")]
pub fn hydrate() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).with(level).init();

    leptos::mount::hydrate_body(App);
}
