//! Adaptive navigation shell.
//!
//! Hosts the same navigation items in one of three containers chosen from
//! the current [`LayoutStrategy`]:
//! - mobile: a bottom dock that is always visible
//! - tablet: a left sidebar behind a menu button, closed by its overlay
//! - desktop: a fixed left sidebar

use folio_types::{Icon, LayoutStrategy};
use leptos::prelude::*;

use super::icons::IconGlyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chrome {
    Dock,
    Collapsible,
    Fixed,
}

impl From<LayoutStrategy> for Chrome {
    fn from(layout: LayoutStrategy) -> Self {
        match layout {
            LayoutStrategy::BottomDock => Self::Dock,
            LayoutStrategy::CollapsibleSidebar { .. } => Self::Collapsible,
            LayoutStrategy::FixedSidebar => Self::Fixed,
        }
    }
}

pub fn sidebar_class(open: bool) -> &'static str {
    if open {
        "shell shell--collapsible shell--open"
    } else {
        "shell shell--collapsible shell--closed"
    }
}

/// Class for the main content area, which leaves room for the chrome.
pub fn content_class(layout: LayoutStrategy) -> &'static str {
    match layout {
        LayoutStrategy::BottomDock => "page page--dock",
        LayoutStrategy::CollapsibleSidebar { .. } | LayoutStrategy::FixedSidebar => "page page--sidebar",
    }
}

#[component]
pub fn AdaptiveNav(
    #[prop(into)] layout: Signal<LayoutStrategy>,
    on_toggle: Callback<()>,
    on_overlay: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    // The container is only rebuilt when the chrome kind changes; opening and
    // closing the tablet sidebar just swaps classes so it can animate.
    let chrome = Memo::new(move |_| Chrome::from(layout.get()));
    let open = Memo::new(move |_| matches!(layout.get(), LayoutStrategy::CollapsibleSidebar { open: true }));

    move || match chrome.get() {
        Chrome::Dock => view! {
            <nav class="shell shell--dock" aria-label="Section navigation">
                <div class="shell__items shell__items--row">{children()}</div>
            </nav>
        }
        .into_any(),
        Chrome::Collapsible => view! {
            <button
                type="button"
                class="shell__toggle"
                aria-label="Toggle navigation menu"
                aria-expanded=move || if open.get() { "true" } else { "false" }
                on:click=move |_| on_toggle.run(())
            >
                <IconGlyph icon=Icon::Menu class="shell__toggle-icon" />
            </button>
            <Show when=move || open.get()>
                <div class="shell__overlay" aria-hidden="true" on:click=move |_| on_overlay.run(())></div>
            </Show>
            <nav class=move || sidebar_class(open.get()) aria-label="Section navigation">
                <div class="shell__items shell__items--column shell__items--below-toggle">{children()}</div>
            </nav>
        }
        .into_any(),
        Chrome::Fixed => view! {
            <nav class="shell shell--fixed" aria-label="Section navigation">
                <div class="shell__items shell__items--column">{children()}</div>
            </nav>
        }
        .into_any(),
    }
}
