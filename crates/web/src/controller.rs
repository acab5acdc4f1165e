use folio_engine::NavigationState;
use folio_types::{Effect as NavEffect, LayoutStrategy, Msg, NavigationConfig, Section, ViewportClass};
use leptos::prelude::*;
use tracing::debug;

use crate::browser::{self, BrowserGeometry};

/// Reactive handle around [`NavigationState`].
///
/// Every browser signal and click funnels through [`NavigationController::dispatch`];
/// readers subscribe to the derived accessors. Subscribers are only notified
/// when the active section, viewport class or menu flag actually changes, so
/// a burst of scroll events does not re-render the navigation.
#[derive(Debug, Clone, Copy)]
pub struct NavigationController {
    state: RwSignal<NavigationState>,
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            state: RwSignal::new(NavigationState::new(config)),
        }
    }

    /// Runs one message through the reducer and executes its effects.
    pub fn dispatch(&self, msg: Msg) {
        let outcome = self.state.try_update_untracked(|state| {
            let before = (state.active(), state.viewport(), state.menu_open());
            let effects = state.update(msg, &BrowserGeometry);
            let after = (state.active(), state.viewport(), state.menu_open());
            (effects, before != after)
        });
        let Some((effects, changed)) = outcome else {
            return;
        };
        if changed {
            self.state.notify();
        }
        for effect in effects {
            run_effect(effect);
        }
    }

    pub fn active_section(&self) -> Section {
        self.state.with(|state| state.active_section())
    }

    pub fn layout(&self) -> LayoutStrategy {
        self.state.with(|state| state.layout())
    }

    pub fn viewport(&self) -> ViewportClass {
        self.state.with(|state| state.viewport())
    }

    pub fn config(&self) -> NavigationConfig {
        self.state.with_untracked(|state| state.config().clone())
    }
}

fn run_effect(effect: NavEffect) {
    match effect {
        NavEffect::ScrollTo { top } => browser::smooth_scroll_to(top),
        NavEffect::LayoutChanged(layout) => debug!(layout = layout.name(), "Shell re-rendering for new layout"),
    }
}
