//! Adaptive navigation shell state.

use folio_types::{LayoutStrategy, NavigationConfig, ViewportClass};

use crate::viewport::{classify_viewport, layout_for};

/// Viewport class plus the tablet menu flag.
///
/// The menu flag survives trips through other layouts: a sidebar closed on a
/// tablet stays closed after the window is widened and narrowed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    viewport: ViewportClass,
    menu_open: bool,
}

impl ShellState {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            viewport: ViewportClass::default(),
            menu_open: config.menu_open_by_default,
        }
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn layout(&self) -> LayoutStrategy {
        layout_for(self.viewport, self.menu_open)
    }

    /// Reclassifies the viewport. Returns the new layout when it changed.
    pub fn resize(&mut self, width: f64, config: &NavigationConfig) -> Option<LayoutStrategy> {
        let before = self.layout();
        self.viewport = classify_viewport(width, config);
        self.changed_from(before)
    }

    /// Flips the tablet sidebar. Ignored on other layouts.
    pub fn toggle_menu(&mut self) -> Option<LayoutStrategy> {
        if self.viewport != ViewportClass::Tablet {
            return None;
        }
        let before = self.layout();
        self.menu_open = !self.menu_open;
        self.changed_from(before)
    }

    /// Closes the tablet sidebar when its overlay is clicked.
    pub fn close_menu(&mut self) -> Option<LayoutStrategy> {
        if self.viewport != ViewportClass::Tablet {
            return None;
        }
        let before = self.layout();
        self.menu_open = false;
        self.changed_from(before)
    }

    fn changed_from(&self, before: LayoutStrategy) -> Option<LayoutStrategy> {
        let after = self.layout();
        (after != before).then_some(after)
    }
}
