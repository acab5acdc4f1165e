use std::sync::Arc;

use folio_content::ContentStore;
use folio_engine::NavItem;
use folio_types::{Msg, NavigationConfig, Portfolio, Section, ViewportClass};
use leptos::ev;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::{debug, error, warn};

use crate::browser::{self, SectionWatcher};
use crate::components::{
    AboutSection, AdaptiveNav, EducationSection, ExperienceSection, HomeSection, NavItemButton, ProjectsSection, TechnologiesSection,
    content_class,
};
use crate::controller::NavigationController;

/// Intersection root margin for a viewport class. On mobile the bottom dock
/// covers part of the viewport, so the observed area is shrunk by its height.
pub fn observer_root_margin(viewport: ViewportClass, config: &NavigationConfig) -> String {
    match viewport {
        ViewportClass::Mobile => format!("-{}px 0px 0px 0px", config.mobile_dock_offset),
        ViewportClass::Tablet | ViewportClass::Desktop => "0px".to_string(),
    }
}

/// Root component: loads the embedded content document and renders the page.
#[component]
pub fn App() -> impl IntoView {
    match ContentStore::embedded() {
        Ok(store) => view! { <PortfolioPage portfolio=store.shared() /> }.into_any(),
        Err(err) => {
            error!(error = %err, "Embedded content failed to load");
            view! {
                <main class="load-error" role="alert">
                    <p>"This page could not be loaded."</p>
                </main>
            }
            .into_any()
        }
    }
}

#[component]
pub fn PortfolioPage(portfolio: Arc<Portfolio>) -> impl IntoView {
    let controller = NavigationController::new(portfolio.navigation.clone());
    provide_context(controller);

    // Measure once mounted, then follow the window.
    Effect::new(move |_| {
        if let Some(width) = browser::viewport_width() {
            controller.dispatch(Msg::Resized(width));
        }
        controller.dispatch(Msg::Scrolled(browser::scroll_offset()));

        let resize = window_event_listener(ev::resize, move |_| {
            if let Some(width) = browser::viewport_width() {
                controller.dispatch(Msg::Resized(width));
            }
        });
        let scroll = window_event_listener(ev::scroll, move |_| {
            controller.dispatch(Msg::Scrolled(browser::scroll_offset()));
        });
        on_cleanup(move || {
            resize.remove();
            scroll.remove();
        });
    });

    // The observed area depends on the viewport class, so the watcher is
    // rebuilt whenever the class changes and torn down with the page.
    let viewport = Memo::new(move |_| controller.viewport());
    Effect::new(move |_| {
        let viewport = viewport.get();
        let config = controller.config();
        let margin = observer_root_margin(viewport, &config);
        let observed = SectionWatcher::observe(&margin, config.visibility_threshold, move |report| {
            controller.dispatch(Msg::RegionIntersected {
                section: report.section,
                intersecting: report.intersecting,
                ratio: report.ratio,
                scroll_offset: browser::scroll_offset(),
            });
        });
        match observed {
            Ok(watcher) => {
                debug!(viewport = viewport.as_str(), "Section watcher attached");
                let watcher = SendWrapper::new(watcher);
                on_cleanup(move || drop(watcher));
            }
            Err(err) => warn!(error = ?err, "Could not observe section regions"),
        }
    });

    let layout = Memo::new(move |_| controller.layout());
    let active = Memo::new(move |_| controller.active_section());
    let captioned = Signal::derive(move || layout.get().shows_captions());

    let navigate = Callback::new(move |section: Section| controller.dispatch(Msg::NavigateTo(section)));
    let toggle = Callback::new(move |_: ()| controller.dispatch(Msg::ToggleMenu));
    let overlay = Callback::new(move |_: ()| controller.dispatch(Msg::OverlayClicked));

    let nav_items = move || {
        NavItem::defaults_for_sections()
            .into_iter()
            .map(|item| {
                let section = item.section;
                let is_active = Memo::new(move |_| active.get() == section);
                view! { <NavItemButton item=item active=is_active captioned=captioned on_activate=navigate /> }
            })
            .collect_view()
    };

    let profile = portfolio.profile.clone();
    let site_title = profile.site_title.clone();

    view! {
        <AdaptiveNav layout=layout on_toggle=toggle on_overlay=overlay>
            {nav_items()}
        </AdaptiveNav>
        <main class=move || content_class(layout.get())>
            <div class="window">
                <header class="window__bar" role="banner">
                    <div class="window__dots" aria-hidden="true">
                        <span class="window__dot window__dot--close"></span>
                        <span class="window__dot window__dot--minimize"></span>
                        <span class="window__dot window__dot--zoom"></span>
                    </div>
                    <h1 class="window__title">{site_title}</h1>
                </header>
                <div class="window__content">
                    <HomeSection profile=profile />
                    <AboutSection contacts=portfolio.contacts.clone() />
                    <ExperienceSection records=portfolio.experience.clone() />
                    <ProjectsSection projects=portfolio.projects.clone() />
                    <EducationSection records=portfolio.education.clone() />
                    <TechnologiesSection catalog=portfolio.technologies.clone() />
                </div>
            </div>
        </main>
    }
}
