#![cfg(feature = "ssr")]

use folio_types::{ProjectRecord, Section};
use folio_web::components::ProjectCard;
use leptos::prelude::*;

fn project(link: Option<&str>) -> ProjectRecord {
    ProjectRecord {
        title: "Minigames".to_string(),
        description: "A small collection of browser games.".to_string(),
        link: link.map(str::to_string),
        technologies: vec!["JavaScript".to_string(), "Canvas".to_string()],
    }
}

fn render_card(record: ProjectRecord) -> String {
    Owner::new().with(|| view! { <ProjectCard project=record /> }.to_html())
}

#[test]
fn page_contains_every_region() {
    let html = folio_web::render_page();
    for section in Section::ALL {
        assert!(html.contains(&format!("id=\"{}\"", section.as_str())), "missing region {section}");
        assert!(html.contains(&format!("aria-labelledby=\"{}\"", section.heading_id())));
    }
}

#[test]
fn page_starts_with_home_current_in_the_fixed_sidebar() {
    let html = folio_web::render_page();
    assert!(html.contains("shell shell--fixed"));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert_eq!(html.matches("nav-item--active").count(), 1);
    assert!(html.contains("Navigate to Home section"));
}

#[test]
fn project_without_link_has_no_link_affordance() {
    let html = render_card(project(None));
    assert!(!html.contains("<a "));
    assert!(!html.contains("card__link"));
    assert!(html.contains("aria-label=\"Technologies used\""));
}

#[test]
fn project_link_opens_in_a_new_tab() {
    let html = render_card(project(Some("https://github.com/jam0ra/minigames")));
    assert!(html.contains("href=\"https://github.com/jam0ra/minigames\""));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(html.contains("View Minigames project (opens in new tab)"));
}
