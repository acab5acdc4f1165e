//! Presentational cards. Each takes a record and renders it; none hold state.

use folio_types::{ContactLink, EducationRecord, ExperienceRecord, Icon, ProjectRecord, TagGroup};
use leptos::prelude::*;

use super::icons::IconGlyph;

/// Accessible name for a project's external link.
pub fn project_link_label(title: &str) -> String {
    format!("View {title} project (opens in new tab)")
}

#[component]
fn TagList(tags: Vec<String>, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <ul class="tags" role="list" aria-label=label>
            {tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let ProjectRecord {
        title,
        description,
        link,
        technologies,
    } = project;

    let external = link.map(|href| {
        view! {
            <a
                class="card__link"
                href=href
                target="_blank"
                rel="noopener noreferrer"
                aria-label=project_link_label(&title)
            >
                <IconGlyph icon=Icon::ExternalLink size=18 />
            </a>
        }
    });

    view! {
        <article class="card card--project">
            <header class="card__header">
                <h3 class="card__title">{title.clone()}</h3>
                {external}
            </header>
            <p class="card__body">{description}</p>
            <TagList tags=technologies label="Technologies used" />
        </article>
    }
}

#[component]
pub fn ExperienceCard(record: ExperienceRecord) -> impl IntoView {
    let ExperienceRecord {
        title,
        organization,
        date_range,
        responsibilities,
    } = record;

    view! {
        <article class="card card--experience">
            <h3 class="card__title">{title}</h3>
            <p class="card__meta">
                <span class="card__org">{organization}</span>
                <span class="card__dates">{date_range}</span>
            </p>
            <ul class="card__list" aria-label="Job responsibilities">
                {responsibilities
                    .into_iter()
                    .map(|line| {
                        view! {
                            <li class="card__list-item">
                                <span class="card__bullet" aria-hidden="true">"•"</span>
                                <span>{line}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}

#[component]
pub fn EducationCard(record: EducationRecord) -> impl IntoView {
    view! {
        <article class="card card--education">
            <h3 class="card__title">{record.credential}</h3>
            <p class="card__meta">
                <span class="card__org">{record.institution}</span>
                <span class="card__dates">{record.date_range}</span>
            </p>
        </article>
    }
}

#[component]
pub fn TechnologyGroup(group: TagGroup) -> impl IntoView {
    view! {
        <div class="tech-group">
            <h3 class="tech-group__title">{group.title}</h3>
            <TagList tags=group.tags label=group.list_label />
        </div>
    }
}

/// Contact action. Mail and phone links stay in the current tab.
#[component]
pub fn ContactLinkView(link: ContactLink) -> impl IntoView {
    let new_tab = link.opens_in_new_tab();
    let aria_label = link.aria_label();
    let ContactLink { kind, label, href } = link;

    view! {
        <a
            class="contact"
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            aria-label=aria_label
        >
            <IconGlyph icon=kind.icon() size=20 class="contact__icon" />
            <span class="contact__label">{label}</span>
        </a>
    }
}
