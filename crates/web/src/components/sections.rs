//! Page regions. Each region's element id is its [`Section`] identifier so
//! both navigation and the intersection watcher can find it.

use folio_types::{ContactLink, EducationRecord, ExperienceRecord, Profile, ProjectRecord, Section, TechnologyCatalog};
use leptos::prelude::*;

use super::cards::{ContactLinkView, EducationCard, ExperienceCard, ProjectCard, TechnologyGroup};
use super::icons::IconGlyph;

/// Heading row shared by the content sections: accent icon followed by the label.
#[component]
fn SectionHeading(section: Section) -> impl IntoView {
    view! {
        <div class="region__heading">
            <IconGlyph icon=section.icon() class="region__icon" />
            <h2 id=section.heading_id() class="region__title">{section.label()}</h2>
        </div>
    }
}

#[component]
fn Region(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.as_str() class="region" aria-labelledby=section.heading_id()>
            {children()}
        </section>
    }
}

#[component]
pub fn HomeSection(profile: Profile) -> impl IntoView {
    view! {
        <Region section=Section::Home>
            <h2 id=Section::Home.heading_id() class="region__name">{profile.name}</h2>
            <p class="region__headline">{profile.headline}</p>
            <p class="region__summary">{profile.summary}</p>
        </Region>
    }
}

#[component]
pub fn AboutSection(contacts: Vec<ContactLink>) -> impl IntoView {
    view! {
        <Region section=Section::About>
            <h2 id=Section::About.heading_id() class="sr-only">"Contact Information"</h2>
            <div class="contacts">
                {contacts.into_iter().map(|link| view! { <ContactLinkView link=link /> }).collect_view()}
            </div>
        </Region>
    }
}

#[component]
pub fn ExperienceSection(records: Vec<ExperienceRecord>) -> impl IntoView {
    view! {
        <Region section=Section::Experience>
            <SectionHeading section=Section::Experience />
            <div class="stack">
                {records.into_iter().map(|record| view! { <ExperienceCard record=record /> }).collect_view()}
            </div>
        </Region>
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<ProjectRecord>) -> impl IntoView {
    view! {
        <Region section=Section::Projects>
            <SectionHeading section=Section::Projects />
            <div class="grid">
                {projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
            </div>
        </Region>
    }
}

#[component]
pub fn EducationSection(records: Vec<EducationRecord>) -> impl IntoView {
    view! {
        <Region section=Section::Education>
            <SectionHeading section=Section::Education />
            <div class="stack">
                {records.into_iter().map(|record| view! { <EducationCard record=record /> }).collect_view()}
            </div>
        </Region>
    }
}

#[component]
pub fn TechnologiesSection(catalog: TechnologyCatalog) -> impl IntoView {
    let groups: Vec<_> = catalog.groups().into_iter().cloned().collect();
    view! {
        <Region section=Section::Technologies>
            <SectionHeading section=Section::Technologies />
            <div class="card card--technologies">
                {groups.into_iter().map(|group| view! { <TechnologyGroup group=group /> }).collect_view()}
            </div>
        </Region>
    }
}
