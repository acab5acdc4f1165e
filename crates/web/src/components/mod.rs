mod adaptive_nav;
mod cards;
mod icons;
mod nav_item;
mod sections;

pub use adaptive_nav::{AdaptiveNav, content_class, sidebar_class};
pub use cards::{ContactLinkView, EducationCard, ExperienceCard, ProjectCard, TechnologyGroup, project_link_label};
pub use icons::{IconGlyph, icon_paths};
pub use nav_item::{NavItemButton, nav_item_class};
pub use sections::{AboutSection, EducationSection, ExperienceSection, HomeSection, ProjectsSection, TechnologiesSection};
