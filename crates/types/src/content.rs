//! Content records rendered by the page. All of them are immutable once loaded.

use serde::{Deserialize, Serialize};

use crate::{Icon, NavigationConfig};

/// Complete content document for one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    pub technologies: TechnologyCatalog,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Biography shown in the home section and window chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Title shown in the window-style header above the content.
    pub site_title: String,
}

/// A role held at an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub title: String,
    pub organization: String,
    /// Free-form date range label, e.g. `Oct 2023 - Present`.
    pub date_range: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    /// External link; the card omits the link affordance when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub credential: String,
    pub institution: String,
    pub date_range: String,
}

/// A named, ordered list of technology tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    /// Visible heading, e.g. `Frameworks & Tools`.
    pub title: String,
    /// Accessible name of the tag list.
    pub list_label: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The three technology lists shown in the technologies section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyCatalog {
    pub languages: TagGroup,
    pub frameworks: TagGroup,
    pub tools: TagGroup,
}

impl TechnologyCatalog {
    /// Groups in display order.
    pub fn groups(&self) -> [&TagGroup; 3] {
        [&self.languages, &self.frameworks, &self.tools]
    }
}

/// Kind of outbound contact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactKind {
    CodeHost,
    ProfessionalNetwork,
    Email,
    Phone,
}

impl ContactKind {
    pub const fn icon(self) -> Icon {
        match self {
            Self::CodeHost => Icon::Github,
            Self::ProfessionalNetwork => Icon::Linkedin,
            Self::Email => Icon::Mail,
            Self::Phone => Icon::Phone,
        }
    }

    /// URL scheme(s) an href of this kind must use.
    pub const fn allowed_schemes(self) -> &'static [&'static str] {
        match self {
            Self::CodeHost | Self::ProfessionalNetwork => &["https", "http"],
            Self::Email => &["mailto"],
            Self::Phone => &["tel"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Visible text, e.g. `github.com/jam0ra`.
    pub label: String,
    pub href: String,
}

impl ContactLink {
    /// Profile links leave the page in a new tab; mail and phone actions do not.
    pub const fn opens_in_new_tab(&self) -> bool {
        matches!(self.kind, ContactKind::CodeHost | ContactKind::ProfessionalNetwork)
    }

    /// Accessible name announced for the link.
    pub fn aria_label(&self) -> String {
        match self.kind {
            ContactKind::CodeHost => "GitHub Profile (opens in new tab)".to_string(),
            ContactKind::ProfessionalNetwork => "LinkedIn Profile (opens in new tab)".to_string(),
            ContactKind::Email => "Send email".to_string(),
            ContactKind::Phone => format!("Call {}", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_link_is_optional() {
        let yaml = "title: Minigames\ndescription: Terminal games\ntechnologies: [Python, SQLite3]\n";
        let project: ProjectRecord = serde_yaml::from_str(yaml).expect("deserialize project");
        assert!(project.link.is_none());
        assert_eq!(project.technologies, vec!["Python", "SQLite3"]);

        let json = serde_json::to_value(&project).expect("serialize project");
        assert!(json.get("link").is_none());
    }

    #[test]
    fn contact_kinds_use_kebab_case() {
        let link: ContactLink =
            serde_json::from_str(r#"{"kind":"professional-network","label":"in/me","href":"https://linkedin.com/in/me"}"#)
                .expect("deserialize contact");
        assert_eq!(link.kind, ContactKind::ProfessionalNetwork);
        assert!(link.opens_in_new_tab());
        assert_eq!(link.kind.icon(), Icon::Linkedin);
    }

    #[test]
    fn mail_and_phone_stay_in_place() {
        let mail = ContactLink {
            kind: ContactKind::Email,
            label: "me@example.com".into(),
            href: "mailto:me@example.com".into(),
        };
        let phone = ContactLink {
            kind: ContactKind::Phone,
            label: "(555) 010-0000".into(),
            href: "tel:5550100000".into(),
        };
        assert!(!mail.opens_in_new_tab());
        assert!(!phone.opens_in_new_tab());
        assert_eq!(phone.aria_label(), "Call (555) 010-0000");
    }
}
