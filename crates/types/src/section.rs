//! Section identifiers for the scrollable regions of the page.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Icon glyphs shared by navigation items, section headings and contact links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    User,
    Briefcase,
    Code,
    GraduationCap,
    Wrench,
    Menu,
    Github,
    Linkedin,
    Mail,
    Phone,
    ExternalLink,
}

/// One addressable region of the page.
///
/// The variant order is the top-to-bottom page order. The identifier returned
/// by [`Section::as_str`] doubles as the DOM id of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Education,
    Technologies,
}

impl Section {
    /// Every section in page order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Technologies,
    ];

    /// Stable identifier, used as the DOM id of the region.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Technologies => "technologies",
        }
    }

    /// Short label shown on navigation items.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Technologies => "Technologies",
        }
    }

    pub const fn icon(self) -> Icon {
        match self {
            Self::Home => Icon::Home,
            Self::About => Icon::User,
            Self::Experience => Icon::Briefcase,
            Self::Projects => Icon::Code,
            Self::Education => Icon::GraduationCap,
            Self::Technologies => Icon::Wrench,
        }
    }

    /// Id of the heading element that labels the region.
    pub fn heading_id(self) -> String {
        format!("{}-title", self.as_str())
    }

    /// Position of the section in page order.
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Raised when a DOM id does not name one of the fixed sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionError(pub String);

impl fmt::Display for ParseSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id '{}'", self.0)
    }
}

impl Error for ParseSectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back_to_sections() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let err = "contact".parse::<Section>().unwrap_err();
        assert_eq!(err, ParseSectionError("contact".into()));
        assert_eq!(err.to_string(), "unknown section id 'contact'");
        assert!("Home".parse::<Section>().is_err());
    }

    #[test]
    fn order_follows_the_page() {
        let mut sorted = Section::ALL;
        sorted.sort();
        assert_eq!(sorted, Section::ALL);
        assert_eq!(Section::Home.position(), 0);
        assert_eq!(Section::Technologies.position(), 5);
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn serde_uses_dom_ids() {
        let json = serde_json::to_string(&Section::Projects).expect("serialize section");
        assert_eq!(json, "\"projects\"");
        let back: Section = serde_json::from_str("\"education\"").expect("deserialize section");
        assert_eq!(back, Section::Education);
    }
}
