use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_types::{ContactLink, EducationRecord, ExperienceRecord, NavigationConfig, Portfolio, Profile, ProjectRecord, TechnologyCatalog};
use tracing::debug;

use crate::{ContentError, validate};

/// Environment variable allowing callers to point tooling at another document.
pub const CONTENT_PATH_ENV: &str = "FOLIO_CONTENT_PATH";

/// Document compiled into every build of the site.
const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.yaml");

/// Where a loaded document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded portfolio.yaml"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read-only store of validated portfolio content.
///
/// Cloning is cheap; the document is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ContentStore {
    portfolio: Arc<Portfolio>,
    source: ContentSource,
}

impl ContentStore {
    /// Loads and validates the document embedded at compile time.
    pub fn embedded() -> Result<Self, ContentError> {
        let portfolio = parse_yaml(EMBEDDED_CONTENT)?;
        Self::new(portfolio, ContentSource::Embedded)
    }

    /// Loads and validates a document from disk. Files ending in `.json` are
    /// parsed as JSON; everything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let portfolio = if is_json { parse_json(&text)? } else { parse_yaml(&text)? };
        Self::new(portfolio, ContentSource::File(path.to_path_buf()))
    }

    /// Loads from `path` when given, then from `FOLIO_CONTENT_PATH`, and
    /// otherwise falls back to the embedded document.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ContentError> {
        if let Some(path) = path {
            return Self::from_path(path);
        }
        if let Ok(value) = env::var(CONTENT_PATH_ENV)
            && !value.trim().is_empty()
        {
            return Self::from_path(value.trim());
        }
        Self::embedded()
    }

    fn new(portfolio: Portfolio, source: ContentSource) -> Result<Self, ContentError> {
        validate(&portfolio)?;
        debug!(
            source = %source,
            experience = portfolio.experience.len(),
            projects = portfolio.projects.len(),
            "Loaded portfolio content"
        );
        Ok(Self {
            portfolio: Arc::new(portfolio),
            source,
        })
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Shared handle to the whole document.
    pub fn shared(&self) -> Arc<Portfolio> {
        Arc::clone(&self.portfolio)
    }

    pub fn profile(&self) -> &Profile {
        &self.portfolio.profile
    }

    pub fn contacts(&self) -> &[ContactLink] {
        &self.portfolio.contacts
    }

    pub fn experience(&self) -> &[ExperienceRecord] {
        &self.portfolio.experience
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.portfolio.projects
    }

    pub fn education(&self) -> &[EducationRecord] {
        &self.portfolio.education
    }

    pub fn technologies(&self) -> &TechnologyCatalog {
        &self.portfolio.technologies
    }

    pub fn navigation(&self) -> &NavigationConfig {
        &self.portfolio.navigation
    }
}

/// Parses a YAML document without validating it.
pub fn parse_yaml(text: &str) -> Result<Portfolio, ContentError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Parses a JSON document without validating it.
pub fn parse_json(text: &str) -> Result<Portfolio, ContentError> {
    Ok(serde_json::from_str(text)?)
}
