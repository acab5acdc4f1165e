//! Rules a content document must satisfy before it is rendered.

use folio_types::{ContactLink, NavigationConfig, Portfolio};
use url::Url;

use crate::ContentError;

/// Validates the whole document, returning the first rule violation.
pub fn validate(portfolio: &Portfolio) -> Result<(), ContentError> {
    require_text("profile.name", &portfolio.profile.name)?;
    require_text("profile.site_title", &portfolio.profile.site_title)?;

    for (index, contact) in portfolio.contacts.iter().enumerate() {
        validate_contact(index, contact)?;
    }

    for (index, record) in portfolio.experience.iter().enumerate() {
        require_text(&format!("experience[{index}].title"), &record.title)?;
        require_text(&format!("experience[{index}].organization"), &record.organization)?;
    }

    for (index, project) in portfolio.projects.iter().enumerate() {
        require_text(&format!("projects[{index}].title"), &project.title)?;
        if let Some(link) = &project.link {
            require_scheme(&format!("projects[{index}].link"), link, &["https", "http"])?;
        }
    }

    for (index, record) in portfolio.education.iter().enumerate() {
        require_text(&format!("education[{index}].credential"), &record.credential)?;
    }

    validate_navigation(&portfolio.navigation)
}

fn validate_contact(index: usize, contact: &ContactLink) -> Result<(), ContentError> {
    let field = format!("contacts[{index}].href");
    require_text(&format!("contacts[{index}].label"), &contact.label)?;
    require_scheme(&field, &contact.href, contact.kind.allowed_schemes())
}

fn validate_navigation(config: &NavigationConfig) -> Result<(), ContentError> {
    if config.mobile_max_width <= 0.0 {
        return Err(ContentError::invalid("navigation.mobile_max_width", "must be positive"));
    }
    if config.mobile_max_width >= config.tablet_max_width {
        return Err(ContentError::invalid(
            "navigation.tablet_max_width",
            format!(
                "must be greater than mobile_max_width ({} >= {})",
                config.mobile_max_width, config.tablet_max_width
            ),
        ));
    }
    if !(config.visibility_threshold > 0.0 && config.visibility_threshold <= 1.0) {
        return Err(ContentError::invalid(
            "navigation.visibility_threshold",
            format!("must be within (0, 1], got {}", config.visibility_threshold),
        ));
    }
    if config.top_threshold < 0.0 {
        return Err(ContentError::invalid("navigation.top_threshold", "must not be negative"));
    }
    if config.mobile_dock_offset < 0.0 {
        return Err(ContentError::invalid("navigation.mobile_dock_offset", "must not be negative"));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::invalid(field, "must not be empty"));
    }
    Ok(())
}

fn require_scheme(field: &str, href: &str, schemes: &[&str]) -> Result<(), ContentError> {
    let url = Url::parse(href).map_err(|error| ContentError::invalid(field, format!("'{href}' is not a URL: {error}")))?;
    if !schemes.contains(&url.scheme()) {
        return Err(ContentError::invalid(
            field,
            format!("'{href}' must use one of: {}", schemes.join(", ")),
        ));
    }
    Ok(())
}
