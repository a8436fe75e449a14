//! Field validators shared by the domain value objects.
//!
//! Each validator checks one property of a string field. Fields declare the
//! validators that apply to them and run them through [`validate`], so the
//! policy is shared without any inheritance between the value objects.

use crate::shared::error::SbomError;
use crate::shared::Result;

/// A single field check: `(field_name, value) -> Result<()>`
pub type FieldValidator = fn(&str, &str) -> Result<()>;

/// Maximum length for names and groups (security limit)
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for versions (security limit)
pub const MAX_VERSION_LENGTH: usize = 100;

/// Maximum length for free text such as descriptions
pub const MAX_TEXT_LENGTH: usize = 64 * 1024;

/// Validators for component names
pub const NAME: &[FieldValidator] = &[non_empty, name_length, no_control_chars];

/// Validators for component groups (npm scopes)
pub const GROUP: &[FieldValidator] = &[non_empty, name_length, no_control_chars];

/// Validators for component versions
pub const VERSION: &[FieldValidator] = &[non_empty, version_length, no_whitespace];

/// Validators for free text (description, author, publisher, copyright)
pub const TEXT: &[FieldValidator] = &[text_length, printable_text];

/// Validators for references (bom-ref, purl, cpe)
pub const REFERENCE: &[FieldValidator] = &[non_empty, text_length, no_whitespace];

/// Runs every validator against the value, stopping at the first failure
pub fn validate(field: &str, value: &str, validators: &[FieldValidator]) -> Result<()> {
    validators
        .iter()
        .try_for_each(|validator| validator(field, value))
}

pub fn non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SbomError::validation(format!("{} cannot be empty", field)).into());
    }
    Ok(())
}

fn max_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(SbomError::validation(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            value.len(),
            max
        ))
        .into());
    }
    Ok(())
}

pub fn name_length(field: &str, value: &str) -> Result<()> {
    max_length(field, value, MAX_NAME_LENGTH)
}

pub fn version_length(field: &str, value: &str) -> Result<()> {
    max_length(field, value, MAX_VERSION_LENGTH)
}

pub fn text_length(field: &str, value: &str) -> Result<()> {
    max_length(field, value, MAX_TEXT_LENGTH)
}

pub fn no_control_chars(field: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_control) {
        return Err(
            SbomError::validation(format!("{} contains control characters", field)).into(),
        );
    }
    Ok(())
}

pub fn no_whitespace(field: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(SbomError::validation(format!(
            "{} must not contain whitespace or control characters",
            field
        ))
        .into());
    }
    Ok(())
}

/// Line breaks and tabs are fine in free text; other control characters
/// cannot be represented in XML 1.0.
pub fn printable_text(field: &str, value: &str) -> Result<()> {
    if value
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
    {
        return Err(
            SbomError::validation(format!("{} contains control characters", field)).into(),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_runs_all_validators() {
        assert!(validate("Name", "lodash", NAME).is_ok());
        assert!(validate("Name", "", NAME).is_err());
        assert!(validate("Name", "bad\u{7}name", NAME).is_err());
    }

    #[test]
    fn test_validate_reports_field_name() {
        let err = validate("Version", "1.0 beta", VERSION).unwrap_err();
        assert!(err.to_string().contains("Version"));
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn test_version_length_limit() {
        let long = "1".repeat(MAX_VERSION_LENGTH + 1);
        let err = validate("Version", &long, VERSION).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_text_allows_line_breaks() {
        assert!(validate("Description", "line one\nline two\ttabbed", TEXT).is_ok());
        assert!(validate("Description", "", TEXT).is_ok());
        assert!(validate("Description", "nul\u{0}byte", TEXT).is_err());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(non_empty("Group", "   ").is_err());
    }
}
