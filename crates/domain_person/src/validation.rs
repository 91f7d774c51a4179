//! Person validation rules
//!
//! This module validates raw, untrusted person fields (for example a record
//! read from storage) before they are turned into a [`Person`](crate::Person).
//!
//! # Validation Rules
//!
//! ## Required fields
//! - Name must be present and satisfy [`Name::is_valid_name`]
//! - Every tag must satisfy [`Tag::is_valid_tag_name`]
//!
//! ## Contact fields
//! - Phone, email and address are repairable: an empty value or a malformed
//!   value is reported as a warning, never as an error

use crate::contact::{Address, Email, Name, Phone, Tag};

/// Result of person validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the fields are valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Borrowed view of unvalidated person fields
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonFields<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub tags: &'a [&'a str],
}

/// Validator for raw person fields
///
/// # Examples
///
/// ```rust
/// use domain_person::validation::{PersonFields, PersonValidator};
///
/// let fields = PersonFields {
///     name: Some("Alice Pauline"),
///     phone: Some(""),
///     email: Some("alice@example.com"),
///     address: None,
///     tags: &["friends"],
/// };
/// let result = PersonValidator::validate_fields(&fields);
///
/// assert!(result.is_valid);
/// assert_eq!(result.warnings.len(), 2);
/// ```
pub struct PersonValidator;

impl PersonValidator {
    /// Validates every field, merging the outcome
    pub fn validate_fields(fields: &PersonFields<'_>) -> ValidationResult {
        let mut result = ValidationResult::ok();

        result.merge(Self::validate_name(fields.name));
        result.merge(Self::validate_tags(fields.tags.iter().copied()));
        result.merge(Self::validate_contact("Phone", fields.phone, Phone::is_valid_phone));
        result.merge(Self::validate_contact("Email", fields.email, Email::is_valid_email));
        result.merge(Self::validate_contact(
            "Address",
            fields.address,
            Address::is_valid_address,
        ));

        result
    }

    /// Name must be present and well-formed
    pub fn validate_name(name: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::ok();
        match name {
            None => result.add_error("Person's Name field is missing!"),
            Some(value) if !Name::is_valid_name(value) => {
                result.add_error(Name::MESSAGE_CONSTRAINTS)
            }
            Some(_) => {}
        }
        result
    }

    /// Every tag must be well-formed
    pub fn validate_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for tag in tags {
            if !Tag::is_valid_tag_name(tag) {
                result.add_error(format!("{}: {:?}", Tag::MESSAGE_CONSTRAINTS, tag));
            }
        }
        result
    }

    /// Contact fields only ever produce warnings
    pub fn validate_contact(
        label: &str,
        value: Option<&str>,
        is_valid: fn(&str) -> bool,
    ) -> ValidationResult {
        let mut result = ValidationResult::ok();
        match value.map(str::trim) {
            None | Some("") => result.add_warning(format!("{} is empty", label)),
            Some(_) if !value.is_some_and(is_valid) => {
                result.add_warning(format!("{} is malformed", label))
            }
            Some(_) => {}
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> PersonFields<'static> {
        PersonFields {
            name: Some("Benson Meier"),
            phone: Some("98765432"),
            email: Some("johnd@example.com"),
            address: Some("311, Clementi Ave 2, #02-25"),
            tags: &["owesMoney", "friends"],
        }
    }

    #[test]
    fn test_valid_fields() {
        let result = PersonValidator::validate_fields(&valid_fields());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_name() {
        let fields = PersonFields {
            name: None,
            ..valid_fields()
        };
        let result = PersonValidator::validate_fields(&fields);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Name field is missing")));
    }

    #[test]
    fn test_invalid_name() {
        let result = PersonValidator::validate_name(Some("R@chel"));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![Name::MESSAGE_CONSTRAINTS.to_string()]);
    }

    #[test]
    fn test_invalid_tag() {
        let fields = PersonFields {
            tags: &["friends", "#friend"],
            ..valid_fields()
        };
        let result = PersonValidator::validate_fields(&fields);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("#friend"));
    }

    #[test]
    fn test_contact_problems_are_warnings() {
        let fields = PersonFields {
            phone: None,
            email: Some("not an email"),
            address: Some("   "),
            ..valid_fields()
        };
        let result = PersonValidator::validate_fields(&fields);
        assert!(result.is_valid, "Errors: {:?}", result.errors);
        assert_eq!(
            result.warnings,
            vec![
                "Phone is empty".to_string(),
                "Email is malformed".to_string(),
                "Address is empty".to_string(),
            ]
        );
    }

    #[test]
    fn test_merge_propagates_failure() {
        let mut result = ValidationResult::ok();
        result.add_warning("heads up");
        result.merge(ValidationResult::fail(vec!["broken".to_string()]));

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["broken".to_string()]);
        assert_eq!(result.warnings, vec!["heads up".to_string()]);
    }
}
