//! Field validation rules for API inputs.
//!
//! One validation function per input shape, each returning the full list
//! of field-level problems rather than stopping at the first. Handlers
//! run these before touching the database.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a category name in characters.
pub const CATEGORY_NAME_MIN_LENGTH: usize = 3;

/// Maximum length of a category name in characters.
pub const CATEGORY_NAME_MAX_LENGTH: usize = 30;

/// Maximum length of a category color string (e.g. "#FF5733", "blue").
pub const CATEGORY_COLOR_MAX_LENGTH: usize = 50;

/// Color assigned to a category created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#9E9E9E";

/// Minimum length of a task title in characters.
pub const TASK_TITLE_MIN_LENGTH: usize = 3;

/// Maximum length of a task title in characters.
pub const TASK_TITLE_MAX_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// A single field-level validation problem, serialized into the
/// `details` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-field rules
// ---------------------------------------------------------------------------

fn check_category_name(name: &str, errors: &mut Vec<FieldError>) {
    if name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
        return;
    }
    let len = name.chars().count();
    if len < CATEGORY_NAME_MIN_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("Name must be at least {CATEGORY_NAME_MIN_LENGTH} characters"),
        ));
    } else if len > CATEGORY_NAME_MAX_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("Name must be at most {CATEGORY_NAME_MAX_LENGTH} characters"),
        ));
    }
}

fn check_category_color(color: &str, errors: &mut Vec<FieldError>) {
    if color.chars().count() > CATEGORY_COLOR_MAX_LENGTH {
        errors.push(FieldError::new(
            "color",
            format!("Color must be at most {CATEGORY_COLOR_MAX_LENGTH} characters"),
        ));
    }
}

fn check_task_title(title: &str, errors: &mut Vec<FieldError>) {
    if title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
        return;
    }
    let len = title.chars().count();
    if len < TASK_TITLE_MIN_LENGTH {
        errors.push(FieldError::new(
            "title",
            format!("Title must be at least {TASK_TITLE_MIN_LENGTH} characters"),
        ));
    } else if len > TASK_TITLE_MAX_LENGTH {
        errors.push(FieldError::new(
            "title",
            format!("Title must be at most {TASK_TITLE_MAX_LENGTH} characters"),
        ));
    }
}

// ---------------------------------------------------------------------------
// Per-input validators
// ---------------------------------------------------------------------------

/// Validate a category creation payload.
pub fn validate_new_category(name: &str, color: Option<&str>) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_category_name(name, &mut errors);
    if let Some(color) = color {
        check_category_color(color, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a category patch. Only fields present in the patch are checked.
pub fn validate_category_patch(
    name: Option<&str>,
    color: Option<&str>,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Some(name) = name {
        check_category_name(name, &mut errors);
    }
    if let Some(color) = color {
        check_category_color(color, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a task creation payload.
///
/// The `categoryId` reference is deliberately not checked here: existence
/// of the category is a store-level concern, validated against the
/// category table at write time.
pub fn validate_new_task(title: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_task_title(title, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a task patch. Only fields present in the patch are checked.
pub fn validate_task_patch(title: Option<&str>) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Some(title) = title {
        check_task_title(title, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(result: Result<(), Vec<FieldError>>) -> Vec<&'static str> {
        result
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    // -- validate_new_category ----------------------------------------------

    #[test]
    fn valid_category_accepted() {
        assert!(validate_new_category("Work", Some("#2196F3")).is_ok());
    }

    #[test]
    fn category_without_color_accepted() {
        assert!(validate_new_category("Work", None).is_ok());
    }

    #[test]
    fn empty_category_name_rejected() {
        let errors = validate_new_category("", None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert!(errors[0].message.contains("required"));
    }

    #[test]
    fn short_category_name_rejected() {
        let errors = validate_new_category("ab", None).unwrap_err();
        assert_eq!(errors[0].field, "name");
        assert!(errors[0].message.contains("at least 3"));
    }

    #[test]
    fn category_name_at_min_length_accepted() {
        assert!(validate_new_category("abc", None).is_ok());
    }

    #[test]
    fn category_name_at_max_length_accepted() {
        let name = "a".repeat(CATEGORY_NAME_MAX_LENGTH);
        assert!(validate_new_category(&name, None).is_ok());
    }

    #[test]
    fn category_name_over_max_length_rejected() {
        let name = "a".repeat(CATEGORY_NAME_MAX_LENGTH + 1);
        assert_eq!(fields(validate_new_category(&name, None)), vec!["name"]);
    }

    #[test]
    fn multibyte_category_name_counted_in_chars() {
        // Three characters, more than three bytes.
        assert!(validate_new_category("日本語", None).is_ok());
    }

    #[test]
    fn overlong_color_rejected() {
        let color = "x".repeat(CATEGORY_COLOR_MAX_LENGTH + 1);
        assert_eq!(
            fields(validate_new_category("Work", Some(&color))),
            vec!["color"]
        );
    }

    #[test]
    fn all_invalid_fields_reported_together() {
        let color = "x".repeat(CATEGORY_COLOR_MAX_LENGTH + 1);
        let errors = validate_new_category("ab", Some(&color)).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    // -- validate_category_patch --------------------------------------------

    #[test]
    fn empty_category_patch_accepted() {
        assert!(validate_category_patch(None, None).is_ok());
    }

    #[test]
    fn category_patch_checks_only_present_fields() {
        assert!(validate_category_patch(None, Some("#FF5733")).is_ok());
        assert_eq!(fields(validate_category_patch(Some("ab"), None)), vec!["name"]);
    }

    // -- validate_new_task ---------------------------------------------------

    #[test]
    fn valid_task_title_accepted() {
        assert!(validate_new_task("Write report").is_ok());
    }

    #[test]
    fn empty_task_title_rejected() {
        let errors = validate_new_task("").unwrap_err();
        assert_eq!(errors[0].field, "title");
        assert!(errors[0].message.contains("required"));
    }

    #[test]
    fn short_task_title_rejected() {
        assert_eq!(fields(validate_new_task("ab")), vec!["title"]);
    }

    #[test]
    fn task_title_at_min_length_accepted() {
        assert!(validate_new_task("abc").is_ok());
    }

    #[test]
    fn task_title_over_max_length_rejected() {
        let title = "a".repeat(TASK_TITLE_MAX_LENGTH + 1);
        assert_eq!(fields(validate_new_task(&title)), vec!["title"]);
    }

    // -- validate_task_patch -------------------------------------------------

    #[test]
    fn empty_task_patch_accepted() {
        assert!(validate_task_patch(None).is_ok());
    }

    #[test]
    fn task_patch_short_title_rejected() {
        assert_eq!(fields(validate_task_patch(Some("ab"))), vec!["title"]);
    }

    // -- constants -----------------------------------------------------------

    #[test]
    fn default_color_is_neutral_gray() {
        assert_eq!(DEFAULT_CATEGORY_COLOR, "#9E9E9E");
    }
}
