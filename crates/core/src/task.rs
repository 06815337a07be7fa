//! Task field limits and input validation.
//!
//! Validation runs in the API layer before a request reaches the service,
//! so the repository never sees out-of-bounds input. Field names in
//! [`FieldError`] use the wire-format (camelCase) spelling because the
//! messages are returned to HTTP clients verbatim.

use chrono::NaiveDate;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 10_000;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire-format field name (e.g. `"dueDate"`).
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate task input fields against the creation/update rules.
///
/// Rules:
/// - `title` is required, must not be blank, and must not exceed
///   [`TITLE_MAX_CHARS`] characters.
/// - `description`, when present, must not exceed [`DESCRIPTION_MAX_CHARS`]
///   characters.
/// - `due_date`, when present, must not be before `today`.
///
/// All failing fields are reported, not just the first one.
pub fn validate_task_fields(
    title: &str,
    description: Option<&str>,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "title is required and must not be blank"));
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(FieldError::new(
            "title",
            format!("title must not exceed {TITLE_MAX_CHARS} characters"),
        ));
    }

    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(FieldError::new(
                "description",
                format!("description must not exceed {DESCRIPTION_MAX_CHARS} characters"),
            ));
        }
    }

    if let Some(due_date) = due_date {
        if due_date < today {
            errors.push(FieldError::new("dueDate", "dueDate must not be in the past"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_valid_input_passes() {
        let result = validate_task_fields("Buy milk", Some("2 liters"), None, today());
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let errors = validate_task_fields("", None, None, today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
        assert!(errors[0].message.contains("required"));
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let errors = validate_task_fields("   \t", None, None, today()).unwrap_err();
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_title_at_limit_passes() {
        let title = "a".repeat(TITLE_MAX_CHARS);
        assert!(validate_task_fields(&title, None, None, today()).is_ok());
    }

    #[test]
    fn test_title_over_limit_rejected() {
        let title = "a".repeat(TITLE_MAX_CHARS + 1);
        let errors = validate_task_fields(&title, None, None, today()).unwrap_err();
        assert_eq!(errors[0].field, "title");
        assert!(errors[0].message.contains("255"));
    }

    #[test]
    fn test_title_limit_counts_characters_not_bytes() {
        // 255 multi-byte characters are within the limit even though the
        // UTF-8 encoding exceeds 255 bytes.
        let title = "ü".repeat(TITLE_MAX_CHARS);
        assert!(validate_task_fields(&title, None, None, today()).is_ok());
    }

    #[test]
    fn test_description_at_limit_passes() {
        let description = "d".repeat(DESCRIPTION_MAX_CHARS);
        assert!(validate_task_fields("Title", Some(&description), None, today()).is_ok());
    }

    #[test]
    fn test_description_over_limit_rejected() {
        let description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        let errors = validate_task_fields("Title", Some(&description), None, today()).unwrap_err();
        assert_eq!(errors[0].field, "description");
    }

    #[test]
    fn test_due_date_today_passes() {
        assert!(validate_task_fields("Title", None, Some(today()), today()).is_ok());
    }

    #[test]
    fn test_due_date_future_passes() {
        let tomorrow = today().succ_opt().unwrap();
        assert!(validate_task_fields("Title", None, Some(tomorrow), today()).is_ok());
    }

    #[test]
    fn test_due_date_past_rejected() {
        let yesterday = today().pred_opt().unwrap();
        let errors = validate_task_fields("Title", None, Some(yesterday), today()).unwrap_err();
        assert_eq!(errors[0].field, "dueDate");
        assert!(errors[0].message.contains("past"));
    }

    #[test]
    fn test_multiple_failures_all_reported() {
        let yesterday = today().pred_opt().unwrap();
        let description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        let errors =
            validate_task_fields("", Some(&description), Some(yesterday), today()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "description", "dueDate"]);
    }
}
