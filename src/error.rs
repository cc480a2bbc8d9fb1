//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors raised by explicit template validation.
///
/// Plain rendering never fails: a placeholder with no usable value is left
/// verbatim in the output. Only `validate` / `render_checked` turn leftover
/// placeholders into an error. The `Template` that produced the error stays
/// valid and reusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unresolved placeholders in \"{template}\": {}", .missing_replacements.join(", "))]
    Validation {
        /// The string that was validated (the rendered form of the template)
        template: String,
        /// Placeholder tokens still present, in first-seen order
        missing_replacements: Vec<String>,
    },
}

impl FixSuggestion for TemplateError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            TemplateError::Validation { .. } => {
                Some("Supply a value for each listed placeholder, or render without validation")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = TemplateError::Validation {
            template: "Hi {name}".to_string(),
            missing_replacements: vec!["{name}".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unresolved placeholders in \"Hi {name}\": {name}"
        );
    }

    #[test]
    fn test_fix_suggestion_present() {
        let err = TemplateError::Validation {
            template: String::new(),
            missing_replacements: vec![],
        };
        assert!(err.fix_suggestion().is_some());
    }
}
