use serde::{Deserialize, Serialize};

/// User-facing error record shown in the toast. Exists only while the
/// session is in the error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Short title, e.g. "Generation Failed".
    pub message: String,
    /// Human-readable explanation from the underlying failure.
    pub details: String,
}

impl ApiError {
    pub fn generation_failed(details: &str) -> Self {
        Self {
            message: "Generation Failed".to_string(),
            details: non_empty_or(details, "An unexpected error occurred."),
        }
    }

    pub fn refinement_failed(details: &str) -> Self {
        Self {
            message: "Refinement Failed".to_string(),
            details: non_empty_or(details, "Could not refine the SVG."),
        }
    }
}

fn non_empty_or(details: &str, fallback: &str) -> String {
    let trimmed = details.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_failure_keeps_details() {
        let err = ApiError::generation_failed("timeout");
        assert_eq!(err.message, "Generation Failed");
        assert_eq!(err.details, "timeout");
    }

    #[test]
    fn blank_details_fall_back_to_generic_text() {
        let err = ApiError::generation_failed("  ");
        assert_eq!(err.details, "An unexpected error occurred.");

        let err = ApiError::refinement_failed("");
        assert_eq!(err.message, "Refinement Failed");
        assert_eq!(err.details, "Could not refine the SVG.");
    }
}
