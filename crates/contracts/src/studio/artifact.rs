use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated or refined vector-graphic result. Immutable once created;
/// the session history holds the owning reference and the "current" pointer
/// is just the artifact id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgArtifact {
    pub id: Uuid,
    /// Raw `<svg>…</svg>` markup as returned by the model.
    pub content: String,
    /// Human-readable description of how the artifact was produced.
    pub prompt_label: String,
    pub created_at: DateTime<Utc>,
}

impl SvgArtifact {
    fn new(content: String, prompt_label: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            prompt_label,
            created_at: Utc::now(),
        }
    }

    /// Artifact produced by a generate call. The label is the prompt text;
    /// a blank prompt is labeled "Image to Vector" when a reference image was
    /// supplied and "Untitled" otherwise.
    pub fn from_generation(content: String, prompt: &str, from_image: bool) -> Self {
        let label = if !prompt.trim().is_empty() {
            prompt.trim().to_string()
        } else if from_image {
            "Image to Vector".to_string()
        } else {
            "Untitled".to_string()
        };
        Self::new(content, label)
    }

    /// Artifact produced by refining this one.
    pub fn refined_from(&self, content: String, instruction: &str) -> Self {
        let label = format!("{} (Refined: {})", self.prompt_label, instruction);
        Self::new(content, label)
    }

    /// Filename suggestion for the download action.
    pub fn download_filename(&self) -> String {
        let slug: String = self
            .prompt_label
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let slug = slug.trim_matches('-');
        if slug.is_empty() {
            "vector.svg".to_string()
        } else {
            let head: String = slug.chars().take(48).collect();
            format!("{}.svg", head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_label_comes_from_prompt_text() {
        let artifact = SvgArtifact::from_generation("<svg/>".into(), "cat", false);
        assert_eq!(artifact.prompt_label, "cat");
    }

    #[test]
    fn blank_prompt_with_image_is_labeled_image_to_vector() {
        let artifact = SvgArtifact::from_generation("<svg/>".into(), "", true);
        assert_eq!(artifact.prompt_label, "Image to Vector");
    }

    #[test]
    fn blank_prompt_without_image_is_untitled() {
        let artifact = SvgArtifact::from_generation("<svg/>".into(), "  ", false);
        assert_eq!(artifact.prompt_label, "Untitled");
    }

    #[test]
    fn prompt_wins_over_image_label() {
        let artifact = SvgArtifact::from_generation("<svg/>".into(), "logo", true);
        assert_eq!(artifact.prompt_label, "logo");
    }

    #[test]
    fn refinement_extends_the_previous_label() {
        let first = SvgArtifact::from_generation("<svg/>".into(), "cat", false);
        let refined = first.refined_from("<svg/>".into(), "make it blue");
        assert_eq!(refined.prompt_label, "cat (Refined: make it blue)");
        assert_ne!(refined.id, first.id);
    }

    #[test]
    fn download_filename_is_a_safe_slug() {
        let artifact = SvgArtifact::from_generation("<svg/>".into(), "A cat, sitting!", false);
        assert_eq!(artifact.download_filename(), "a-cat--sitting.svg");

        let odd = SvgArtifact::from_generation("<svg/>".into(), "***", false);
        assert_eq!(odd.download_filename(), "vector.svg");
    }
}
