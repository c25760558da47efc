use serde::{Deserialize, Serialize};

/// Input collected by the sidebar for a generate call. `image` decides which
/// generation-client path is taken; the prompt may be blank either way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

/// Reference image uploaded by the user, ready to be inlined into an API
/// request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64 body without the `data:…;base64,` prefix.
    pub data: String,
}

impl ImagePayload {
    /// Parse the data URL produced by `FileReader::readAsDataURL`.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (header, data) = rest.split_once(',')?;
        let mime_type = header.strip_suffix(";base64")?;
        if mime_type.is_empty() || data.is_empty() {
            return None;
        }
        Some(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Rebuild the data URL form, used by OpenAI-style image parts.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_png_data_url() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, "iVBORw0KGgo=");
    }

    #[test]
    fn round_trips_back_to_a_data_url() {
        let url = "data:image/jpeg;base64,AAAA";
        let payload = ImagePayload::from_data_url(url).unwrap();
        assert_eq!(payload.to_data_url(), url);
    }

    #[test]
    fn rejects_non_base64_and_malformed_urls() {
        assert!(ImagePayload::from_data_url("data:image/png,plain").is_none());
        assert!(ImagePayload::from_data_url("image/png;base64,AAAA").is_none());
        assert!(ImagePayload::from_data_url("data:;base64,AAAA").is_none());
        assert!(ImagePayload::from_data_url("data:image/png;base64,").is_none());
    }
}
