//! Generation client: thin request/response wrapper around the external
//! generative APIs.
//!
//! Three operations (prompt-to-SVG, image-to-SVG, refine), each posting a
//! single request and returning the extracted `<svg>` markup or a
//! human-readable error string. No retries; a failed attempt is surfaced to
//! the caller as-is. The active `ModelConfig` is passed in on every call and
//! never cached here.

use contracts::studio::markup::extract_svg;
use contracts::studio::{ImagePayload, ModelConfig};
use gloo_net::http::Request;

const GEMINI_API_ROOT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const OPENAI_API_ROOT: &str = "https://api.openai.com/v1/chat/completions";

const PROMPT_INSTRUCTION: &str = "You are an expert vector artist. Produce a single complete \
    SVG document for the description below. Use a viewBox, no external references, no scripts. \
    Reply with the SVG markup only.";

const IMAGE_INSTRUCTION: &str = "You are an expert vector artist. Recreate the attached image \
    as a single clean SVG document. Use a viewBox, no external references, no scripts. Reply \
    with the SVG markup only.";

const REFINE_INSTRUCTION: &str = "You are an expert vector artist. Apply the instruction below \
    to the given SVG document and return the full updated SVG. Keep the viewBox, no external \
    references, no scripts. Reply with the SVG markup only.";

/// Generate an SVG from a text prompt.
pub async fn generate_from_prompt(config: &ModelConfig, prompt: &str) -> Result<String, String> {
    let text = format!("{}\n\nDescription: {}", PROMPT_INSTRUCTION, prompt.trim());
    dispatch(config, text, None).await
}

/// Generate an SVG from an uploaded reference image, optionally guided by a
/// prompt.
pub async fn generate_from_image(
    config: &ModelConfig,
    prompt: &str,
    image: &ImagePayload,
) -> Result<String, String> {
    let text = if prompt.trim().is_empty() {
        IMAGE_INSTRUCTION.to_string()
    } else {
        format!("{}\n\nAdditional guidance: {}", IMAGE_INSTRUCTION, prompt.trim())
    };
    dispatch(config, text, Some(image)).await
}

/// Refine existing SVG markup with a user instruction.
pub async fn refine(
    config: &ModelConfig,
    svg: &str,
    instruction: &str,
) -> Result<String, String> {
    let text = format!(
        "{}\n\nCurrent SVG:\n{}\n\nInstruction: {}",
        REFINE_INSTRUCTION, svg, instruction
    );
    dispatch(config, text, None).await
}

async fn dispatch(
    config: &ModelConfig,
    text: String,
    image: Option<&ImagePayload>,
) -> Result<String, String> {
    if config.api_key.trim().is_empty() {
        return Err("No API key configured. Add one under Model Settings.".to_string());
    }
    let raw = match config.provider.as_str() {
        "google" => call_gemini(config, &text, image).await?,
        "openai" => call_openai(config, &text, image).await?,
        other => return Err(format!("Provider \"{}\" is not supported.", other)),
    };
    extract_svg(&raw)
}

/// POST to the Gemini `generateContent` endpoint and pull the first candidate
/// text out of the reply.
async fn call_gemini(
    config: &ModelConfig,
    text: &str,
    image: Option<&ImagePayload>,
) -> Result<String, String> {
    let mut parts = Vec::new();
    if let Some(image) = image {
        parts.push(serde_json::json!({
            "inline_data": { "mime_type": image.mime_type, "data": image.data }
        }));
    }
    parts.push(serde_json::json!({ "text": text }));

    let url = format!(
        "{}/{}:generateContent?key={}",
        GEMINI_API_ROOT, config.model, config.api_key
    );
    let body = serde_json::json!({ "contents": [{ "parts": parts }] });

    let data = post_json(Request::post(&url), &body).await?;
    data["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "The model reply contained no text.".to_string())
}

/// POST to an OpenAI-style chat-completions endpoint. Images travel as
/// data-URL `image_url` parts.
async fn call_openai(
    config: &ModelConfig,
    text: &str,
    image: Option<&ImagePayload>,
) -> Result<String, String> {
    let mut content = vec![serde_json::json!({ "type": "text", "text": text })];
    if let Some(image) = image {
        content.push(serde_json::json!({
            "type": "image_url",
            "image_url": { "url": image.to_data_url() }
        }));
    }
    let body = serde_json::json!({
        "model": config.model,
        "messages": [{ "role": "user", "content": content }]
    });

    let request =
        Request::post(OPENAI_API_ROOT).header("Authorization", &format!("Bearer {}", config.api_key));
    let data = post_json(request, &body).await?;
    data["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "The model reply contained no text.".to_string())
}

async fn post_json(
    request: gloo_net::http::RequestBuilder,
    body: &serde_json::Value,
) -> Result<serde_json::Value, String> {
    let response = request
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to reach the generation service: {}", e))?;

    if !response.ok() {
        return Err(format!("The generation service returned HTTP {}.", response.status()));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
