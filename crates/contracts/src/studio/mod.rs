//! Shared data model for the studio: artifacts, configuration, requests and
//! the session state machine. Everything here is plain Rust so it can be
//! tested natively, without a browser.

pub mod artifact;
pub mod config;
pub mod error;
pub mod markup;
pub mod request;
pub mod session;
pub mod status;

pub use artifact::SvgArtifact;
pub use config::ModelConfig;
pub use error::ApiError;
pub use request::{GenerationRequest, ImagePayload};
pub use session::StudioSession;
pub use status::GenerationStatus;
