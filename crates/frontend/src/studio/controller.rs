//! Application state controller.
//!
//! Sole owner of the session signal; every status transition goes through
//! here. The async generate/refine calls run on the single browser task via
//! `spawn_local`, so all mutation happens on one execution context.

use contracts::studio::{ApiError, GenerationRequest, ModelConfig, StudioSession, SvgArtifact};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use super::{api, config_store};
use crate::shared::viewport;

/// How long an error toast stays up before reverting to the last good state.
const ERROR_TOAST_MS: u32 = 3000;

#[derive(Clone, Copy)]
pub struct StudioController {
    pub session: RwSignal<StudioSession>,
    pub config: RwSignal<ModelConfig>,
    pub sidebar_open: RwSignal<bool>,
}

impl StudioController {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(StudioSession::new()),
            config: RwSignal::new(config_store::load()),
            sidebar_open: RwSignal::new(true),
        }
    }

    /// Persist and apply an edited model configuration.
    pub fn update_config(&self, config: ModelConfig) {
        config_store::save(&config);
        self.config.set(config);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn open_sidebar(&self) {
        self.sidebar_open.set(true);
    }

    /// On narrow viewports the sidebar covers the viewer, so it closes as
    /// soon as there is a result (or loading state) to show.
    fn close_sidebar_on_narrow(&self) {
        if viewport::is_narrow() {
            self.sidebar_open.set(false);
        }
    }

    /// Run a generate call. The image payload decides which client path is
    /// taken; an empty prompt is allowed.
    pub fn generate(&self, request: GenerationRequest) {
        let this = *self;
        this.session.update(|s| s.begin_generation());
        this.close_sidebar_on_narrow();

        let config = this.config.get_untracked();
        spawn_local(async move {
            let result = match request.image.as_ref() {
                Some(image) => api::generate_from_image(&config, &request.prompt, image).await,
                None => api::generate_from_prompt(&config, &request.prompt).await,
            };
            match result {
                Ok(content) => {
                    let artifact = SvgArtifact::from_generation(
                        content,
                        &request.prompt,
                        request.image.is_some(),
                    );
                    log::info!("generated \"{}\"", artifact.prompt_label);
                    this.session.update(|s| s.complete(artifact));
                }
                Err(details) => this.fail(ApiError::generation_failed(&details)),
            }
        });
    }

    /// Refine the current artifact. No-op when nothing is current.
    pub fn refine(&self, instruction: String) {
        let this = *self;
        let Some(current) = this.session.with_untracked(|s| s.current().cloned()) else {
            return;
        };
        this.session.update(|s| s.begin_refinement());

        let config = this.config.get_untracked();
        spawn_local(async move {
            match api::refine(&config, &current.content, &instruction).await {
                Ok(content) => {
                    let artifact = current.refined_from(content, &instruction);
                    log::info!("refined \"{}\"", artifact.prompt_label);
                    this.session.update(|s| s.complete(artifact));
                }
                Err(details) => this.fail(ApiError::refinement_failed(&details)),
            }
        });
    }

    /// Bring a history entry back as the current artifact. No network call.
    pub fn select_from_history(&self, id: Uuid) {
        self.session.update(|s| {
            s.select(id);
        });
        self.close_sidebar_on_narrow();
    }

    /// Record a failure and arm the auto-dismiss timer. The epoch returned
    /// by `fail` keeps a stale timer from clearing a newer error state.
    fn fail(&self, error: ApiError) {
        let this = *self;
        log::warn!("{}: {}", error.message, error.details);

        let mut epoch = 0;
        this.session.update(|s| epoch = s.fail(error));
        spawn_local(async move {
            TimeoutFuture::new(ERROR_TOAST_MS).await;
            this.session.update(|s| s.clear_expired_error(epoch));
        });
    }
}

/// Hook to reach the controller from any component.
pub fn use_studio() -> StudioController {
    use_context::<StudioController>().expect("StudioController not provided in context")
}
