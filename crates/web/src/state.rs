//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::container::{self, Container};

use crate::config::WebConfig;

#[derive(Clone)]
enum ContainerSource {
    Fixed(Arc<Container>),
    Global,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    source: ContainerSource,
    pub config: WebConfig,
}

impl AppState {
    /// State pinned to one container (tests, embedding).
    pub fn new(container: Arc<Container>, config: WebConfig) -> Self {
        Self {
            source: ContainerSource::Fixed(container),
            config,
        }
    }

    /// State that resolves the process-wide container on every request,
    /// so a repository swap is picked up without restarting the server.
    pub fn global(config: WebConfig) -> Self {
        Self {
            source: ContainerSource::Global,
            config,
        }
    }

    pub fn container(&self) -> Arc<Container> {
        match &self.source {
            ContainerSource::Fixed(container) => container.clone(),
            ContainerSource::Global => container::global(),
        }
    }
}
