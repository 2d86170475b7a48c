use crate::Joback::joback_api::Integrator;
use crate::settings::ServerSettings;
use std::sync::Arc;

/// state shared by all handlers; read-only after startup
#[derive(Debug, Clone)]
pub struct AppState {
    pub integrator: Integrator,
    pub default_temperature: f64,
}

impl AppState {
    pub fn new(integrator: Integrator, default_temperature: f64) -> Self {
        Self {
            integrator,
            default_temperature,
        }
    }

    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self::new(settings.integration.clone(), settings.default_temperature)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&ServerSettings::default())
    }
}

pub type SharedState = Arc<AppState>;
