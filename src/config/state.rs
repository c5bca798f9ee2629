// Application state shared across request handlers

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;

// The only state is the environment configuration; handlers share it
// through an Arc so the router can be cloned freely.
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Loads the environment and wraps it into a shareable state
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;

        Ok(Self {
            environment: Arc::new(environment),
        })
    }
}
