pub mod config;
pub mod model;
pub mod web;
pub mod zodiac;

use std::sync::Arc;

use tera::Tera;

use model::CompletionClient;

// Shared, read-only after startup
pub struct AppState {
    pub tera: Tera,
    pub client: Arc<dyn CompletionClient>,
    pub validate_output: bool,
}

impl AppState {
    pub fn new(tera: Tera, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            tera,
            client,
            validate_output: false,
        }
    }

    pub fn with_output_validation(mut self, enabled: bool) -> Self {
        self.validate_output = enabled;
        self
    }
}

/// Loads every template under `dir` with HTML autoescaping on.
pub fn load_templates(dir: &str) -> Result<Tera, tera::Error> {
    let mut tera = Tera::new(&format!("{}/**/*", dir.trim_end_matches('/')))?;
    tera.autoescape_on(vec![".html"]);
    Ok(tera)
}
