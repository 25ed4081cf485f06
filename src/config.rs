use std::env;

pub const DEFAULT_API_VERSION: &str = "2024-02-01";

/// Connection settings for the Azure OpenAI chat-completion endpoint.
///
/// Every value except the API version may be absent; the client reports the
/// gap on its first call instead of refusing to start.
#[derive(Debug, Clone, Default)]
pub struct AzureOpenAiConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub deployment: Option<String>,
    pub api_version: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub template_dir: String,
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub azure: AzureOpenAiConfig,
    pub server: ServerConfig,
    pub validate_output: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values behave like unset ones.
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let azure = AzureOpenAiConfig {
            endpoint: get("AZUREOPENAIENDPOINT"),
            api_key: get("AZUREOPENAIKEY"),
            deployment: get("AZUREOPENAIDEPLOYMENTNAME"),
            api_version: get("AZUREOPENAIAPIVERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        };

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|v| v.parse().ok()).unwrap_or(8080),
            template_dir: get("TEMPLATE_DIR").unwrap_or_else(|| "templates".to_string()),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        };

        let validate_output = get("HOROSCOPE_VALIDATE_OUTPUT")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            azure,
            server,
            validate_output,
        }
    }

    /// Names of the Azure settings that are still unset.
    pub fn missing_azure_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.azure.endpoint.is_none() {
            missing.push("AZUREOPENAIENDPOINT");
        }
        if self.azure.api_key.is_none() {
            missing.push("AZUREOPENAIKEY");
        }
        if self.azure.deployment.is_none() {
            missing.push("AZUREOPENAIDEPLOYMENTNAME");
        }
        missing
    }
}
