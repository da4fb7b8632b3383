use crate::error::AppError;
use std::env;

/// Default listening port when `PORT` is unset.
const DEFAULT_PORT: u16 = 8000;

/// Default Groq model identifier.
const DEFAULT_MODEL: &str = "mixtral-8x7b";

#[derive(Debug, Clone)]
pub struct TranslateConfig {
    pub port: u16,
    pub groq: GroqSettings,
}

#[derive(Debug, Clone)]
pub struct GroqSettings {
    /// API credential. An empty key is not rejected at startup; it surfaces
    /// as a failure on the first upstream call.
    pub api_key: String,
    pub model: String,
    /// When false, the mock provider is wired in place of Groq.
    pub enabled: bool,
}

impl TranslateConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = get_env("PORT", &DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("PORT must be an integer: {}", e))
            })?;

        Ok(TranslateConfig {
            port,
            groq: GroqSettings {
                api_key: get_env("GROQ_API_KEY", ""),
                model: get_env("GROQ_MODEL", DEFAULT_MODEL),
                enabled: get_env("GROQ_ENABLED", "true") == "true",
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        env::remove_var("PORT");
        env::remove_var("GROQ_API_KEY");
        env::remove_var("GROQ_MODEL");
        env::remove_var("GROQ_ENABLED");

        let config = TranslateConfig::load().unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.groq.api_key, "");
        assert_eq!(config.groq.model, "mixtral-8x7b");
        assert!(config.groq.enabled);
    }
}
