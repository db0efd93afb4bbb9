use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Default upload size limit (1MB). Larger values also need the request
/// body limit in startup raised to match.
const DEFAULT_MAX_FILE_BYTES: usize = 1_048_576;

/// Default bound on generated documentation length, in tokens.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1500;

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl CommonConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone)]
pub struct CodedocsConfig {
    pub common: CommonConfig,
    pub openai: OpenAiConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_base: String,
    /// Model for documentation generation (e.g., gpt-4o-mini)
    pub model: String,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_bytes: usize,
}

impl CodedocsConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = CommonConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(CodedocsConfig {
            common,
            openai: OpenAiConfig {
                api_key: get_env("OPENAI_API_KEY", None, is_prod)?,
                api_base: get_env("OPENAI_API_BASE", Some("https://api.openai.com/v1"), is_prod)?,
                model: get_env("CODEDOCS_MODEL", Some("gpt-4o-mini"), is_prod)?,
                max_output_tokens: get_env(
                    "CODEDOCS_MAX_OUTPUT_TOKENS",
                    Some(&DEFAULT_MAX_OUTPUT_TOKENS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
            },
            upload: UploadConfig {
                max_file_bytes: get_env(
                    "CODEDOCS_MAX_FILE_BYTES",
                    Some(&DEFAULT_MAX_FILE_BYTES.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_FILE_BYTES),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
