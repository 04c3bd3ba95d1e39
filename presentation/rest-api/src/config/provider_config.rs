use std::time::Duration;

use anyhow::{Context, bail};

/// Which provider implementations the server is wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMode {
    /// Hosted model via the OpenAI chat completions API.
    Live,
    /// Fixed recipe table and canned ingredient list.
    Demo,
}

impl std::fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderMode::Live => write!(f, "live"),
            ProviderMode::Demo => write!(f, "demo"),
        }
    }
}

impl std::str::FromStr for ProviderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(ProviderMode::Live),
            "demo" => Ok(ProviderMode::Demo),
            _ => Err(format!("Invalid provider mode: {}", s)),
        }
    }
}

/// Configuration for OpenAI API access.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub vision_model: Option<String>,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY: API key; the config is absent when unset or blank
    /// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
    /// - OPENAI_MODEL: recipe generation model (default: "gpt-4o-mini")
    /// - OPENAI_VISION_MODEL: ingredient identification model (default: "gpt-4o-mini")
    pub fn from_env() -> Option<Self> {
        let api_key = non_blank_var("OPENAI_API_KEY")?;
        Some(Self {
            api_key,
            base_url: non_blank_var("OPENAI_BASE_URL"),
            model: non_blank_var("OPENAI_MODEL"),
            vision_model: non_blank_var("OPENAI_VISION_MODEL"),
        })
    }
}

/// Provider selection made once at startup.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub mode: ProviderMode,
    pub openai: Option<OpenAIConfig>,
    /// Overrides both demo delays when set.
    pub demo_latency: Option<Duration>,
}

impl ProviderConfig {
    /// Environment variables:
    /// - PROVIDER_MODE: "live" or "demo" (default: live when OPENAI_API_KEY is set, demo otherwise)
    /// - DEMO_LATENCY_MS: simulated demo latency in milliseconds
    ///
    /// # Errors
    /// Returns error if PROVIDER_MODE is unknown, live mode is requested
    /// without an API key, or DEMO_LATENCY_MS is not a number
    pub fn from_env() -> anyhow::Result<Self> {
        let openai = OpenAIConfig::from_env();
        let mode = resolve_mode(non_blank_var("PROVIDER_MODE").as_deref(), openai.is_some())?;

        let demo_latency = parse_latency(non_blank_var("DEMO_LATENCY_MS").as_deref())?;

        Ok(Self {
            mode,
            openai,
            demo_latency,
        })
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_latency(value: Option<&str>) -> anyhow::Result<Option<Duration>> {
    value
        .map(|ms| {
            ms.trim()
                .parse()
                .map(Duration::from_millis)
                .with_context(|| format!("DEMO_LATENCY_MS is not a valid duration: {}", ms))
        })
        .transpose()
}

fn resolve_mode(requested: Option<&str>, has_api_key: bool) -> anyhow::Result<ProviderMode> {
    let mode = match requested {
        Some(value) => value.parse::<ProviderMode>().map_err(anyhow::Error::msg)?,
        None if has_api_key => ProviderMode::Live,
        None => ProviderMode::Demo,
    };

    if mode == ProviderMode::Live && !has_api_key {
        bail!("PROVIDER_MODE=live requires OPENAI_API_KEY to be set");
    }

    Ok(mode)
}
