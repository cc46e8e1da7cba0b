use std::env;

/// Variables without which the process refuses to start.
const REQUIRED_VARS: &[&str] = &[
    "OPENAI_API_KEY",
    "TAVILY_API_KEY",
    "APPWRITE_ENDPOINT",
    "APPWRITE_PROJECT_ID",
    "APPWRITE_DATABASE_ID",
    "APPWRITE_COLLECTION_ID",
    "APPWRITE_API_KEY",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub tavily: TavilyConfig,
    pub appwrite: AppwriteConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct TavilyConfig {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    pub api_key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Every missing (or empty) required variable is collected so startup can
    /// report them all at once instead of failing one at a time.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|name| lookup(name).map_or(true, |value| value.trim().is_empty()))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => 3001,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173,http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Required vars are all present at this point.
        let required = |name: &str| lookup(name).unwrap_or_default();

        Ok(Self {
            server: ServerConfig {
                port,
                allowed_origins,
            },
            openai: OpenAiConfig {
                api_key: required("OPENAI_API_KEY"),
                model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            },
            tavily: TavilyConfig {
                api_key: required("TAVILY_API_KEY"),
            },
            appwrite: AppwriteConfig {
                endpoint: required("APPWRITE_ENDPOINT"),
                project_id: required("APPWRITE_PROJECT_ID"),
                database_id: required("APPWRITE_DATABASE_ID"),
                collection_id: required("APPWRITE_COLLECTION_ID"),
                api_key: required("APPWRITE_API_KEY"),
            },
        })
    }
}
