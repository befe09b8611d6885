use crate::{ConfigError, FromEnv};
use std::env::{self, VarError};

/// Cross-origin policy for browser clients.
///
/// An empty origin list means any origin is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// Parse a comma-separated origin list, skipping blank entries
    pub fn parse(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }
}

impl FromEnv for CorsConfig {
    /// Reads CORS_ALLOWED_ORIGIN; unset means any origin
    fn from_env() -> Result<Self, ConfigError> {
        match env::var("CORS_ALLOWED_ORIGIN") {
            Ok(origins) => Ok(Self::parse(&origins)),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(e @ VarError::NotUnicode(_)) => Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            }),
        }
    }
}
