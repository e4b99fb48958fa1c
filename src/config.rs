use anyhow::{Context, Result};
use std::env;

/// Path of the env file loaded at startup
pub const ENV_FILE: &str = "config/.env";

/// Process-wide settings, built once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub mongo_url: String,
}

impl Settings {
    /// Build settings from already-populated environment variables.
    /// `mongo_url` is required; there is no default.
    pub fn from_env() -> Result<Self> {
        // The env file uses the lowercase key, shells usually the uppercase one
        let mongo_url = env::var("MONGO_URL")
            .or_else(|_| env::var("mongo_url"))
            .context("MONGO_URL must be set")?;

        Ok(Self { mongo_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env var mutations don't race across test threads
    #[test]
    fn test_settings_from_env() {
        env::remove_var("MONGO_URL");
        env::remove_var("mongo_url");

        let missing = Settings::from_env();
        assert!(missing.is_err());
        assert!(missing.unwrap_err().to_string().contains("MONGO_URL"));

        env::set_var("MONGO_URL", "mongodb://localhost:27017");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.mongo_url, "mongodb://localhost:27017");

        env::remove_var("MONGO_URL");

        env::set_var("mongo_url", "mongodb://localhost:27017/users");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.mongo_url, "mongodb://localhost:27017/users");

        env::remove_var("mongo_url");
    }
}
