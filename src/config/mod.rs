use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

/// Environment variable holding the HubSpot private-app token. Deliberately
/// never a CLI flag so the token stays out of argv and shell history.
pub const ACCESS_TOKEN_ENV: &str = "PRIVATE_APP_ACCESS";

#[derive(Debug, Clone, Parser)]
#[command(name = "small-crm-web")]
#[command(about = "A small web front-end for HubSpot custom object records")]
pub struct AppConfig {
    #[arg(long, default_value = "127.0.0.1")]
    pub http_addr: String,

    #[arg(long, default_value = "3000")]
    pub http_port: u16,

    #[arg(long, default_value = "https://api.hubapi.com")]
    pub hubspot_base_url: String,

    /// HubSpot object type key of the custom object (練習帳號的寵物物件).
    #[arg(long, default_value = "2-55323801")]
    pub object_type: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl AppConfig {
    /// Read the bearer token from the environment. `None` when unset or
    /// empty; the app then serves empty views and skips writes.
    pub fn access_token_from_env() -> Option<String> {
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http_addr, self.http_port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hubspot_base_url", &self.hubspot_base_url)?;
        validate_non_empty_string("object_type", &self.object_type)?;
        validate_positive_number("http_port", self.http_port as usize, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            http_addr: "127.0.0.1".to_string(),
            http_port: 3000,
            hubspot_base_url: "https://api.hubapi.com".to_string(),
            object_type: "2-55323801".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = base_config();
        config.hubspot_base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_object_type_rejected() {
        let mut config = base_config();
        config.object_type = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_listen_addr_format() {
        assert_eq!(base_config().listen_addr(), "127.0.0.1:3000");
    }
}
