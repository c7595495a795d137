//! Server configuration from environment variables.

use reliefwatch_data::{NominatimConfig, ReliefWebConfig};

/// Default port the server binds to.
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind on all interfaces.
    pub port: u16,
    /// ReliefWeb application identifier.
    pub appname: Option<String>,
    /// Override for the ReliefWeb API base URL.
    pub reliefweb_url: Option<String>,
    /// Override for the Nominatim base URL.
    pub nominatim_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognised variables: `RELIEFWATCH_PORT`, `RELIEFWATCH_APPNAME`,
    /// `RELIEFWATCH_RELIEFWEB_URL`, `RELIEFWATCH_NOMINATIM_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("RELIEFWATCH_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            appname: std::env::var("RELIEFWATCH_APPNAME").ok(),
            reliefweb_url: std::env::var("RELIEFWATCH_RELIEFWEB_URL").ok(),
            nominatim_url: std::env::var("RELIEFWATCH_NOMINATIM_URL").ok(),
        }
    }

    /// Build the ReliefWeb client configuration.
    #[must_use]
    pub fn reliefweb(&self) -> ReliefWebConfig {
        let mut config = self
            .reliefweb_url
            .as_ref()
            .map_or_else(ReliefWebConfig::default, ReliefWebConfig::new);
        if let Some(appname) = &self.appname {
            config = config.with_appname(appname);
        }
        config
    }

    /// Build the Nominatim client configuration.
    #[must_use]
    pub fn nominatim(&self) -> NominatimConfig {
        self.nominatim_url
            .as_ref()
            .map_or_else(NominatimConfig::default, NominatimConfig::new)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ServerConfig;

    fn bare_config() -> ServerConfig {
        ServerConfig {
            port: 5000,
            appname: None,
            reliefweb_url: None,
            nominatim_url: None,
        }
    }

    #[rstest]
    fn defaults_apply_without_overrides() {
        let config = bare_config();
        assert_eq!(config.reliefweb().base_url, "https://api.reliefweb.int");
        assert_eq!(
            config.nominatim().base_url,
            "https://nominatim.openstreetmap.org"
        );
    }

    #[rstest]
    fn overrides_flow_into_client_configs() {
        let mut config = bare_config();
        config.appname = Some("my-app".to_owned());
        config.reliefweb_url = Some("http://api.example.com".to_owned());
        config.nominatim_url = Some("http://geo.example.com".to_owned());

        let reliefweb = config.reliefweb();
        assert_eq!(reliefweb.base_url, "http://api.example.com");
        assert_eq!(reliefweb.appname, "my-app");
        assert_eq!(config.nominatim().base_url, "http://geo.example.com");
    }
}
