use std::time::Duration;

/// Default geolocation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ipinfo.io";

/// Address path that makes the service answer for the caller's own public address.
pub const SELF_ADDRESS: &str = "json";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl Config {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Request target for `address`. The address is not validated or escaped.
    pub fn url_for(&self, address: &str) -> String {
        let endpoint = self.endpoint.strip_suffix('/').unwrap_or(&self.endpoint);
        format!("{}/{}", endpoint, address)
    }
}
