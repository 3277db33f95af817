use std::net::Ipv4Addr;

use crate::config::{Config, SELF_ADDRESS};
use crate::error::Result;
use crate::location::LookupResult;
use crate::transport::{HttpTransport, Transport};

/// Looks addresses up against the configured endpoint.
///
/// Each lookup is one blocking GET. Nothing is cached or retried.
pub struct Client {
    config: Config,
    transport: Box<dyn Transport>,
}

impl Client {
    pub fn new() -> Result<Self> {
        Self::from_config(Config::default())
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: Config, transport: impl Transport + 'static) -> Self {
        Client {
            config,
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches details for `address`, or for the caller's own public address
    /// when `None`. The address is forwarded as is; the service decides
    /// whether it is valid.
    pub fn lookup(&self, address: Option<&str>) -> Result<LookupResult> {
        let address = address.unwrap_or(SELF_ADDRESS);
        let body = self.transport.get(&self.config.url_for(address))?;
        LookupResult::from_payload(address, &body)
    }

    pub fn lookup_ipv4(&self, ip: Ipv4Addr) -> Result<LookupResult> {
        self.lookup(Some(&ip.to_string()))
    }
}

/// One-shot lookup with the default configuration.
pub fn get_location_for(address: Option<&str>) -> Result<LookupResult> {
    Client::new()?.lookup(address)
}
