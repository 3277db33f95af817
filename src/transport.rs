use log::debug;
use reqwest::blocking;

use crate::config::Config;
use crate::error::Result;

/// Performs the single GET a lookup needs and hands back the raw body.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<String>;
}

/// `Transport` backed by a blocking reqwest client.
///
/// The HTTP status code is not checked: the service reports failures in the
/// JSON body, which is classified by the caller.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = blocking::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        Ok(HttpTransport {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        debug!("{} answered with HTTP {}", url, response.status());
        Ok(response.text()?)
    }
}
