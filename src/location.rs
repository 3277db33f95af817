use std::fmt;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::error::{LookupError, Result};

/// Details the service returned for one address.
///
/// Every accessor is a projection of the payload fetched at construction;
/// none of them touch the network. Missing keys, or keys holding a value of
/// an unexpected JSON type, are reported as `None`. A `None` from a typed
/// accessor therefore does not mean the key is missing from [`all`](Self::all).
#[derive(Clone, Debug, PartialEq)]
pub struct LookupResult {
    address: String,
    payload: Map<String, Value>,
}

impl LookupResult {
    /// Classifies a raw response body.
    ///
    /// Any object carrying a `status` key is treated as an error payload,
    /// even if the rest of it looks like regular data.
    pub fn from_payload(address: impl Into<String>, body: &str) -> Result<Self> {
        let address = address.into();
        let payload: Map<String, Value> = serde_json::from_str(body)?;
        debug!("{} returned {} fields", address, payload.len());

        if let Some(status) = payload.get("status") {
            let (title, message) = match payload.get("error") {
                Some(Value::Object(error)) => (text(error.get("title")), text(error.get("message"))),
                Some(Value::String(message)) => (String::new(), message.clone()),
                _ => (String::new(), String::new()),
            };
            let err = LookupError::Remote {
                status: text(Some(status)),
                title,
                message,
            };
            warn!("lookup of {} failed: {}", address, err);
            return Err(err);
        }

        Ok(LookupResult { address, payload })
    }

    /// The address that was requested, or the own-address sentinel.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn all(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn hostname(&self) -> Option<&str> {
        self.str_field("hostname")
    }

    pub fn ip(&self) -> Option<&str> {
        self.str_field("ip")
    }

    pub fn city(&self) -> Option<&str> {
        self.str_field("city")
    }

    pub fn region(&self) -> Option<&str> {
        self.str_field("region")
    }

    /// Two-letter country code.
    pub fn country(&self) -> Option<&str> {
        self.str_field("country")
    }

    /// `loc` split into `(latitude, longitude)`.
    ///
    /// `Ok(None)` only when there is no `loc`. A value that does not split
    /// into exactly two comma-separated parts is `MalformedLocation`. The
    /// parts are not checked to be numbers.
    pub fn location(&self) -> Result<Option<(&str, &str)>> {
        let loc = match self.str_field("loc") {
            Some(loc) => loc,
            None => return Ok(None),
        };
        let mut parts = loc.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lon), None) => Ok(Some((lat, lon))),
            _ => {
                debug!("loc {:?} of {} is not \"lat,lon\"", loc, self.address);
                Err(LookupError::MalformedLocation(loc.to_owned()))
            }
        }
    }

    /// `location` parsed as floating point degrees.
    pub fn coordinates(&self) -> Result<Option<(f64, f64)>> {
        let (lat, lon) = match self.location()? {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let malformed = || LookupError::MalformedLocation(format!("{},{}", lat, lon));
        let lat = lat.trim().parse().map_err(|_| malformed())?;
        let lon = lon.trim().parse().map_err(|_| malformed())?;
        Ok(Some((lat, lon)))
    }

    /// Owner of the address, usually prefixed with its AS number.
    pub fn organization(&self) -> Option<&str> {
        self.str_field("org")
    }

    pub fn postal(&self) -> Option<&str> {
        self.str_field("postal")
    }

    /// IANA timezone identifier, e.g. `America/Los_Angeles`.
    pub fn timezone(&self) -> Option<&str> {
        self.str_field("timezone")
    }

    pub fn time_zone(&self) -> Result<Option<Tz>> {
        match self.timezone() {
            Some(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| LookupError::UnknownTimezone(name.to_owned())),
            None => Ok(None),
        }
    }

    /// Current wall-clock time in the address's timezone, read at call time.
    pub fn current_time(&self) -> Result<Option<DateTime<Tz>>> {
        Ok(self.time_zone()?.map(|tz| Utc::now().with_timezone(&tz)))
    }

    /// `Some(false)` and `None` are different answers: `None` means the
    /// service did not say.
    pub fn bogon(&self) -> Option<bool> {
        self.get("bogon").and_then(Value::as_bool)
    }
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.payload).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
