//! Detailed IPv4 address information from the ipinfo.io API.
//!
//! ```no_run
//! use ipv4info::get_location_for;
//!
//! let info = get_location_for(Some("8.8.8.8"))?;
//! println!("{:?} {:?}", info.city(), info.location()?);
//! # Ok::<(), ipv4info::LookupError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod transport;

pub use client::{get_location_for, Client};
pub use config::{Config, SELF_ADDRESS};
pub use error::{LookupError, Result};
pub use location::LookupResult;
pub use transport::{HttpTransport, Transport};
