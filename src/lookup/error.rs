use std::fmt;
use thiserror::Error;

use crate::http::TransportError;
use crate::lookup::types::Coordinates;

/// Which upstream lookup an error came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    PublicIp,
    Coordinates,
    Flyovers(Coordinates),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::PublicIp => write!(f, "fetching IP"),
            Lookup::Coordinates => write!(f, "fetching coordinates"),
            Lookup::Flyovers(coords) => write!(f, "fetching for coords: {}", coords),
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Status Code {status} when {lookup}: {body}")]
    UpstreamStatus {
        status: u16,
        lookup: Lookup,
        body: String,
    },
    #[error("Server message says: {message} when fetching for IP {ip}")]
    UpstreamLogical { message: String, ip: String },
    #[error("Malformed response when {lookup}: {source}")]
    MalformedBody {
        lookup: Lookup,
        #[source]
        source: serde_json::Error,
    },
    #[error("Response missing {field} when {lookup}")]
    MissingField { lookup: Lookup, field: &'static str },
}
