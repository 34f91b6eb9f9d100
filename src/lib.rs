pub mod config;
pub mod http;
pub mod lookup;
pub mod report;

pub use config::{Config, Endpoints};
pub use http::{HttpClient, HttpResponse, ReqwestClient, TransportError};
pub use lookup::{Coordinates, FlyoverFinder, IpAddress, LookupError, PassWindow};
