use serde::Deserialize;

use crate::http::HttpClient;
use crate::lookup::error::{Lookup, LookupError};
use crate::lookup::types::Coordinates;

#[derive(Deserialize)]
struct GeoResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    ip: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

pub fn coords_url(base: &str, ip: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), ip)
}

/// Resolve an IP address to coordinates.
///
/// The geo-IP service reports failure through the `success` flag in the
/// body, so the HTTP status is not inspected here.
pub async fn fetch_coords_by_ip<C: HttpClient + ?Sized>(
    client: &C,
    base_url: &str,
    ip: &str,
) -> Result<Coordinates, LookupError> {
    let url = coords_url(base_url, ip);
    log::debug!("Fetching coordinates for {} from {}", ip, url);
    let response = client.get(&url).await?;

    let parsed: GeoResponse =
        serde_json::from_str(&response.body).map_err(|source| LookupError::MalformedBody {
            lookup: Lookup::Coordinates,
            source,
        })?;

    if !parsed.success {
        return Err(LookupError::UpstreamLogical {
            message: parsed.message.unwrap_or_default(),
            ip: parsed.ip.unwrap_or_else(|| ip.to_string()),
        });
    }

    let missing = |field| LookupError::MissingField {
        lookup: Lookup::Coordinates,
        field,
    };
    let coords = Coordinates {
        latitude: parsed.latitude.ok_or_else(|| missing("latitude"))?,
        longitude: parsed.longitude.ok_or_else(|| missing("longitude"))?,
    };

    log::debug!("{} is located at {}, {}", ip, coords.latitude, coords.longitude);
    Ok(coords)
}
