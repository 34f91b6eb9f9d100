use serde::Deserialize;

use crate::http::HttpClient;
use crate::lookup::error::{Lookup, LookupError};
use crate::lookup::types::{Coordinates, PassWindow};

#[derive(Deserialize)]
struct FlyoverResponse {
    response: Vec<PassWindow>,
}

pub fn flyover_url(base: &str, coords: &Coordinates) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}lat={}&lon={}",
        base, separator, coords.latitude, coords.longitude
    )
}

/// Fetch upcoming passes over `coords`, in the order the service returns them.
pub async fn fetch_flyover_times<C: HttpClient + ?Sized>(
    client: &C,
    base_url: &str,
    coords: &Coordinates,
) -> Result<Vec<PassWindow>, LookupError> {
    let url = flyover_url(base_url, coords);
    log::debug!("Fetching flyover times from {}", url);
    let response = client.get(&url).await?;

    if !response.is_success() {
        return Err(LookupError::UpstreamStatus {
            status: response.status,
            lookup: Lookup::Flyovers(*coords),
            body: response.body,
        });
    }

    let parsed: FlyoverResponse =
        serde_json::from_str(&response.body).map_err(|source| LookupError::MalformedBody {
            lookup: Lookup::Flyovers(*coords),
            source,
        })?;

    log::debug!("Received {} pass windows", parsed.response.len());
    Ok(parsed.response)
}
