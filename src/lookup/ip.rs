use serde::Deserialize;

use crate::http::HttpClient;
use crate::lookup::error::{Lookup, LookupError};
use crate::lookup::types::IpAddress;

#[derive(Deserialize)]
struct IpResponse {
    ip: String,
}

/// Ask the discovery endpoint for the caller's public IP.
pub async fn fetch_my_ip<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
) -> Result<IpAddress, LookupError> {
    log::debug!("Fetching public IP from {}", url);
    let response = client.get(url).await?;

    if !response.is_success() {
        return Err(LookupError::UpstreamStatus {
            status: response.status,
            lookup: Lookup::PublicIp,
            body: response.body,
        });
    }

    let parsed: IpResponse =
        serde_json::from_str(&response.body).map_err(|source| LookupError::MalformedBody {
            lookup: Lookup::PublicIp,
            source,
        })?;

    log::debug!("Public IP is {}", parsed.ip);
    Ok(parsed.ip)
}
