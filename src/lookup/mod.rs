mod error;
mod flyover;
mod geo;
mod ip;
mod types;

pub use error::{Lookup, LookupError};
pub use flyover::{fetch_flyover_times, flyover_url};
pub use geo::{coords_url, fetch_coords_by_ip};
pub use ip::fetch_my_ip;
pub use types::{Coordinates, IpAddress, PassWindow};

use crate::config::Endpoints;
use crate::http::HttpClient;

/// Chains the three lookups: public IP, then coordinates, then pass windows.
///
/// Each step runs once and only after the previous one succeeded; the first
/// failure is returned as-is.
pub struct FlyoverFinder<C> {
    client: C,
    endpoints: Endpoints,
}

impl<C: HttpClient> FlyoverFinder<C> {
    pub fn new(client: C, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn my_ip(&self) -> Result<IpAddress, LookupError> {
        fetch_my_ip(&self.client, &self.endpoints.ip).await
    }

    pub async fn coords_for(&self, ip: &str) -> Result<Coordinates, LookupError> {
        fetch_coords_by_ip(&self.client, &self.endpoints.geo, ip).await
    }

    pub async fn flyovers_at(&self, coords: &Coordinates) -> Result<Vec<PassWindow>, LookupError> {
        fetch_flyover_times(&self.client, &self.endpoints.flyover, coords).await
    }

    pub async fn next_passes_for_my_location(&self) -> Result<Vec<PassWindow>, LookupError> {
        let result = self.run_chain().await;
        if let Err(e) = &result {
            log::warn!("Failed to find next passes: {}", e);
        }
        result
    }

    async fn run_chain(&self) -> Result<Vec<PassWindow>, LookupError> {
        let ip = self.my_ip().await?;
        let coords = self.coords_for(&ip).await?;
        self.flyovers_at(&coords).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::stub::StubClient;

    const IP_URL: &str = "https://ip.test/?format=json";
    const GEO_URL: &str = "http://geo.test/162.245.144.188";
    const FLYOVER_URL: &str = "https://flyover.test/json/?lat=37.3&lon=-122.1";

    fn endpoints() -> Endpoints {
        Endpoints {
            ip: IP_URL.into(),
            geo: "http://geo.test".into(),
            flyover: "https://flyover.test/json/".into(),
        }
    }

    fn healthy() -> StubClient {
        StubClient::new()
            .respond(IP_URL, 200, r#"{"ip": "162.245.144.188"}"#)
            .respond(
                GEO_URL,
                200,
                r#"{"success": true, "latitude": 37.3, "longitude": -122.1}"#,
            )
            .respond(
                FLYOVER_URL,
                200,
                r#"{"response": [{"risetime": 134564234, "duration": 600}]}"#,
            )
    }

    #[tokio::test]
    async fn chains_all_three_lookups() {
        let finder = FlyoverFinder::new(healthy(), endpoints());
        let passes = finder.next_passes_for_my_location().await.unwrap();
        assert_eq!(
            passes,
            vec![PassWindow {
                risetime: 134564234,
                duration: 600
            }]
        );
        assert_eq!(finder.client.calls(), vec![IP_URL, GEO_URL, FLYOVER_URL]);
    }

    #[tokio::test]
    async fn repeated_runs_give_identical_results() {
        let finder = FlyoverFinder::new(healthy(), endpoints());
        let first = finder.next_passes_for_my_location().await.unwrap();
        let second = finder.next_passes_for_my_location().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(finder.client.calls().len(), 6);
    }

    #[tokio::test]
    async fn ip_status_error_stops_the_chain() {
        let client = StubClient::new().respond(IP_URL, 500, "oops");
        let finder = FlyoverFinder::new(client, endpoints());
        match finder.next_passes_for_my_location().await {
            Err(LookupError::UpstreamStatus { status, body, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "oops");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(finder.client.calls(), vec![IP_URL]);
    }

    #[tokio::test]
    async fn geo_rejection_skips_flyover_lookup() {
        let client = StubClient::new()
            .respond(IP_URL, 200, r#"{"ip": "0.0.0.0"}"#)
            .respond(
                "http://geo.test/0.0.0.0",
                200,
                r#"{"success": false, "message": "invalid IP", "ip": "0.0.0.0"}"#,
            );
        let finder = FlyoverFinder::new(client, endpoints());
        match finder.next_passes_for_my_location().await {
            Err(LookupError::UpstreamLogical { message, ip }) => {
                assert_eq!(message, "invalid IP");
                assert_eq!(ip, "0.0.0.0");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(
            finder.client.calls(),
            vec![IP_URL, "http://geo.test/0.0.0.0"]
        );
    }

    #[tokio::test]
    async fn transport_failure_at_each_step_stops_the_chain() {
        let cases = [
            (StubClient::new().unreachable(IP_URL, "down"), 1),
            (
                StubClient::new()
                    .respond(IP_URL, 200, r#"{"ip": "162.245.144.188"}"#)
                    .unreachable(GEO_URL, "down"),
                2,
            ),
            (
                StubClient::new()
                    .respond(IP_URL, 200, r#"{"ip": "162.245.144.188"}"#)
                    .respond(
                        GEO_URL,
                        200,
                        r#"{"success": true, "latitude": 37.3, "longitude": -122.1}"#,
                    )
                    .unreachable(FLYOVER_URL, "down"),
                3,
            ),
        ];

        for (client, expected_calls) in cases {
            let finder = FlyoverFinder::new(client, endpoints());
            let result = finder.next_passes_for_my_location().await;
            assert!(matches!(result, Err(LookupError::Transport(_))));
            assert_eq!(finder.client.calls().len(), expected_calls);
        }
    }

    #[tokio::test]
    async fn flyover_status_error_carries_coordinates() {
        let client = StubClient::new()
            .respond(IP_URL, 200, r#"{"ip": "162.245.144.188"}"#)
            .respond(
                GEO_URL,
                200,
                r#"{"success": true, "latitude": 37.3, "longitude": -122.1}"#,
            )
            .respond(FLYOVER_URL, 404, "not found");
        let finder = FlyoverFinder::new(client, endpoints());
        match finder.next_passes_for_my_location().await {
            Err(LookupError::UpstreamStatus { status, lookup, .. }) => {
                assert_eq!(status, 404);
                assert_eq!(
                    lookup,
                    Lookup::Flyovers(Coordinates {
                        latitude: 37.3,
                        longitude: -122.1
                    })
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
