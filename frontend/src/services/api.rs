use gloo::net::http::Request;
use shared::{
    AirportSearchResponse, ApiError, BookingOffer, FlightDetailsQuery, FlightDetailsResponse,
    FlightSearchQuery, FlightSearchResponse,
};

/// API client for the flight-search proxy endpoints
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Run a primary or return-leg flight search
    pub async fn search_flights(
        &self,
        query: &FlightSearchQuery,
    ) -> Result<FlightSearchResponse, String> {
        let url = format!("{}/api/flights", self.base_url);

        match Request::post(&url)
            .json(query)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<FlightSearchResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse flight results: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch booking-agent offers for one itinerary
    pub async fn fetch_booking_offers(
        &self,
        query: &FlightDetailsQuery,
    ) -> Result<Vec<BookingOffer>, String> {
        let url = format!("{}/api/flight-details", self.base_url);

        match Request::post(&url)
            .json(query)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<FlightDetailsResponse>().await {
                        Ok(data) => Ok(shared::extract_offers(data)),
                        Err(e) => Err(format!("Failed to parse booking offers: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Free-text airport autocomplete lookup
    pub async fn search_airports(&self, query: &str) -> Result<AirportSearchResponse, String> {
        let url = format!("{}/api/airports?query={}", self.base_url, query);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<AirportSearchResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse airports: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

/// Both proxies return an `{"error": "..."}` envelope on failure; fall back
/// to the raw body text when the envelope itself is malformed.
async fn error_message(response: gloo::net::http::Response) -> String {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    match serde_json::from_str::<ApiError>(&body) {
        Ok(envelope) if !envelope.error.is_empty() => envelope.error,
        _ => body,
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
