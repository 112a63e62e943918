use serde::{Deserialize, Serialize};

/// One priced, bookable flight option returned by the search API.
///
/// `id` is unique within a single result list. `legs` is non-empty in
/// well-formed responses; `legs[0]` is the summary leg used for row display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// The leg used for summary display (departure/arrival, stops, carriers).
    pub fn primary_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub raw: f64,
    #[serde(default)]
    pub formatted: String,
}

/// One directional origin→destination portion of an itinerary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub origin: LegPlace,
    #[serde(default)]
    pub destination: LegPlace,
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub arrival: String,
    #[serde(default)]
    pub duration_in_minutes: u32,
    #[serde(default)]
    pub stop_count: u32,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub carriers: Carriers,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegPlace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_code: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
}

impl LegPlace {
    /// Location code used for follow-up lookups, falling back to the name
    /// when the API omitted a code.
    pub fn code(&self) -> &str {
        self.display_code.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carriers {
    #[serde(default)]
    pub marketing: Vec<Carrier>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// One single-flight-number hop within a leg.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default)]
    pub origin: SegmentPlace,
    #[serde(default)]
    pub destination: SegmentPlace,
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub arrival: String,
    #[serde(default)]
    pub duration_in_minutes: u32,
    #[serde(default)]
    pub flight_number: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPlace {
    #[serde(default)]
    pub parent: ParentPlace,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentPlace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// A live booking-agent offer for a specific itinerary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOffer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl Default for CabinClass {
    fn default() -> Self {
        CabinClass::Economy
    }
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "premium_economy" => CabinClass::PremiumEconomy,
            "business" => CabinClass::Business,
            "first" => CabinClass::First,
            _ => CabinClass::Economy,
        }
    }
}

/// Request for the primary flight search proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchQuery {
    pub origin_sky_id: String,
    pub destination_sky_id: String,
    pub origin_entity_id: String,
    pub destination_entity_id: String,
    /// Departure date, YYYY-MM-DD.
    pub date: String,
    /// Return date, YYYY-MM-DD. Present only for round trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default)]
    pub cabin_class: CabinClass,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

fn default_adults() -> u32 {
    1
}

/// Response envelope of the primary search proxy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    #[serde(default)]
    pub data: SearchData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub context: SearchContext,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    #[serde(default)]
    pub session_id: String,
}

/// Per-leg projection sent with a booking-offer lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegReference {
    pub origin: String,
    pub destination: String,
    /// Departure date truncated to the calendar day, YYYY-MM-DD.
    pub date: String,
}

/// Request for the flight-details proxy (booking-agent offers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetailsQuery {
    pub itinerary_id: String,
    pub legs: Vec<LegReference>,
    pub session_id: String,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

/// Response envelope of the flight-details proxy. Every nesting level
/// defaults so a malformed response degrades to an empty agent list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetailsResponse {
    #[serde(default)]
    pub data: DetailsData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsData {
    #[serde(default)]
    pub itinerary: DetailsItinerary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsItinerary {
    #[serde(default)]
    pub pricing_options: Vec<PricingOption>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOption {
    #[serde(default)]
    pub agents: Vec<BookingOffer>,
}

/// Raw response of the airport autocomplete proxy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportSearchResponse {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub data: Vec<AirportSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportSuggestion {
    #[serde(default)]
    pub presentation: Option<SuggestionPresentation>,
    #[serde(default)]
    pub navigation: Option<SuggestionNavigation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPresentation {
    #[serde(default)]
    pub suggestion_title: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionNavigation {
    #[serde(default)]
    pub relevant_flight_params: Option<FlightParams>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightParams {
    #[serde(default)]
    pub sky_id: String,
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub flight_place_type: String,
}

/// One usable autocomplete entry, flattened from the raw suggestion shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportOption {
    pub label: String,
    pub sky_id: String,
    pub entity_id: String,
    pub kind: String,
}

impl AirportSearchResponse {
    /// Flatten raw suggestions into selectable options, dropping entries
    /// that are missing a title or flight params.
    pub fn options(&self) -> Vec<AirportOption> {
        self.data
            .iter()
            .filter_map(|item| {
                let title = item.presentation.as_ref()?.suggestion_title.clone();
                let params = item.navigation.as_ref()?.relevant_flight_params.as_ref()?;
                if title.is_empty() || params.sky_id.is_empty() {
                    return None;
                }
                Some(AirportOption {
                    label: title,
                    sky_id: params.sky_id.clone(),
                    entity_id: params.entity_id.clone(),
                    kind: params.flight_place_type.clone(),
                })
            })
            .collect()
    }
}

/// Error envelope returned by either proxy on failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_deserializes_camel_case() {
        let body = r#"{
            "data": {
                "itineraries": [{
                    "id": "13542-2402201235--30598-0-12712-2402201550",
                    "price": { "raw": 419.18, "formatted": "$420" },
                    "legs": [{
                        "origin": { "name": "New York Newark", "displayCode": "EWR", "entityId": "95565059" },
                        "destination": { "name": "London Heathrow", "displayCode": "LHR" },
                        "departure": "2024-02-20T12:35:00",
                        "arrival": "2024-02-20T15:50:00",
                        "durationInMinutes": 435,
                        "stopCount": 0,
                        "segments": [{
                            "origin": { "parent": { "name": "New York", "country": "United States" } },
                            "destination": { "parent": { "name": "London", "country": "United Kingdom" } },
                            "departure": "2024-02-20T12:35:00",
                            "arrival": "2024-02-20T15:50:00",
                            "durationInMinutes": 435,
                            "flightNumber": "1907"
                        }],
                        "carriers": { "marketing": [{ "name": "JetBlue", "logoUrl": "https://example.com/b6.png" }] }
                    }]
                }],
                "context": { "sessionId": "session-abc" }
            }
        }"#;

        let response: FlightSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.context.session_id, "session-abc");
        assert_eq!(response.data.itineraries.len(), 1);

        let itinerary = &response.data.itineraries[0];
        assert_eq!(itinerary.price.raw, 419.18);
        let leg = itinerary.primary_leg().unwrap();
        assert_eq!(leg.origin.code(), "EWR");
        assert_eq!(leg.duration_in_minutes, 435);
        assert_eq!(leg.stop_count, 0);
        assert_eq!(leg.segments[0].flight_number, "1907");
        assert_eq!(leg.carriers.marketing[0].name, "JetBlue");
    }

    #[test]
    fn test_malformed_search_response_defaults_empty() {
        let response: FlightSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.itineraries.is_empty());
        assert_eq!(response.data.context.session_id, "");

        // A data object without itineraries must not fail either.
        let response: FlightSearchResponse =
            serde_json::from_str(r#"{"data": {"context": {}}}"#).unwrap();
        assert!(response.data.itineraries.is_empty());
    }

    #[test]
    fn test_leg_place_code_falls_back_to_name() {
        let place = LegPlace {
            name: "Paris Charles de Gaulle".to_string(),
            display_code: None,
            entity_id: None,
        };
        assert_eq!(place.code(), "Paris Charles de Gaulle");

        let place = LegPlace {
            name: "Paris Charles de Gaulle".to_string(),
            display_code: Some("CDG".to_string()),
            entity_id: None,
        };
        assert_eq!(place.code(), "CDG");
    }

    #[test]
    fn test_cabin_class_wire_format() {
        assert_eq!(
            serde_json::to_string(&CabinClass::PremiumEconomy).unwrap(),
            "\"premium_economy\""
        );
        assert_eq!(
            CabinClass::from_str_or_default("business"),
            CabinClass::Business
        );
        assert_eq!(
            CabinClass::from_str_or_default("unknown"),
            CabinClass::Economy
        );
    }

    #[test]
    fn test_search_query_omits_absent_return_date() {
        let query = FlightSearchQuery {
            origin_sky_id: "EWR".to_string(),
            destination_sky_id: "LHR".to_string(),
            origin_entity_id: "95565059".to_string(),
            destination_entity_id: "95565050".to_string(),
            date: "2024-02-20".to_string(),
            return_date: None,
            cabin_class: CabinClass::Economy,
            adults: 1,
            children: 0,
            infants: 0,
        };
        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains("\"originSkyId\":\"EWR\""));
        assert!(!json.contains("returnDate"));
    }

    #[test]
    fn test_airport_options_drop_incomplete_suggestions() {
        let body = r#"{
            "sessionId": "session-xyz",
            "data": [
                {
                    "presentation": { "suggestionTitle": "London (Any)" },
                    "navigation": { "relevantFlightParams": { "skyId": "LOND", "entityId": "27544008", "flightPlaceType": "CITY" } }
                },
                { "presentation": { "suggestionTitle": "No params" } },
                {
                    "navigation": { "relevantFlightParams": { "skyId": "ORPH", "entityId": "1", "flightPlaceType": "AIRPORT" } }
                }
            ]
        }"#;

        let response: AirportSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.session_id, "session-xyz");
        let options = response.options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "London (Any)");
        assert_eq!(options[0].sky_id, "LOND");
        assert_eq!(options[0].kind, "CITY");
    }

    #[test]
    fn test_details_response_missing_levels_default() {
        let response: FlightDetailsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.itinerary.pricing_options.is_empty());

        let response: FlightDetailsResponse =
            serde_json::from_str(r#"{"data": {"itinerary": {}}}"#).unwrap();
        assert!(response.data.itinerary.pricing_options.is_empty());
    }
}
