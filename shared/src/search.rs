use serde::{Deserialize, Serialize};

use crate::models::{FlightSearchQuery, Itinerary};

/// Highest total passenger count the upstream API accepts per search.
pub const MAX_PASSENGERS: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    OneWay,
    RoundTrip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for PassengerCounts {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerKind {
    Adults,
    Children,
    Infants,
}

impl PassengerCounts {
    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }

    /// Apply one +/- stepper click. Returns `None` when the change would
    /// break a rule: at least one adult, no more infants than adults (every
    /// infant needs a lap), and at most MAX_PASSENGERS seats total.
    pub fn try_adjust(&self, kind: PassengerKind, increment: bool) -> Option<Self> {
        let mut next = *self;
        let count = match kind {
            PassengerKind::Adults => &mut next.adults,
            PassengerKind::Children => &mut next.children,
            PassengerKind::Infants => &mut next.infants,
        };
        if increment {
            *count += 1;
        } else {
            *count = count.checked_sub(1)?;
        }
        if next.adults == 0 || next.infants > next.adults || next.total() > MAX_PASSENGERS {
            return None;
        }
        Some(next)
    }
}

/// The two-stage outbound/return selection workflow.
///
/// One-way searches stay in `OutboundResults`; their table never shows a
/// selection action. A failed search leaves the stage where it was.
#[derive(Debug, Clone, PartialEq)]
pub enum TripStage {
    Idle,
    OutboundResults {
        itineraries: Vec<Itinerary>,
    },
    /// An outbound flight is chosen and the return-leg search is in flight.
    AwaitingReturn {
        outbound: Itinerary,
    },
    ReturnResults {
        outbound: Itinerary,
        itineraries: Vec<Itinerary>,
    },
}

impl TripStage {
    /// A completed primary search replaces whatever was on screen.
    pub fn with_outbound_results(itineraries: Vec<Itinerary>) -> Self {
        TripStage::OutboundResults { itineraries }
    }

    /// The user picked an outbound flight from the current results.
    pub fn select_outbound(&self, outbound: Itinerary) -> Option<Self> {
        match self {
            TripStage::OutboundResults { .. } => Some(TripStage::AwaitingReturn { outbound }),
            _ => None,
        }
    }

    /// The return-leg search completed.
    pub fn with_return_results(&self, itineraries: Vec<Itinerary>) -> Option<Self> {
        match self {
            TripStage::AwaitingReturn { outbound } => Some(TripStage::ReturnResults {
                outbound: outbound.clone(),
                itineraries,
            }),
            _ => None,
        }
    }

    pub fn outbound(&self) -> Option<&Itinerary> {
        match self {
            TripStage::AwaitingReturn { outbound }
            | TripStage::ReturnResults { outbound, .. } => Some(outbound),
            _ => None,
        }
    }
}

/// Build the return-leg search from the chosen outbound: origin and
/// destination swapped relative to its primary leg, the original return date
/// as the travel date, same cabin class and passenger counts.
///
/// The leg's own codes are preferred; the original query's fields are the
/// fallback when the API omitted them. Returns `None` without a return date.
pub fn return_query(original: &FlightSearchQuery, outbound: &Itinerary) -> Option<FlightSearchQuery> {
    let date = original.return_date.clone()?;
    let leg = outbound.primary_leg();

    let origin_sky_id = leg
        .and_then(|l| l.destination.display_code.clone())
        .unwrap_or_else(|| original.destination_sky_id.clone());
    let origin_entity_id = leg
        .and_then(|l| l.destination.entity_id.clone())
        .unwrap_or_else(|| original.destination_entity_id.clone());
    let destination_sky_id = leg
        .and_then(|l| l.origin.display_code.clone())
        .unwrap_or_else(|| original.origin_sky_id.clone());
    let destination_entity_id = leg
        .and_then(|l| l.origin.entity_id.clone())
        .unwrap_or_else(|| original.origin_entity_id.clone());

    Some(FlightSearchQuery {
        origin_sky_id,
        destination_sky_id,
        origin_entity_id,
        destination_entity_id,
        date,
        return_date: None,
        cabin_class: original.cabin_class,
        adults: original.adults,
        children: original.children,
        infants: original.infants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CabinClass, Leg, LegPlace, Price};

    fn itinerary(id: &str) -> Itinerary {
        Itinerary {
            id: id.to_string(),
            price: Price::default(),
            legs: vec![Leg {
                origin: LegPlace {
                    name: "New York Newark".to_string(),
                    display_code: Some("EWR".to_string()),
                    entity_id: Some("95565059".to_string()),
                },
                destination: LegPlace {
                    name: "London Heathrow".to_string(),
                    display_code: Some("LHR".to_string()),
                    entity_id: Some("95565050".to_string()),
                },
                ..Leg::default()
            }],
        }
    }

    fn search_query() -> FlightSearchQuery {
        FlightSearchQuery {
            origin_sky_id: "EWR".to_string(),
            destination_sky_id: "LHR".to_string(),
            origin_entity_id: "95565059".to_string(),
            destination_entity_id: "95565050".to_string(),
            date: "2024-02-20".to_string(),
            return_date: Some("2024-02-27".to_string()),
            cabin_class: CabinClass::Business,
            adults: 2,
            children: 1,
            infants: 0,
        }
    }

    #[test]
    fn test_workflow_advances_through_selection() {
        let outbounds = vec![itinerary("f1"), itinerary("f2"), itinerary("f3")];
        let stage = TripStage::with_outbound_results(outbounds);

        let stage = stage.select_outbound(itinerary("f2")).unwrap();
        assert_eq!(stage.outbound().unwrap().id, "f2");

        let stage = stage
            .with_return_results(vec![itinerary("r1"), itinerary("r2")])
            .unwrap();
        match &stage {
            TripStage::ReturnResults { outbound, itineraries } => {
                assert_eq!(outbound.id, "f2");
                assert_eq!(itineraries.len(), 2);
            }
            other => panic!("unexpected stage: {:?}", other),
        }
    }

    #[test]
    fn test_workflow_rejects_out_of_order_transitions() {
        assert!(TripStage::Idle.select_outbound(itinerary("f1")).is_none());
        assert!(TripStage::Idle.with_return_results(Vec::new()).is_none());

        let stage = TripStage::with_outbound_results(vec![itinerary("f1")]);
        assert!(stage.with_return_results(Vec::new()).is_none());

        let awaiting = stage.select_outbound(itinerary("f1")).unwrap();
        assert!(awaiting.select_outbound(itinerary("f1")).is_none());
    }

    #[test]
    fn test_return_query_swaps_origin_and_destination() {
        let original = search_query();
        let query = return_query(&original, &itinerary("f2")).unwrap();

        assert_eq!(query.origin_sky_id, "LHR");
        assert_eq!(query.origin_entity_id, "95565050");
        assert_eq!(query.destination_sky_id, "EWR");
        assert_eq!(query.destination_entity_id, "95565059");
        assert_eq!(query.date, "2024-02-27");
        assert_eq!(query.return_date, None);

        // Session-scoped context rides along unchanged.
        assert_eq!(query.cabin_class, CabinClass::Business);
        assert_eq!(query.adults, 2);
        assert_eq!(query.children, 1);
        assert_eq!(query.infants, 0);
    }

    #[test]
    fn test_return_query_falls_back_to_original_fields() {
        let original = search_query();
        let mut bare = itinerary("f1");
        bare.legs[0].origin.display_code = None;
        bare.legs[0].origin.entity_id = None;
        bare.legs[0].destination.display_code = None;
        bare.legs[0].destination.entity_id = None;

        let query = return_query(&original, &bare).unwrap();
        assert_eq!(query.origin_sky_id, "LHR");
        assert_eq!(query.destination_sky_id, "EWR");
    }

    #[test]
    fn test_return_query_requires_return_date() {
        let mut original = search_query();
        original.return_date = None;
        assert!(return_query(&original, &itinerary("f1")).is_none());
    }

    #[test]
    fn test_passenger_rules() {
        let counts = PassengerCounts::default();

        // At least one adult.
        assert!(counts.try_adjust(PassengerKind::Adults, false).is_none());
        // No negative counts.
        assert!(counts.try_adjust(PassengerKind::Infants, false).is_none());

        // Infants may not exceed adults.
        assert!(counts.try_adjust(PassengerKind::Infants, true).is_some());
        let one_infant = counts.try_adjust(PassengerKind::Infants, true).unwrap();
        assert!(one_infant.try_adjust(PassengerKind::Infants, true).is_none());

        // Nine seats total.
        let mut full = PassengerCounts::default();
        for _ in 0..8 {
            full = full.try_adjust(PassengerKind::Children, true).unwrap();
        }
        assert_eq!(full.total(), MAX_PASSENGERS);
        assert!(full.try_adjust(PassengerKind::Children, true).is_none());
        assert!(full.try_adjust(PassengerKind::Adults, true).is_none());
    }
}
