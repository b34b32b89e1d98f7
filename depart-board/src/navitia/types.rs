//! Navitia API response DTOs.
//!
//! These types map directly to the JSON returned by the departures
//! endpoint. Only the fields the board consumes are declared; serde skips
//! everything else in the response.

use serde::Deserialize;

/// Response from `stop_areas/{id}/departures`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    /// Upcoming departures, in the order the API scheduled them.
    pub departures: Vec<DepartureItem>,
}

/// One departure entry in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureItem {
    /// Passenger-facing labels for the service.
    pub display_informations: DisplayInformations,

    /// Timing information for the stop.
    pub stop_date_time: StopDateTime,
}

/// Passenger-facing display labels.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayInformations {
    /// Destination/direction label.
    pub direction: String,

    /// Short train identifier.
    pub trip_short_name: String,

    /// Physical mode (vehicle type).
    pub physical_mode: String,

    /// Commercial mode (marketed brand).
    pub commercial_mode: String,
}

/// Timing block for the stop.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDateTime {
    /// Compound timestamp, `YYYYMMDDTHHMMSS` (no timezone offset).
    pub departure_date_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_departures_response() {
        let json = r#"{
            "departures": [
                {
                    "display_informations": {
                        "direction": "Marseille St-Charles (Marseille)",
                        "trip_short_name": "6607",
                        "physical_mode": "Train grande vitesse",
                        "commercial_mode": "TGV INOUI"
                    },
                    "stop_date_time": {
                        "departure_date_time": "20250119T143000"
                    }
                }
            ]
        }"#;

        let response: DeparturesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.departures.len(), 1);

        let item = &response.departures[0];
        assert_eq!(
            item.display_informations.direction,
            "Marseille St-Charles (Marseille)"
        );
        assert_eq!(item.display_informations.trip_short_name, "6607");
        assert_eq!(
            item.display_informations.physical_mode,
            "Train grande vitesse"
        );
        assert_eq!(item.display_informations.commercial_mode, "TGV INOUI");
        assert_eq!(item.stop_date_time.departure_date_time, "20250119T143000");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{
            "departures": [
                {
                    "display_informations": {
                        "direction": "Lyon Part-Dieu",
                        "trip_short_name": "5312",
                        "physical_mode": "Train grande vitesse",
                        "commercial_mode": "OUIGO",
                        "network": "SNCF",
                        "color": "FFFFFF"
                    },
                    "stop_date_time": {
                        "departure_date_time": "20250119T091500",
                        "arrival_date_time": "20250119T091000",
                        "data_freshness": "base_schedule"
                    },
                    "route": {"id": "route:SNCF:1"}
                }
            ],
            "pagination": {"items_per_page": 10}
        }"#;

        let response: DeparturesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.departures.len(), 1);
        assert_eq!(
            response.departures[0].display_informations.direction,
            "Lyon Part-Dieu"
        );
    }

    #[test]
    fn missing_field_is_an_error() {
        let json = r#"{
            "departures": [
                {
                    "display_informations": {
                        "direction": "Lyon Part-Dieu",
                        "trip_short_name": "5312",
                        "physical_mode": "Train grande vitesse"
                    },
                    "stop_date_time": {
                        "departure_date_time": "20250119T091500"
                    }
                }
            ]
        }"#;

        assert!(serde_json::from_str::<DeparturesResponse>(json).is_err());
    }
}
