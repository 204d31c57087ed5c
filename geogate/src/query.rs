//! Request validation for the three proxy endpoints.
//!
//! Raw query parameters are checked here, before any outbound call is made,
//! and turned into typed values for the provider clients. An absent
//! parameter and an empty one are treated alike. The `Display` messages on
//! [`ValidationError`] are part of the endpoint contract and are asserted
//! verbatim by the integration tests.

use std::convert::TryFrom;
use std::fmt;

use thiserror::Error;

/// A query parameter failed validation. Always rendered as HTTP 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing 'bounding_box' parameter")]
    MissingBoundingBox,

    #[error("Missing 'source' or 'destination' parameter")]
    MissingRouteEndpoints,

    #[error("Vehicle type parameter is missing")]
    MissingVehicleType,

    #[error("Invalid vehicle type. Must be one of: [car, truck, bicycle, pedestrian]")]
    InvalidVehicleType,

    #[error("Missing 'lat' or 'lon' parameter")]
    MissingCoordinates,

    #[error("Invalid 'lat' or 'lon' value. Must be numbers.")]
    InvalidCoordinates,
}

/// Travel modes accepted by the routing endpoint.
///
/// The set is fixed by the routing provider; anything else is rejected
/// before the outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Car,
    Truck,
    Bicycle,
    Pedestrian,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Truck => "truck",
            VehicleType::Bicycle => "bicycle",
            VehicleType::Pedestrian => "pedestrian",
        }
    }

    pub const fn all() -> &'static [VehicleType] {
        &[
            VehicleType::Car,
            VehicleType::Truck,
            VehicleType::Bicycle,
            VehicleType::Pedestrian,
        ]
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for VehicleType {
    type Error = ValidationError;

    /// Matching is exact; the providers expect lowercase mode names.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "car" => Ok(VehicleType::Car),
            "truck" => Ok(VehicleType::Truck),
            "bicycle" => Ok(VehicleType::Bicycle),
            "pedestrian" => Ok(VehicleType::Pedestrian),
            _ => Err(ValidationError::InvalidVehicleType),
        }
    }
}

/// Validated parameters for `GET /traffic-incidents`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficQuery {
    /// Region of interest as `southLat,westLon,northLat,eastLon`.
    ///
    /// The provider validates coordinate syntax itself; the gateway only
    /// requires the parameter to be present.
    pub bounding_box: String,
}

impl TrafficQuery {
    pub fn parse(bounding_box: Option<&str>) -> Result<Self, ValidationError> {
        let bounding_box =
            non_empty(bounding_box).ok_or(ValidationError::MissingBoundingBox)?;

        Ok(Self {
            bounding_box: bounding_box.to_owned(),
        })
    }
}

/// Validated parameters for `GET /route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    /// Start coordinate as `lat,lon` (not numerically validated).
    pub source: String,
    /// End coordinate as `lat,lon` (not numerically validated).
    pub destination: String,
    pub vehicle_type: VehicleType,
}

impl RouteQuery {
    /// Order matters: source/destination presence is checked before the
    /// vehicle type, and a missing vehicle type before an unknown one. The
    /// first failure wins.
    pub fn parse(
        source: Option<&str>,
        destination: Option<&str>,
        vehicle_type: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let (Some(source), Some(destination)) = (non_empty(source), non_empty(destination))
        else {
            return Err(ValidationError::MissingRouteEndpoints);
        };

        let vehicle_type =
            non_empty(vehicle_type).ok_or(ValidationError::MissingVehicleType)?;
        let vehicle_type = VehicleType::try_from(vehicle_type)?;

        Ok(Self {
            source: source.to_owned(),
            destination: destination.to_owned(),
            vehicle_type,
        })
    }
}

/// Validated parameters for `GET /air-quality`.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityQuery {
    pub lat: f64,
    pub lon: f64,
}

impl AirQualityQuery {
    /// Both coordinates must be present and parse as floats. A non-numeric
    /// value is a distinct failure from a missing one.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self, ValidationError> {
        let (Some(lat), Some(lon)) = (non_empty(lat), non_empty(lon)) else {
            return Err(ValidationError::MissingCoordinates);
        };

        let lat: f64 = lat.parse().map_err(|_| ValidationError::InvalidCoordinates)?;
        let lon: f64 = lon.parse().map_err(|_| ValidationError::InvalidCoordinates)?;

        Ok(Self { lat, lon })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_type_roundtrip() {
        for vehicle in VehicleType::all() {
            let parsed = VehicleType::try_from(vehicle.as_str()).expect("roundtrip");
            assert_eq!(*vehicle, parsed);
        }
    }

    #[test]
    fn vehicle_type_rejects_unknown_and_uppercase() {
        assert_eq!(
            VehicleType::try_from("scooter"),
            Err(ValidationError::InvalidVehicleType)
        );
        assert_eq!(
            VehicleType::try_from("Car"),
            Err(ValidationError::InvalidVehicleType)
        );
    }

    #[test]
    fn invalid_vehicle_message_lists_every_mode() {
        let message = ValidationError::InvalidVehicleType.to_string();
        for vehicle in VehicleType::all() {
            assert!(message.contains(vehicle.as_str()), "missing {vehicle}");
        }
    }

    #[test]
    fn traffic_requires_bounding_box() {
        assert_eq!(
            TrafficQuery::parse(None),
            Err(ValidationError::MissingBoundingBox)
        );
        assert_eq!(
            TrafficQuery::parse(Some("")),
            Err(ValidationError::MissingBoundingBox)
        );

        let query = TrafficQuery::parse(Some("51.0,3.0,52.0,4.0")).unwrap();
        assert_eq!(query.bounding_box, "51.0,3.0,52.0,4.0");
    }

    #[test]
    fn traffic_does_not_validate_coordinate_syntax() {
        // Pass-through by contract: the provider rejects bad boxes itself.
        assert!(TrafficQuery::parse(Some("not-a-box")).is_ok());
    }

    #[test]
    fn route_requires_both_endpoints() {
        assert_eq!(
            RouteQuery::parse(None, Some("2,2"), Some("car")),
            Err(ValidationError::MissingRouteEndpoints)
        );
        assert_eq!(
            RouteQuery::parse(Some("1,1"), None, Some("car")),
            Err(ValidationError::MissingRouteEndpoints)
        );
        assert_eq!(
            RouteQuery::parse(Some(""), Some("2,2"), Some("car")),
            Err(ValidationError::MissingRouteEndpoints)
        );
    }

    #[test]
    fn route_endpoint_check_wins_over_vehicle_check() {
        // Both source and vehicle_type are bad; the endpoint failure is
        // reported first.
        assert_eq!(
            RouteQuery::parse(None, Some("2,2"), Some("scooter")),
            Err(ValidationError::MissingRouteEndpoints)
        );
    }

    #[test]
    fn route_distinguishes_missing_from_invalid_vehicle() {
        assert_eq!(
            RouteQuery::parse(Some("1,1"), Some("2,2"), None),
            Err(ValidationError::MissingVehicleType)
        );
        assert_eq!(
            RouteQuery::parse(Some("1,1"), Some("2,2"), Some("")),
            Err(ValidationError::MissingVehicleType)
        );
        assert_eq!(
            RouteQuery::parse(Some("1,1"), Some("2,2"), Some("scooter")),
            Err(ValidationError::InvalidVehicleType)
        );
    }

    #[test]
    fn route_accepts_valid_parameters() {
        let query = RouteQuery::parse(Some("1,1"), Some("2,2"), Some("bicycle")).unwrap();
        assert_eq!(query.source, "1,1");
        assert_eq!(query.destination, "2,2");
        assert_eq!(query.vehicle_type, VehicleType::Bicycle);
    }

    #[test]
    fn air_quality_requires_both_coordinates() {
        assert_eq!(
            AirQualityQuery::parse(None, Some("77.5")),
            Err(ValidationError::MissingCoordinates)
        );
        assert_eq!(
            AirQualityQuery::parse(Some("12.5"), None),
            Err(ValidationError::MissingCoordinates)
        );
        assert_eq!(
            AirQualityQuery::parse(Some(""), Some("77.5")),
            Err(ValidationError::MissingCoordinates)
        );
    }

    #[test]
    fn air_quality_rejects_non_numeric_values() {
        assert_eq!(
            AirQualityQuery::parse(Some("abc"), Some("12.0")),
            Err(ValidationError::InvalidCoordinates)
        );
        assert_eq!(
            AirQualityQuery::parse(Some("12.0"), Some("east")),
            Err(ValidationError::InvalidCoordinates)
        );
    }

    #[test]
    fn air_quality_accepts_textual_numeric_forms() {
        let query = AirQualityQuery::parse(Some("12.5"), Some("77.5")).unwrap();
        assert_eq!(query.lat, 12.5);
        assert_eq!(query.lon, 77.5);

        // Scientific notation and negatives are valid float syntax.
        assert!(AirQualityQuery::parse(Some("1e1"), Some("-0.5")).is_ok());
    }
}
