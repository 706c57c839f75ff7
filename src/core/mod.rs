//! Core-Domänentypen: Wegpunkte, Waypoint-Stores, Fahrzeuge, Marker.

pub mod geo;
pub mod map_marker;
pub mod marker_registry;
pub mod mission_store;
pub mod vehicle;
/// Missions-Wegpunkte
///
/// Nur Wegpunkte im globalen Frame mit Navigations-Kommando werden
/// auf der Karte dargestellt.
pub mod waypoint;

pub use geo::{heading_degrees, GeoParseError, GeoPoint};
pub use map_marker::{HomeMarker, MapMarker, MarkerId, VehicleIcon, VehicleMarker, WaypointMarker};
pub use marker_registry::{MarkerOp, MarkerRegistry};
pub use mission_store::{MissionStore, StoreError, StoreSignal, WaypointStore};
pub use vehicle::{Airframe, Fleet, StoreId, Vehicle, VehicleId};
pub use waypoint::{CoordinateFrame, Waypoint, WaypointId, NAV_COMMAND_LAST, NAV_WAYPOINT};
