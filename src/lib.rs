//! GCS Waypoint Map Library.
//! Kartenkomponente einer Bodenstation: Fahrzeugpositionen, Home-Position und
//! bidirektionaler Abgleich zwischen Missionsliste und Wegpunkt-Markern.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{MapCommand, MapController, MapIntent, MapState};
pub use core::{
    Airframe, CoordinateFrame, GeoPoint, MapMarker, MarkerId, MarkerOp, MarkerRegistry,
    StoreSignal, VehicleId, Waypoint, WaypointId, WaypointStore,
};
pub use shared::{MapOptions, MapScene};
