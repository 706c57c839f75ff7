//! Marker auf der Kartenoberfläche: Wegpunkte, Fahrzeuge und Home-Position.

use super::{Airframe, GeoPoint, VehicleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ID eines Markers in der [`MarkerRegistry`](super::MarkerRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// Symbolform eines Fahrzeug-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VehicleIcon {
    /// Neutraler Pfeil
    #[default]
    Arrow,
    /// Flugzeug-Silhouette
    Plane,
    /// Multicopter-Kreuz
    Multirotor,
    /// Hubschrauber
    Helicopter,
    /// Bodenfahrzeug
    Rover,
    /// Boot
    Boat,
}

impl VehicleIcon {
    /// Leitet das Symbol aus der Bauform ab.
    pub fn for_airframe(airframe: Airframe) -> Self {
        match airframe {
            Airframe::Generic => VehicleIcon::Arrow,
            Airframe::FixedWing => VehicleIcon::Plane,
            Airframe::Quadrotor | Airframe::Hexarotor | Airframe::Octorotor => {
                VehicleIcon::Multirotor
            }
            Airframe::Helicopter => VehicleIcon::Helicopter,
            Airframe::GroundRover => VehicleIcon::Rover,
            Airframe::SurfaceBoat => VehicleIcon::Boat,
        }
    }
}

/// Marker eines Missions-Wegpunkts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaypointMarker {
    /// Position
    pub coord: GeoPoint,
    /// Höhe in Metern
    pub altitude: f64,
    /// Heading in Grad
    pub heading: f64,
    /// Angezeigte Nummer
    pub number: u64,
    /// Beschriftung
    pub label: String,
}

/// Positions-Marker eines Fahrzeugs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleMarker {
    /// Fahrzeug, zu dem der Marker gehört
    pub vehicle: VehicleId,
    /// Position
    pub coord: GeoPoint,
    /// Höhe in Metern
    pub altitude: f64,
    /// Heading in Grad
    pub heading: f64,
    /// Ob das Fahrzeug das aktive ist
    pub selected: bool,
    /// Symbolform
    pub icon: VehicleIcon,
}

/// Ein Marker auf der Karte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MapMarker {
    /// Wegpunkt-Marker (verschiebbar)
    Waypoint(WaypointMarker),
    /// Fahrzeug-Marker (nur Anzeige)
    Vehicle(VehicleMarker),
}

impl MapMarker {
    /// Position des Markers.
    pub fn coord(&self) -> GeoPoint {
        match self {
            MapMarker::Waypoint(m) => m.coord,
            MapMarker::Vehicle(m) => m.coord,
        }
    }

    /// Höhe des Markers.
    pub fn altitude(&self) -> f64 {
        match self {
            MapMarker::Waypoint(m) => m.altitude,
            MapMarker::Vehicle(m) => m.altitude,
        }
    }

    /// Wegpunkt-Sicht, falls es ein Wegpunkt-Marker ist.
    pub fn as_waypoint(&self) -> Option<&WaypointMarker> {
        match self {
            MapMarker::Waypoint(m) => Some(m),
            MapMarker::Vehicle(_) => None,
        }
    }

    /// Fahrzeug-Sicht, falls es ein Fahrzeug-Marker ist.
    pub fn as_vehicle(&self) -> Option<&VehicleMarker> {
        match self {
            MapMarker::Vehicle(m) => Some(m),
            MapMarker::Waypoint(_) => None,
        }
    }
}

/// Home-Position mit Sicherheitsradius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeMarker {
    /// Position
    pub coord: GeoPoint,
    /// Höhe in Metern
    pub altitude: f64,
    /// Radius der Sicherheitszone in Metern
    pub safe_area_radius_m: u32,
    /// Ob der Marker angezeigt wird
    pub visible: bool,
}

impl Default for HomeMarker {
    fn default() -> Self {
        Self {
            coord: GeoPoint::default(),
            altitude: 0.0,
            safe_area_radius_m: 5,
            visible: false,
        }
    }
}
