//! Missions-Wegpunkt, wie ihn der Waypoint-Store eines Fahrzeugs hält.

use super::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Erstes Missions-Kommando, das kein Navigations-Kommando mehr ist.
/// Kommandos unterhalb dieses Werts bewegen das Fahrzeug (NAV_*).
pub const NAV_COMMAND_LAST: u16 = 95;

/// Standard-Kommando für neu erzeugte Wegpunkte (NAV_WAYPOINT).
pub const NAV_WAYPOINT: u16 = 16;

/// Stabile ID eines Wegpunkts innerhalb seines Stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaypointId(pub u64);

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WP{}", self.0)
    }
}

/// Koordinatensystem, in dem ein Wegpunkt angegeben ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordinateFrame {
    /// Globale Koordinaten, Höhe über MSL
    #[default]
    Global,
    /// Globale Koordinaten, Höhe relativ zum Home-Punkt
    GlobalRelativeAlt,
    /// Lokales NED-System
    LocalNed,
    /// Lokales ENU-System
    LocalEnu,
    /// Kommando ohne Koordinatenbezug
    Mission,
}

/// Ein Wegpunkt der Mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// ID im Store (gleichzeitig Anzeigenummer des Markers)
    pub id: WaypointId,
    /// Position (nur bei globalem Frame geographisch)
    pub position: GeoPoint,
    /// Höhe in Metern
    pub altitude: f64,
    /// Gierwinkel in Grad
    pub yaw: f64,
    /// Koordinatensystem
    pub frame: CoordinateFrame,
    /// Missions-Kommando
    pub command: u16,
    /// Beschreibung, dient als Marker-Label
    pub description: String,
}

impl Waypoint {
    /// Erstellt einen globalen NAV_WAYPOINT an der gegebenen Position.
    pub fn new(id: u64, position: GeoPoint, altitude: f64) -> Self {
        Self {
            id: WaypointId(id),
            position,
            altitude,
            yaw: 0.0,
            frame: CoordinateFrame::Global,
            command: NAV_WAYPOINT,
            description: String::new(),
        }
    }

    /// Setzt das Koordinatensystem (Builder).
    pub fn with_frame(mut self, frame: CoordinateFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Setzt das Missions-Kommando (Builder).
    pub fn with_command(mut self, command: u16) -> Self {
        self.command = command;
        self
    }

    /// Setzt den Gierwinkel in Grad (Builder).
    pub fn with_yaw(mut self, yaw: f64) -> Self {
        self.yaw = yaw;
        self
    }

    /// Setzt die Beschreibung (Builder).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Ob das Kommando ein Navigations-Kommando ist.
    pub fn is_navigation_type(&self) -> bool {
        self.command < NAV_COMMAND_LAST
    }

    /// Ob der Wegpunkt auf der Karte dargestellt wird (globaler Frame + Navigation).
    pub fn is_global_navigation(&self) -> bool {
        self.frame == CoordinateFrame::Global && self.is_navigation_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_global_navigation_waypoints_are_visualized() {
        let p = GeoPoint::new(47.0, 8.0);
        assert!(Waypoint::new(1, p, 10.0).is_global_navigation());
        assert!(!Waypoint::new(2, p, 10.0)
            .with_frame(CoordinateFrame::LocalNed)
            .is_global_navigation());
        assert!(!Waypoint::new(3, p, 10.0)
            .with_frame(CoordinateFrame::GlobalRelativeAlt)
            .is_global_navigation());
        // DO_JUMP (177) ist kein Navigations-Kommando
        assert!(!Waypoint::new(4, p, 10.0)
            .with_command(177)
            .is_global_navigation());
    }
}
