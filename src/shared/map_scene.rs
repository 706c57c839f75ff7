//! Karten-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer (oder die
//! Replay-Ausgabe) sie konsumiert.

use crate::core::{GeoPoint, HomeMarker, MarkerId, VehicleIcon, VehicleId};
use serde::Serialize;

/// Darstellung eines Wegpunkt-Markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaypointSceneItem {
    /// Marker-ID
    pub marker: MarkerId,
    /// Angezeigte Nummer
    pub number: u64,
    /// Beschriftung
    pub label: String,
    /// Position
    pub coord: GeoPoint,
    /// Höhe in Metern
    pub altitude: f64,
    /// Heading in Grad
    pub heading: f64,
}

/// Darstellung eines Fahrzeug-Markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSceneItem {
    /// Marker-ID
    pub marker: MarkerId,
    /// Fahrzeug
    pub vehicle: VehicleId,
    /// Position
    pub coord: GeoPoint,
    /// Höhe in Metern
    pub altitude: f64,
    /// Heading in Grad
    pub heading: f64,
    /// Ob das Fahrzeug aktiv ist
    pub selected: bool,
    /// Symbolform
    pub icon: VehicleIcon,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Serialize)]
pub struct MapScene {
    /// Kartenmittelpunkt
    pub center: GeoPoint,
    /// Home-Position
    pub home: HomeMarker,
    /// Aktives Fahrzeug
    pub active_vehicle: Option<VehicleId>,
    /// Wegpunkt-Marker in Missionsreihenfolge des aktiven Fahrzeugs
    pub waypoints: Vec<WaypointSceneItem>,
    /// Fahrzeug-Marker in Erstellungsreihenfolge
    pub vehicles: Vec<VehicleSceneItem>,
}

impl MapScene {
    /// Gibt zurück, ob Wegpunkte angezeigt werden.
    pub fn has_waypoints(&self) -> bool {
        !self.waypoints.is_empty()
    }
}
