use crate::core::{Airframe, GeoPoint, MarkerId, StoreSignal, VehicleId, Waypoint, WaypointId};
use serde::{Deserialize, Serialize};

/// Map-Intents: Eingaben aus Fahrzeug-Link, Waypoint-Stores und Bediener
/// ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapIntent {
    // === Fahrzeuge ===
    /// Neues Fahrzeug wurde erkannt
    VehicleAdded {
        vehicle: VehicleId,
        #[serde(default)]
        airframe: Airframe,
    },
    /// Aktives Fahrzeug wurde gewechselt (`None` wird ignoriert)
    ActiveVehicleSelected { vehicle: Option<VehicleId> },
    /// Aktives Fahrzeug ohne Nachfolger abwählen
    ActiveVehicleCleared,
    /// Globale Position eines Fahrzeugs
    PositionReported {
        vehicle: VehicleId,
        coord: GeoPoint,
        altitude: f64,
        #[serde(default)]
        timestamp_us: u64,
    },
    /// Lage eines Fahrzeugs (Gierwinkel in Radiant)
    AttitudeReported { vehicle: VehicleId, yaw: f64 },
    /// System-Specs eines Fahrzeugs haben sich geändert
    CapabilitiesChanged {
        vehicle: VehicleId,
        airframe: Airframe,
    },

    // === Karte ===
    /// Home-Position wurde gesetzt
    HomePositionChanged { coord: GeoPoint, altitude: f64 },
    /// Karte auf Koordinate zentrieren
    CenterMapRequested { coord: GeoPoint },

    // === Waypoint-Store ===
    /// Signal eines Waypoint-Stores
    StoreSignalled(StoreSignal),
    /// Vollständige Mission vom Fahrzeug empfangen
    MissionReceived {
        vehicle: VehicleId,
        waypoints: Vec<Waypoint>,
    },
    /// Fahrzeug meldet einen geänderten Wegpunkt
    WaypointUpdatedByVehicle {
        vehicle: VehicleId,
        waypoint: Waypoint,
    },
    /// Fahrzeug hat einen Wegpunkt entfernt
    WaypointRemovedByVehicle {
        vehicle: VehicleId,
        waypoint: WaypointId,
    },
    /// Fahrzeug hat die Reihenfolge der Mission geändert
    WaypointMovedByVehicle {
        vehicle: VehicleId,
        from: usize,
        to: usize,
    },

    // === Bediener ===
    /// Marker wurde auf der Karte verschoben
    MarkerDragged {
        marker: MarkerId,
        coord: GeoPoint,
        altitude: f64,
    },
    /// Karten-Widget meldet "Marker bearbeitet"
    MarkerEdited { marker: MarkerId },
    /// Neuer Wegpunkt per Klick auf die Karte
    WaypointCreateRequested {
        coord: GeoPoint,
        #[serde(default)]
        altitude: Option<f64>,
    },
}
