use crate::core::{Airframe, GeoPoint, MarkerId, VehicleId, Waypoint, WaypointId};

/// Map-Commands: mutierende Schritte, die der Controller ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    // === Fahrzeuge ===
    /// Fahrzeug in der Flotte registrieren
    RegisterVehicle {
        vehicle: VehicleId,
        airframe: Airframe,
    },
    /// Aktives Fahrzeug setzen
    SetActiveVehicle { vehicle: Option<VehicleId> },
    /// Aktives Fahrzeug abwählen
    ClearActiveVehicle,
    /// Positions-Marker eines Fahrzeugs aktualisieren
    UpdateVehiclePosition {
        vehicle: VehicleId,
        coord: GeoPoint,
        altitude: f64,
        heading_rad: f64,
    },
    /// Gierwinkel eines Fahrzeugs speichern
    SetVehicleAttitude { vehicle: VehicleId, yaw: f64 },
    /// Bauform eines Fahrzeugs setzen
    SetVehicleAirframe {
        vehicle: VehicleId,
        airframe: Airframe,
    },
    /// Symbol des Positions-Markers neu ableiten
    RefreshVehicleStyle { vehicle: VehicleId },

    // === Karte ===
    /// Home-Marker setzen
    SetHomePosition { coord: GeoPoint, altitude: f64 },
    /// Kartenmittelpunkt setzen
    CenterMap { coord: GeoPoint },

    // === Abgleich Store -> Karte ===
    /// Vollständiger Listenabgleich
    UpdateWaypointList { vehicle: VehicleId },
    /// Abgleich eines einzelnen Wegpunkts
    UpdateWaypoint {
        vehicle: VehicleId,
        waypoint: WaypointId,
    },

    // === Store-Mutationen vom Fahrzeug ===
    /// Mission ersetzen
    ApplyMission {
        vehicle: VehicleId,
        waypoints: Vec<Waypoint>,
    },
    /// Einzelnen Wegpunkt ersetzen
    ReplaceWaypoint {
        vehicle: VehicleId,
        waypoint: Waypoint,
    },
    /// Wegpunkt entfernen
    RemoveWaypoint {
        vehicle: VehicleId,
        waypoint: WaypointId,
    },
    /// Wegpunkt innerhalb der Mission umsortieren
    MoveWaypoint {
        vehicle: VehicleId,
        from: usize,
        to: usize,
    },

    // === Abgleich Karte -> Store ===
    /// Marker verschieben (wie das Karten-Widget beim Drag)
    MoveWaypointMarker {
        marker: MarkerId,
        coord: GeoPoint,
        altitude: f64,
    },
    /// Marker-Edit in den Wegpunkt zurückschreiben
    ApplyMarkerEdit { marker: MarkerId },
    /// Neuen Wegpunkt im aktiven Store anlegen
    CreateWaypoint { coord: GeoPoint, altitude: f64 },
}
