//! Map State — zentrale Datenhaltung der Kartenkomponente.

use super::echo_guard::{EchoGuard, WaypointKey};
use super::subscription::VehicleSubscription;
use super::waypoint_markers::WaypointMarkerMap;
use super::CommandLog;
use crate::core::{Fleet, MarkerId, MarkerRegistry, VehicleId, WaypointId};
use crate::shared::MapOptions;
use indexmap::IndexMap;

/// Hauptzustand der Kartenkomponente
#[derive(Debug)]
pub struct MapState {
    /// Bekannte Fahrzeuge inkl. ihrer Waypoint-Stores
    pub fleet: Fleet,
    /// Kartenoberfläche (alle Marker, Home, Mittelpunkt)
    pub markers: MarkerRegistry,
    /// Zuordnung Wegpunkt <-> Marker des aktiven Fahrzeugs
    pub waypoint_markers: WaypointMarkerMap,
    /// Single-Slot-Token gegen Update-Echos
    pub echo_guard: EchoGuard,
    /// Positions-Marker je Fahrzeug (werden nie entfernt)
    pub vehicle_markers: IndexMap<VehicleId, MarkerId>,
    /// Verbindung zum Store des aktiven Fahrzeugs
    pub subscription: VehicleSubscription,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: MapOptions,
}

impl MapState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(MapOptions::default())
    }

    /// Erstellt einen leeren Zustand mit den gegebenen Optionen.
    pub fn with_options(options: MapOptions) -> Self {
        let mut markers = MarkerRegistry::new();
        markers.set_center(options.initial_center);
        markers.take_journal();

        Self {
            fleet: Fleet::new(),
            markers,
            waypoint_markers: WaypointMarkerMap::new(),
            echo_guard: EchoGuard::new(),
            vehicle_markers: IndexMap::new(),
            subscription: VehicleSubscription::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktives Fahrzeug.
    pub fn active_vehicle(&self) -> Option<VehicleId> {
        self.subscription.active_vehicle()
    }

    /// Schlüssel eines Wegpunkts im Store eines Fahrzeugs.
    pub fn waypoint_key(
        &self,
        vehicle: VehicleId,
        waypoint: WaypointId,
    ) -> Option<WaypointKey> {
        self.fleet
            .store_id(vehicle)
            .map(|store| WaypointKey::new(store, waypoint))
    }

    /// Marker eines Wegpunkts des aktiven Fahrzeugs.
    pub fn marker_of_waypoint(
        &self,
        vehicle: VehicleId,
        waypoint: WaypointId,
    ) -> Option<MarkerId> {
        self.waypoint_key(vehicle, waypoint)
            .and_then(|key| self.waypoint_markers.marker_for(key))
    }

    /// Gibt die Anzahl der Wegpunkt-Marker zurück (für UI-Anzeige)
    pub fn waypoint_marker_count(&self) -> usize {
        self.waypoint_markers.len()
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}
