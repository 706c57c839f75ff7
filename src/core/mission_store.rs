//! Waypoint-Store eines Fahrzeugs: die autoritative Missionsliste.
//!
//! Der Store ist der Besitzer aller [`Waypoint`]s. Jede Mutation liefert die
//! Signale zurück, die der Store dabei synchron aussendet. Der Aufrufer ist
//! dafür verantwortlich, sie an die verbundenen Empfänger weiterzuleiten.

use super::{VehicleId, Waypoint, WaypointId};
use serde::{Deserialize, Serialize};

/// Signale, die ein Waypoint-Store aussendet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreSignal {
    /// Die Liste hat sich als Ganzes geändert (Reihenfolge, Bulk-Ersetzung, Löschen)
    WaypointListChanged { vehicle: VehicleId },
    /// Ein einzelner Wegpunkt hat sich geändert
    WaypointChanged {
        vehicle: VehicleId,
        waypoint: WaypointId,
    },
}

impl StoreSignal {
    /// Fahrzeug, dessen Store das Signal ausgesendet hat.
    pub fn vehicle(&self) -> VehicleId {
        match self {
            StoreSignal::WaypointListChanged { vehicle }
            | StoreSignal::WaypointChanged { vehicle, .. } => *vehicle,
        }
    }
}

/// Fehler bei Mutationen der Missionsliste.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Wegpunkt existiert nicht im Store
    #[error("Wegpunkt {0} existiert nicht")]
    UnknownWaypoint(WaypointId),
    /// Wegpunkt-ID ist bereits vergeben
    #[error("Wegpunkt {0} existiert bereits")]
    DuplicateWaypoint(WaypointId),
    /// Listenindex außerhalb der Mission
    #[error("Index {index} außerhalb der Mission (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Keine freie Wegpunkt-ID oberhalb der höchsten vergebenen
    #[error("Keine freie Wegpunkt-ID nach {0}")]
    IdSpaceExhausted(WaypointId),
}

/// Schnittstelle des fahrzeugseitigen Waypoint-Stores.
///
/// Abfragen sind frei von Seiteneffekten. `add_waypoint` und
/// `notify_of_change` sind die Slots, an die die Karte ihre ausgehenden
/// Signale (Wegpunkt erstellt / geändert) anschließt.
pub trait WaypointStore {
    /// Fahrzeug, dem der Store gehört.
    fn vehicle(&self) -> VehicleId;

    /// Vollständige Missionsliste in Missionsreihenfolge.
    fn waypoint_list(&self) -> &[Waypoint];

    /// Mutable Referenz auf einen Wegpunkt (für Rückschreiben von Karten-Edits).
    fn waypoint_mut(&mut self, id: WaypointId) -> Option<&mut Waypoint>;

    /// Übernimmt einen neuen Wegpunkt (Slot für "Wegpunkt erstellt").
    fn add_waypoint(&mut self, waypoint: Waypoint) -> Result<Vec<StoreSignal>, StoreError>;

    /// Meldet eine externe Änderung an einem Wegpunkt (Slot für "Wegpunkt geändert").
    fn notify_of_change(&mut self, id: WaypointId) -> Vec<StoreSignal>;

    /// Sucht einen Wegpunkt per ID.
    fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoint_list().iter().find(|wp| wp.id == id)
    }

    /// Alle Wegpunkte im globalen Frame mit Navigations-Kommando.
    fn global_nav_waypoints(&self) -> Vec<&Waypoint> {
        self.waypoint_list()
            .iter()
            .filter(|wp| wp.is_global_navigation())
            .collect()
    }

    /// Index eines Wegpunkts innerhalb der global/nav-Teilliste.
    fn global_nav_index_of(&self, id: WaypointId) -> Option<usize> {
        self.waypoint_list()
            .iter()
            .filter(|wp| wp.is_global_navigation())
            .position(|wp| wp.id == id)
    }

    /// Anzahl der Wegpunkte in der global/nav-Teilliste.
    fn global_nav_count(&self) -> usize {
        self.waypoint_list()
            .iter()
            .filter(|wp| wp.is_global_navigation())
            .count()
    }
}

/// In-Memory-Missionsliste eines Fahrzeugs.
#[derive(Debug, Clone)]
pub struct MissionStore {
    vehicle: VehicleId,
    waypoints: Vec<Waypoint>,
}

impl MissionStore {
    /// Erstellt eine leere Mission für ein Fahrzeug.
    pub fn new(vehicle: VehicleId) -> Self {
        Self {
            vehicle,
            waypoints: Vec::new(),
        }
    }

    /// Nächste freie Wegpunkt-ID (höchste vergebene ID + 1).
    pub fn next_waypoint_id(&self) -> Result<WaypointId, StoreError> {
        let Some(highest) = self.waypoints.iter().map(|wp| wp.id).max() else {
            return Ok(WaypointId(0));
        };
        highest
            .0
            .checked_add(1)
            .map(WaypointId)
            .ok_or(StoreError::IdSpaceExhausted(highest))
    }

    /// Ersetzt einen bestehenden Wegpunkt (gleiche ID) und meldet die Änderung.
    pub fn set_waypoint(&mut self, waypoint: Waypoint) -> Result<Vec<StoreSignal>, StoreError> {
        let id = waypoint.id;
        let slot = self
            .waypoints
            .iter_mut()
            .find(|wp| wp.id == id)
            .ok_or(StoreError::UnknownWaypoint(id))?;
        *slot = waypoint;
        Ok(self.changed(id))
    }

    /// Entfernt einen Wegpunkt.
    pub fn remove_waypoint(&mut self, id: WaypointId) -> Result<Vec<StoreSignal>, StoreError> {
        let index = self
            .waypoints
            .iter()
            .position(|wp| wp.id == id)
            .ok_or(StoreError::UnknownWaypoint(id))?;
        self.waypoints.remove(index);
        Ok(self.list_changed())
    }

    /// Verschiebt einen Wegpunkt an einen neuen Listenindex.
    pub fn move_waypoint(&mut self, from: usize, to: usize) -> Result<Vec<StoreSignal>, StoreError> {
        let len = self.waypoints.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }
        let waypoint = self.waypoints.remove(from);
        self.waypoints.insert(to, waypoint);
        Ok(self.list_changed())
    }

    /// Ersetzt die gesamte Mission (z.B. nach Download vom Fahrzeug).
    pub fn replace_all(&mut self, waypoints: Vec<Waypoint>) -> Result<Vec<StoreSignal>, StoreError> {
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = waypoints.iter().find(|wp| !seen.insert(wp.id)) {
            return Err(StoreError::DuplicateWaypoint(dup.id));
        }
        self.waypoints = waypoints;
        Ok(self.list_changed())
    }

    fn changed(&self, id: WaypointId) -> Vec<StoreSignal> {
        vec![StoreSignal::WaypointChanged {
            vehicle: self.vehicle,
            waypoint: id,
        }]
    }

    fn list_changed(&self) -> Vec<StoreSignal> {
        vec![StoreSignal::WaypointListChanged {
            vehicle: self.vehicle,
        }]
    }
}

impl WaypointStore for MissionStore {
    fn vehicle(&self) -> VehicleId {
        self.vehicle
    }

    fn waypoint_list(&self) -> &[Waypoint] {
        &self.waypoints
    }

    fn waypoint_mut(&mut self, id: WaypointId) -> Option<&mut Waypoint> {
        self.waypoints.iter_mut().find(|wp| wp.id == id)
    }

    fn add_waypoint(&mut self, waypoint: Waypoint) -> Result<Vec<StoreSignal>, StoreError> {
        if self.waypoints.iter().any(|wp| wp.id == waypoint.id) {
            return Err(StoreError::DuplicateWaypoint(waypoint.id));
        }
        self.waypoints.push(waypoint);
        Ok(self.list_changed())
    }

    fn notify_of_change(&mut self, id: WaypointId) -> Vec<StoreSignal> {
        if self.waypoint(id).is_none() {
            return Vec::new();
        }
        self.changed(id)
    }
}
