//! Fahrzeuge und ihre Waypoint-Stores.

use super::MissionStore;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// System-ID eines Fahrzeugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MAV{}", self.0)
    }
}

/// Identität eines Waypoint-Stores. Wird beim Registrieren vergeben und
/// ändert sich nie, auch nicht wenn ein Fahrzeug neu registriert wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(pub u64);

/// Bauform eines Fahrzeugs, bestimmt das Kartensymbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Airframe {
    /// Unbekannt / generisch
    #[default]
    Generic,
    /// Starrflügler
    FixedWing,
    /// Quadrocopter
    Quadrotor,
    /// Hexacopter
    Hexarotor,
    /// Octocopter
    Octorotor,
    /// Hubschrauber
    Helicopter,
    /// Bodenfahrzeug
    GroundRover,
    /// Wasserfahrzeug
    SurfaceBoat,
}

/// Ein bekanntes Fahrzeug mit seiner Missionsliste.
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// System-ID
    pub id: VehicleId,
    /// Bauform (aus den System-Specs)
    pub airframe: Airframe,
    /// Letzter gemeldeter Gierwinkel in Radiant
    pub yaw: f64,
    /// Identität des Stores
    pub store_id: StoreId,
    /// Missionsliste des Fahrzeugs
    pub store: MissionStore,
}

/// Alle bekannten Fahrzeuge der Session.
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: IndexMap<VehicleId, Vehicle>,
    next_store_id: u64,
}

impl Fleet {
    /// Erstellt eine leere Flotte.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert ein Fahrzeug mit leerer Mission.
    /// Gibt `false` zurück, wenn die ID bereits bekannt ist.
    pub fn add_vehicle(&mut self, id: VehicleId, airframe: Airframe) -> bool {
        if self.vehicles.contains_key(&id) {
            return false;
        }
        let store_id = StoreId(self.next_store_id);
        self.next_store_id += 1;
        self.vehicles.insert(
            id,
            Vehicle {
                id,
                airframe,
                yaw: 0.0,
                store_id,
                store: MissionStore::new(id),
            },
        );
        true
    }

    /// Liefert ein Fahrzeug.
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    /// Liefert ein Fahrzeug (mutable).
    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    /// Store-Identität eines Fahrzeugs.
    pub fn store_id(&self, id: VehicleId) -> Option<StoreId> {
        self.vehicles.get(&id).map(|v| v.store_id)
    }

    /// Missionsliste eines Fahrzeugs.
    pub fn store(&self, id: VehicleId) -> Option<&MissionStore> {
        self.vehicles.get(&id).map(|v| &v.store)
    }

    /// Missionsliste eines Fahrzeugs (mutable).
    pub fn store_mut(&mut self, id: VehicleId) -> Option<&mut MissionStore> {
        self.vehicles.get_mut(&id).map(|v| &mut v.store)
    }

    /// Sucht das Fahrzeug, dem ein Store gehört.
    pub fn vehicle_of_store(&self, store: StoreId) -> Option<VehicleId> {
        self.vehicles
            .values()
            .find(|v| v.store_id == store)
            .map(|v| v.id)
    }
}
