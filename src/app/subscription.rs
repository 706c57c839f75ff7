//! Verbindungen zwischen der Karte und dem Waypoint-Store des aktiven Fahrzeugs.
//!
//! Es ist immer höchstens ein Store verbunden. Eine Verbindung besteht aus
//! vier Kanälen und wird über ein [`SubscriptionHandle`] gehalten: Wird das
//! Handle gedroppt, sind alle vier Kanäle getrennt.

use crate::core::{StoreId, VehicleId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Signalkanal zwischen Store und Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Store → Karte: Liste geändert
    WaypointListChanged,
    /// Store → Karte: einzelner Wegpunkt geändert
    WaypointChanged,
    /// Karte → Store: Wegpunkt erstellt
    WaypointCreated,
    /// Karte → Store: Wegpunkt bearbeitet
    WaypointEdited,
}

impl Channel {
    /// Alle Kanäle einer Store-Verbindung.
    pub const ALL: [Channel; 4] = [
        Channel::WaypointListChanged,
        Channel::WaypointChanged,
        Channel::WaypointCreated,
        Channel::WaypointEdited,
    ];
}

type ConnectionTable = Rc<RefCell<HashSet<(StoreId, Channel)>>>;

/// Verbindungstabelle aller aktuell verbundenen Kanäle.
#[derive(Debug, Default, Clone)]
pub struct SignalRouter {
    connections: ConnectionTable,
}

impl SignalRouter {
    /// Erstellt eine leere Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verbindet alle vier Kanäle eines Stores.
    pub fn connect(&self, store: StoreId) -> SubscriptionHandle {
        let mut table = self.connections.borrow_mut();
        for channel in Channel::ALL {
            table.insert((store, channel));
        }
        SubscriptionHandle {
            store,
            connections: Rc::clone(&self.connections),
        }
    }

    /// Ob ein Kanal eines Stores verbunden ist.
    pub fn is_connected(&self, store: StoreId, channel: Channel) -> bool {
        self.connections.borrow().contains(&(store, channel))
    }

    /// Anzahl verbundener Kanäle (über alle Stores).
    pub fn connection_count(&self) -> usize {
        self.connections.borrow().len()
    }
}

/// Hält die vier Kanäle eines Stores verbunden, solange es lebt.
#[derive(Debug)]
pub struct SubscriptionHandle {
    store: StoreId,
    connections: ConnectionTable,
}

impl SubscriptionHandle {
    /// Verbundener Store.
    pub fn store(&self) -> StoreId {
        self.store
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        let mut table = self.connections.borrow_mut();
        for channel in Channel::ALL {
            table.remove(&(self.store, channel));
        }
        log::debug!("Store S{} getrennt", self.store.0);
    }
}

/// Das aktive Fahrzeug und sein (ggf. schon verbundener) Store.
#[derive(Debug)]
struct ActiveVehicle {
    vehicle: VehicleId,
    store: StoreId,
    handle: Option<SubscriptionHandle>,
}

/// Besitzt die eine Store-Verbindung des aktiven Fahrzeugs.
#[derive(Debug, Default)]
pub struct VehicleSubscription {
    router: SignalRouter,
    active: Option<ActiveVehicle>,
}

impl VehicleSubscription {
    /// Erstellt einen Zustand ohne aktives Fahrzeug.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trennt die bestehende Verbindung und vergisst das aktive Fahrzeug.
    /// Gibt das bisher aktive Fahrzeug zurück.
    pub fn release(&mut self) -> Option<VehicleId> {
        self.active.take().map(|active| active.vehicle)
    }

    /// Merkt sich Fahrzeug und Store als aktuell, noch ohne Kanäle zu verbinden.
    pub fn select(&mut self, vehicle: VehicleId, store: StoreId) {
        self.release();
        self.active = Some(ActiveVehicle {
            vehicle,
            store,
            handle: None,
        });
    }

    /// Verbindet die Kanäle des aktuellen Stores.
    /// Gibt `false` zurück, wenn kein Fahrzeug ausgewählt ist.
    pub fn connect(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.handle.is_none() {
            active.handle = Some(self.router.connect(active.store));
        }
        true
    }

    /// Aktives Fahrzeug.
    pub fn active_vehicle(&self) -> Option<VehicleId> {
        self.active.as_ref().map(|a| a.vehicle)
    }

    /// Store des aktiven Fahrzeugs.
    pub fn current_store(&self) -> Option<StoreId> {
        self.active.as_ref().map(|a| a.store)
    }

    /// Ob `store` der Store des aktiven Fahrzeugs ist.
    pub fn is_current_store(&self, store: StoreId) -> bool {
        self.current_store() == Some(store)
    }

    /// Ob ein Kanal eines Stores verbunden ist.
    pub fn is_connected(&self, store: StoreId, channel: Channel) -> bool {
        self.router.is_connected(store, channel)
    }

    /// Verbindungstabelle (read-only Zugriff für Diagnose).
    pub fn router(&self) -> &SignalRouter {
        &self.router
    }
}
