//! Echo-Schutz für den Abgleich zwischen Waypoint-Store und Karte.
//!
//! Ein Abgleich ist synchron und re-entrant: Schreibt die Karte einen
//! Wegpunkt zurück, meldet der Store die Änderung sofort wieder an die Karte.
//! Der Guard merkt sich den Wegpunkt, der gerade propagiert wird, damit das
//! Echo als solches erkannt und verworfen wird.

use crate::core::{StoreId, WaypointId};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Eindeutiger Schlüssel eines Wegpunkts über alle Stores hinweg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointKey {
    /// Store, dem der Wegpunkt gehört
    pub store: StoreId,
    /// ID innerhalb des Stores
    pub waypoint: WaypointId,
}

impl WaypointKey {
    /// Erstellt einen Schlüssel.
    pub fn new(store: StoreId, waypoint: WaypointId) -> Self {
        Self { store, waypoint }
    }
}

impl fmt::Display for WaypointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@S{}", self.waypoint, self.store.0)
    }
}

/// Ein-Slot-Speicher für den Wegpunkt, der gerade propagiert wird.
#[derive(Debug, Default)]
pub struct EchoGuard {
    in_flight: Rc<Cell<Option<WaypointKey>>>,
}

impl EchoGuard {
    /// Erstellt einen freien Guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob genau dieser Wegpunkt gerade propagiert wird.
    pub fn is_propagating(&self, key: WaypointKey) -> bool {
        self.in_flight.get() == Some(key)
    }

    /// Wegpunkt, der gerade propagiert wird.
    pub fn in_flight(&self) -> Option<WaypointKey> {
        self.in_flight.get()
    }

    /// Belegt den Slot, bis der zurückgegebene Claim gedroppt wird.
    ///
    /// Der Claim hält keine Referenz auf den Guard, damit der Aufrufer den
    /// State währenddessen weiter mutieren kann.
    #[must_use = "der Slot wird freigegeben, sobald der Claim gedroppt wird"]
    pub fn claim(&self, key: WaypointKey) -> EchoClaim {
        let previous = self.in_flight.replace(Some(key));
        EchoClaim {
            slot: Rc::clone(&self.in_flight),
            previous,
        }
    }
}

/// Belegung des [`EchoGuard`]. Gibt den Slot beim Drop frei.
#[derive(Debug)]
pub struct EchoClaim {
    slot: Rc<Cell<Option<WaypointKey>>>,
    previous: Option<WaypointKey>,
}

impl Drop for EchoClaim {
    fn drop(&mut self) {
        self.slot.set(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: u64) -> WaypointKey {
        WaypointKey::new(StoreId(0), WaypointId(id))
    }

    #[test]
    fn claim_is_released_on_drop() {
        let guard = EchoGuard::new();
        {
            let _claim = guard.claim(key(1));
            assert!(guard.is_propagating(key(1)));
            assert!(!guard.is_propagating(key(2)));
        }
        assert_eq!(guard.in_flight(), None);
    }

    #[test]
    fn claim_is_released_on_early_return() {
        fn propagate(guard: &EchoGuard, bail: bool) -> bool {
            let _claim = guard.claim(key(7));
            if bail {
                return false;
            }
            guard.is_propagating(key(7))
        }

        let guard = EchoGuard::new();
        assert!(!propagate(&guard, true));
        assert_eq!(guard.in_flight(), None);
        assert!(propagate(&guard, false));
        assert_eq!(guard.in_flight(), None);
    }

    #[test]
    fn nested_claim_restores_outer_waypoint() {
        let guard = EchoGuard::new();
        let outer = guard.claim(key(1));
        {
            let _inner = guard.claim(key(2));
            assert!(guard.is_propagating(key(2)));
        }
        assert!(guard.is_propagating(key(1)));
        drop(outer);
        assert_eq!(guard.in_flight(), None);
    }

    #[test]
    fn same_waypoint_in_other_store_is_not_an_echo() {
        let guard = EchoGuard::new();
        let _claim = guard.claim(key(3));
        assert!(!guard.is_propagating(WaypointKey::new(StoreId(1), WaypointId(3))));
    }
}
