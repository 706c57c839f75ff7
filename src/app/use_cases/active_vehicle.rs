//! Use-Case-Funktionen für das aktive Fahrzeug.

use super::{vehicle_position, waypoint_sync};
use crate::app::MapState;
use crate::core::VehicleId;

/// Wechselt das aktive Fahrzeug.
///
/// Trennt die Verbindung zum bisherigen Store, gleicht die Wegpunkt-Marker
/// vollständig mit dem neuen Store ab, verbindet dessen Kanäle und setzt den
/// Selektionszustand aller Positions-Marker neu. `None` und unbekannte
/// Fahrzeuge werden ohne Zustandsänderung verworfen.
pub fn set_active_vehicle(state: &mut MapState, vehicle: Option<VehicleId>) {
    let Some(vehicle) = vehicle else {
        log::debug!("Kein Fahrzeug übergeben, aktives Fahrzeug bleibt unverändert");
        return;
    };
    let Some(store) = state.fleet.store_id(vehicle) else {
        log::debug!("Unbekanntes Fahrzeug {} kann nicht aktiviert werden", vehicle);
        return;
    };

    let previous = state.subscription.active_vehicle();
    state.subscription.select(vehicle, store);
    waypoint_sync::update_waypoint_list(state, vehicle);
    state.subscription.connect();
    vehicle_position::update_selected_vehicle(state, Some(vehicle));

    match previous {
        Some(previous) => log::info!("Aktives Fahrzeug gewechselt: {} -> {}", previous, vehicle),
        None => log::info!("Aktives Fahrzeug: {}", vehicle),
    }
}

/// Wählt das aktive Fahrzeug ab und entfernt alle Wegpunkt-Marker.
pub fn clear_active_vehicle(state: &mut MapState) {
    let Some(previous) = state.subscription.release() else {
        log::debug!("Kein aktives Fahrzeug zum Abwählen");
        return;
    };

    for key in state.waypoint_markers.keys() {
        if let Some(marker) = state.waypoint_markers.remove_waypoint(key) {
            state.markers.destroy(marker);
        }
    }
    vehicle_position::update_selected_vehicle(state, None);

    log::info!("Aktives Fahrzeug {} abgewählt", previous);
}
