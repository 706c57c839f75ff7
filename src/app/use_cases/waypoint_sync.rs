//! Use-Case-Funktionen für den Abgleich zwischen Waypoint-Store und Karte.
//!
//! Store -> Karte: `update_waypoint` und `update_waypoint_list` halten die
//! Wegpunkt-Marker konsistent mit der globalen Navigationsliste des aktiven
//! Fahrzeugs. Karte -> Store: `handle_marker_edit` schreibt verschobene
//! Marker zurück. Der [`EchoGuard`](crate::app::EchoGuard) verhindert, dass
//! die Rückmeldung des Stores die eigene Änderung erneut anwendet.
//!
//! Veraltete Signale, Echos und fehlende Zuordnungen sind stille No-ops.

use crate::app::controller::deliver_store_signals;
use crate::app::subscription::Channel;
use crate::app::{MapState, WaypointKey};
use crate::core::{GeoPoint, MarkerId, VehicleId, WaypointId, WaypointStore};
use indexmap::IndexSet;

/// Gleicht einen einzelnen Wegpunkt mit seinem Marker ab.
///
/// Erstellt den Marker bei Bedarf oder aktualisiert Position, Höhe, Heading
/// und Nummer an Ort und Stelle. Ein Wegpunkt außerhalb des globalen
/// Navigationsrahmens löst einen vollständigen Abgleich aus, wenn mehr Marker
/// existieren als globale Navigationswegpunkte.
pub fn update_waypoint(state: &mut MapState, vehicle: VehicleId, waypoint: WaypointId) {
    let Some(store_id) = state.fleet.store_id(vehicle) else {
        log::debug!("Wegpunkt-Update von unbekanntem Fahrzeug {} ignoriert", vehicle);
        return;
    };
    let key = WaypointKey::new(store_id, waypoint);

    if state.echo_guard.is_propagating(key) {
        log::debug!("Echo von Wegpunkt {} unterdrückt", key);
        return;
    }
    if !state.subscription.is_current_store(store_id) {
        log::debug!("Veraltetes Wegpunkt-Update von {} ignoriert", vehicle);
        return;
    }

    let Some(store) = state.fleet.store(vehicle) else {
        return;
    };
    let Some(wp) = store.waypoint(waypoint) else {
        log::debug!("Wegpunkt {} nicht im Store von {}", waypoint, vehicle);
        return;
    };

    if !wp.is_global_navigation() {
        let drifted = state.waypoint_markers.len() > store.global_nav_count();
        if drifted {
            log::debug!(
                "Wegpunkt {} hat den globalen Rahmen verlassen, vollständiger Abgleich",
                key
            );
            update_waypoint_list(state, vehicle);
        }
        return;
    }

    if store.global_nav_index_of(waypoint).is_none() {
        return;
    }
    let wp = wp.clone();

    let _claim = state.echo_guard.claim(key);

    match state.waypoint_markers.marker_for(key) {
        Some(marker) => {
            state.markers.without_notifications(|markers| {
                markers.set_coord(marker, wp.position, wp.altitude);
                markers.set_heading(marker, wp.yaw);
                markers.set_number(marker, wp.id.0);
            });
        }
        None => {
            let marker =
                state
                    .markers
                    .create_waypoint_marker(wp.position, wp.altitude, &wp.description);
            state.markers.set_heading(marker, wp.yaw);
            state.markers.set_number(marker, wp.id.0);
            state.waypoint_markers.insert(key, marker);
        }
    }
}

/// Vollständiger Abgleich der Wegpunkt-Marker mit dem Store eines Fahrzeugs.
///
/// 1. Zuordnungen ohne Gegenstück in der globalen Navigationsliste entfernen
///    (inkl. Marker)
/// 2. Verbleibende Zuordnungen einzeln abgleichen
/// 3. Fehlende Marker für neue Wegpunkte erstellen
pub fn update_waypoint_list(state: &mut MapState, vehicle: VehicleId) {
    let Some(store_id) = state.fleet.store_id(vehicle) else {
        log::debug!("Listen-Update von unbekanntem Fahrzeug {} ignoriert", vehicle);
        return;
    };
    if !state.subscription.is_current_store(store_id) {
        log::debug!("Veraltetes Listen-Update von {} ignoriert", vehicle);
        return;
    }
    let Some(store) = state.fleet.store(vehicle) else {
        return;
    };

    let live: IndexSet<WaypointKey> = store
        .global_nav_waypoints()
        .iter()
        .map(|wp| WaypointKey::new(store_id, wp.id))
        .collect();

    for key in state.waypoint_markers.keys() {
        if live.contains(&key) {
            continue;
        }
        if let Some(marker) = state.waypoint_markers.remove_waypoint(key) {
            state.markers.destroy(marker);
        }
    }

    for key in state.waypoint_markers.keys() {
        update_waypoint(state, vehicle, key.waypoint);
    }

    for key in &live {
        if !state.waypoint_markers.contains(*key) {
            update_waypoint(state, vehicle, key.waypoint);
        }
    }
}

/// Schreibt Position und Höhe eines bearbeiteten Markers in seinen Wegpunkt
/// zurück und meldet die Änderung an den Store.
///
/// Die synchrone Rückmeldung des Stores wird innerhalb des Claims
/// ausgeliefert und dort als Echo verworfen.
pub fn handle_marker_edit(state: &mut MapState, marker: MarkerId) -> anyhow::Result<()> {
    let Some(key) = state.waypoint_markers.waypoint_for(marker) else {
        log::debug!("Marker {} ist keinem Wegpunkt zugeordnet", marker);
        return Ok(());
    };
    if state.echo_guard.is_propagating(key) {
        log::debug!("Marker-Edit von {} während eigener Propagation ignoriert", key);
        return Ok(());
    }
    let (Some(coord), Some(altitude)) = (
        state.markers.coord_of(marker),
        state.markers.altitude_of(marker),
    ) else {
        return Ok(());
    };
    let Some(vehicle) = state.fleet.vehicle_of_store(key.store) else {
        return Ok(());
    };
    let notify = state
        .subscription
        .is_connected(key.store, Channel::WaypointEdited);

    let _claim = state.echo_guard.claim(key);

    let Some(store) = state.fleet.store_mut(vehicle) else {
        return Ok(());
    };
    let Some(wp) = store.waypoint_mut(key.waypoint) else {
        log::debug!("Wegpunkt {} existiert nicht mehr", key);
        return Ok(());
    };
    wp.position = coord;
    wp.altitude = altitude;

    if !notify {
        log::debug!("Ausgehender Kanal für {} nicht verbunden", key);
        return Ok(());
    }
    let signals = store.notify_of_change(key.waypoint);
    deliver_store_signals(state, signals)
}

/// Verschiebt einen Wegpunkt-Marker, wie es das Karten-Widget beim Drag tut.
///
/// Die Karte meldet daraufhin "Marker bearbeitet"; der Controller arbeitet
/// diese Meldung nach dem Intent ab.
pub fn move_waypoint_marker(state: &mut MapState, marker: MarkerId, coord: GeoPoint, altitude: f64) {
    if !state.markers.drag_marker(marker, coord, altitude) {
        log::debug!("Marker {} ist kein Wegpunkt-Marker", marker);
    }
}
