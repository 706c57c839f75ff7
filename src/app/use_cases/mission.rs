//! Use-Case-Funktionen für Mutationen der Missionsliste.
//!
//! Jede Mutation liefert die Signale des Stores synchron an die verbundenen
//! Empfänger aus, bevor sie zurückkehrt.

use crate::app::controller::deliver_store_signals;
use crate::app::subscription::Channel;
use crate::app::MapState;
use crate::core::{GeoPoint, VehicleId, Waypoint, WaypointId, WaypointStore};
use anyhow::Context;

/// Ersetzt die Mission eines Fahrzeugs durch die empfangene Liste.
pub fn apply_mission(
    state: &mut MapState,
    vehicle: VehicleId,
    waypoints: Vec<Waypoint>,
) -> anyhow::Result<()> {
    let Some(store) = state.fleet.store_mut(vehicle) else {
        log::debug!("Mission für unbekanntes Fahrzeug {} ignoriert", vehicle);
        return Ok(());
    };
    let signals = store
        .replace_all(waypoints)
        .with_context(|| format!("Mission von {} ungültig", vehicle))?;
    log::info!(
        "Mission von {} übernommen: {} Wegpunkte",
        vehicle,
        store.waypoint_list().len()
    );

    deliver_store_signals(state, signals)
}

/// Ersetzt einen einzelnen Wegpunkt (gleiche ID).
pub fn replace_waypoint(
    state: &mut MapState,
    vehicle: VehicleId,
    waypoint: Waypoint,
) -> anyhow::Result<()> {
    let Some(store) = state.fleet.store_mut(vehicle) else {
        log::debug!("Wegpunkt für unbekanntes Fahrzeug {} ignoriert", vehicle);
        return Ok(());
    };
    let id = waypoint.id;
    let signals = store
        .set_waypoint(waypoint)
        .with_context(|| format!("Wegpunkt {} von {} nicht übernommen", id, vehicle))?;

    deliver_store_signals(state, signals)
}

/// Entfernt einen Wegpunkt aus der Mission.
pub fn remove_waypoint(
    state: &mut MapState,
    vehicle: VehicleId,
    waypoint: WaypointId,
) -> anyhow::Result<()> {
    let Some(store) = state.fleet.store_mut(vehicle) else {
        log::debug!("Löschung für unbekanntes Fahrzeug {} ignoriert", vehicle);
        return Ok(());
    };
    let signals = store
        .remove_waypoint(waypoint)
        .with_context(|| format!("Wegpunkt {} von {} nicht entfernt", waypoint, vehicle))?;

    deliver_store_signals(state, signals)
}

/// Verschiebt einen Wegpunkt an einen neuen Listenindex.
///
/// Der Store meldet eine Listenänderung, der Listenabgleich behält dabei alle
/// bestehenden Marker.
pub fn move_waypoint(
    state: &mut MapState,
    vehicle: VehicleId,
    from: usize,
    to: usize,
) -> anyhow::Result<()> {
    let Some(store) = state.fleet.store_mut(vehicle) else {
        log::debug!("Umsortierung für unbekanntes Fahrzeug {} ignoriert", vehicle);
        return Ok(());
    };
    let signals = store.move_waypoint(from, to).with_context(|| {
        format!("Wegpunkt von Index {} nach {} bei {} nicht verschoben", from, to, vehicle)
    })?;

    deliver_store_signals(state, signals)
}

/// Legt einen neuen globalen Navigationswegpunkt im Store des aktiven
/// Fahrzeugs an.
///
/// Der Marker entsteht erst durch die Listen-Rückmeldung des Stores.
pub fn create_waypoint(state: &mut MapState, coord: GeoPoint, altitude: f64) -> anyhow::Result<()> {
    let Some(vehicle) = state.active_vehicle() else {
        log::debug!("Kein aktives Fahrzeug, Wegpunkt wird nicht erstellt");
        return Ok(());
    };
    let Some(store_id) = state.fleet.store_id(vehicle) else {
        return Ok(());
    };
    if !state
        .subscription
        .is_connected(store_id, Channel::WaypointCreated)
    {
        log::debug!("Ausgehender Kanal für neue Wegpunkte von {} nicht verbunden", vehicle);
        return Ok(());
    }

    let command = state.options.default_waypoint_command;
    let Some(store) = state.fleet.store_mut(vehicle) else {
        return Ok(());
    };
    let id = store
        .next_waypoint_id()
        .with_context(|| format!("Keine Wegpunkt-ID für {} frei", vehicle))?;
    let waypoint = Waypoint::new(id.0, coord, altitude)
        .with_command(command)
        .with_description(format!("WP {}", id.0));
    let signals = store
        .add_waypoint(waypoint)
        .with_context(|| format!("Wegpunkt {} für {} nicht erstellt", id, vehicle))?;
    log::info!("Wegpunkt {} bei {} für {} erstellt", id, coord, vehicle);

    deliver_store_signals(state, signals)
}
