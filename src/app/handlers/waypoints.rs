//! Handler für den Wegpunkt-Abgleich in beide Richtungen.

use crate::app::use_cases;
use crate::app::MapState;
use crate::core::{GeoPoint, MarkerId, VehicleId, Waypoint, WaypointId};

/// Vollständiger Listenabgleich.
pub fn update_list(state: &mut MapState, vehicle: VehicleId) {
    use_cases::waypoint_sync::update_waypoint_list(state, vehicle);
}

/// Abgleich eines einzelnen Wegpunkts.
pub fn update_single(state: &mut MapState, vehicle: VehicleId, waypoint: WaypointId) {
    use_cases::waypoint_sync::update_waypoint(state, vehicle, waypoint);
}

/// Ersetzt die Mission eines Fahrzeugs.
pub fn apply_mission(
    state: &mut MapState,
    vehicle: VehicleId,
    waypoints: Vec<Waypoint>,
) -> anyhow::Result<()> {
    use_cases::mission::apply_mission(state, vehicle, waypoints)
}

/// Ersetzt einen einzelnen Wegpunkt.
pub fn replace(state: &mut MapState, vehicle: VehicleId, waypoint: Waypoint) -> anyhow::Result<()> {
    use_cases::mission::replace_waypoint(state, vehicle, waypoint)
}

/// Entfernt einen Wegpunkt.
pub fn remove(state: &mut MapState, vehicle: VehicleId, waypoint: WaypointId) -> anyhow::Result<()> {
    use_cases::mission::remove_waypoint(state, vehicle, waypoint)
}

/// Sortiert einen Wegpunkt innerhalb der Mission um.
pub fn reorder(
    state: &mut MapState,
    vehicle: VehicleId,
    from: usize,
    to: usize,
) -> anyhow::Result<()> {
    use_cases::mission::move_waypoint(state, vehicle, from, to)
}

/// Verschiebt einen Wegpunkt-Marker wie beim Drag auf der Karte.
pub fn move_marker(state: &mut MapState, marker: MarkerId, coord: GeoPoint, altitude: f64) {
    use_cases::waypoint_sync::move_waypoint_marker(state, marker, coord, altitude);
}

/// Schreibt einen Marker-Edit in den Wegpunkt zurück.
pub fn apply_marker_edit(state: &mut MapState, marker: MarkerId) -> anyhow::Result<()> {
    use_cases::waypoint_sync::handle_marker_edit(state, marker)
}

/// Legt einen neuen Wegpunkt im aktiven Store an.
pub fn create(state: &mut MapState, coord: GeoPoint, altitude: f64) -> anyhow::Result<()> {
    use_cases::mission::create_waypoint(state, coord, altitude)
}
