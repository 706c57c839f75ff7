//! Builder für Karten-Szenen aus dem MapState.

use crate::app::MapState;
use crate::core::{MapMarker, WaypointStore};
use crate::shared::{MapScene, VehicleSceneItem, WaypointSceneItem};

/// Baut eine MapScene aus dem aktuellen MapState.
pub fn build(state: &MapState) -> MapScene {
    let active_vehicle = state.active_vehicle();

    // Wegpunkte in Missionsreihenfolge des aktiven Fahrzeugs
    let waypoints: Vec<WaypointSceneItem> = active_vehicle
        .and_then(|vehicle| state.fleet.store(vehicle).map(|store| (vehicle, store)))
        .map(|(vehicle, store)| {
            store
                .global_nav_waypoints()
                .into_iter()
                .filter_map(|wp| {
                    let marker = state.marker_of_waypoint(vehicle, wp.id)?;
                    let m = state.markers.get(marker)?.as_waypoint()?;
                    Some(WaypointSceneItem {
                        marker,
                        number: m.number,
                        label: m.label.clone(),
                        coord: m.coord,
                        altitude: m.altitude,
                        heading: m.heading,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let vehicles: Vec<VehicleSceneItem> = state
        .vehicle_markers
        .values()
        .filter_map(|&marker| match state.markers.get(marker)? {
            MapMarker::Vehicle(m) => Some(VehicleSceneItem {
                marker,
                vehicle: m.vehicle,
                coord: m.coord,
                altitude: m.altitude,
                heading: m.heading,
                selected: m.selected,
                icon: m.icon,
            }),
            MapMarker::Waypoint(_) => None,
        })
        .collect();

    MapScene {
        center: state.markers.center(),
        home: state.markers.home().clone(),
        active_vehicle,
        waypoints,
        vehicles,
    }
}
