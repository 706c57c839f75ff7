//! Use-Case-Funktionen für Fahrzeuge und ihre Positions-Marker.
//!
//! Jedes Fahrzeug bekommt beim ersten Positionsbericht einen Marker. Marker
//! werden während der Session nie entfernt.

use crate::app::MapState;
use crate::core::{heading_degrees, Airframe, GeoPoint, VehicleIcon, VehicleId};

/// Registriert ein Fahrzeug mit leerer Mission.
pub fn register_vehicle(state: &mut MapState, vehicle: VehicleId, airframe: Airframe) {
    if state.fleet.add_vehicle(vehicle, airframe) {
        log::info!("Fahrzeug {} registriert ({:?})", vehicle, airframe);
    } else {
        log::debug!("Fahrzeug {} ist bereits bekannt", vehicle);
    }
}

/// Aktualisiert Position, Höhe und Heading des Fahrzeug-Markers.
///
/// `heading_rad` ist der Gierwinkel in Radiant und wird in Grad angezeigt.
pub fn update_global_position(
    state: &mut MapState,
    vehicle: VehicleId,
    coord: GeoPoint,
    altitude: f64,
    heading_rad: f64,
) {
    let Some(known) = state.fleet.get(vehicle) else {
        log::debug!("Position von unbekanntem Fahrzeug {} ignoriert", vehicle);
        return;
    };
    let icon = VehicleIcon::for_airframe(known.airframe);

    let marker = match state.vehicle_markers.get(&vehicle) {
        Some(&marker) => marker,
        None => {
            let selected = state.active_vehicle() == Some(vehicle);
            let marker = state.markers.create_vehicle_marker(vehicle, icon);
            state.markers.set_selected(marker, selected);
            state.vehicle_markers.insert(vehicle, marker);
            log::debug!("Positions-Marker {} für {} erstellt", marker, vehicle);
            marker
        }
    };

    state.markers.set_coord(marker, coord, altitude);
    state.markers.set_heading(marker, heading_degrees(heading_rad));
}

/// Speichert den gemeldeten Gierwinkel (Radiant).
pub fn set_vehicle_attitude(state: &mut MapState, vehicle: VehicleId, yaw: f64) {
    match state.fleet.get_mut(vehicle) {
        Some(known) => known.yaw = yaw,
        None => log::debug!("Lage von unbekanntem Fahrzeug {} ignoriert", vehicle),
    }
}

/// Setzt die Bauform eines Fahrzeugs.
pub fn set_vehicle_airframe(state: &mut MapState, vehicle: VehicleId, airframe: Airframe) {
    match state.fleet.get_mut(vehicle) {
        Some(known) => known.airframe = airframe,
        None => log::debug!("System-Specs von unbekanntem Fahrzeug {} ignoriert", vehicle),
    }
}

/// Leitet das Symbol des Positions-Markers aus der Bauform neu ab.
/// Ohne Marker passiert nichts.
pub fn update_vehicle_style(state: &mut MapState, vehicle: VehicleId) {
    let Some(&marker) = state.vehicle_markers.get(&vehicle) else {
        return;
    };
    let Some(known) = state.fleet.get(vehicle) else {
        return;
    };
    state
        .markers
        .set_icon(marker, VehicleIcon::for_airframe(known.airframe));
}

/// Setzt `selected` für jeden Positions-Marker auf `vehicle == active`.
pub fn update_selected_vehicle(state: &mut MapState, active: Option<VehicleId>) {
    for (&vehicle, &marker) in &state.vehicle_markers {
        state.markers.set_selected(marker, Some(vehicle) == active);
    }
}
