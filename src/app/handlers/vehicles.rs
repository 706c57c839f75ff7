//! Handler für Fahrzeuge, aktives Fahrzeug und Positions-Marker.

use crate::app::use_cases;
use crate::app::MapState;
use crate::core::{Airframe, GeoPoint, VehicleId};

/// Registriert ein Fahrzeug in der Flotte.
pub fn register(state: &mut MapState, vehicle: VehicleId, airframe: Airframe) {
    use_cases::vehicle_position::register_vehicle(state, vehicle, airframe);
}

/// Wechselt das aktive Fahrzeug.
pub fn set_active(state: &mut MapState, vehicle: Option<VehicleId>) {
    use_cases::active_vehicle::set_active_vehicle(state, vehicle);
}

/// Wählt das aktive Fahrzeug ab.
pub fn clear_active(state: &mut MapState) {
    use_cases::active_vehicle::clear_active_vehicle(state);
}

/// Aktualisiert den Positions-Marker eines Fahrzeugs.
pub fn update_position(
    state: &mut MapState,
    vehicle: VehicleId,
    coord: GeoPoint,
    altitude: f64,
    heading_rad: f64,
) {
    use_cases::vehicle_position::update_global_position(
        state,
        vehicle,
        coord,
        altitude,
        heading_rad,
    );
}

/// Speichert den gemeldeten Gierwinkel.
pub fn set_attitude(state: &mut MapState, vehicle: VehicleId, yaw: f64) {
    use_cases::vehicle_position::set_vehicle_attitude(state, vehicle, yaw);
}

/// Setzt die Bauform eines Fahrzeugs.
pub fn set_airframe(state: &mut MapState, vehicle: VehicleId, airframe: Airframe) {
    use_cases::vehicle_position::set_vehicle_airframe(state, vehicle, airframe);
}

/// Leitet das Marker-Symbol neu ab.
pub fn refresh_style(state: &mut MapState, vehicle: VehicleId) {
    use_cases::vehicle_position::update_vehicle_style(state, vehicle);
}
