//! Handler für Home-Position und Kartenansicht.

use crate::app::use_cases;
use crate::app::MapState;
use crate::core::GeoPoint;

/// Setzt die Home-Position.
pub fn set_home(state: &mut MapState, coord: GeoPoint, altitude: f64) {
    use_cases::view::set_home_position(state, coord, altitude);
}

/// Zentriert die Karte.
pub fn center(state: &mut MapState, coord: GeoPoint) {
    use_cases::view::center_map(state, coord);
}
