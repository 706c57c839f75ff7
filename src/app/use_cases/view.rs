//! Use-Case-Funktionen für Home-Position und Kartenansicht.

use crate::app::MapState;
use crate::core::{GeoPoint, HomeMarker};

/// Setzt die Home-Position samt Sicherheitsradius aus den Optionen.
pub fn set_home_position(state: &mut MapState, coord: GeoPoint, altitude: f64) {
    let home = HomeMarker {
        coord,
        altitude,
        safe_area_radius_m: state.options.safe_area_radius(),
        visible: state.options.show_home,
    };
    state.markers.set_home(home);
    log::info!("Home-Position gesetzt: {} ({:.1} m)", coord, altitude);
}

/// Zentriert die Karte auf eine Koordinate.
pub fn center_map(state: &mut MapState, coord: GeoPoint) {
    state.markers.set_center(coord);
}
