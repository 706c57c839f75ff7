//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod map_scene;
pub mod options;

pub use map_scene::{MapScene, VehicleSceneItem, WaypointSceneItem};
pub use options::MapOptions;
pub use options::{DEFAULT_WAYPOINT_ALTITUDE_M, SAFE_AREA_RADIUS_LIST_M};
