//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod echo_guard;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod map_scene;
/// Map State und Controller
///
/// Dieses Modul verwaltet den Zustand der Kartenkomponente (Flotte, Marker, Zuordnung).
pub mod state;
pub mod subscription;
pub mod use_cases;
pub mod waypoint_markers;

pub use command_log::CommandLog;
pub use controller::MapController;
pub use echo_guard::{EchoClaim, EchoGuard, WaypointKey};
pub use events::{MapCommand, MapIntent};
pub use map_scene::build as build_map_scene;
pub use state::MapState;
pub use subscription::{Channel, SignalRouter, SubscriptionHandle, VehicleSubscription};
pub use waypoint_markers::WaypointMarkerMap;
