//! Mapping von Map-Intents auf mutierende Map-Commands.
//!
//! Store-Signale werden hier gegen die Verbindungstabelle geprüft: nur Signale
//! eines verbundenen Kanals erreichen den Abgleich.

use super::subscription::Channel;
use super::{MapCommand, MapIntent, MapState};
use crate::core::StoreSignal;

/// Übersetzt einen `MapIntent` in eine Sequenz ausführbarer `MapCommand`s.
pub fn map_intent_to_commands(state: &MapState, intent: MapIntent) -> Vec<MapCommand> {
    match intent {
        MapIntent::VehicleAdded { vehicle, airframe } => {
            vec![MapCommand::RegisterVehicle { vehicle, airframe }]
        }
        MapIntent::ActiveVehicleSelected { vehicle } => {
            vec![MapCommand::SetActiveVehicle { vehicle }]
        }
        MapIntent::ActiveVehicleCleared => vec![MapCommand::ClearActiveVehicle],
        MapIntent::PositionReported {
            vehicle,
            coord,
            altitude,
            ..
        } => {
            let Some(known) = state.fleet.get(vehicle) else {
                log::debug!("Position von unbekanntem Fahrzeug {} ignoriert", vehicle);
                return Vec::new();
            };

            vec![MapCommand::UpdateVehiclePosition {
                vehicle,
                coord,
                altitude,
                heading_rad: known.yaw,
            }]
        }
        MapIntent::AttitudeReported { vehicle, yaw } => {
            vec![MapCommand::SetVehicleAttitude { vehicle, yaw }]
        }
        MapIntent::CapabilitiesChanged { vehicle, airframe } => vec![
            MapCommand::SetVehicleAirframe { vehicle, airframe },
            MapCommand::RefreshVehicleStyle { vehicle },
        ],
        MapIntent::HomePositionChanged { coord, altitude } => {
            vec![MapCommand::SetHomePosition { coord, altitude }]
        }
        MapIntent::CenterMapRequested { coord } => vec![MapCommand::CenterMap { coord }],
        MapIntent::StoreSignalled(signal) => map_store_signal(state, signal),
        MapIntent::MissionReceived { vehicle, waypoints } => {
            vec![MapCommand::ApplyMission { vehicle, waypoints }]
        }
        MapIntent::WaypointUpdatedByVehicle { vehicle, waypoint } => {
            vec![MapCommand::ReplaceWaypoint { vehicle, waypoint }]
        }
        MapIntent::WaypointRemovedByVehicle { vehicle, waypoint } => {
            vec![MapCommand::RemoveWaypoint { vehicle, waypoint }]
        }
        MapIntent::WaypointMovedByVehicle { vehicle, from, to } => {
            vec![MapCommand::MoveWaypoint { vehicle, from, to }]
        }
        MapIntent::MarkerDragged {
            marker,
            coord,
            altitude,
        } => vec![MapCommand::MoveWaypointMarker {
            marker,
            coord,
            altitude,
        }],
        MapIntent::MarkerEdited { marker } => vec![MapCommand::ApplyMarkerEdit { marker }],
        MapIntent::WaypointCreateRequested { coord, altitude } => {
            let altitude = altitude.unwrap_or(state.options.default_waypoint_altitude_m);
            vec![MapCommand::CreateWaypoint { coord, altitude }]
        }
    }
}

fn map_store_signal(state: &MapState, signal: StoreSignal) -> Vec<MapCommand> {
    let vehicle = signal.vehicle();
    let channel = match signal {
        StoreSignal::WaypointListChanged { .. } => Channel::WaypointListChanged,
        StoreSignal::WaypointChanged { .. } => Channel::WaypointChanged,
    };

    let connected = state
        .fleet
        .store_id(vehicle)
        .is_some_and(|store| state.subscription.is_connected(store, channel));
    if !connected {
        log::debug!(
            "Store-Signal {:?} von {} ohne Verbindung verworfen",
            channel,
            vehicle
        );
        return Vec::new();
    }

    match signal {
        StoreSignal::WaypointListChanged { vehicle } => {
            vec![MapCommand::UpdateWaypointList { vehicle }]
        }
        StoreSignal::WaypointChanged { vehicle, waypoint } => {
            vec![MapCommand::UpdateWaypoint { vehicle, waypoint }]
        }
    }
}
