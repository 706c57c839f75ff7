//! Map Controller für zentrale Event-Verarbeitung.
//!
//! Alle Eingaben laufen über Intent -> Command -> Handler. Store-Signale, die
//! während eines Use-Cases entstehen, werden synchron über denselben Pfad
//! ausgeliefert, bevor der Use-Case zurückkehrt.

use super::map_scene;
use super::{MapCommand, MapIntent, MapState};
use crate::core::StoreSignal;
use crate::shared::MapScene;

/// Orchestriert Fahrzeug-, Store- und Bediener-Events auf den MapState.
#[derive(Default)]
pub struct MapController;

impl MapController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Anschließend werden die "Marker bearbeitet"-Meldungen der Karte
    /// abgearbeitet, die der Intent ausgelöst hat.
    pub fn handle_intent(&mut self, state: &mut MapState, intent: MapIntent) -> anyhow::Result<()> {
        run_intent(state, intent)?;
        self.drain_marker_edits(state)
    }

    /// Führt mutierende Commands auf dem MapState aus.
    pub fn handle_command(&mut self, state: &mut MapState, command: MapCommand) -> anyhow::Result<()> {
        execute_command(state, command)
    }

    fn drain_marker_edits(&mut self, state: &mut MapState) -> anyhow::Result<()> {
        for _ in 0..state.options.marker_edit_drain_limit {
            let edits = state.markers.take_pending_edits();
            if edits.is_empty() {
                return Ok(());
            }
            for marker in edits {
                run_intent(state, MapIntent::MarkerEdited { marker })?;
            }
        }

        let dropped = state.markers.take_pending_edits();
        if !dropped.is_empty() {
            log::warn!(
                "{} Marker-Edits nach {} Runden verworfen",
                dropped.len(),
                state.options.marker_edit_drain_limit
            );
        }
        Ok(())
    }

    /// Baut die Karten-Szene aus dem aktuellen MapState.
    pub fn build_map_scene(&self, state: &MapState) -> MapScene {
        map_scene::build(state)
    }
}

/// Mappt einen Intent und führt die resultierenden Commands aus.
pub(crate) fn run_intent(state: &mut MapState, intent: MapIntent) -> anyhow::Result<()> {
    let commands = super::intent_mapping::map_intent_to_commands(state, intent);
    for command in commands {
        execute_command(state, command)?;
    }
    Ok(())
}

/// Liefert synchron ausgesendete Store-Signale an die verbundenen Empfänger aus.
pub(crate) fn deliver_store_signals(
    state: &mut MapState,
    signals: Vec<StoreSignal>,
) -> anyhow::Result<()> {
    for signal in signals {
        run_intent(state, MapIntent::StoreSignalled(signal))?;
    }
    Ok(())
}

/// Dispatcht an Feature-Handler in `handlers/`.
fn execute_command(state: &mut MapState, command: MapCommand) -> anyhow::Result<()> {
    state.command_log.record(command.clone());
    use super::handlers;

    match command {
        // === Fahrzeuge ===
        MapCommand::RegisterVehicle { vehicle, airframe } => {
            handlers::vehicles::register(state, vehicle, airframe)
        }
        MapCommand::SetActiveVehicle { vehicle } => {
            handlers::vehicles::set_active(state, vehicle)
        }
        MapCommand::ClearActiveVehicle => handlers::vehicles::clear_active(state),
        MapCommand::UpdateVehiclePosition {
            vehicle,
            coord,
            altitude,
            heading_rad,
        } => handlers::vehicles::update_position(state, vehicle, coord, altitude, heading_rad),
        MapCommand::SetVehicleAttitude { vehicle, yaw } => {
            handlers::vehicles::set_attitude(state, vehicle, yaw)
        }
        MapCommand::SetVehicleAirframe { vehicle, airframe } => {
            handlers::vehicles::set_airframe(state, vehicle, airframe)
        }
        MapCommand::RefreshVehicleStyle { vehicle } => {
            handlers::vehicles::refresh_style(state, vehicle)
        }

        // === Karte ===
        MapCommand::SetHomePosition { coord, altitude } => {
            handlers::view::set_home(state, coord, altitude)
        }
        MapCommand::CenterMap { coord } => handlers::view::center(state, coord),

        // === Abgleich Store -> Karte ===
        MapCommand::UpdateWaypointList { vehicle } => {
            handlers::waypoints::update_list(state, vehicle)
        }
        MapCommand::UpdateWaypoint { vehicle, waypoint } => {
            handlers::waypoints::update_single(state, vehicle, waypoint)
        }

        // === Store-Mutationen vom Fahrzeug ===
        MapCommand::ApplyMission { vehicle, waypoints } => {
            handlers::waypoints::apply_mission(state, vehicle, waypoints)?
        }
        MapCommand::ReplaceWaypoint { vehicle, waypoint } => {
            handlers::waypoints::replace(state, vehicle, waypoint)?
        }
        MapCommand::RemoveWaypoint { vehicle, waypoint } => {
            handlers::waypoints::remove(state, vehicle, waypoint)?
        }
        MapCommand::MoveWaypoint { vehicle, from, to } => {
            handlers::waypoints::reorder(state, vehicle, from, to)?
        }

        // === Abgleich Karte -> Store ===
        MapCommand::MoveWaypointMarker {
            marker,
            coord,
            altitude,
        } => handlers::waypoints::move_marker(state, marker, coord, altitude),
        MapCommand::ApplyMarkerEdit { marker } => {
            handlers::waypoints::apply_marker_edit(state, marker)?
        }
        MapCommand::CreateWaypoint { coord, altitude } => {
            handlers::waypoints::create(state, coord, altitude)?
        }
    }

    Ok(())
}
