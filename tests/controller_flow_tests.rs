use approx::assert_relative_eq;
use gcs_waypoint_map::app::Channel;
use gcs_waypoint_map::core::{HomeMarker, VehicleIcon};
use gcs_waypoint_map::{
    Airframe, CoordinateFrame, GeoPoint, MapCommand, MapController, MapIntent, MapMarker,
    MarkerId, MarkerOp, MapState, StoreSignal, VehicleId, Waypoint, WaypointId, WaypointStore,
};

const V1: VehicleId = VehicleId(1);
const V2: VehicleId = VehicleId(2);

fn handle(controller: &mut MapController, state: &mut MapState, intent: MapIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Fahrzeug 1 registriert und aktiv, ohne Mission.
fn setup() -> (MapController, MapState) {
    let mut controller = MapController::new();
    let mut state = MapState::new();
    handle(
        &mut controller,
        &mut state,
        MapIntent::VehicleAdded {
            vehicle: V1,
            airframe: Airframe::Quadrotor,
        },
    );
    handle(
        &mut controller,
        &mut state,
        MapIntent::ActiveVehicleSelected { vehicle: Some(V1) },
    );
    (controller, state)
}

fn marker_of(state: &MapState, vehicle: VehicleId, waypoint: u64) -> MarkerId {
    state
        .marker_of_waypoint(vehicle, WaypointId(waypoint))
        .expect("Wegpunkt sollte einen Marker haben")
}

fn stored(state: &MapState, vehicle: VehicleId, waypoint: u64) -> Waypoint {
    state
        .fleet
        .store(vehicle)
        .and_then(|s| s.waypoint(WaypointId(waypoint)))
        .cloned()
        .expect("Wegpunkt sollte im Store liegen")
}

fn count_update_waypoint(commands: &[MapCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, MapCommand::UpdateWaypoint { .. }))
        .count()
}

#[test]
fn test_global_and_local_waypoint_scenario() {
    let (mut controller, mut state) = setup();
    state.markers.take_journal();

    // W1 global/nav, W2 lokal
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V1,
            waypoints: vec![
                Waypoint::new(1, GeoPoint::new(47.0, 8.0), 10.0),
                Waypoint::new(2, GeoPoint::new(47.1, 8.1), 10.0)
                    .with_frame(CoordinateFrame::LocalNed),
            ],
        },
    );

    let created: Vec<_> = state
        .markers
        .journal()
        .iter()
        .filter(|op| matches!(op, MarkerOp::Created(_)))
        .collect();
    assert_eq!(created.len(), 1, "Nur W1 sollte einen Marker bekommen");
    let w1_marker = marker_of(&state, V1, 1);
    assert!(state.marker_of_waypoint(V1, WaypointId(2)).is_none());

    // Fahrzeug ändert die Höhe von W1
    state.markers.take_journal();
    handle(
        &mut controller,
        &mut state,
        MapIntent::WaypointUpdatedByVehicle {
            vehicle: V1,
            waypoint: Waypoint::new(1, GeoPoint::new(47.0, 8.0), 20.0),
        },
    );

    assert_eq!(state.markers.journal(), &[MarkerOp::Moved(w1_marker)]);
    assert_relative_eq!(
        state.markers.altitude_of(w1_marker).expect("Marker"),
        20.0
    );
    assert_eq!(state.markers.waypoint_marker_count(), 1);

    // Bediener zieht den Marker von W1
    state.markers.take_journal();
    let log_start = state.command_log.len();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MarkerDragged {
            marker: w1_marker,
            coord: GeoPoint::new(47.25, 8.25),
            altitude: 20.0,
        },
    );

    let w1 = stored(&state, V1, 1);
    assert_eq!(w1.position, GeoPoint::new(47.25, 8.25));
    assert_relative_eq!(w1.altitude, 20.0);
    // nur die Drag-Bewegung selbst, keine zweite Marker-Mutation
    assert_eq!(state.markers.journal(), &[MarkerOp::Moved(w1_marker)]);

    let commands = &state.command_log.entries()[log_start..];
    assert_eq!(
        commands,
        &[
            MapCommand::MoveWaypointMarker {
                marker: w1_marker,
                coord: GeoPoint::new(47.25, 8.25),
                altitude: 20.0,
            },
            MapCommand::ApplyMarkerEdit { marker: w1_marker },
            MapCommand::UpdateWaypoint {
                vehicle: V1,
                waypoint: WaypointId(1),
            },
        ]
    );
    assert_eq!(count_update_waypoint(commands), 1);
    assert_eq!(state.echo_guard.in_flight(), None);
    assert!(!state.markers.has_pending_edits());
}

#[test]
fn test_repeated_drags_each_notify_once() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V1,
            waypoints: vec![Waypoint::new(0, GeoPoint::new(47.0, 8.0), 10.0)],
        },
    );
    let marker = marker_of(&state, V1, 0);
    let log_start = state.command_log.len();

    for step in 1..=5 {
        handle(
            &mut controller,
            &mut state,
            MapIntent::MarkerDragged {
                marker,
                coord: GeoPoint::new(47.0 + f64::from(step) * 0.01, 8.0),
                altitude: 10.0,
            },
        );
    }

    assert_eq!(
        count_update_waypoint(&state.command_log.entries()[log_start..]),
        5
    );
    assert_relative_eq!(stored(&state, V1, 0).position.lat, 47.05);
}

#[test]
fn test_operator_created_waypoint_appears_via_list_echo() {
    let (mut controller, mut state) = setup();
    state.markers.take_journal();

    handle(
        &mut controller,
        &mut state,
        MapIntent::WaypointCreateRequested {
            coord: GeoPoint::new(46.9, 7.4),
            altitude: Some(42.0),
        },
    );

    let waypoint = stored(&state, V1, 0);
    assert_eq!(waypoint.position, GeoPoint::new(46.9, 7.4));
    assert!(waypoint.is_global_navigation());
    let marker = marker_of(&state, V1, 0);
    assert_relative_eq!(state.markers.altitude_of(marker).expect("Marker"), 42.0);
    assert!(state
        .command_log
        .entries()
        .contains(&MapCommand::UpdateWaypointList { vehicle: V1 }));
}

#[test]
fn test_vehicle_switch_isolates_previous_store() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::VehicleAdded {
            vehicle: V2,
            airframe: Airframe::FixedWing,
        },
    );
    for (vehicle, lat) in [(V1, 47.0), (V2, 48.0)] {
        handle(
            &mut controller,
            &mut state,
            MapIntent::MissionReceived {
                vehicle,
                waypoints: vec![
                    Waypoint::new(0, GeoPoint::new(lat, 8.0), 10.0),
                    Waypoint::new(1, GeoPoint::new(lat, 8.1), 10.0),
                ],
            },
        );
    }
    let v1_marker = marker_of(&state, V1, 0);

    handle(
        &mut controller,
        &mut state,
        MapIntent::ActiveVehicleSelected { vehicle: Some(V2) },
    );

    assert!(state.markers.get(v1_marker).is_none());
    assert_eq!(state.markers.waypoint_marker_count(), 2);
    let v2_store = state.fleet.store_id(V2).expect("Store");
    assert!(state
        .waypoint_markers
        .keys()
        .iter()
        .all(|key| key.store == v2_store));

    // Signale aus dem Store von V1 dürfen nichts mehr bewegen
    state.markers.take_journal();
    handle(
        &mut controller,
        &mut state,
        MapIntent::WaypointUpdatedByVehicle {
            vehicle: V1,
            waypoint: Waypoint::new(0, GeoPoint::new(10.0, 10.0), 99.0),
        },
    );
    handle(
        &mut controller,
        &mut state,
        MapIntent::WaypointRemovedByVehicle {
            vehicle: V1,
            waypoint: WaypointId(1),
        },
    );
    handle(
        &mut controller,
        &mut state,
        MapIntent::StoreSignalled(StoreSignal::WaypointListChanged { vehicle: V1 }),
    );

    assert!(state.markers.journal().is_empty());
    // Der Store von V1 selbst wurde trotzdem aktualisiert
    assert_relative_eq!(stored(&state, V1, 0).altitude, 99.0);
}

#[test]
fn test_selecting_none_or_unknown_keeps_active_vehicle() {
    let (mut controller, mut state) = setup();
    let store = state.fleet.store_id(V1).expect("Store");

    handle(
        &mut controller,
        &mut state,
        MapIntent::ActiveVehicleSelected { vehicle: None },
    );
    handle(
        &mut controller,
        &mut state,
        MapIntent::ActiveVehicleSelected {
            vehicle: Some(VehicleId(77)),
        },
    );

    assert_eq!(state.active_vehicle(), Some(V1));
    for channel in Channel::ALL {
        assert!(state.subscription.is_connected(store, channel));
    }
}

#[test]
fn test_clearing_active_vehicle_disconnects_store() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V1,
            waypoints: vec![Waypoint::new(0, GeoPoint::new(47.0, 8.0), 10.0)],
        },
    );

    handle(&mut controller, &mut state, MapIntent::ActiveVehicleCleared);
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V1,
            waypoints: vec![
                Waypoint::new(0, GeoPoint::new(47.0, 8.0), 10.0),
                Waypoint::new(1, GeoPoint::new(47.1, 8.0), 10.0),
            ],
        },
    );

    assert_eq!(state.active_vehicle(), None);
    assert_eq!(state.markers.waypoint_marker_count(), 0);
    assert_eq!(state.subscription.router().connection_count(), 0);
}

#[test]
fn test_position_attitude_and_capabilities_drive_vehicle_marker() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::VehicleAdded {
            vehicle: V2,
            airframe: Airframe::FixedWing,
        },
    );
    handle(
        &mut controller,
        &mut state,
        MapIntent::AttitudeReported {
            vehicle: V1,
            yaw: std::f64::consts::PI,
        },
    );
    for vehicle in [V1, V2] {
        handle(
            &mut controller,
            &mut state,
            MapIntent::PositionReported {
                vehicle,
                coord: GeoPoint::new(47.3, 8.5),
                altitude: 30.0,
                timestamp_us: 1_000,
            },
        );
    }
    handle(
        &mut controller,
        &mut state,
        MapIntent::CapabilitiesChanged {
            vehicle: V2,
            airframe: Airframe::Helicopter,
        },
    );

    let scene = controller.build_map_scene(&state);
    assert_eq!(scene.vehicles.len(), 2);
    let v1 = &scene.vehicles[0];
    assert_eq!(v1.vehicle, V1);
    assert!(v1.selected);
    assert_eq!(v1.icon, VehicleIcon::Multirotor);
    assert_relative_eq!(v1.heading, 180.0);
    let v2 = &scene.vehicles[1];
    assert!(!v2.selected);
    assert_eq!(v2.icon, VehicleIcon::Helicopter);

    // Wechsel setzt die Selektion neu
    handle(
        &mut controller,
        &mut state,
        MapIntent::ActiveVehicleSelected { vehicle: Some(V2) },
    );
    let scene = controller.build_map_scene(&state);
    assert!(!scene.vehicles[0].selected);
    assert!(scene.vehicles[1].selected);
}

#[test]
fn test_unknown_vehicle_position_creates_nothing() {
    let (mut controller, mut state) = setup();

    handle(
        &mut controller,
        &mut state,
        MapIntent::PositionReported {
            vehicle: VehicleId(50),
            coord: GeoPoint::new(1.0, 1.0),
            altitude: 1.0,
            timestamp_us: 0,
        },
    );

    assert!(state.vehicle_markers.is_empty());
    assert!(state.command_log.entries().iter().all(|c| !matches!(
        c,
        MapCommand::UpdateVehiclePosition { .. }
    )));
}

#[test]
fn test_home_and_center_reach_scene() {
    let (mut controller, mut state) = setup();
    state.options.home_safe_area_radius_m = 150;

    handle(
        &mut controller,
        &mut state,
        MapIntent::HomePositionChanged {
            coord: GeoPoint::new(46.5, 6.6),
            altitude: 372.0,
        },
    );
    handle(
        &mut controller,
        &mut state,
        MapIntent::CenterMapRequested {
            coord: "46.52, 6.63".parse().expect("Koordinate sollte gültig sein"),
        },
    );

    let scene = controller.build_map_scene(&state);
    assert_eq!(
        scene.home,
        HomeMarker {
            coord: GeoPoint::new(46.5, 6.6),
            altitude: 372.0,
            safe_area_radius_m: 200,
            visible: true,
        }
    );
    assert_eq!(scene.center, GeoPoint::new(46.52, 6.63));
}

#[test]
fn test_scene_lists_waypoints_in_mission_order() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V1,
            waypoints: vec![
                Waypoint::new(5, GeoPoint::new(1.0, 1.0), 10.0),
                Waypoint::new(2, GeoPoint::new(2.0, 2.0), 10.0),
                Waypoint::new(9, GeoPoint::new(3.0, 3.0), 10.0).with_command(206),
                Waypoint::new(7, GeoPoint::new(4.0, 4.0), 10.0),
            ],
        },
    );

    let scene = controller.build_map_scene(&state);
    let numbers: Vec<u64> = scene.waypoints.iter().map(|w| w.number).collect();
    assert_eq!(numbers, vec![5, 2, 7]);
    assert!(matches!(
        state.markers.get(scene.waypoints[0].marker),
        Some(MapMarker::Waypoint(_))
    ));
}

#[test]
fn test_invalid_mission_surfaces_error_without_side_effects() {
    let (mut controller, mut state) = setup();

    let result = controller.handle_intent(
        &mut state,
        MapIntent::WaypointRemovedByVehicle {
            vehicle: V1,
            waypoint: WaypointId(3),
        },
    );

    assert!(result.is_err());
    assert!(state.waypoint_markers.is_empty());
}

#[test]
fn test_intents_deserialize_from_json() {
    let json = r#"[
        {"VehicleAdded": {"vehicle": 4}},
        {"ActiveVehicleSelected": {"vehicle": 4}},
        {"MissionReceived": {"vehicle": 4, "waypoints": [
            {"id": 0, "position": {"lat": 47.0, "lon": 8.0}, "altitude": 15.0,
             "yaw": 0.0, "frame": "Global", "command": 16, "description": "Start"}
        ]}},
        {"WaypointCreateRequested": {"coord": {"lat": 47.1, "lon": 8.1}}}
    ]"#;
    let intents: Vec<MapIntent> = serde_json::from_str(json).expect("JSON sollte gültig sein");
    let mut controller = MapController::new();
    let mut state = MapState::new();

    for intent in intents {
        handle(&mut controller, &mut state, intent);
    }

    let scene = controller.build_map_scene(&state);
    assert_eq!(scene.active_vehicle, Some(VehicleId(4)));
    assert_eq!(scene.waypoints.len(), 2);
    assert_eq!(scene.waypoints[0].label, "Start");
    assert_relative_eq!(scene.waypoints[1].altitude, 20.0);
}
