use gcs_waypoint_map::app::WaypointKey;
use gcs_waypoint_map::{
    Airframe, CoordinateFrame, GeoPoint, MapController, MapIntent, MapState, MarkerOp, VehicleId,
    Waypoint, WaypointId, WaypointStore,
};
use std::collections::{BTreeSet, HashSet};

const V: VehicleId = VehicleId(1);

fn handle(controller: &mut MapController, state: &mut MapState, intent: MapIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn setup() -> (MapController, MapState) {
    let mut controller = MapController::new();
    let mut state = MapState::new();
    handle(
        &mut controller,
        &mut state,
        MapIntent::VehicleAdded {
            vehicle: V,
            airframe: Airframe::Hexarotor,
        },
    );
    handle(
        &mut controller,
        &mut state,
        MapIntent::ActiveVehicleSelected { vehicle: Some(V) },
    );
    (controller, state)
}

/// Deterministischer Pseudozufall (LCG), damit die Testfälle reproduzierbar bleiben.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn random_waypoint(rng: &mut Lcg, id: u64) -> Waypoint {
    let frame = match rng.below(4) {
        0 => CoordinateFrame::LocalNed,
        1 => CoordinateFrame::GlobalRelativeAlt,
        _ => CoordinateFrame::Global,
    };
    let command = if rng.below(5) == 0 { 178 } else { 16 };
    Waypoint::new(
        id,
        GeoPoint::new(47.0 + rng.below(100) as f64 * 0.001, 8.0),
        10.0 + rng.below(50) as f64,
    )
    .with_frame(frame)
    .with_command(command)
}

fn expected_keys(state: &MapState) -> BTreeSet<WaypointKey> {
    let store_id = state.fleet.store_id(V).expect("Store");
    state
        .fleet
        .store(V)
        .expect("Store")
        .global_nav_waypoints()
        .iter()
        .map(|wp| WaypointKey::new(store_id, wp.id))
        .collect()
}

fn associated_keys(state: &MapState) -> BTreeSet<WaypointKey> {
    state.waypoint_markers.keys().into_iter().collect()
}

fn assert_injective(state: &MapState) {
    let markers: HashSet<_> = state.waypoint_markers.iter().map(|(_, m)| m).collect();
    let waypoints: HashSet<_> = state.waypoint_markers.iter().map(|(k, _)| k).collect();
    assert_eq!(markers.len(), state.waypoint_markers.len());
    assert_eq!(waypoints.len(), state.waypoint_markers.len());
    assert!(state.waypoint_markers.is_consistent());
    assert_eq!(
        state.markers.waypoint_marker_count(),
        state.waypoint_markers.len(),
        "Jeder Wegpunkt-Marker muss zugeordnet sein"
    );
}

#[test]
fn test_list_update_converges_after_random_mutations() {
    let (mut controller, mut state) = setup();
    let mut rng = Lcg(0x5eed);

    for round in 0..40 {
        let len = state.fleet.store(V).expect("Store").waypoint_list().len() as u64;
        let intent = match rng.below(4) {
            0 => {
                let count = rng.below(12);
                MapIntent::MissionReceived {
                    vehicle: V,
                    waypoints: (0..count).map(|id| random_waypoint(&mut rng, id)).collect(),
                }
            }
            1 if len > 0 => {
                let id = state.fleet.store(V).expect("Store").waypoint_list()
                    [rng.below(len) as usize]
                    .id;
                MapIntent::WaypointUpdatedByVehicle {
                    vehicle: V,
                    waypoint: random_waypoint(&mut rng, id.0),
                }
            }
            2 if len > 0 => {
                let id = state.fleet.store(V).expect("Store").waypoint_list()
                    [rng.below(len) as usize]
                    .id;
                MapIntent::WaypointRemovedByVehicle {
                    vehicle: V,
                    waypoint: id,
                }
            }
            _ => MapIntent::WaypointCreateRequested {
                coord: GeoPoint::new(46.0, 7.0 + round as f64 * 0.01),
                altitude: None,
            },
        };
        handle(&mut controller, &mut state, intent);

        assert_injective(&state);
        assert_eq!(
            associated_keys(&state),
            expected_keys(&state),
            "Runde {round}: Zuordnung weicht von der globalen Navigationsliste ab"
        );
    }
}

#[test]
fn test_filtered_waypoints_never_get_markers() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V,
            waypoints: vec![
                Waypoint::new(0, GeoPoint::new(47.0, 8.0), 10.0),
                Waypoint::new(1, GeoPoint::new(47.1, 8.0), 10.0)
                    .with_frame(CoordinateFrame::LocalEnu),
                Waypoint::new(2, GeoPoint::new(47.2, 8.0), 10.0).with_command(20),
                Waypoint::new(3, GeoPoint::new(47.3, 8.0), 10.0).with_command(112),
            ],
        },
    );

    for _ in 0..5 {
        for id in [1, 3] {
            let waypoint = state
                .fleet
                .store(V)
                .and_then(|s| s.waypoint(WaypointId(id)))
                .cloned()
                .expect("Wegpunkt");
            handle(
                &mut controller,
                &mut state,
                MapIntent::WaypointUpdatedByVehicle {
                    vehicle: V,
                    waypoint,
                },
            );
        }
    }

    assert!(state.marker_of_waypoint(V, WaypointId(1)).is_none());
    assert!(state.marker_of_waypoint(V, WaypointId(3)).is_none());
    // RETURN_TO_LAUNCH (20) liegt unter 95 und zählt als Navigation
    assert!(state.marker_of_waypoint(V, WaypointId(2)).is_some());
    assert_eq!(state.waypoint_markers.len(), 2);
}

#[test]
fn test_waypoint_leaving_global_frame_loses_marker() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V,
            waypoints: vec![
                Waypoint::new(0, GeoPoint::new(47.0, 8.0), 10.0),
                Waypoint::new(1, GeoPoint::new(47.1, 8.0), 10.0),
            ],
        },
    );
    let marker = state
        .marker_of_waypoint(V, WaypointId(1))
        .expect("Marker");

    handle(
        &mut controller,
        &mut state,
        MapIntent::WaypointUpdatedByVehicle {
            vehicle: V,
            waypoint: Waypoint::new(1, GeoPoint::new(47.1, 8.0), 10.0)
                .with_frame(CoordinateFrame::Mission),
        },
    );

    assert!(state.markers.get(marker).is_none());
    assert_eq!(associated_keys(&state), expected_keys(&state));
}

#[test]
fn test_reselecting_same_vehicle_keeps_markers_stable() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V,
            waypoints: vec![
                Waypoint::new(0, GeoPoint::new(47.0, 8.0), 10.0),
                Waypoint::new(1, GeoPoint::new(47.1, 8.0), 10.0),
            ],
        },
    );
    let before: Vec<_> = state.waypoint_markers.iter().collect();
    state.markers.take_journal();

    handle(
        &mut controller,
        &mut state,
        MapIntent::ActiveVehicleSelected { vehicle: Some(V) },
    );

    let after: Vec<_> = state.waypoint_markers.iter().collect();
    assert_eq!(before, after);
    assert!(state.markers.journal().is_empty());
}

#[test]
fn test_reordered_mission_keeps_markers_and_follows_new_order() {
    let (mut controller, mut state) = setup();
    handle(
        &mut controller,
        &mut state,
        MapIntent::MissionReceived {
            vehicle: V,
            waypoints: vec![
                Waypoint::new(0, GeoPoint::new(47.0, 8.0), 10.0),
                Waypoint::new(1, GeoPoint::new(47.1, 8.0), 10.0)
                    .with_frame(CoordinateFrame::LocalNed),
                Waypoint::new(2, GeoPoint::new(47.2, 8.0), 10.0),
                Waypoint::new(3, GeoPoint::new(47.3, 8.0), 10.0),
            ],
        },
    );
    let before: BTreeSet<_> = state.waypoint_markers.iter().collect();
    state.markers.take_journal();

    handle(
        &mut controller,
        &mut state,
        MapIntent::WaypointMovedByVehicle {
            vehicle: V,
            from: 3,
            to: 0,
        },
    );

    let order: Vec<_> = state
        .fleet
        .store(V)
        .expect("Store")
        .waypoint_list()
        .iter()
        .map(|wp| wp.id.0)
        .collect();
    assert_eq!(order, vec![3, 0, 1, 2]);

    let after: BTreeSet<_> = state.waypoint_markers.iter().collect();
    assert_eq!(before, after);
    assert!(state
        .markers
        .journal()
        .iter()
        .all(|op| !matches!(op, MarkerOp::Created(_) | MarkerOp::Destroyed(_))));
    assert_injective(&state);

    let scene = controller.build_map_scene(&state);
    let numbers: Vec<_> = scene.waypoints.iter().map(|item| item.number).collect();
    assert_eq!(numbers, vec![3, 0, 2]);
}
