//! GCS Waypoint Map Replay.
//!
//! Spielt ein JSON-Szenario aus Map-Intents durch den Controller und gibt die
//! resultierende Karten-Szene als JSON aus.
//!
//! Aufruf: `gcs-map-replay <szenario.json> [lat,lon]`

use anyhow::Context;
use gcs_waypoint_map::{GeoPoint, MapController, MapIntent, MapOptions, MapState};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    ReplayRunner::run()
}

struct ReplayRunner;

impl ReplayRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("GCS Waypoint Map Replay v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut args = std::env::args().skip(1);
        let scenario_path = args
            .next()
            .map(PathBuf::from)
            .context("Aufruf: gcs-map-replay <szenario.json> [lat,lon]")?;
        let center = args.next().and_then(|raw| match raw.parse::<GeoPoint>() {
            Ok(coord) => Some(coord),
            Err(e) => {
                log::warn!("Ungültiger Kartenmittelpunkt '{}': {}", raw, e);
                None
            }
        });

        // Optionen aus TOML laden (oder Standardwerte)
        let options = MapOptions::load_from_file(&MapOptions::config_path());
        let mut state = MapState::with_options(options);
        let mut controller = MapController::new();

        let intents = Self::load_scenario(&scenario_path)?;
        log::info!(
            "Szenario {} geladen: {} Intents",
            scenario_path.display(),
            intents.len()
        );

        if let Some(coord) = center {
            Self::process(&mut controller, &mut state, MapIntent::CenterMapRequested { coord });
        }
        for intent in intents {
            Self::process(&mut controller, &mut state, intent);
        }

        let scene = controller.build_map_scene(&state);
        let json = serde_json::to_string_pretty(&scene)
            .context("Karten-Szene konnte nicht serialisiert werden")?;
        println!("{json}");

        log::info!(
            "Replay beendet: {} Commands, {} Wegpunkt-Marker",
            state.command_log.len(),
            state.waypoint_marker_count()
        );
        Ok(())
    }

    fn load_scenario(path: &Path) -> anyhow::Result<Vec<MapIntent>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szenario {} nicht lesbar", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Szenario {} ist kein gültiges Intent-Array", path.display()))
    }

    fn process(controller: &mut MapController, state: &mut MapState, intent: MapIntent) {
        if let Err(e) = controller.handle_intent(state, intent) {
            log::error!("Intent-Verarbeitung fehlgeschlagen: {:#}", e);
        }
    }
}
