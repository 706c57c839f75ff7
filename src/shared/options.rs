//! Zentrale Konfiguration der Kartenansicht.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoPoint, NAV_WAYPOINT};
use serde::{Deserialize, Serialize};

// ── Home ────────────────────────────────────────────────────────────

/// Zulässige Radien der Home-Sicherheitszone in Metern.
pub const SAFE_AREA_RADIUS_LIST_M: [u32; 10] = [5, 10, 20, 50, 100, 200, 500, 1000, 2000, 5000];
/// Standard-Radius der Sicherheitszone.
pub const SAFE_AREA_RADIUS_M: u32 = SAFE_AREA_RADIUS_LIST_M[0];

// ── Wegpunkte ───────────────────────────────────────────────────────

/// Höhe für per Klick erzeugte Wegpunkte (Meter).
pub const DEFAULT_WAYPOINT_ALTITUDE_M: f64 = 20.0;

// ── Abgleich ────────────────────────────────────────────────────────

/// Maximale Runden, in denen "Marker bearbeitet"-Meldungen pro Intent abgeholt werden.
pub const MARKER_EDIT_DRAIN_LIMIT: usize = 8;

/// Alle zur Laufzeit änderbaren Karten-Optionen.
/// Wird als `gcs_waypoint_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    // ── Home ────────────────────────────────────────────────────
    /// Home-Marker anzeigen
    pub show_home: bool,
    /// Radius der Sicherheitszone um Home (Meter, aus `SAFE_AREA_RADIUS_LIST_M`)
    pub home_safe_area_radius_m: u32,

    // ── Wegpunkte ───────────────────────────────────────────────
    /// Höhe neuer Wegpunkte, wenn der Bediener keine angibt
    pub default_waypoint_altitude_m: f64,
    /// Missions-Kommando neuer Wegpunkte
    #[serde(default = "default_waypoint_command")]
    pub default_waypoint_command: u16,

    // ── Abgleich ────────────────────────────────────────────────
    /// Maximale Runden für das Abholen von "Marker bearbeitet"-Meldungen
    #[serde(default = "default_marker_edit_drain_limit")]
    pub marker_edit_drain_limit: usize,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Kartenmittelpunkt beim Start
    pub initial_center: GeoPoint,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            show_home: true,
            home_safe_area_radius_m: SAFE_AREA_RADIUS_M,
            default_waypoint_altitude_m: DEFAULT_WAYPOINT_ALTITUDE_M,
            default_waypoint_command: NAV_WAYPOINT,
            marker_edit_drain_limit: MARKER_EDIT_DRAIN_LIMIT,
            initial_center: GeoPoint::default(),
        }
    }
}

/// Serde-Default für `default_waypoint_command` (Abwärtskompatibilität).
fn default_waypoint_command() -> u16 {
    NAV_WAYPOINT
}

/// Serde-Default für `marker_edit_drain_limit` (Abwärtskompatibilität).
fn default_marker_edit_drain_limit() -> usize {
    MARKER_EDIT_DRAIN_LIMIT
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("gcs_waypoint_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("gcs_waypoint_map.toml")
    }

    /// Radius der Sicherheitszone, gerundet auf den nächstgrößeren zulässigen Wert.
    ///
    /// Werte über dem Maximum werden auf das Maximum begrenzt.
    pub fn safe_area_radius(&self) -> u32 {
        SAFE_AREA_RADIUS_LIST_M
            .iter()
            .copied()
            .find(|r| *r >= self.home_safe_area_radius_m)
            .unwrap_or(SAFE_AREA_RADIUS_LIST_M[SAFE_AREA_RADIUS_LIST_M.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let options = MapOptions {
            initial_center: GeoPoint::new(47.397, 8.545),
            home_safe_area_radius_m: 100,
            ..MapOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: MapOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let text = r#"
            show_home = false
            home_safe_area_radius_m = 20
            default_waypoint_altitude_m = 35.0

            [initial_center]
            lat = 1.0
            lon = 2.0
        "#;
        let parsed: MapOptions = toml::from_str(text).expect("parsebar");
        assert_eq!(parsed.default_waypoint_command, NAV_WAYPOINT);
        assert_eq!(parsed.marker_edit_drain_limit, MARKER_EDIT_DRAIN_LIMIT);
        assert!(!parsed.show_home);
    }

    #[test]
    fn safe_area_radius_snaps_to_allowed_values() {
        let mut options = MapOptions::default();
        options.home_safe_area_radius_m = 30;
        assert_eq!(options.safe_area_radius(), 50);
        options.home_safe_area_radius_m = 9_999;
        assert_eq!(options.safe_area_radius(), 5000);
        options.home_safe_area_radius_m = 0;
        assert_eq!(options.safe_area_radius(), 5);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::path::Path::new("/nonexistent/gcs_waypoint_map.toml");
        assert_eq!(MapOptions::load_from_file(path), MapOptions::default());
    }
}
