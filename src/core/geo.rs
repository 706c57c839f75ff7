//! Geographische Koordinaten (WGS84) und Heading-Umrechnung.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Punkt im WGS84-Ellipsoid (Grad).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt aus Breiten- und Längengrad.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Fehler beim Parsen einer `lat,lon`-Eingabe.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoParseError {
    /// Nicht genau zwei kommagetrennte Werte
    #[error("Erwartet 'lat,lon', erhalten: '{0}'")]
    Format(String),
    /// Einer der Werte ist keine Zahl
    #[error("Ungültige Koordinate: '{0}'")]
    Number(String),
}

impl FromStr for GeoPoint {
    type Err = GeoParseError;

    /// Parst `"47.397,8.545"` in einen Punkt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [lat, lon] = parts[..] else {
            return Err(GeoParseError::Format(s.to_string()));
        };
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| GeoParseError::Number(v.trim().to_string()))
        };
        Ok(Self::new(parse(lat)?, parse(lon)?))
    }
}

/// Rechnet einen Gierwinkel in Radiant in Grad für die Anzeige um.
pub fn heading_degrees(yaw_rad: f64) -> f64 {
    yaw_rad / std::f64::consts::PI * 180.0
}
