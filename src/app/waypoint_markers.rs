//! Bidirektionale Zuordnung Wegpunkt ⇔ Marker.

use super::echo_guard::WaypointKey;
use crate::core::MarkerId;
use indexmap::IndexMap;

/// Injektive Zuordnung in beide Richtungen.
///
/// Jeder Wegpunkt hat höchstens einen Marker und umgekehrt. Die
/// Einfügereihenfolge bleibt erhalten, damit Abgleiche deterministisch laufen.
#[derive(Debug, Default)]
pub struct WaypointMarkerMap {
    to_marker: IndexMap<WaypointKey, MarkerId>,
    to_waypoint: IndexMap<MarkerId, WaypointKey>,
}

impl WaypointMarkerMap {
    /// Erstellt eine leere Zuordnung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verknüpft Wegpunkt und Marker. Bestehende Verknüpfungen beider Seiten
    /// werden vorher gelöst.
    pub fn insert(&mut self, key: WaypointKey, marker: MarkerId) {
        if let Some(old_marker) = self.to_marker.shift_remove(&key) {
            self.to_waypoint.shift_remove(&old_marker);
        }
        if let Some(old_key) = self.to_waypoint.shift_remove(&marker) {
            self.to_marker.shift_remove(&old_key);
        }
        self.to_marker.insert(key, marker);
        self.to_waypoint.insert(marker, key);
    }

    /// Löst die Verknüpfung eines Wegpunkts und gibt dessen Marker zurück.
    pub fn remove_waypoint(&mut self, key: WaypointKey) -> Option<MarkerId> {
        let marker = self.to_marker.shift_remove(&key)?;
        self.to_waypoint.shift_remove(&marker);
        Some(marker)
    }

    /// Marker eines Wegpunkts.
    pub fn marker_for(&self, key: WaypointKey) -> Option<MarkerId> {
        self.to_marker.get(&key).copied()
    }

    /// Wegpunkt eines Markers.
    pub fn waypoint_for(&self, marker: MarkerId) -> Option<WaypointKey> {
        self.to_waypoint.get(&marker).copied()
    }

    /// Ob der Wegpunkt einen Marker hat.
    pub fn contains(&self, key: WaypointKey) -> bool {
        self.to_marker.contains_key(&key)
    }

    /// Schnappschuss aller verknüpften Wegpunkte (in Einfügereihenfolge).
    pub fn keys(&self) -> Vec<WaypointKey> {
        self.to_marker.keys().copied().collect()
    }

    /// Iterator über alle Paare.
    pub fn iter(&self) -> impl Iterator<Item = (WaypointKey, MarkerId)> + '_ {
        self.to_marker.iter().map(|(k, m)| (*k, *m))
    }

    /// Anzahl der Verknüpfungen.
    pub fn len(&self) -> usize {
        self.to_marker.len()
    }

    /// Ob keine Verknüpfungen existieren.
    pub fn is_empty(&self) -> bool {
        self.to_marker.is_empty()
    }

    /// Prüft, dass beide Richtungen exakt zueinander passen.
    pub fn is_consistent(&self) -> bool {
        self.to_marker.len() == self.to_waypoint.len()
            && self
                .to_marker
                .iter()
                .all(|(k, m)| self.to_waypoint.get(m) == Some(k))
    }
}
