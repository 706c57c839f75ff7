//! Marker-Registry: Modell der Kartenoberfläche.
//!
//! Hält alle sichtbaren Marker und protokolliert jede tatsächliche Änderung
//! in einem Journal, das der Renderer abholt. Wie ein Karten-Widget meldet die
//! Registry jede Positionsänderung eines Wegpunkt-Markers als "Marker
//! bearbeitet", solange Benachrichtigungen nicht blockiert sind.

use super::map_marker::{HomeMarker, MapMarker, MarkerId, VehicleIcon, VehicleMarker, WaypointMarker};
use super::{GeoPoint, VehicleId};
use indexmap::IndexMap;
use serde::Serialize;

/// Eine protokollierte Änderung an der Kartenoberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MarkerOp {
    /// Marker erstellt
    Created(MarkerId),
    /// Marker entfernt
    Destroyed(MarkerId),
    /// Position oder Höhe geändert
    Moved(MarkerId),
    /// Heading geändert
    HeadingChanged(MarkerId),
    /// Anzeigenummer geändert
    NumberChanged(MarkerId),
    /// Selektionszustand eines Fahrzeug-Markers geändert
    SelectionChanged { id: MarkerId, selected: bool },
    /// Fahrzeug-Symbol geändert
    IconChanged(MarkerId),
    /// Home-Position geändert
    HomeChanged,
    /// Kartenmittelpunkt geändert
    CenterChanged,
}

impl MarkerOp {
    /// Betroffener Marker, falls die Änderung an einem Marker hängt.
    pub fn marker(&self) -> Option<MarkerId> {
        match *self {
            MarkerOp::Created(id)
            | MarkerOp::Destroyed(id)
            | MarkerOp::Moved(id)
            | MarkerOp::HeadingChanged(id)
            | MarkerOp::NumberChanged(id)
            | MarkerOp::IconChanged(id) => Some(id),
            MarkerOp::SelectionChanged { id, .. } => Some(id),
            MarkerOp::HomeChanged | MarkerOp::CenterChanged => None,
        }
    }
}

/// Alle Marker der Karte.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: IndexMap<MarkerId, MapMarker>,
    next_id: u64,
    journal: Vec<MarkerOp>,
    pending_edits: Vec<MarkerId>,
    notifications_blocked: bool,
    home: HomeMarker,
    center: GeoPoint,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Erstellt einen Wegpunkt-Marker.
    pub fn create_waypoint_marker(
        &mut self,
        coord: GeoPoint,
        altitude: f64,
        label: &str,
    ) -> MarkerId {
        let id = self.allocate_id();
        self.markers.insert(
            id,
            MapMarker::Waypoint(WaypointMarker {
                coord,
                altitude,
                heading: 0.0,
                number: 0,
                label: label.to_string(),
            }),
        );
        self.journal.push(MarkerOp::Created(id));
        id
    }

    /// Erstellt einen Fahrzeug-Marker (unselektiert, Position 0/0).
    pub fn create_vehicle_marker(&mut self, vehicle: VehicleId, icon: VehicleIcon) -> MarkerId {
        let id = self.allocate_id();
        self.markers.insert(
            id,
            MapMarker::Vehicle(VehicleMarker {
                vehicle,
                coord: GeoPoint::default(),
                altitude: 0.0,
                heading: 0.0,
                selected: false,
                icon,
            }),
        );
        self.journal.push(MarkerOp::Created(id));
        id
    }

    /// Entfernt einen Marker. Gibt `false` zurück, wenn er nicht existiert.
    pub fn destroy(&mut self, id: MarkerId) -> bool {
        if self.markers.shift_remove(&id).is_none() {
            return false;
        }
        self.pending_edits.retain(|m| *m != id);
        self.journal.push(MarkerOp::Destroyed(id));
        true
    }

    /// Setzt Position und Höhe eines Markers.
    pub fn set_coord(&mut self, id: MarkerId, coord: GeoPoint, altitude: f64) {
        let raise_edit = !self.notifications_blocked;
        let Some(marker) = self.markers.get_mut(&id) else {
            return;
        };
        let is_waypoint = match marker {
            MapMarker::Waypoint(m) => {
                if m.coord == coord && m.altitude == altitude {
                    return;
                }
                m.coord = coord;
                m.altitude = altitude;
                true
            }
            MapMarker::Vehicle(m) => {
                if m.coord == coord && m.altitude == altitude {
                    return;
                }
                m.coord = coord;
                m.altitude = altitude;
                false
            }
        };
        self.journal.push(MarkerOp::Moved(id));
        if is_waypoint && raise_edit {
            self.pending_edits.push(id);
        }
    }

    /// Setzt das Heading in Grad.
    pub fn set_heading(&mut self, id: MarkerId, heading: f64) {
        let Some(marker) = self.markers.get_mut(&id) else {
            return;
        };
        let slot = match marker {
            MapMarker::Waypoint(m) => &mut m.heading,
            MapMarker::Vehicle(m) => &mut m.heading,
        };
        if *slot != heading {
            *slot = heading;
            self.journal.push(MarkerOp::HeadingChanged(id));
        }
    }

    /// Setzt die Anzeigenummer eines Wegpunkt-Markers.
    pub fn set_number(&mut self, id: MarkerId, number: u64) {
        if let Some(MapMarker::Waypoint(m)) = self.markers.get_mut(&id) {
            if m.number != number {
                m.number = number;
                self.journal.push(MarkerOp::NumberChanged(id));
            }
        }
    }

    /// Setzt den Selektionszustand eines Fahrzeug-Markers.
    pub fn set_selected(&mut self, id: MarkerId, selected: bool) {
        if let Some(MapMarker::Vehicle(m)) = self.markers.get_mut(&id) {
            if m.selected != selected {
                m.selected = selected;
                self.journal.push(MarkerOp::SelectionChanged { id, selected });
            }
        }
    }

    /// Setzt das Symbol eines Fahrzeug-Markers.
    pub fn set_icon(&mut self, id: MarkerId, icon: VehicleIcon) {
        if let Some(MapMarker::Vehicle(m)) = self.markers.get_mut(&id) {
            if m.icon != icon {
                m.icon = icon;
                self.journal.push(MarkerOp::IconChanged(id));
            }
        }
    }

    /// Bediener hat einen Wegpunkt-Marker auf der Karte verschoben.
    ///
    /// Gibt `false` zurück, wenn kein Wegpunkt-Marker mit dieser ID existiert.
    pub fn drag_marker(&mut self, id: MarkerId, coord: GeoPoint, altitude: f64) -> bool {
        if !matches!(self.markers.get(&id), Some(MapMarker::Waypoint(_))) {
            return false;
        }
        self.set_coord(id, coord, altitude);
        true
    }

    /// Führt `f` mit blockierten "Marker bearbeitet"-Meldungen aus.
    /// Der vorherige Zustand wird danach wiederhergestellt.
    pub fn without_notifications<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = std::mem::replace(&mut self.notifications_blocked, true);
        let result = f(self);
        self.notifications_blocked = previous;
        result
    }

    /// Holt alle ausstehenden "Marker bearbeitet"-Meldungen ab.
    pub fn take_pending_edits(&mut self) -> Vec<MarkerId> {
        std::mem::take(&mut self.pending_edits)
    }

    /// Ob "Marker bearbeitet"-Meldungen ausstehen.
    pub fn has_pending_edits(&self) -> bool {
        !self.pending_edits.is_empty()
    }

    /// Liefert einen Marker.
    pub fn get(&self, id: MarkerId) -> Option<&MapMarker> {
        self.markers.get(&id)
    }

    /// Position eines Markers.
    pub fn coord_of(&self, id: MarkerId) -> Option<GeoPoint> {
        self.markers.get(&id).map(MapMarker::coord)
    }

    /// Höhe eines Markers.
    pub fn altitude_of(&self, id: MarkerId) -> Option<f64> {
        self.markers.get(&id).map(MapMarker::altitude)
    }

    /// IDs aller Fahrzeug-Marker mit ihrem Fahrzeug.
    pub fn vehicle_markers(&self) -> Vec<(MarkerId, VehicleId)> {
        self.markers
            .iter()
            .filter_map(|(id, m)| m.as_vehicle().map(|v| (*id, v.vehicle)))
            .collect()
    }

    /// Anzahl der Wegpunkt-Marker.
    pub fn waypoint_marker_count(&self) -> usize {
        self.markers
            .values()
            .filter(|m| m.as_waypoint().is_some())
            .count()
    }

    /// Iterator über alle Marker in Erstellungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&MarkerId, &MapMarker)> {
        self.markers.iter()
    }

    /// Anzahl aller Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Ob keine Marker existieren.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Setzt die Home-Position.
    pub fn set_home(&mut self, home: HomeMarker) {
        if self.home != home {
            self.home = home;
            self.journal.push(MarkerOp::HomeChanged);
        }
    }

    /// Aktuelle Home-Position.
    pub fn home(&self) -> &HomeMarker {
        &self.home
    }

    /// Setzt den Kartenmittelpunkt.
    pub fn set_center(&mut self, center: GeoPoint) {
        if self.center != center {
            self.center = center;
            self.journal.push(MarkerOp::CenterChanged);
        }
    }

    /// Aktueller Kartenmittelpunkt.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Read-only Sicht auf das Änderungsjournal.
    pub fn journal(&self) -> &[MarkerOp] {
        &self.journal
    }

    /// Holt das Journal ab (Renderer-Seite) und leert es.
    pub fn take_journal(&mut self) -> Vec<MarkerOp> {
        std::mem::take(&mut self.journal)
    }
}
