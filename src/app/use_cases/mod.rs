//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! - `waypoint_sync` — bidirektionaler Abgleich Wegpunkt <-> Marker
//! - `active_vehicle` — Wechsel und Abwahl des aktiven Fahrzeugs
//! - `vehicle_position` — Positions-Marker je Fahrzeug
//! - `mission` — Mutationen der Missionsliste
//! - `view` — Home-Position und Kartenmittelpunkt

pub mod active_vehicle;
pub mod mission;
pub mod vehicle_position;
pub mod view;
pub mod waypoint_sync;
