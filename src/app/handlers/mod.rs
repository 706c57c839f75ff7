//! Feature-Handler für MapCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod vehicles;
pub mod view;
pub mod waypoints;
