//! MapIntent- und MapCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::MapCommand;
pub use intent::MapIntent;
