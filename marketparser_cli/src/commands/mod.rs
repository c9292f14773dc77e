//! CLI subcommand implementations.

pub mod campaigns;
pub mod prices;
pub mod reports;
