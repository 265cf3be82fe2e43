// Declare report submodules
pub mod common;
pub mod game_report;
