// Declare the main modules
pub mod bot;
pub mod callbacks;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod import;
pub mod interactions;
pub mod league;
pub mod reports;
pub mod router;

pub use bot::Bot;
pub use config::Config;
pub use league::League;
