// Declare model modules
pub mod game_results;
pub mod standings;
pub mod teams;
pub mod users;
pub mod weeks;
