use diesel::r2d2::{self, ConnectionManager};
use diesel::pg::PgConnection;

// Define the common DBPool type alias, making it available to submodules
pub type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;

// Declare the repository implementation modules
pub mod game_results;
pub mod season;
pub mod standings;
pub mod teams;
pub mod users;
pub mod weeks;
