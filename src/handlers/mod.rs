pub mod health;
pub mod results;
pub mod standings;
pub mod teams;
pub mod weeks;
