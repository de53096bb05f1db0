pub mod connection;
pub mod filter;
pub mod matches;
pub mod models;
pub mod players;
pub mod rankings;
pub mod records;
pub mod setup;
pub mod tournaments;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
