pub mod database;

pub use database::{DatabaseProbe, PostgresProbe};
