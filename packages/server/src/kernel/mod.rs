// Kernel - infrastructure shared by every domain

pub mod database;

pub use database::Database;
