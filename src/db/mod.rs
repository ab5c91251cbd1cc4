pub mod connection;
pub mod kv;

pub use connection::Database;
