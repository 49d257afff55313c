pub mod catalog;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod update;

pub use pool::Database;
