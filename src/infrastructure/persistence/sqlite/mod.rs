//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod line_repo;
mod station_repo;

pub use database::*;
pub use line_repo::*;
pub use station_repo::*;
