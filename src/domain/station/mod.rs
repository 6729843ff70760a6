//! Station Context - 车站限界上下文
//!
//! 职责:
//! - 车站名称校验
//! - Station 聚合

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Station;
pub use errors::StationError;
pub use value_objects::{StationId, StationName};
