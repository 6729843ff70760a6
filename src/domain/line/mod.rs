//! Line Context - 线路限界上下文
//!
//! 职责:
//! - 线路名称、颜色、区间距离校验
//! - 上下行端点约束
//! - Line 聚合（名称/颜色可变，端点与距离不可变）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Line;
pub use errors::LineError;
pub use value_objects::{Distance, LineColor, LineEndpoints, LineId, LineName};
