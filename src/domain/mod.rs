//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Station Context: 车站管理
//! - Line Context: 线路管理（引用两个车站作为端点）

pub mod line;
pub mod station;
