//! HTTP Layer - RESTful API
//!
//! 车站与线路的 CRUD 接口

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use extract::{ApiJson, ApiPath};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
