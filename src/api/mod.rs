//! HTTP 接口层
//!
//! 负责路由、请求解析和错误响应，不包含业务逻辑

pub mod handlers;
pub mod rejection;
pub mod routes;

pub use routes::routes;
