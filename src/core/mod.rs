//! 核心层：错误、响应、中间件与分页

pub mod error;
pub mod middleware;
pub mod pagination;
pub mod response;
