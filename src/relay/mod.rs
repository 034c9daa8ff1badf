//! Issue 中继模块
//!
//! Input: 调用方 POST 请求体、启动时注入的上游凭据
//! Output: 上游 JSON 响应（包装为信封）
//! Pos: 唯一的业务层，负责 CORS、转发与错误映射

mod error;
mod handlers;
mod middleware;
mod router;
pub mod types;
mod upstream;

pub use middleware::RelayState;
pub use router::create_relay_router;
pub use upstream::IssueClient;
