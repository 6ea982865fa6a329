//! # 产品服务
//!
//! 基于 Axum + SQLx (PostgreSQL) 的产品 CRUD 服务：
//! - `app`：产品与分类的存储、业务服务与 HTTP 处理器
//! - `core`：统一错误类型与请求日志中间件
//! - `infrastructure`：数据库连接池与日志初始化
//! - `config`：配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use std::time::Duration;

use axum::{http::HeaderValue, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use app::AppState;
pub use config::Config;
pub use crate::core::{CoreError, CoreResult};

/// 组装带中间件的完整应用
pub fn build_app(state: AppState, server: &config::ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    app::routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(crate::core::middleware::request_logging))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(server.timeout_seconds)))
            .layer(cors),
    )
}
