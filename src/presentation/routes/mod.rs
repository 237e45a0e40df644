// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::catalog_repository::CatalogRepository;
use crate::infrastructure::cache::cache_manager::CacheManager;
use crate::presentation::handlers::scraper_handler;
use crate::presentation::middleware::admin_auth_middleware::{
    admin_auth_middleware, AdminAuthState,
};
use crate::scheduler::scrape_scheduler::ScrapeScheduler;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// HTTP 层依赖
#[derive(Clone)]
pub struct AppContext {
    pub scheduler: Arc<ScrapeScheduler>,
    pub repository: Arc<dyn CatalogRepository>,
    pub cache: CacheManager,
    pub admin: AdminAuthState,
}

/// 创建应用路由
///
/// 采集接口挂在 `/api/scraper` 下，只有触发接口需要管理令牌
pub fn routes(admin: AdminAuthState) -> Router {
    let protected_routes = Router::new()
        .route("/scrape", post(scraper_handler::trigger_scrape))
        .route_layer(from_fn_with_state(admin, admin_auth_middleware));

    let scraper_routes = Router::new()
        .route("/status", get(scraper_handler::get_status))
        .route("/stats", get(scraper_handler::get_stats))
        .route("/sources", get(scraper_handler::list_sources))
        .merge(protected_routes);

    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .nest("/api/scraper", scraper_routes)
}

/// 组装完整应用：路由、依赖注入与请求追踪
pub fn build_app(context: AppContext) -> Router {
    routes(context.admin)
        .layer(Extension(context.scheduler))
        .layer(Extension(context.repository))
        .layer(Extension(context.cache))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
