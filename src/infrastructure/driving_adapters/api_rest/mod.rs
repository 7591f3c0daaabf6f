//! REST API Module
//!
//! Contains HTTP handlers, DTOs, extractors and middleware for the REST API,
//! plus the assembly of the full router.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use axum::{
    extract::FromRef,
    http::HeaderValue,
    response::{IntoResponse, Response},
    Router,
};
use governor::middleware::NoOpMiddleware;
use sqlx::PgPool;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorLayer,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::CrudUseCase;
use crate::domain::gateways::Validation;
use crate::domain::models::{Merchant, Module, ReceiptType, Store, StoreType, UserType, View};
use crate::infrastructure::driven_adapters::config::{AppConfig, RateLimitConfig};
use crate::infrastructure::driven_adapters::{
    PgCatalogEntity, PostgresCatalogRepository, PostgresValidation,
};
use crate::shared::panic_guard::PanicGuard;

use handlers::{catalog, RestResource};

/// Application state shared across all handlers
#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub merchants: Arc<CrudUseCase<Merchant>>,
    pub modules: Arc<CrudUseCase<Module>>,
    pub receipt_types: Arc<CrudUseCase<ReceiptType>>,
    pub store_types: Arc<CrudUseCase<StoreType>>,
    pub stores: Arc<CrudUseCase<Store>>,
    pub user_types: Arc<CrudUseCase<UserType>>,
    pub views: Arc<CrudUseCase<View>>,
}

impl AppState {
    /// Wire every catalog use case to PostgreSQL
    #[must_use]
    pub fn postgres(config: AppConfig, pool: &PgPool) -> Self {
        let validation: Arc<dyn Validation> = Arc::new(PostgresValidation::new(pool.clone()));
        let timeout = config.use_case.timeout();

        Self {
            config: Arc::new(config),
            merchants: postgres_use_case(pool, &validation, timeout),
            modules: postgres_use_case(pool, &validation, timeout),
            receipt_types: postgres_use_case(pool, &validation, timeout),
            store_types: postgres_use_case(pool, &validation, timeout),
            stores: postgres_use_case(pool, &validation, timeout),
            user_types: postgres_use_case(pool, &validation, timeout),
            views: postgres_use_case(pool, &validation, timeout),
        }
    }
}

fn postgres_use_case<E: PgCatalogEntity>(
    pool: &PgPool,
    validation: &Arc<dyn Validation>,
    timeout: Duration,
) -> Arc<CrudUseCase<E>> {
    Arc::new(CrudUseCase::new(
        Arc::new(PostgresCatalogRepository::<E>::new(pool.clone())),
        Arc::clone(validation),
        timeout,
    ))
}

/// Build the application router with every catalog resource and the
/// global layers (CORS, tracing, request id, rate limit, panic net).
///
/// # Errors
///
/// Returns an error when the rate limit settings cannot form a quota.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let config = Arc::clone(&state.config);

    let mut router = Router::new()
        .nest(Merchant::PATH, catalog::router::<Merchant>())
        .nest(Module::PATH, catalog::router::<Module>())
        .nest(ReceiptType::PATH, catalog::router::<ReceiptType>())
        .nest(StoreType::PATH, catalog::router::<StoreType>())
        .nest(Store::PATH, catalog::router::<Store>())
        .nest(UserType::PATH, catalog::router::<UserType>())
        .nest(View::PATH, catalog::router::<View>())
        .with_state(state)
        .layer(CatchPanicLayer::custom(render_panic));

    if config.rate_limit.enabled {
        router = router.layer(rate_limit_layer(&config.rate_limit)?);
    }

    Ok(router
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.allowed_origins)))
}

/// Last-resort net for panics that escape a handler
fn render_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    PanicGuard::recover(payload.as_ref())
        .with_function("HttpHandler")
        .into_response()
}

/// Per-IP quota; needs `into_make_service_with_connect_info`
fn rate_limit_layer(
    config: &RateLimitConfig,
) -> anyhow::Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware>> {
    let period_ms = (1000 / config.requests_per_second.max(1)).max(1);
    let quota = GovernorConfigBuilder::default()
        .per_millisecond(period_ms)
        .burst_size(config.burst_size)
        .finish()
        .ok_or_else(|| anyhow!("rate_limit.burst_size must be at least 1"))?;

    Ok(GovernorLayer {
        config: Arc::new(quota),
    })
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(CorsAny)
        .allow_headers(CorsAny);

    if allowed_origins.is_empty() {
        return layer.allow_origin(CorsAny);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
