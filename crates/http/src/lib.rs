//! HTTP server facade for bookshelf: router assembly, page rendering,
//! and redirect-style error handling on top of Axum.

use anyhow::Context;
use axum::{
    response::Redirect,
    routing::get,
    Router,
};

use bookshelf_kernel::ModuleRegistry;

pub mod error;
pub mod page;
pub mod router;

use router::RouterBuilder;

/// Start the HTTP server with the given module registry
pub async fn start_server(
    registry: &ModuleRegistry,
    settings: &bookshelf_kernel::settings::Settings,
) -> anyhow::Result<()> {
    tracing::info!(
        "starting HTTP server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    let app = build_router(registry, settings);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Build the main HTTP router with all module routes mounted
pub fn build_router(
    registry: &ModuleRegistry,
    settings: &bookshelf_kernel::settings::Settings,
) -> Router {
    let mut router_builder = RouterBuilder::new();

    router_builder = router_builder
        .route("/healthz", get(health_check))
        .route(error::ERROR_VIEW_PATH, get(error::error_view));

    // The site index redirects to the first registered module.
    if let Some(module) = registry.modules().first() {
        let index_target = format!("/{}", module.name());
        router_builder = router_builder.route(
            "/",
            get(move || async move { Redirect::to(&index_target) }),
        );
    }

    for module in registry.modules() {
        let module_name = module.name();
        let module_router = module.routes();

        tracing::info!(
            module = module_name,
            "mounting module routes under /{}",
            module_name
        );
        router_builder = router_builder.mount_module(module_name, module_router);
    }

    // Global middlewares go on last: `Router::layer` only wraps routes
    // that are already registered.
    router_builder = router_builder
        .with_tracing()
        .with_cors()
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms);

    router_builder.build()
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
