pub mod models;
pub mod pages;
pub mod routes;
pub mod sample;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use bookshelf_kernel::{InitCtx, Module};
use bookshelf_store::SharedCollection;

use self::models::BookFields;
use self::service::BookService;

/// Books module: lists, creates, and deletes book records rendered as
/// server-generated HTML pages.
pub struct BooksModule {
    service: Arc<BookService>,
}

impl BooksModule {
    pub fn new(collection: SharedCollection<BookFields>) -> Self {
        Self {
            service: Arc::new(BookService::new(collection)),
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.service.clone())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module over the given collection
pub fn create_module(collection: SharedCollection<BookFields>) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(collection))
}
