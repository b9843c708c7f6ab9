use anyhow::Context;

use bookshelf_app::modules;
use bookshelf_app::modules::books::models::BookFields;
use bookshelf_kernel::settings::Settings;
use bookshelf_kernel::{InitCtx, ModuleRegistry};
use bookshelf_store::SharedCollection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;

    bookshelf_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url,
        name = %settings.database.name,
        "bookshelf bootstrap starting"
    );

    let books: SharedCollection<BookFields> =
        bookshelf_store::open_collection(&settings.database.url, &settings.database.name)
            .context("failed to open the record store")?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, books);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("bookshelf bootstrap complete");

    let served = bookshelf_http::start_server(&registry, &settings).await;

    registry.stop_all().await?;
    served
}
