pub mod books;

use bookshelf_kernel::ModuleRegistry;
use bookshelf_store::SharedCollection;

use self::books::models::BookFields;

/// Register all project modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, books_collection: SharedCollection<BookFields>) {
    registry.register(books::create_module(books_collection));
}
