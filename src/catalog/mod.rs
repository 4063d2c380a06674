//! The in-memory prompt catalog and the sources it is loaded from.

mod source;
mod store;

pub use source::{DataSource, FileSource, JsonSource, Prefetched};
pub use store::CatalogStore;
