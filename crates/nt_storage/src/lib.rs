use std::sync::Arc;

use nt_core::{DocumentStore, Result, Settings, StoreKind};

pub mod backends;
pub mod publisher;
pub mod report;

pub use backends::*;
pub use publisher::{PublishOutcome, ReportPublisher};
pub use report::{assemble, Report};

pub fn create_store(settings: &Settings) -> Result<Arc<dyn DocumentStore>> {
    match settings.store {
        StoreKind::Notion => Ok(Arc::new(NotionStorage::new(&settings.notion_token)?)),
        StoreKind::Memory => Ok(Arc::new(MemoryStorage::new())),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::publisher::{PublishOutcome, ReportPublisher};
    pub use super::report::{assemble, Report};
}
