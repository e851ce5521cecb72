pub mod blocks;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod storage;
pub mod types;

pub use blocks::{Block, RichText};
pub use config::{Settings, StoreKind};
pub use error::Error;
pub use models::InferenceModel;
pub use search::{NewsSearch, PageFetcher, SearchHit};
pub use storage::DocumentStore;
pub use types::{EnrichedArticle, RawArticle, SeenLinks};

pub type Result<T> = std::result::Result<T, Error>;
