pub mod collector;
pub mod manager;
pub mod scrapers;

pub use collector::{Collector, CollectorConfig};
pub use manager::{NewsManager, RunReport};
pub use scrapers::naver::NaverSearch;
pub use scrapers::press::{HttpPageFetcher, PressDetector};

pub mod prelude {
    pub use super::collector::{Collector, CollectorConfig};
    pub use super::manager::{NewsManager, RunReport};
    pub use nt_core::{EnrichedArticle, Error, RawArticle, Result};
}
