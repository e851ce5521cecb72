use async_trait::async_trait;

use crate::blocks::Block;
use crate::Result;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends `children` under the block or page `parent_id` and returns the
    /// identifiers of the newly created top-level children, in order.
    async fn append_children(&self, parent_id: &str, children: &[Block]) -> Result<Vec<String>>;
}
