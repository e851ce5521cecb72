use async_trait::async_trait;
use nt_core::{Block, DocumentStore, Error, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// One recorded `append_children` call.
#[derive(Debug, Clone)]
pub struct AppendCall {
    pub parent_id: String,
    pub children: Vec<Block>,
}

/// Holds the calls of the report being written. An append under a parent this
/// store did not issue starts a new report and drops the previous one.
#[derive(Default)]
pub struct MemoryStore {
    calls: Vec<AppendCall>,
    issued: HashSet<String>,
    next_call: usize,
    fail_at: Option<(usize, u16)>,
}

impl MemoryStore {
    fn append(&mut self, parent_id: &str, children: &[Block]) -> Result<Vec<String>> {
        if !self.issued.contains(parent_id) {
            self.calls.clear();
            self.issued.clear();
        }

        let index = self.next_call;
        self.next_call += 1;
        self.calls.push(AppendCall {
            parent_id: parent_id.to_string(),
            children: children.to_vec(),
        });
        if let Some((fail_index, status)) = self.fail_at {
            if fail_index == index {
                return Err(Error::status(status, "injected failure"));
            }
        }

        let ids: Vec<String> = (0..children.len())
            .map(|i| format!("memory-{}-{}", index, i))
            .collect();
        self.issued.extend(ids.iter().cloned());
        Ok(ids)
    }
}

/// Keeps appended blocks in memory and logs them instead of sending them anywhere.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the `call`-th append (zero-based, counted over the store's
    /// lifetime) answer with `status`.
    pub fn failing_at(call: usize, status: u16) -> Self {
        let store = MemoryStore {
            fail_at: Some((call, status)),
            ..MemoryStore::default()
        };
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn calls(&self) -> Vec<AppendCall> {
        self.store.read().await.calls.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStorage {
    async fn append_children(&self, parent_id: &str, children: &[Block]) -> Result<Vec<String>> {
        let rendered = serde_json::to_string_pretty(children)?;
        info!("🗒️ Appending {} blocks under {}:\n{}", children.len(), parent_id, rendered);
        let mut store = self.store.write().await;
        store.append(parent_id, children)
    }
}
