use crate::application::ports::cache::TaskCache;
use crate::domain::entities::Task;
use crate::domain::value_objects::TaskId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// メモリ上のタスク実体ストア
#[derive(Default)]
pub struct MemoryTaskCache {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl MemoryTaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        let tasks = self.tasks.read().await;
        tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TaskCache for MemoryTaskCache {
    async fn get(&self, id: &TaskId) -> Option<Task> {
        let tasks = self.tasks.read().await;
        tasks.get(id).cloned()
    }

    async fn put(&self, task: Task) {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id.clone(), task);
    }

    async fn remove(&self, id: &TaskId) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        tasks.remove(id)
    }

    async fn put_all(&self, incoming: Vec<Task>) {
        // 一括反映。新しいセットに含まれない実体はそのまま残す
        let mut tasks = self.tasks.write().await;
        for task in incoming {
            tasks.insert(task.id.clone(), task);
        }
    }
}
