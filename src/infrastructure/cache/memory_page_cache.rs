use crate::application::ports::cache::TaskPageCache;
use crate::domain::entities::{Task, TaskPage};
use crate::domain::value_objects::{PageRequest, TaskId};
use crate::shared::config::CacheConfig;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct CacheEntry {
    page: TaskPage,
    expires_at: Instant,
}

/// ページネーション記述子をキーにしたメモリ上の一覧キャッシュ。
///
/// エントリはLRUで上限管理し、TTLを過ぎたページは未登録として扱う。
pub struct MemoryPageCache {
    entries: Arc<RwLock<LruCache<PageRequest, CacheEntry>>>,
    ttl: Duration,
}

impl MemoryPageCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.page_capacity,
            Duration::from_secs(config.page_ttl_secs),
        )
    }

    fn entry(&self, page: TaskPage) -> CacheEntry {
        CacheEntry {
            page,
            expires_at: Instant::now() + self.ttl,
        }
    }
}

#[async_trait]
impl TaskPageCache for MemoryPageCache {
    async fn get_page(&self, request: &PageRequest) -> Option<TaskPage> {
        let mut entries = self.entries.write().await;
        match entries.get(request) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.page.clone()),
            Some(_) => {
                // 期限切れは未登録扱いで落とす
                entries.pop(request);
                None
            }
            None => None,
        }
    }

    async fn set_page(&self, page: TaskPage) {
        let entry = self.entry(page);
        let mut entries = self.entries.write().await;
        entries.put(entry.page.request, entry);
    }

    async fn invalidate_all(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    async fn apply_task_update(&self, task: &Task) {
        let mut entries = self.entries.write().await;
        for (_, entry) in entries.iter_mut() {
            entry.page.replace_task(task);
        }
    }

    async fn apply_removal(&self, id: &TaskId) {
        let mut entries = self.entries.write().await;
        let containing = entries
            .iter()
            .find(|(_, entry)| entry.page.contains(id))
            .map(|(request, _)| *request);

        match containing {
            Some(target) => {
                // 他ページの件数は削除後に信用できないため落とす
                let others: Vec<PageRequest> = entries
                    .iter()
                    .map(|(request, _)| *request)
                    .filter(|request| *request != target)
                    .collect();
                for request in others {
                    entries.pop(&request);
                }
                if let Some(entry) = entries.get_mut(&target) {
                    entry.page.remove_task(id);
                }
            }
            // どのページにも居ない場合も全ページの件数がずれるので全無効化
            None => entries.clear(),
        }
    }

    async fn apply_insertion(&self, _task: &Task) {
        // 置き場所を当てにいかない。全ページ再取得が唯一の安全策
        self.invalidate_all().await;
    }

    async fn snapshot(&self) -> Vec<TaskPage> {
        let entries = self.entries.read().await;
        entries.iter().map(|(_, entry)| entry.page.clone()).collect()
    }

    async fn restore(&self, pages: Vec<TaskPage>) {
        let mut entries = self.entries.write().await;
        entries.clear();
        for page in pages {
            let entry = CacheEntry {
                expires_at: Instant::now() + self.ttl,
                page,
            };
            entries.put(entry.page.request, entry);
        }
    }
}
