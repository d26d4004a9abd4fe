use crate::application::ports::gateway::TaskGateway;
use crate::domain::entities::{Task, TaskDraft, TaskPage};
use crate::domain::value_objects::{PageRequest, TaskId, TaskStatus};
use crate::shared::error::{AppError, RemoteErrorKind};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// リモートストアのメモリ実装。
///
/// 採番・タイムスタンプ・並び順をサーバー側の権威として再現する。
/// 一覧は作成の新しい順で返す。結合テストと開発用。
#[derive(Default)]
pub struct MemoryTaskGateway {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl MemoryTaskGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, drafts: Vec<TaskDraft>) -> Vec<Task> {
        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let task = self.insert(&draft).await;
            created.push(task);
        }
        created
    }

    pub async fn total(&self) -> u64 {
        let tasks = self.tasks.read().await;
        tasks.len() as u64
    }

    async fn insert(&self, draft: &TaskDraft) -> Task {
        let id = TaskId::new(Uuid::new_v4().to_string()).expect("uuid is never empty");
        let task = Task::from_draft(id, draft, Utc::now());
        let mut tasks = self.tasks.write().await;
        // 新しいものが先頭
        tasks.insert(0, task.clone());
        task
    }

    fn not_found(id: &TaskId) -> AppError {
        AppError::remote(RemoteErrorKind::NotFound, format!("no such task: {id}"))
    }
}

#[async_trait]
impl TaskGateway for MemoryTaskGateway {
    async fn fetch_page(&self, request: PageRequest) -> Result<TaskPage, AppError> {
        let tasks = self.tasks.read().await;
        let total_items = tasks.len() as u64;
        let items = tasks
            .iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .collect();
        Ok(TaskPage::new(request, items, total_items))
    }

    async fn fetch_task(&self, id: &TaskId) -> Result<Task, AppError> {
        let tasks = self.tasks.read().await;
        tasks
            .iter()
            .find(|task| task.id == *id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, AppError> {
        Ok(self.insert(draft).await)
    }

    async fn replace_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().await;
        let slot = tasks
            .iter_mut()
            .find(|task| task.id == *id)
            .ok_or_else(|| Self::not_found(id))?;
        slot.apply_draft(draft, Utc::now());
        Ok(slot.clone())
    }

    async fn patch_status(&self, id: &TaskId, status: TaskStatus) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().await;
        let slot = tasks
            .iter_mut()
            .find(|task| task.id == *id)
            .ok_or_else(|| Self::not_found(id))?;
        slot.apply_status(status, Utc::now());
        Ok(slot.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), AppError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|task| task.id != *id);
        if tasks.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
