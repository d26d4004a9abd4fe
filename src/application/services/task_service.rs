use crate::application::ports::cache::{TaskCache, TaskPageCache};
use crate::application::ports::gateway::TaskGateway;
use crate::domain::entities::{BoardView, MutationKind, PendingMutation, Task, TaskDraft, TaskPage};
use crate::domain::value_objects::{PageRequest, TaskId, TaskStatus};
use crate::shared::error::AppError;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// タスク変更の調停役。
///
/// 楽観的にローカルへ反映してからリモートに確定を依頼し、結果に応じて
/// コミットかロールバックで実体ストアと一覧キャッシュを揃える。同一タスクへの
/// 変更は同時に1件まで。別タスク同士は自由に並行する。
pub struct TaskService {
    gateway: Arc<dyn TaskGateway>,
    tasks: Arc<dyn TaskCache>,
    pages: Arc<dyn TaskPageCache>,
    in_flight: Mutex<HashMap<TaskId, MutationKind>>,
}

/// 変更の進行印。どの経路で抜けても確実に外れるようDropで解放する
struct InFlightGuard<'a> {
    service: &'a TaskService,
    task_id: TaskId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.service.lock_in_flight();
        in_flight.remove(&self.task_id);
    }
}

impl TaskService {
    pub fn new(
        gateway: Arc<dyn TaskGateway>,
        tasks: Arc<dyn TaskCache>,
        pages: Arc<dyn TaskPageCache>,
    ) -> Self {
        Self {
            gateway,
            tasks,
            pages,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// 作成。IDはサーバー採番のため楽観反映はせず、確定後に取り込む
    pub async fn create_task(&self, draft: TaskDraft) -> Result<Task, AppError> {
        let created = self.gateway.create_task(&draft).await?;

        self.tasks.put(created.clone()).await;
        self.pages.apply_insertion(&created).await;

        info!(task_id = %created.id, "task created");
        Ok(created)
    }

    /// 全フィールド更新
    pub async fn update_task(&self, id: &TaskId, draft: TaskDraft) -> Result<Task, AppError> {
        let current = self.require_cached(id).await?;
        let _guard = self.begin_mutation(id, MutationKind::UpdateFull)?;

        let mut optimistic = current.clone();
        optimistic.apply_draft(&draft, Utc::now());

        let pending = PendingMutation::capture(
            id.clone(),
            MutationKind::UpdateFull,
            Some(current),
            self.pages.snapshot().await,
        )
        .with_optimistic(optimistic.clone());

        self.apply_optimistic(&optimistic).await;

        match self.gateway.replace_task(id, &draft).await {
            Ok(confirmed) => {
                self.commit_update(&confirmed).await;
                info!(task_id = %id, "task updated");
                Ok(confirmed)
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "task update failed; rolling back");
                self.roll_back(pending).await;
                Err(err)
            }
        }
    }

    /// ドラッグ&ドロップ由来の状態変更
    pub async fn change_status(&self, id: &TaskId, status: TaskStatus) -> Result<Task, AppError> {
        let current = self.require_cached(id).await?;

        // 同一カラムへのドロップは有効な no-op。リモートは呼ばない
        if current.status == status {
            debug!(task_id = %id, status = %status, "status unchanged; skipping remote call");
            return Ok(current);
        }

        let _guard = self.begin_mutation(id, MutationKind::UpdateStatus)?;

        let mut optimistic = current.clone();
        optimistic.apply_status(status, Utc::now());

        let pending = PendingMutation::capture(
            id.clone(),
            MutationKind::UpdateStatus,
            Some(current),
            self.pages.snapshot().await,
        )
        .with_optimistic(optimistic.clone());

        self.apply_optimistic(&optimistic).await;

        match self.gateway.patch_status(id, status).await {
            Ok(confirmed) => {
                self.commit_update(&confirmed).await;
                info!(task_id = %id, status = %status, "task status updated");
                Ok(confirmed)
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "status update failed; rolling back");
                self.roll_back(pending).await;
                Err(err)
            }
        }
    }

    /// 削除。含まれるページは先に詰めておき、失敗したら書き戻す
    pub async fn delete_task(&self, id: &TaskId) -> Result<(), AppError> {
        let current = self.require_cached(id).await?;
        let _guard = self.begin_mutation(id, MutationKind::Delete)?;

        let pending = PendingMutation::capture(
            id.clone(),
            MutationKind::Delete,
            Some(current),
            self.pages.snapshot().await,
        );

        self.tasks.remove(id).await;
        self.pages.apply_removal(id).await;

        match self.gateway.delete_task(id).await {
            Ok(()) => {
                info!(task_id = %id, "task deleted");
                Ok(())
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "task delete failed; rolling back");
                self.roll_back(pending).await;
                Err(err)
            }
        }
    }

    /// 一覧のリードスルー取得。ヒットしなければリモートから取り直し、
    /// ページ内の実体もまとめて取り込む
    pub async fn get_page(&self, request: PageRequest) -> Result<TaskPage, AppError> {
        if let Some(page) = self.pages.get_page(&request).await {
            return Ok(page);
        }

        debug!(%request, "page cache miss");
        let page = self.gateway.fetch_page(request).await?;
        self.tasks.put_all(page.items.clone()).await;
        self.pages.set_page(page.clone()).await;
        Ok(page)
    }

    /// 単一タスクのリードスルー取得
    pub async fn get_task(&self, id: &TaskId) -> Result<Task, AppError> {
        if let Some(task) = self.tasks.get(id).await {
            return Ok(task);
        }

        let task = self.gateway.fetch_task(id).await?;
        self.tasks.put(task.clone()).await;
        Ok(task)
    }

    /// 現在ページをカンバン表示用に組み替える
    pub async fn board_view(&self, request: PageRequest) -> Result<BoardView, AppError> {
        let page = self.get_page(request).await?;
        Ok(BoardView::from_page(&page))
    }

    /// 進行中の変更があればその種類を返す。UI側の操作無効化用
    pub fn pending_mutation(&self, id: &TaskId) -> Option<MutationKind> {
        let in_flight = self.lock_in_flight();
        in_flight.get(id).copied()
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, HashMap<TaskId, MutationKind>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_mutation(
        &self,
        id: &TaskId,
        kind: MutationKind,
    ) -> Result<InFlightGuard<'_>, AppError> {
        let mut in_flight = self.lock_in_flight();
        if in_flight.contains_key(id) {
            return Err(AppError::MutationInProgress(id.to_string()));
        }
        in_flight.insert(id.clone(), kind);
        Ok(InFlightGuard {
            service: self,
            task_id: id.clone(),
        })
    }

    async fn require_cached(&self, id: &TaskId) -> Result<Task, AppError> {
        self.tasks
            .get(id)
            .await
            .ok_or_else(|| AppError::EntityNotFound(id.to_string()))
    }

    async fn apply_optimistic(&self, task: &Task) {
        self.tasks.put(task.clone()).await;
        self.pages.apply_task_update(task).await;
    }

    /// サーバー確定値で楽観値を置き換える
    async fn commit_update(&self, confirmed: &Task) {
        self.tasks.put(confirmed.clone()).await;
        self.pages.apply_task_update(confirmed).await;
    }

    /// 退避値をフィールド単位まで完全に書き戻す
    async fn roll_back(&self, pending: PendingMutation) {
        match &pending.snapshot {
            Some(task) => self.tasks.put(task.clone()).await,
            None => {
                self.tasks.remove(&pending.task_id).await;
            }
        }
        self.pages.restore(pending.page_snapshots).await;
        debug!(
            task_id = %pending.task_id,
            kind = %pending.kind,
            discarded_optimistic = pending.optimistic.is_some(),
            "restored pre-mutation snapshot"
        );
    }
}
