use crate::domain::entities::{Task, TaskDraft, TaskPage};
use crate::domain::value_objects::{PageRequest, TaskId, TaskStatus};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// リモートタスクストアへの操作ポート。
///
/// トランスポートと認証、リトライはこの境界の外側の責務。各操作は確定値で
/// 解決するか、分類済みの `AppError::Remote` で失敗する。キャンセルや
/// タイムアウトもエラーとして返ること。
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// ページ単位の一覧取得
    async fn fetch_page(&self, request: PageRequest) -> Result<TaskPage, AppError>;

    /// 単一タスクの取得
    async fn fetch_task(&self, id: &TaskId) -> Result<Task, AppError>;

    /// 作成。IDとタイムスタンプはサーバーが採番した値が返る
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, AppError>;

    /// 全フィールド置換
    async fn replace_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, AppError>;

    /// 状態のみの部分更新
    async fn patch_status(&self, id: &TaskId, status: TaskStatus) -> Result<Task, AppError>;

    /// 削除
    async fn delete_task(&self, id: &TaskId) -> Result<(), AppError>;
}
