use crate::domain::entities::{Task, TaskPage};
use crate::domain::value_objects::{PageRequest, TaskId};
use async_trait::async_trait;

/// タスク実体のキャッシュポート。ID単位の正とする在庫。
#[async_trait]
pub trait TaskCache: Send + Sync {
    /// IDでキャッシュを検索
    async fn get(&self, id: &TaskId) -> Option<Task>;

    /// 挿入または上書き。順序は呼び出し順で最後の書き込みが勝つ
    async fn put(&self, task: Task);

    /// キャッシュから削除。存在しなければ何もしない
    async fn remove(&self, id: &TaskId) -> Option<Task>;

    /// 一覧再取得の結果をまとめて反映する。含まれないIDの実体は消さない
    async fn put_all(&self, tasks: Vec<Task>);
}

/// ページネーション記述子をキーとする一覧キャッシュのポート。
#[async_trait]
pub trait TaskPageCache: Send + Sync {
    /// キャッシュ済みページを返す。未登録や期限切れは `None`
    async fn get_page(&self, request: &PageRequest) -> Option<TaskPage>;

    /// ページを保存または上書き
    async fn set_page(&self, page: TaskPage);

    /// 全ページを破棄して次回アクセスで再取得させる
    async fn invalidate_all(&self);

    /// 該当タスクを含む全ページで順序を保ったまま差し替える。
    /// 件数や他タスクには触れない
    async fn apply_task_update(&self, task: &Task);

    /// 該当タスクを含むページから取り除いて件数を1減らし、
    /// 他のページはすべて無効化する
    async fn apply_removal(&self, id: &TaskId);

    /// 新規タスクの反映。挿入位置はサーバーのソート順でしか決まらないため
    /// 推測せず、全ページを無効化して次回読み出しに任せる
    async fn apply_insertion(&self, task: &Task);

    /// ロールバック用に現在のページ一式を写し取る
    async fn snapshot(&self) -> Vec<TaskPage>;

    /// 写し取ったページ一式を書き戻す
    async fn restore(&self, pages: Vec<TaskPage>);
}
