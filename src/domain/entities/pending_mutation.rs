use crate::domain::entities::{Task, TaskPage};
use crate::domain::value_objects::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Create,
    UpdateFull,
    UpdateStatus,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::UpdateFull => "update_full",
            Self::UpdateStatus => "update_status",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 未確定の楽観的変更。リモート呼び出しが解決するまでの間だけ存在する。
///
/// 失敗時はここに退避した値をそのまま書き戻す。エンティティ単体の
/// スナップショットに加えて、キャッシュ済みページ一式も丸ごと保持する。
#[derive(Debug, Clone)]
pub struct PendingMutation {
    pub task_id: TaskId,
    pub kind: MutationKind,
    pub snapshot: Option<Task>,
    pub page_snapshots: Vec<TaskPage>,
    pub optimistic: Option<Task>,
}

impl PendingMutation {
    pub fn capture(
        task_id: TaskId,
        kind: MutationKind,
        snapshot: Option<Task>,
        page_snapshots: Vec<TaskPage>,
    ) -> Self {
        Self {
            task_id,
            kind,
            snapshot,
            page_snapshots,
            optimistic: None,
        }
    }

    pub fn with_optimistic(mut self, task: Task) -> Self {
        self.optimistic = Some(task);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TaskDraft;
    use chrono::Utc;

    #[test]
    fn capture_keeps_the_pre_mutation_value() {
        let draft = TaskDraft::new("Snapshot me".to_string(), None).expect("valid draft");
        let task = Task::from_draft(
            TaskId::new("task-9".to_string()).expect("valid id"),
            &draft,
            Utc::now(),
        );

        let pending = PendingMutation::capture(
            task.id.clone(),
            MutationKind::UpdateStatus,
            Some(task.clone()),
            Vec::new(),
        );

        assert_eq!(pending.kind, MutationKind::UpdateStatus);
        assert_eq!(pending.snapshot.as_ref(), Some(&task));
        assert!(pending.optimistic.is_none());
        assert_eq!(pending.kind.to_string(), "update_status");
    }
}
