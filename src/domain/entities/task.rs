use crate::domain::value_objects::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// サーバー確定値からタスクを組み立てる。IDはサーバー採番。
    pub fn from_draft(id: TaskId, draft: &TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 状態だけを差し替える。`updated_at` は確定前の仮表示値
    pub fn apply_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    /// 全フィールド更新。IDと作成時刻は変わらない
    pub fn apply_draft(&mut self, draft: &TaskDraft, now: DateTime<Utc>) {
        self.title = draft.title.clone();
        self.description = draft.description.clone();
        self.status = draft.status;
        self.priority = draft.priority;
        self.assignee = draft.assignee.clone();
        self.updated_at = now;
    }
}

/// 作成と全置換で共有する入力ペイロード。IDとタイムスタンプは含まない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
}

impl TaskDraft {
    pub fn new(title: String, description: Option<String>) -> Result<Self, String> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err("Task title cannot be empty".to_string());
        }
        Ok(Self {
            title,
            description,
            status: TaskStatus::default(),
            priority: None,
            assignee: None,
        })
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assignee(mut self, assignee: String) -> Self {
        self.assignee = Some(assignee);
        self
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            assignee: task.assignee.clone(),
        }
    }
}
