use crate::domain::entities::Task;
use crate::domain::value_objects::{PageRequest, TaskId};
use serde::{Deserialize, Serialize};

/// リモートストアから取得した結果の1ページ。
///
/// `total_pages` や前後ページの有無は保存せず都度計算する。保存すると
/// `total_items` の更新とずれる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    pub request: PageRequest,
    pub items: Vec<Task>,
    pub total_items: u64,
}

impl TaskPage {
    pub fn new(request: PageRequest, items: Vec<Task>, total_items: u64) -> Self {
        Self {
            request,
            items,
            total_items,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(u64::from(self.request.limit()))
    }

    pub fn has_next_page(&self) -> bool {
        u64::from(self.request.page()) < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.request.page() > 1
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.items.iter().any(|task| task.id == *id)
    }

    /// ページ内の同IDタスクを順序を保ったまま差し替える
    pub fn replace_task(&mut self, updated: &Task) -> bool {
        match self.items.iter_mut().find(|task| task.id == updated.id) {
            Some(slot) => {
                *slot = updated.clone();
                true
            }
            None => false,
        }
    }

    /// タスクを取り除き、このページの件数を1減らす
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let before = self.items.len();
        self.items.retain(|task| task.id != *id);
        let removed = self.items.len() < before;
        if removed {
            self.total_items = self.total_items.saturating_sub(1);
        }
        removed
    }
}
