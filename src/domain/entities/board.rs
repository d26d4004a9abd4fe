use crate::domain::entities::{Task, TaskPage};
use crate::domain::value_objects::TaskStatus;
use serde::{Deserialize, Serialize};

/// カンバン1列分の表示データ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// 現在ページをカラム別に並べ替えたビュー。ページ内の順序は保つ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub columns: Vec<BoardColumn>,
    pub stats: TaskStats,
}

impl BoardView {
    pub fn from_page(page: &TaskPage) -> Self {
        let columns = TaskStatus::ALL
            .into_iter()
            .map(|status| BoardColumn {
                status,
                tasks: page
                    .items
                    .iter()
                    .filter(|task| task.status == status)
                    .cloned()
                    .collect(),
            })
            .collect::<Vec<_>>();

        let stats = TaskStats {
            total: page.items.len(),
            todo: columns[0].tasks.len(),
            in_progress: columns[1].tasks.len(),
            done: columns[2].tasks.len(),
        };

        Self { columns, stats }
    }

    pub fn column(&self, status: TaskStatus) -> &BoardColumn {
        self.columns
            .iter()
            .find(|column| column.status == status)
            .expect("every status has a column")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TaskDraft;
    use crate::domain::value_objects::{PageRequest, TaskId};
    use chrono::Utc;

    fn task(id: &str, status: TaskStatus) -> Task {
        let draft = TaskDraft::new(format!("task {id}"), None)
            .expect("valid draft")
            .with_status(status);
        Task::from_draft(
            TaskId::new(id.to_string()).expect("valid id"),
            &draft,
            Utc::now(),
        )
    }

    #[test]
    fn groups_by_status_preserving_page_order() {
        let page = TaskPage::new(
            PageRequest::new(1, 10).expect("request"),
            vec![
                task("a", TaskStatus::Done),
                task("b", TaskStatus::ToDo),
                task("c", TaskStatus::ToDo),
                task("d", TaskStatus::InProgress),
            ],
            4,
        );

        let board = BoardView::from_page(&page);
        let todo = board.column(TaskStatus::ToDo);
        assert_eq!(todo.tasks.len(), 2);
        assert_eq!(todo.tasks[0].id.as_str(), "b");
        assert_eq!(todo.tasks[1].id.as_str(), "c");
        assert_eq!(board.column(TaskStatus::InProgress).tasks.len(), 1);
        assert_eq!(board.column(TaskStatus::Done).tasks.len(), 1);

        assert_eq!(
            board.stats,
            TaskStats {
                total: 4,
                todo: 2,
                in_progress: 1,
                done: 1,
            }
        );
    }

    #[test]
    fn empty_page_produces_empty_columns() {
        let page = TaskPage::new(PageRequest::new(1, 10).expect("request"), Vec::new(), 0);
        let board = BoardView::from_page(&page);
        assert_eq!(board.columns.len(), 3);
        assert!(board.columns.iter().all(|column| column.tasks.is_empty()));
        assert_eq!(board.stats, TaskStats::default());
    }
}
