use std::sync::Arc;
use taskboard_core::{
    AppConfig, MemoryPageCache, MemoryTaskCache, MemoryTaskGateway, PageRequest, TaskCache,
    TaskDraft, TaskGateway, TaskPageCache, TaskService, TaskStatus,
};

struct Board {
    service: TaskService,
    gateway: Arc<MemoryTaskGateway>,
}

/// 設定既定値でフルスタックを組み、リモート側に5件仕込む
async fn setup_board() -> Board {
    let config = AppConfig::default();
    config.validate().expect("default config is valid");

    let gateway = Arc::new(MemoryTaskGateway::new());
    let drafts = (1..=5)
        .map(|index| {
            TaskDraft::new(format!("Task {index}"), Some(format!("body {index}")))
                .expect("valid draft")
        })
        .collect();
    gateway.seed(drafts).await;

    let tasks = Arc::new(MemoryTaskCache::new());
    let pages = Arc::new(MemoryPageCache::from_config(&config.cache));
    let service = TaskService::new(
        Arc::clone(&gateway) as Arc<dyn TaskGateway>,
        tasks as Arc<dyn TaskCache>,
        pages as Arc<dyn TaskPageCache>,
    );

    Board { service, gateway }
}

fn request(page: u32) -> PageRequest {
    PageRequest::new(page, 2).expect("valid request")
}

#[tokio::test]
async fn paginated_reads_report_server_totals() {
    let board = setup_board().await;

    let first = board
        .service
        .get_page(request(1))
        .await
        .expect("first page");
    assert_eq!(first.total_items, 5);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.items[0].title, "Task 5");
    assert!(first.has_next_page());
    assert!(!first.has_previous_page());

    let last = board.service.get_page(request(3)).await.expect("last page");
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].title, "Task 1");
    assert!(!last.has_next_page());
}

#[tokio::test]
async fn dragging_a_card_updates_the_visible_page_in_place() {
    let board = setup_board().await;
    let page = board.service.get_page(request(1)).await.expect("page");
    let target = page.items[1].clone();
    assert_eq!(target.status, TaskStatus::ToDo);

    let moved = board
        .service
        .change_status(&target.id, TaskStatus::InProgress)
        .await
        .expect("status change succeeds");
    assert_eq!(moved.status, TaskStatus::InProgress);
    assert!(moved.updated_at >= target.updated_at);

    // ページは同じ位置に確定値を持つ
    let page = board.service.get_page(request(1)).await.expect("page");
    assert_eq!(page.items[1], moved);
    assert_eq!(page.total_items, 5);

    // 盤面ビューにも反映される
    let view = board.service.board_view(request(1)).await.expect("board");
    assert_eq!(view.stats.in_progress, 1);
    assert_eq!(view.stats.todo, 1);

    // 同じカラムへ戻してもリモート往復は起きない
    let unchanged = board
        .service
        .change_status(&moved.id, TaskStatus::InProgress)
        .await
        .expect("no-op drag");
    assert_eq!(unchanged, moved);
}

#[tokio::test]
async fn deleting_a_task_keeps_counts_truthful_across_pages() {
    let board = setup_board().await;
    let first = board.service.get_page(request(1)).await.expect("page 1");
    board.service.get_page(request(2)).await.expect("page 2");

    let victim = first.items[0].clone();
    board
        .service
        .delete_task(&victim.id)
        .await
        .expect("delete succeeds");
    assert_eq!(board.gateway.total().await, 4);

    // 削除したタスクを含んでいたページは即時に詰まっている
    let patched = board.service.get_page(request(1)).await.expect("page 1");
    assert_eq!(patched.total_items, 4);
    assert!(!patched.items.iter().any(|task| task.id == victim.id));

    // 他のページは再取得になり、サーバーの件数と一致する
    let second = board.service.get_page(request(2)).await.expect("page 2");
    assert_eq!(second.total_items, 4);
    assert_eq!(second.total_pages(), 2);
}

#[tokio::test]
async fn creating_a_task_refetches_pages_with_server_ordering() {
    let board = setup_board().await;
    board.service.get_page(request(1)).await.expect("warm page");

    let draft = TaskDraft::new("Task 6".to_string(), None)
        .expect("valid draft")
        .with_status(TaskStatus::InProgress);
    let created = board
        .service
        .create_task(draft)
        .await
        .expect("create succeeds");

    // 次の読み出しで新しいタスクがサーバー順の先頭に現れる
    let page = board.service.get_page(request(1)).await.expect("page 1");
    assert_eq!(page.total_items, 6);
    assert_eq!(page.items[0], created);

    // 詳細読みもキャッシュから揃う
    let detail = board
        .service
        .get_task(&created.id)
        .await
        .expect("detail hit");
    assert_eq!(detail, created);
}
