pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::ports::{TaskCache, TaskGateway, TaskPageCache};
pub use application::TaskService;
pub use domain::entities::{
    BoardColumn, BoardView, MutationKind, PendingMutation, Task, TaskDraft, TaskPage,
    TaskPriority, TaskStats,
};
pub use domain::value_objects::{PageRequest, TaskId, TaskStatus, MAX_PAGE_LIMIT};
pub use infrastructure::cache::{MemoryPageCache, MemoryTaskCache};
pub use infrastructure::gateway::MemoryTaskGateway;
pub use shared::{AppConfig, AppError, RemoteErrorKind, Result};

/// ログ設定の初期化。`RUST_LOG` が無ければ自前の既定値を使う
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
