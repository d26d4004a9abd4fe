pub mod cache;
pub mod gateway;

pub use cache::{TaskCache, TaskPageCache};
pub use gateway::TaskGateway;
