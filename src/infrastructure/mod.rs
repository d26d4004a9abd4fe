pub mod cache;
pub mod gateway;
