use serde::{Deserialize, Serialize};
use std::fmt;

/// 1ページあたりの件数の上限
pub const MAX_PAGE_LIMIT: u32 = 100;

/// キャッシュされた結果ページを識別するページネーション記述子。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Result<Self, String> {
        if page == 0 {
            return Err("Page number must be 1 or greater".to_string());
        }
        if limit == 0 {
            return Err("Page limit must be 1 or greater".to_string());
        }
        if limit > MAX_PAGE_LIMIT {
            return Err(format!("Page limit must not exceed {MAX_PAGE_LIMIT}"));
        }
        Ok(Self { page, limit })
    }

    pub fn first(limit: u32) -> Result<Self, String> {
        Self::new(1, limit)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// サーバー側スライスの先頭位置
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page={} limit={}", self.page, self.limit)
    }
}
