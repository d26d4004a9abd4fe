use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub cache: CacheConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// ページキャッシュが保持するエントリ数の上限
    pub page_capacity: usize,
    /// ページの鮮度。期限切れのページは次回アクセスで再取得される
    pub page_ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig {
                page_capacity: 64,
                page_ttl_secs: 120, // 2 minutes
            },
            pagination: PaginationConfig {
                default_limit: 10,
                max_limit: 100,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // 既定値
        let mut cfg = Self::default();

        // キャッシュ設定の環境変数反映
        if let Ok(v) = std::env::var("TASKBOARD_PAGE_CACHE_CAPACITY") {
            if let Some(value) = parse_usize(&v) {
                cfg.cache.page_capacity = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("TASKBOARD_PAGE_TTL_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.cache.page_ttl_secs = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("TASKBOARD_DEFAULT_PAGE_LIMIT") {
            if let Some(value) = parse_u32(&v) {
                cfg.pagination.default_limit = value.max(1);
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cache.page_capacity == 0 {
            return Err("Cache page_capacity must be greater than 0".to_string());
        }
        if self.cache.page_ttl_secs == 0 {
            return Err("Cache page_ttl_secs must be greater than 0".to_string());
        }
        if self.pagination.default_limit == 0 {
            return Err("Pagination default_limit must be greater than 0".to_string());
        }
        if self.pagination.default_limit > self.pagination.max_limit {
            return Err("Pagination default_limit must not exceed max_limit".to_string());
        }
        Ok(())
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}
