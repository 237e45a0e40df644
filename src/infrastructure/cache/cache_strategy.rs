// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::settings::CacheSettings;

/// 缓存策略配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStrategyConfig {
    /// TTL（秒）
    pub ttl_seconds: u64,
    /// 最大缓存条目数
    pub max_entries: usize,
}

impl Default for CacheStrategyConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 300, // 5分钟
            max_entries: 1000,
        }
    }
}

impl From<&CacheSettings> for CacheStrategyConfig {
    fn from(settings: &CacheSettings) -> Self {
        Self {
            ttl_seconds: settings.ttl_seconds,
            max_entries: settings.max_entries,
        }
    }
}

/// 缓存统计信息
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub stores: u64,
    pub invalidations: u64,
}

/// 缓存条目
#[derive(Clone)]
struct CacheEntry<T> {
    data: T,
    created_at: Instant,
    ttl: Duration,
    access_count: u64,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl,
            access_count: 0,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }

    fn touch(&mut self) {
        self.access_count += 1;
    }

    fn get_priority_score(&self) -> f64 {
        let age_penalty = self.created_at.elapsed().as_secs_f64() * 0.1;
        self.access_count as f64 * 0.9 - age_penalty
    }
}

/// 缓存策略接口
#[async_trait]
pub trait CacheStrategy: Send + Sync {
    /// 获取缓存值
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// 设置缓存值
    async fn set(&self, key: &str, value: serde_json::Value, ttl: Option<Duration>) -> Result<()>;

    /// 删除缓存值
    async fn delete(&self, key: &str) -> Result<()>;

    /// 删除所有以 `prefix` 开头的键，返回删除数量
    async fn invalidate_prefix(&self, prefix: &str) -> Result<usize>;

    /// 清空缓存
    async fn clear(&self) -> Result<()>;

    /// 获取缓存统计信息
    fn get_stats(&self) -> CacheStats;
}

/// 内存缓存策略
pub struct MemoryCacheStrategy {
    cache: DashMap<String, CacheEntry<serde_json::Value>>,
    config: CacheStrategyConfig,
    stats: Arc<Mutex<CacheStats>>,
}

impl MemoryCacheStrategy {
    pub fn new(config: CacheStrategyConfig) -> Self {
        Self {
            cache: DashMap::new(),
            config,
            stats: Arc::new(Mutex::new(CacheStats::default())),
        }
    }

    fn evict_if_needed(&self) {
        let current_size = self.cache.len();
        if current_size <= self.config.max_entries {
            return;
        }

        let expired: Vec<String> = self
            .cache
            .iter()
            .filter(|entry| entry.value().is_expired())
            .map(|entry| entry.key().clone())
            .collect();
        for key in &expired {
            self.cache.remove(key);
        }

        let mut evicted = expired.len();
        let remaining = self.cache.len();
        if remaining > self.config.max_entries {
            let to_evict = remaining - self.config.max_entries;

            // 按优先级排序，淘汰最低者
            let mut entries: Vec<(String, f64)> = self
                .cache
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().get_priority_score()))
                .collect();
            entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            for (key, _) in entries.iter().take(to_evict) {
                self.cache.remove(key);
            }
            evicted += to_evict;
        }

        self.stats.lock().evictions += evicted as u64;
        debug!("Evicted {} entries from memory cache", evicted);
    }
}

#[async_trait]
impl CacheStrategy for MemoryCacheStrategy {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        if let Some(mut entry) = self.cache.get_mut(key) {
            if entry.is_expired() {
                drop(entry);
                self.cache.remove(key);
                self.stats.lock().misses += 1;
                return Ok(None);
            }

            entry.touch();
            self.stats.lock().hits += 1;
            Ok(Some(entry.data.clone()))
        } else {
            self.stats.lock().misses += 1;
            Ok(None)
        }
    }

    async fn set(&self, key: &str, value: serde_json::Value, ttl: Option<Duration>) -> Result<()> {
        let ttl = ttl.unwrap_or(Duration::from_secs(self.config.ttl_seconds));
        self.cache
            .insert(key.to_string(), CacheEntry::new(value, ttl));
        self.evict_if_needed();

        self.stats.lock().stores += 1;
        debug!("Stored memory cache entry for key: {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.cache.remove(key);
        debug!("Deleted cache entry for key: {}", key);
        Ok(())
    }

    async fn invalidate_prefix(&self, prefix: &str) -> Result<usize> {
        let before = self.cache.len();
        self.cache.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.cache.len());

        self.stats.lock().invalidations += removed as u64;
        debug!("Invalidated {} cache entries with prefix {}", removed, prefix);
        Ok(removed)
    }

    async fn clear(&self) -> Result<()> {
        self.cache.clear();
        info!("Cleared all memory cache entries");
        Ok(())
    }

    fn get_stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }
}
