// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::infrastructure::cache::cache_strategy::{
    CacheStats, CacheStrategy, CacheStrategyConfig, MemoryCacheStrategy,
};

/// 目录统计的缓存键前缀，每次采集完成后整体失效
pub const STATS_PREFIX: &str = "stats";

/// 缓存管理器
///
/// 在缓存策略之上提供类型化的读写接口
#[derive(Clone)]
pub struct CacheManager {
    strategy: Arc<dyn CacheStrategy>,
}

impl CacheManager {
    /// 创建基于内存策略的缓存管理器
    pub fn new(config: CacheStrategyConfig) -> Self {
        Self {
            strategy: Arc::new(MemoryCacheStrategy::new(config)),
        }
    }

    pub fn with_strategy(strategy: Arc<dyn CacheStrategy>) -> Self {
        Self { strategy }
    }

    /// 读取并反序列化缓存值；反序列化失败视为未命中
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.strategy.get(key).await? {
            Some(value) => match serde_json::from_value(value) {
                Ok(data) => Ok(Some(data)),
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, e);
                    self.strategy.delete(key).await?;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// 序列化并写入缓存值
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.strategy.set(key, value, ttl).await
    }

    /// 删除缓存值
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.strategy.delete(key).await
    }

    /// 按前缀失效
    pub async fn invalidate_prefix(&self, prefix: &str) -> Result<usize> {
        self.strategy.invalidate_prefix(prefix).await
    }

    /// 清空缓存
    pub async fn clear(&self) -> Result<()> {
        self.strategy.clear().await
    }

    /// 获取缓存统计信息
    pub fn get_stats(&self) -> CacheStats {
        self.strategy.get_stats()
    }

    /// 获取缓存命中率
    pub fn get_hit_rate(&self) -> f64 {
        let stats = self.get_stats();
        let total_requests = stats.hits + stats.misses;

        if total_requests == 0 {
            0.0
        } else {
            stats.hits as f64 / total_requests as f64
        }
    }
}
