// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::scrape_run::RunMode;

/// 手动触发采集的请求体
///
/// 两个字段均可省略：缺省时抓取全部数据源，使用配置中的写入模式
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct ScrapeRequestDto {
    /// 限定的数据源名称，例如 `github` 或 `curated`
    #[validate(length(max = 64))]
    pub source: Option<String>,
    pub mode: Option<RunMode>,
}

impl ScrapeRequestDto {
    /// 去掉首尾空白后的数据源名称，空串视为未指定
    pub fn source_name(&self) -> Option<String> {
        self.source
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_valid() {
        let dto: ScrapeRequestDto = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.source_name().is_none());
        assert!(dto.mode.is_none());
    }

    #[test]
    fn test_source_and_mode_are_parsed() {
        let dto: ScrapeRequestDto =
            serde_json::from_str(r#"{"source":" GitHub ","mode":"incremental"}"#).unwrap();
        assert_eq!(dto.source_name().as_deref(), Some("github"));
        assert_eq!(dto.mode, Some(RunMode::Incremental));
    }

    #[test]
    fn test_empty_source_means_all_sources() {
        let dto: ScrapeRequestDto = serde_json::from_str(r#"{"source":""}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.source_name().is_none());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(serde_json::from_str::<ScrapeRequestDto>(r#"{"mode":"append"}"#).is_err());
    }

    #[test]
    fn test_overlong_source_fails_validation() {
        let dto = ScrapeRequestDto {
            source: Some("x".repeat(65)),
            mode: None,
        };
        assert!(dto.validate().is_err());
    }
}
