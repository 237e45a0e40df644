// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::models::candidate::CandidateRepository;
use crate::domain::models::catalog_entry::Difficulty;
use crate::domain::services::vocabulary;

/// 分类规则
///
/// 关键词表的声明式表示，默认取内置常量，也可以从 YAML 加载
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    pub exclusion_keywords: Vec<String>,
    pub library_name_patterns: Vec<String>,
    pub self_description_phrases: Vec<String>,
    pub application_keywords: Vec<String>,
    pub production_keywords: Vec<String>,
    pub min_description_len: usize,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            exclusion_keywords: owned(vocabulary::EXCLUSION_KEYWORDS),
            library_name_patterns: owned(vocabulary::LIBRARY_NAME_PATTERNS),
            self_description_phrases: owned(vocabulary::SELF_DESCRIPTION_PHRASES),
            application_keywords: owned(vocabulary::APPLICATION_KEYWORDS),
            production_keywords: owned(vocabulary::PRODUCTION_KEYWORDS),
            min_description_len: vocabulary::MIN_DESCRIPTION_LEN,
        }
    }
}

impl ClassifierRules {
    /// 从 YAML 文件加载规则，未给出的字段沿用默认值
    pub fn from_yaml_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// 难度阈值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyThresholds {
    /// 达到该星标数即为 MEDIUM
    pub medium: u32,
    /// 达到该星标数即为 HARD
    pub hard: u32,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            medium: 500,
            hard: 5000,
        }
    }
}

/// 根据星标数确定难度
///
/// 纯函数；`hard >= medium` 时对星标数单调不减
pub fn difficulty_for_stars(stars: u32, thresholds: DifficultyThresholds) -> Difficulty {
    if stars >= thresholds.hard {
        Difficulty::Hard
    } else if stars >= thresholds.medium {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// 排除原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum ExclusionReason {
    ExcludedKeyword(String),
    Archived,
    Disabled,
    LibraryName(String),
    SelfDescribedLibrary(String),
    MissingDescription,
    DescriptionTooShort,
    InsufficientStars { stars: u32, min_stars: u32 },
    NoApplicationSignal,
}

impl ExclusionReason {
    /// 用于统计与日志的简短标签
    pub fn tag(&self) -> &'static str {
        match self {
            ExclusionReason::ExcludedKeyword(_) => "excluded_keyword",
            ExclusionReason::Archived => "archived",
            ExclusionReason::Disabled => "disabled",
            ExclusionReason::LibraryName(_) => "library_name",
            ExclusionReason::SelfDescribedLibrary(_) => "self_described_library",
            ExclusionReason::MissingDescription => "missing_description",
            ExclusionReason::DescriptionTooShort => "description_too_short",
            ExclusionReason::InsufficientStars { .. } => "insufficient_stars",
            ExclusionReason::NoApplicationSignal => "no_application_signal",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExclusionReason::ExcludedKeyword(keyword) => {
                write!(f, "matched exclusion keyword '{}'", keyword)
            }
            ExclusionReason::Archived => write!(f, "repository is archived"),
            ExclusionReason::Disabled => write!(f, "repository is disabled"),
            ExclusionReason::LibraryName(pattern) => {
                write!(f, "name looks like a library ({})", pattern)
            }
            ExclusionReason::SelfDescribedLibrary(phrase) => {
                write!(f, "description says '{}'", phrase)
            }
            ExclusionReason::MissingDescription => write!(f, "missing description"),
            ExclusionReason::DescriptionTooShort => write!(f, "description too short"),
            ExclusionReason::InsufficientStars { stars, min_stars } => {
                write!(f, "{} stars, needs more than {}", stars, min_stars)
            }
            ExclusionReason::NoApplicationSignal => {
                write!(f, "no application or production keyword")
            }
        }
    }
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Included,
    Excluded(ExclusionReason),
}

impl Classification {
    pub fn is_included(&self) -> bool {
        matches!(self, Classification::Included)
    }
}

/// 仓库分类器
///
/// 无状态；正则在构造时编译一次
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: ClassifierRules,
    exclusion_matcher: Option<Regex>,
    library_patterns: Vec<(String, Regex)>,
}

impl Classifier {
    /// 根据规则构造分类器
    ///
    /// # Returns
    ///
    /// * `Err(regex::Error)` - 规则中的正则无法编译
    pub fn new(rules: ClassifierRules) -> Result<Self, regex::Error> {
        let exclusion_matcher = if rules.exclusion_keywords.is_empty() {
            None
        } else {
            let alternation = rules
                .exclusion_keywords
                .iter()
                .map(|keyword| regex::escape(&keyword.to_lowercase()))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
                    .case_insensitive(true)
                    .build()?,
            )
        };

        let library_patterns = rules
            .library_name_patterns
            .iter()
            .map(|pattern| Ok((pattern.clone(), Regex::new(pattern)?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            rules,
            exclusion_matcher,
            library_patterns,
        })
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// 对候选仓库分类
    ///
    /// 排除规则按顺序检查，先命中者生效：
    /// 排除关键词 → 归档/禁用 → 库名正则 → 描述自我定性。
    /// 之后要求描述足够长、星标数严格大于 `min_stars`，
    /// 且命中应用类或生产类词汇之一。人工整理的候选跳过这些纳入条件。
    pub fn classify(&self, candidate: &CandidateRepository, min_stars: u32) -> Classification {
        let text = candidate.searchable_text();
        let name = candidate.name.to_lowercase();
        let description = candidate
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        let description_lower = description.to_lowercase();

        if let Some(found) = self
            .exclusion_matcher
            .as_ref()
            .and_then(|matcher| matcher.find(&text))
        {
            return Classification::Excluded(ExclusionReason::ExcludedKeyword(
                found.as_str().to_string(),
            ));
        }

        if candidate.archived {
            return Classification::Excluded(ExclusionReason::Archived);
        }
        if candidate.disabled {
            return Classification::Excluded(ExclusionReason::Disabled);
        }

        if let Some((pattern, _)) = self
            .library_patterns
            .iter()
            .find(|(_, regex)| regex.is_match(&name))
        {
            return Classification::Excluded(ExclusionReason::LibraryName(pattern.clone()));
        }

        if let Some(phrase) = self
            .rules
            .self_description_phrases
            .iter()
            .find(|phrase| description_lower.contains(&phrase.to_lowercase()))
        {
            return Classification::Excluded(ExclusionReason::SelfDescribedLibrary(
                phrase.clone(),
            ));
        }

        if candidate.curated {
            return Classification::Included;
        }

        if description.is_empty() {
            return Classification::Excluded(ExclusionReason::MissingDescription);
        }
        if description.chars().count() < self.rules.min_description_len {
            return Classification::Excluded(ExclusionReason::DescriptionTooShort);
        }

        if candidate.stars <= min_stars {
            return Classification::Excluded(ExclusionReason::InsufficientStars {
                stars: candidate.stars,
                min_stars,
            });
        }

        let has_signal = self
            .rules
            .application_keywords
            .iter()
            .chain(self.rules.production_keywords.iter())
            .any(|keyword| text.contains(&keyword.to_lowercase()));
        if !has_signal {
            return Classification::Excluded(ExclusionReason::NoApplicationSignal);
        }

        Classification::Included
    }
}

impl Default for Classifier {
    fn default() -> Self {
        // 内置规则中的正则均为常量
        Self::new(ClassifierRules::default()).expect("built-in classifier rules must compile")
    }
}
