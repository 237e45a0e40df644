// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::candidate::CandidateRepository;
use crate::domain::models::catalog_entry::Difficulty;
use crate::domain::services::story_templates::{
    StoryTemplate, DEFAULT_CASE_STUDY, DEFAULT_DELIVERABLES, DEFAULT_PROBLEM_STATEMENT,
    DEFAULT_SOLUTION_DESCRIPTION, STORY_TEMPLATES,
};

/// 生成的叙事内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeContent {
    pub case_study: String,
    pub problem_statement: String,
    pub solution_description: String,
    pub tech_stack: Vec<String>,
    pub prerequisites: Vec<String>,
    pub deliverables: Vec<String>,
}

/// 能力关键词 → 附加技术
const CAPABILITY_ADDITIONS: &[(&[&str], &str)] = &[
    (&["chat", "realtime", "real-time", "live", "socket"], "WebSockets"),
    (&["video", "stream", "call", "meet"], "WebRTC"),
    (&["payment", "shop", "store", "ecommerce", "e-commerce", "checkout"], "Stripe API"),
    (&["map", "location", "travel", "delivery", "ride"], "Maps API"),
];

/// 内容生成器
///
/// 纯查表，无 I/O、无内部状态
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSynthesizer;

impl ContentSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// 为候选仓库生成叙事字段
    ///
    /// # Arguments
    ///
    /// * `candidate` - 已通过分类的候选仓库
    /// * `category` - 所属领域名称
    /// * `difficulty` - 已确定的难度
    pub fn synthesize(
        &self,
        candidate: &CandidateRepository,
        category: &str,
        difficulty: Difficulty,
    ) -> NarrativeContent {
        let name = candidate.name.to_lowercase();
        let title = candidate.display_title();
        let fill = |template: &str| {
            template
                .replace("{name}", &title)
                .replace("{category}", category)
        };

        let (case_study, problem_statement, solution_description, deliverables) =
            match match_template(&name) {
                Some(template) => (
                    fill(template.case_study),
                    fill(template.problem_statement),
                    fill(template.solution_description),
                    owned(template.deliverables),
                ),
                None => (
                    fill(DEFAULT_CASE_STUDY),
                    fill(DEFAULT_PROBLEM_STATEMENT),
                    fill(DEFAULT_SOLUTION_DESCRIPTION),
                    owned(DEFAULT_DELIVERABLES),
                ),
            };

        NarrativeContent {
            case_study,
            problem_statement,
            solution_description,
            tech_stack: tech_stack(candidate.language.as_deref(), &name),
            prerequisites: prerequisites(candidate.language.as_deref(), difficulty),
            deliverables,
        }
    }
}

/// 按顺序返回第一个关键词出现在仓库名中的模板
pub fn match_template(name: &str) -> Option<&'static StoryTemplate> {
    let name = name.to_lowercase();
    STORY_TEMPLATES
        .iter()
        .find(|template| template.keywords.iter().any(|keyword| name.contains(keyword)))
}

/// 由主要语言和名称中的能力关键词推导技术栈
pub fn tech_stack(language: Option<&str>, name: &str) -> Vec<String> {
    let base: &[&str] = match language.map(str::to_lowercase).as_deref() {
        Some("javascript") => &["JavaScript", "React", "Node.js", "Express", "MongoDB"],
        Some("typescript") => &["TypeScript", "React", "Node.js", "PostgreSQL"],
        Some("python") => &["Python", "Django", "PostgreSQL"],
        Some("java") => &["Java", "Spring Boot", "MySQL"],
        Some("kotlin") => &["Kotlin", "Android SDK", "Room"],
        Some("swift") => &["Swift", "SwiftUI", "Core Data"],
        Some("dart") => &["Dart", "Flutter", "Firebase"],
        Some("go") => &["Go", "Gin", "PostgreSQL"],
        Some("rust") => &["Rust", "Axum", "PostgreSQL"],
        Some("php") => &["PHP", "Laravel", "MySQL"],
        Some("ruby") => &["Ruby", "Ruby on Rails", "PostgreSQL"],
        Some("c#") => &["C#", ".NET", "SQL Server"],
        Some("vue") => &["Vue.js", "JavaScript", "Node.js"],
        Some("html") | Some("css") => &["HTML", "CSS", "JavaScript"],
        Some(_) => &[],
        None => &["HTML", "CSS", "JavaScript"],
    };

    let mut stack = owned(base);
    if stack.is_empty() {
        if let Some(language) = language {
            stack.push(language.to_string());
        }
    }

    let name = name.to_lowercase();
    for (keywords, addition) in CAPABILITY_ADDITIONS {
        if keywords.iter().any(|keyword| name.contains(keyword))
            && !stack.iter().any(|existing| existing == addition)
        {
            stack.push(addition.to_string());
        }
    }

    stack
}

/// 由语言与难度推导前置知识
pub fn prerequisites(language: Option<&str>, difficulty: Difficulty) -> Vec<String> {
    let mut items = Vec::new();
    match language {
        Some(language) => items.push(format!("Working knowledge of {}", language)),
        None => items.push("Basic programming experience".to_string()),
    }
    items.push("Familiarity with Git and GitHub".to_string());

    match difficulty {
        Difficulty::Easy => {}
        Difficulty::Medium => {
            items.push("Experience with REST APIs".to_string());
            items.push("Basic database design".to_string());
        }
        Difficulty::Hard => {
            items.push("Experience with REST APIs".to_string());
            items.push("Database design and query optimisation".to_string());
            items.push("Deployment and system architecture".to_string());
        }
    }

    items
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
