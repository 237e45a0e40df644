// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 分类关键词表
//!
//! 纯数据，不含控制流。可以被 YAML 规则文件整体替换。

/// 库、框架、教程、模板等非应用类仓库的标记词
pub const EXCLUSION_KEYWORDS: &[&str] = &[
    "library",
    "framework",
    "tutorial",
    "tutorials",
    "template",
    "templates",
    "boilerplate",
    "starter",
    "starter-kit",
    "awesome",
    "sdk",
    "plugin",
    "component-library",
    "ui-library",
    "ui kit",
    "ui-kit",
    "design system",
    "cheatsheet",
    "cheat-sheet",
    "interview",
    "course",
    "roadmap",
    "dotfiles",
    "curated list",
    "api wrapper",
    "bindings",
    "polyfill",
    "bootcamp",
    "100-days",
    "exercises",
];

/// 仓库名中提示为库或工具包的正则（匹配小写名称）
pub const LIBRARY_NAME_PATTERNS: &[&str] = &[
    r"^awesome([-_.]|$)",
    r"[-_.](utils?|helpers?|lib|libs|sdk|cli|plugins?|hooks?|loader|middleware|polyfill|types)$",
    r"\.(js|ts|jsx|tsx|py|rs|go|rb|php)$",
    r"^(eslint|babel|webpack|vite|rollup|postcss|prettier|gatsby)-(plugin|config|preset|loader|theme)",
    r"^(react|vue|ng|angular|svelte)-[a-z0-9-]*(component|components|ui|hook|hooks)$",
];

/// 描述中的自我定性短语
pub const SELF_DESCRIPTION_PHRASES: &[&str] = &[
    "is a library",
    "is a framework",
    "is a package",
    "is a plugin",
    "is an sdk",
    "a collection of",
    "a curated list",
    "npm package",
    "a wrapper for",
    "a wrapper around",
];

/// 应用类词汇
pub const APPLICATION_KEYWORDS: &[&str] = &[
    "app",
    "application",
    "platform",
    "system",
    "website",
    "dashboard",
    "portal",
    "manager",
    "tracker",
    "clone",
    "game",
    "store",
    "marketplace",
    "bot",
    "full stack",
    "full-stack",
    "fullstack",
    "mern",
    "saas",
    "management",
];

/// 生产级项目词汇
pub const PRODUCTION_KEYWORDS: &[&str] = &[
    "production",
    "deployed",
    "live demo",
    "real-world",
    "real world",
    "enterprise",
    "scalable",
    "authentication",
    "payment",
    "docker",
    "kubernetes",
    "ci/cd",
];

/// 描述的最短长度（字符）
pub const MIN_DESCRIPTION_LEN: usize = 15;
