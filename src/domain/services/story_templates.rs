// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 叙事模板表
//!
//! 按优先级排列；仓库名包含任一关键词即命中。
//! 模板中的 `{name}` 替换为项目标题，`{category}` 替换为领域名称。

pub struct StoryTemplate {
    pub keywords: &'static [&'static str],
    pub case_study: &'static str,
    pub problem_statement: &'static str,
    pub solution_description: &'static str,
    pub deliverables: &'static [&'static str],
}

pub const STORY_TEMPLATES: &[StoryTemplate] = &[
    StoryTemplate {
        keywords: &["chat", "messenger", "messaging"],
        case_study: "A remote-first startup lost track of decisions scattered across email threads. {name} gave every team a shared space for conversations that happen as they are typed.",
        problem_statement: "Teams need to exchange messages instantly, see who is online and keep a searchable history without paying for a heavyweight enterprise suite.",
        solution_description: "{name} delivers real-time messaging with rooms, presence indicators and persistent history, built as a complete {category} project.",
        deliverables: &["Real-time messaging between users", "Chat rooms with membership", "Message history and search", "Online presence indicators"],
    },
    StoryTemplate {
        keywords: &["ecommerce", "e-commerce", "shop", "store", "cart"],
        case_study: "An independent retailer watched customers abandon orders because the old catalogue could not keep stock levels straight. {name} moved the business to a storefront that tracks every item.",
        problem_statement: "Small merchants need to list products, take orders and manage inventory online without giving a large cut to a marketplace.",
        solution_description: "{name} implements a storefront with product listings, a shopping cart, checkout and an order dashboard for the merchant.",
        deliverables: &["Product catalogue with categories", "Shopping cart and checkout flow", "Order management dashboard", "Inventory tracking"],
    },
    StoryTemplate {
        keywords: &["booking", "reservation", "appointment", "hotel"],
        case_study: "A busy clinic double-booked patients every week because appointments lived in a paper diary. {name} replaced the diary with a calendar both staff and customers can trust.",
        problem_statement: "Service businesses need customers to reserve time slots themselves while staff keep control of availability and cancellations.",
        solution_description: "{name} provides slot-based booking with availability management, confirmations and a staff view of upcoming reservations.",
        deliverables: &["Availability calendar", "Self-service booking flow", "Booking confirmation notifications", "Staff schedule overview"],
    },
    StoryTemplate {
        keywords: &["social", "community", "forum", "network"],
        case_study: "A hobby community outgrew its mailing list and scattered across several chat groups. {name} brought members back to one place where posts and discussions stay organised.",
        problem_statement: "Communities need profiles, posts, comments and a feed that surfaces relevant activity without the noise of a general social network.",
        solution_description: "{name} implements user profiles, a content feed, comments and follows, forming a focused social platform.",
        deliverables: &["User profiles", "Post and comment system", "Personalised activity feed", "Follow relationships"],
    },
    StoryTemplate {
        keywords: &["todo", "task", "kanban", "project-management", "productivity"],
        case_study: "A design agency kept missing deadlines because work items lived in personal notebooks. {name} put every task on a shared board the whole team could see.",
        problem_statement: "Teams need to capture tasks, assign owners and track progress through stages with minimal friction.",
        solution_description: "{name} organises work into boards and lists with assignees, due dates and status tracking.",
        deliverables: &["Task creation and editing", "Board or list views", "Assignees and due dates", "Progress tracking"],
    },
    StoryTemplate {
        keywords: &["finance", "budget", "expense", "bank", "wallet", "invoice"],
        case_study: "A group of freelancers had no clear view of where their money went each month. {name} turned scattered receipts into categorised spending reports.",
        problem_statement: "People and small businesses need to record income and expenses, categorise them and understand trends over time.",
        solution_description: "{name} records transactions, groups them into categories and visualises budgets and spending trends.",
        deliverables: &["Transaction recording", "Category management", "Budget limits and alerts", "Spending reports and charts"],
    },
    StoryTemplate {
        keywords: &["health", "fitness", "workout", "medical", "hospital"],
        case_study: "A local gym struggled to keep members motivated between sessions. {name} let members log workouts and see their progress week over week.",
        problem_statement: "Users need a simple way to record health or fitness activity and follow their progress against personal goals.",
        solution_description: "{name} tracks activities and measurements, sets goals and presents progress through clear visual summaries.",
        deliverables: &["Activity and metric logging", "Goal setting", "Progress visualisation", "Reminders"],
    },
    StoryTemplate {
        keywords: &["learn", "education", "school", "quiz", "student", "lms"],
        case_study: "A tutoring centre graded hundreds of paper quizzes every week. {name} moved lessons and assessments online and gave teachers instant results.",
        problem_statement: "Educators need to publish learning material, run assessments and follow each learner's progress.",
        solution_description: "{name} hosts courses and quizzes with automatic grading and a progress view for instructors and learners.",
        deliverables: &["Course and lesson management", "Quizzes with automatic grading", "Learner progress tracking", "Instructor dashboard"],
    },
    StoryTemplate {
        keywords: &["recipe", "food", "restaurant", "meal", "cook"],
        case_study: "Home cooks in a neighbourhood group swapped recipes as blurry photos in a chat. {name} gave them a searchable recipe collection they can rate and share.",
        problem_statement: "Food lovers need to publish recipes with ingredients and steps, find dishes by ingredient and save favourites.",
        solution_description: "{name} lets users publish, search and bookmark recipes with structured ingredients, steps and ratings.",
        deliverables: &["Recipe publishing with ingredients and steps", "Ingredient-based search", "Ratings and favourites", "User collections"],
    },
    StoryTemplate {
        keywords: &["travel", "trip", "tour", "flight"],
        case_study: "A travel club planned trips in spreadsheets that nobody kept up to date. {name} turned itineraries into shared plans members could follow on the road.",
        problem_statement: "Travellers need to plan itineraries, keep bookings in one place and share plans with companions.",
        solution_description: "{name} builds day-by-day itineraries with places, bookings and sharing for travel groups.",
        deliverables: &["Itinerary builder", "Destination and place search", "Shared trip plans", "Booking details storage"],
    },
    StoryTemplate {
        keywords: &["music", "spotify", "playlist", "audio", "podcast"],
        case_study: "An indie label wanted fans to discover its artists without relying on a large streaming service. {name} became the label's own listening room.",
        problem_statement: "Listeners need to browse tracks, build playlists and play audio smoothly across devices.",
        solution_description: "{name} streams audio with playlists, search and playback controls.",
        deliverables: &["Audio playback controls", "Playlist management", "Track and artist search", "Listening history"],
    },
    StoryTemplate {
        keywords: &["video", "stream", "youtube", "netflix", "movie"],
        case_study: "A training company mailed DVDs to remote staff. {name} replaced them with an on-demand video library.",
        problem_statement: "Creators need to publish videos and viewers need to browse and watch them with reliable playback.",
        solution_description: "{name} hosts a video catalogue with upload, browsing and streaming playback.",
        deliverables: &["Video upload and catalogue", "Streaming playback", "Search and categories", "Watch history"],
    },
    StoryTemplate {
        keywords: &["weather", "forecast", "climate"],
        case_study: "Farmers in a cooperative checked three different websites before planning a day in the field. {name} combined the forecasts they needed on one screen.",
        problem_statement: "Users need current conditions and forecasts for their locations presented clearly.",
        solution_description: "{name} pulls weather data from a public API and presents current conditions and multi-day forecasts by location.",
        deliverables: &["Location search", "Current conditions view", "Multi-day forecast", "Saved locations"],
    },
    StoryTemplate {
        keywords: &["blog", "cms", "content", "markdown"],
        case_study: "A nonprofit's writers waited days for a developer to publish each article. {name} let them write and publish on their own.",
        problem_statement: "Writers need to draft, format and publish articles with categories and comments without touching code.",
        solution_description: "{name} provides an editor, publishing workflow, tagging and comments for written content.",
        deliverables: &["Rich text or markdown editor", "Publishing workflow", "Tags and categories", "Comments"],
    },
    StoryTemplate {
        keywords: &["portfolio", "resume", "cv"],
        case_study: "A graduating designer sent recruiters a zip file of images. {name} gave them a polished site that presents projects and experience.",
        problem_statement: "Professionals need a personal site that showcases projects and experience and is easy to keep current.",
        solution_description: "{name} presents projects, skills and contact details in a responsive personal site.",
        deliverables: &["Project showcase", "Skills and experience sections", "Contact form", "Responsive layout"],
    },
    StoryTemplate {
        keywords: &["game", "chess", "puzzle", "tetris", "snake"],
        case_study: "A student club wanted a game its members could play between lectures. {name} grew from a weekend prototype into a game with a loyal following.",
        problem_statement: "Players expect responsive controls, clear rules and a reason to come back for another round.",
        solution_description: "{name} implements the game loop, rules, scoring and persistent high scores.",
        deliverables: &["Core game loop", "Rules and scoring", "High score tracking", "Responsive controls"],
    },
    StoryTemplate {
        keywords: &["dashboard", "analytics", "admin", "monitor"],
        case_study: "Managers at a logistics firm waited for weekly spreadsheets to understand performance. {name} put live metrics in front of them every morning.",
        problem_statement: "Decision makers need key metrics aggregated from several data sources and presented as clear charts.",
        solution_description: "{name} aggregates data into charts, tables and filters that highlight trends at a glance.",
        deliverables: &["Metric aggregation", "Interactive charts", "Filters and date ranges", "Data export"],
    },
    StoryTemplate {
        keywords: &["real-estate", "realestate", "property", "rental", "housing"],
        case_study: "A small letting agency kept property details in folders on a shared drive. {name} published its listings online with photos and enquiry forms.",
        problem_statement: "Agents need to list properties with photos and details and let prospective tenants or buyers search and enquire.",
        solution_description: "{name} lists properties with search filters, galleries and an enquiry workflow.",
        deliverables: &["Property listings with galleries", "Search filters", "Enquiry workflow", "Agent dashboard"],
    },
    StoryTemplate {
        keywords: &["job", "career", "hiring", "recruit"],
        case_study: "A regional employer received hundreds of CVs by email with no way to track them. {name} organised openings and applications in one pipeline.",
        problem_statement: "Employers need to post openings and review applicants while candidates need to search and apply easily.",
        solution_description: "{name} connects job postings with applicants through search, applications and status tracking.",
        deliverables: &["Job posting management", "Job search", "Application submission", "Applicant tracking"],
    },
    StoryTemplate {
        keywords: &["news", "rss", "feed", "article"],
        case_study: "Readers of a local newsletter wanted updates as they happened rather than once a week. {name} aggregated stories into a continuously updated feed.",
        problem_statement: "Readers need relevant stories from many sources collected, categorised and easy to scan.",
        solution_description: "{name} aggregates articles into categorised feeds with search and bookmarking.",
        deliverables: &["Article aggregation", "Category feeds", "Search", "Bookmarks"],
    },
];

/// 无关键词命中时的默认叙事
pub const DEFAULT_CASE_STUDY: &str = "A team working in {category} needed a dependable application instead of a patchwork of manual steps. {name} became the tool they rely on every day.";
pub const DEFAULT_PROBLEM_STATEMENT: &str = "Practitioners in {category} need a focused application that solves a real workflow end to end.";
pub const DEFAULT_SOLUTION_DESCRIPTION: &str = "{name} is a complete {category} project covering the data model, core features and a usable interface.";
pub const DEFAULT_DELIVERABLES: &[&str] = &[
    "Working core features",
    "Persistent data storage",
    "User-facing interface",
    "Project documentation",
];
