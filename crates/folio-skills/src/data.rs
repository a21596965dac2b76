//! Skills table contents.

use crate::{Icon, Skill, SkillCategory};

/// Skill categories in display order.
pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "frontend",
        title: "Frontend",
        icon: Icon::Code,
        description: "Interfaces that are fast, accessible and pleasant to use.",
        skills: &[
            Skill {
                name: "React",
                level: 90,
                icon: Icon::React,
                color: "#61dafb",
                experience: "4+ years",
                description: "Component architecture, hooks and state management.",
            },
            Skill {
                name: "TypeScript",
                level: 85,
                icon: Icon::TypeScript,
                color: "#3178c6",
                experience: "3+ years",
                description: "Strictly typed application code and shared API contracts.",
            },
            Skill {
                name: "JavaScript",
                level: 90,
                icon: Icon::JavaScript,
                color: "#f7df1e",
                experience: "5+ years",
                description: "Modern ES features, async patterns and browser APIs.",
            },
            Skill {
                name: "HTML5",
                level: 95,
                icon: Icon::Html,
                color: "#e34f26",
                experience: "5+ years",
                description: "Semantic markup and accessibility.",
            },
            Skill {
                name: "CSS3",
                level: 88,
                icon: Icon::Css,
                color: "#1572b6",
                experience: "5+ years",
                description: "Responsive layouts, grid, flexbox and animation.",
            },
            Skill {
                name: "Tailwind CSS",
                level: 85,
                icon: Icon::Tailwind,
                color: "#06b6d4",
                experience: "2+ years",
                description: "Utility-first styling and design systems.",
            },
            Skill {
                name: "Three.js",
                level: 70,
                icon: Icon::ThreeJs,
                color: "#ffffff",
                experience: "1+ years",
                description: "Particle effects and interactive 3D scenes.",
            },
        ],
    },
    SkillCategory {
        id: "backend",
        title: "Backend",
        icon: Icon::Server,
        description: "Services, APIs and the data behind them.",
        skills: &[
            Skill {
                name: "Node.js",
                level: 82,
                icon: Icon::NodeJs,
                color: "#339933",
                experience: "3+ years",
                description: "REST services, background jobs and tooling.",
            },
            Skill {
                name: "Rust",
                level: 65,
                icon: Icon::Rust,
                color: "#dea584",
                experience: "1+ years",
                description: "Command-line tools and terminal interfaces.",
            },
            Skill {
                name: "Python",
                level: 75,
                icon: Icon::Python,
                color: "#3776ab",
                experience: "3+ years",
                description: "Scripting, automation and data processing.",
            },
            Skill {
                name: "PostgreSQL",
                level: 72,
                icon: Icon::Database,
                color: "#4169e1",
                experience: "2+ years",
                description: "Schema design, indexing and query tuning.",
            },
            Skill {
                name: "MongoDB",
                level: 68,
                icon: Icon::Database,
                color: "#47a248",
                experience: "2+ years",
                description: "Document modeling and aggregation pipelines.",
            },
        ],
    },
    SkillCategory {
        id: "tools",
        title: "Tools & DevOps",
        icon: Icon::Wrench,
        description: "Shipping and keeping things running.",
        skills: &[
            Skill {
                name: "Git",
                level: 90,
                icon: Icon::Git,
                color: "#f05032",
                experience: "5+ years",
                description: "Branching workflows, rebasing and code review.",
            },
            Skill {
                name: "Docker",
                level: 75,
                icon: Icon::Docker,
                color: "#2496ed",
                experience: "2+ years",
                description: "Containerized development and deployment.",
            },
            Skill {
                name: "Linux",
                level: 80,
                icon: Icon::Terminal,
                color: "#fcc624",
                experience: "4+ years",
                description: "Shell scripting and server administration.",
            },
            Skill {
                name: "AWS",
                level: 62,
                icon: Icon::Cloud,
                color: "#ff9900",
                experience: "1+ years",
                description: "Static hosting, functions and managed databases.",
            },
        ],
    },
    SkillCategory {
        id: "design",
        title: "Design",
        icon: Icon::Palette,
        description: "Turning ideas into interfaces.",
        skills: &[
            Skill {
                name: "Figma",
                level: 78,
                icon: Icon::Figma,
                color: "#f24e1e",
                experience: "3+ years",
                description: "Wireframes, prototypes and component libraries.",
            },
            Skill {
                name: "UI/UX",
                level: 74,
                icon: Icon::Palette,
                color: "#a259ff",
                experience: "3+ years",
                description: "User research, flows and visual hierarchy.",
            },
        ],
    },
];
