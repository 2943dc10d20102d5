//! Two-level challenge taxonomy: domain categories and their skill subcategories.

use challenges_core::ChallengeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainCategory {
    ReactArchitecture,
    PerformanceScalability,
    CoreCsJavascript,
    CustomHooksBrowser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillSubcategory {
    DesignPatterns,
    StateManagement,
    RecursiveUi,
    RenderingOptimization,
    NetworkCaching,
    OffloadingComputation,
    DataStructures,
    AsyncFlow,
    ObjectLogic,
    DomInteraction,
    EventSystems,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubcategoryInfo {
    pub id: SkillSubcategory,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainInfo {
    pub id: DomainCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub subcategories: &'static [SubcategoryInfo],
}

const fn sub(
    id: SkillSubcategory,
    label: &'static str,
    description: &'static str,
) -> SubcategoryInfo {
    SubcategoryInfo {
        id,
        label,
        description,
    }
}

static DOMAINS: [DomainInfo; 4] = [
    DomainInfo {
        id: DomainCategory::ReactArchitecture,
        label: "React & Component Architecture",
        icon: "⚛",
        subcategories: &[
            sub(
                SkillSubcategory::DesignPatterns,
                "Design Patterns",
                "Compound Components, Render Props, HOCs",
            ),
            sub(
                SkillSubcategory::StateManagement,
                "State Management",
                "Complex State, Undo/Redo, Context API",
            ),
            sub(
                SkillSubcategory::RecursiveUi,
                "Recursive UI",
                "Nested Data, Tree View",
            ),
        ],
    },
    DomainInfo {
        id: DomainCategory::PerformanceScalability,
        label: "Performance & Scalability",
        icon: "🚀",
        subcategories: &[
            sub(
                SkillSubcategory::RenderingOptimization,
                "Rendering Optimization",
                "Windowing/Virtualization, Memoization",
            ),
            sub(
                SkillSubcategory::NetworkCaching,
                "Network & Caching",
                "Debouncing, Throttling, LRU Cache",
            ),
            sub(
                SkillSubcategory::OffloadingComputation,
                "Offloading Computation",
                "Web Workers, Batching",
            ),
        ],
    },
    DomainInfo {
        id: DomainCategory::CoreCsJavascript,
        label: "Core CS & JavaScript",
        icon: "λ",
        subcategories: &[
            sub(
                SkillSubcategory::DataStructures,
                "Data Structures",
                "Tree Transformation, Linked List, Map/Set",
            ),
            sub(
                SkillSubcategory::AsyncFlow,
                "Asynchronous Flow",
                "Concurrency Limit, Task Queue, Custom Promises",
            ),
            sub(
                SkillSubcategory::ObjectLogic,
                "Object & Logic",
                "Deep Merge, Path Finding, Memoize",
            ),
        ],
    },
    DomainInfo {
        id: DomainCategory::CustomHooksBrowser,
        label: "Custom Hooks & Browser API",
        icon: "⚒",
        subcategories: &[
            sub(
                SkillSubcategory::DomInteraction,
                "DOM Interaction",
                "Intersection Observer, Resize Observer",
            ),
            sub(
                SkillSubcategory::EventSystems,
                "Event Systems",
                "Pub/Sub, Custom Event Emitter",
            ),
        ],
    },
];

/// The fixed domain → subcategory tree, in sidebar order.
pub fn domain_structure() -> &'static [DomainInfo] {
    &DOMAINS
}

impl DomainCategory {
    pub const ALL: [DomainCategory; 4] = [
        DomainCategory::ReactArchitecture,
        DomainCategory::PerformanceScalability,
        DomainCategory::CoreCsJavascript,
        DomainCategory::CustomHooksBrowser,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DomainCategory::ReactArchitecture => "react-architecture",
            DomainCategory::PerformanceScalability => "performance-scalability",
            DomainCategory::CoreCsJavascript => "core-cs-javascript",
            DomainCategory::CustomHooksBrowser => "custom-hooks-browser",
        }
    }

    pub fn info(self) -> &'static DomainInfo {
        DOMAINS
            .iter()
            .find(|d| d.id == self)
            .unwrap_or(&DOMAINS[0])
    }

    pub fn contains(self, subcategory: SkillSubcategory) -> bool {
        subcategory.domain() == self
    }
}

impl SkillSubcategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillSubcategory::DesignPatterns => "design-patterns",
            SkillSubcategory::StateManagement => "state-management",
            SkillSubcategory::RecursiveUi => "recursive-ui",
            SkillSubcategory::RenderingOptimization => "rendering-optimization",
            SkillSubcategory::NetworkCaching => "network-caching",
            SkillSubcategory::OffloadingComputation => "offloading-computation",
            SkillSubcategory::DataStructures => "data-structures",
            SkillSubcategory::AsyncFlow => "async-flow",
            SkillSubcategory::ObjectLogic => "object-logic",
            SkillSubcategory::DomInteraction => "dom-interaction",
            SkillSubcategory::EventSystems => "event-systems",
        }
    }

    /// The domain this subcategory is listed under.
    pub fn domain(self) -> DomainCategory {
        match self {
            SkillSubcategory::DesignPatterns
            | SkillSubcategory::StateManagement
            | SkillSubcategory::RecursiveUi => DomainCategory::ReactArchitecture,
            SkillSubcategory::RenderingOptimization
            | SkillSubcategory::NetworkCaching
            | SkillSubcategory::OffloadingComputation => DomainCategory::PerformanceScalability,
            SkillSubcategory::DataStructures
            | SkillSubcategory::AsyncFlow
            | SkillSubcategory::ObjectLogic => DomainCategory::CoreCsJavascript,
            SkillSubcategory::DomInteraction | SkillSubcategory::EventSystems => {
                DomainCategory::CustomHooksBrowser
            }
        }
    }

    pub fn info(self) -> &'static SubcategoryInfo {
        let domain = self.domain().info();
        domain
            .subcategories
            .iter()
            .find(|s| s.id == self)
            .unwrap_or(&domain.subcategories[0])
    }
}

impl fmt::Display for DomainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SkillSubcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainCategory {
    type Err = ChallengeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainCategory::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ChallengeError::NotFound(format!("domain '{}'", s)))
    }
}

impl FromStr for SkillSubcategory {
    type Err = ChallengeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DOMAINS
            .iter()
            .flat_map(|d| d.subcategories.iter())
            .map(|info| info.id)
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| ChallengeError::NotFound(format!("subcategory '{}'", s)))
    }
}
