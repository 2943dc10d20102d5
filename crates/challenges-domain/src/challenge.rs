use crate::taxonomy::{DomainCategory, SkillSubcategory};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tsx,
    Typescript,
    Javascript,
}

/// Interactive demo attached to a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    NestedComments,
    UseDebounce,
    VirtualList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawChallenge")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub domain: DomainCategory,
    pub subcategory: SkillSubcategory,
    pub difficulty: Difficulty,
    pub statement: String,
    pub constraints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    pub code: String,
    pub language: Language,
    pub common_mistakes: Vec<String>,
    #[serde(rename = "demoComponentKey", skip_serializing_if = "Option::is_none")]
    pub demo: Option<DemoKind>,
}

/// On-disk record. Solution code is stored either whole or as one string per line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChallenge {
    id: String,
    title: String,
    domain: DomainCategory,
    subcategory: SkillSubcategory,
    difficulty: Difficulty,
    statement: String,
    #[serde(default)]
    constraints: Vec<String>,
    #[serde(default)]
    complexity: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    code_lines: Option<Vec<String>>,
    language: Language,
    #[serde(default)]
    common_mistakes: Vec<String>,
    #[serde(default)]
    demo_component_key: Option<String>,
}

impl TryFrom<RawChallenge> for Challenge {
    type Error = String;

    fn try_from(raw: RawChallenge) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err("challenge id must not be empty".to_string());
        }
        if raw.title.trim().is_empty() {
            return Err(format!("challenge '{}' has an empty title", raw.id));
        }
        if !raw.domain.contains(raw.subcategory) {
            return Err(format!(
                "challenge '{}': subcategory '{}' does not belong to domain '{}'",
                raw.id, raw.subcategory, raw.domain
            ));
        }

        let code = match (raw.code, raw.code_lines) {
            (Some(code), _) => code,
            (None, Some(lines)) => lines.join("\n"),
            (None, None) => String::new(),
        };

        let demo = raw.demo_component_key.and_then(|key| {
            let parsed = DemoKind::from_key(&key);
            if parsed.is_none() {
                tracing::warn!("Challenge '{}' names unknown demo '{}'", raw.id, key);
            }
            parsed
        });

        Ok(Self {
            id: raw.id,
            title: raw.title,
            domain: raw.domain,
            subcategory: raw.subcategory,
            difficulty: raw.difficulty,
            statement: raw.statement,
            constraints: raw.constraints,
            complexity: raw.complexity,
            code,
            language: raw.language,
            common_mistakes: raw.common_mistakes,
            demo,
        })
    }
}

impl DemoKind {
    pub fn key(self) -> &'static str {
        match self {
            DemoKind::NestedComments => "nested-comments",
            DemoKind::UseDebounce => "use-debounce",
            DemoKind::VirtualList => "virtual-list",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [
            DemoKind::NestedComments,
            DemoKind::UseDebounce,
            DemoKind::VirtualList,
        ]
        .into_iter()
        .find(|kind| kind.key() == key)
    }
}

impl Language {
    /// Token understood by syntax highlighters.
    pub fn highlight_token(self) -> &'static str {
        match self {
            Language::Tsx => "tsx",
            Language::Typescript => "ts",
            Language::Javascript => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Tsx => "tsx",
            Language::Typescript => "typescript",
            Language::Javascript => "javascript",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Mid => f.write_str("Mid"),
            Difficulty::Senior => f.write_str("Senior"),
        }
    }
}

/// Compact listing form of a challenge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSummary {
    pub id: String,
    pub title: String,
    pub domain: DomainCategory,
    pub subcategory: SkillSubcategory,
    pub difficulty: Difficulty,
    pub has_demo: bool,
}

impl From<&Challenge> for ChallengeSummary {
    fn from(challenge: &Challenge) -> Self {
        Self {
            id: challenge.id.clone(),
            title: challenge.title.clone(),
            domain: challenge.domain,
            subcategory: challenge.subcategory,
            difficulty: challenge.difficulty,
            has_demo: challenge.demo.is_some(),
        }
    }
}
