//! Challenge catalog and the sources it is loaded from.

use crate::challenge::Challenge;
use crate::taxonomy::{DomainCategory, SkillSubcategory};
use challenges_core::{ChallengeError, ChallengeResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Anything that can produce challenge records.
#[cfg_attr(test, mockall::automock)]
pub trait ChallengeSource {
    fn name(&self) -> String;
    fn load(&self) -> ChallengeResult<Vec<Challenge>>;
}

const BUNDLED: [(&str, &str); 10] = [
    (
        "nested-comments.json",
        include_str!("../data/challenges/nested-comments.json"),
    ),
    (
        "use-debounce.json",
        include_str!("../data/challenges/use-debounce.json"),
    ),
    (
        "compound-tabs.json",
        include_str!("../data/challenges/compound-tabs.json"),
    ),
    (
        "deep-merge.json",
        include_str!("../data/challenges/deep-merge.json"),
    ),
    (
        "flat-to-tree.json",
        include_str!("../data/challenges/flat-to-tree.json"),
    ),
    (
        "lru-cache.json",
        include_str!("../data/challenges/lru-cache.json"),
    ),
    (
        "longest-substring.json",
        include_str!("../data/challenges/longest-substring.json"),
    ),
    (
        "virtual-list.json",
        include_str!("../data/challenges/virtual-list.json"),
    ),
    (
        "web-worker-filter.json",
        include_str!("../data/challenges/web-worker-filter.json"),
    ),
    (
        "memoize-ttl.json",
        include_str!("../data/challenges/memoize-ttl.json"),
    ),
];

fn parse_record(file_name: &str, content: &str) -> ChallengeResult<Challenge> {
    serde_json::from_str(content)
        .map_err(|e| ChallengeError::Serialization(format!("{}: {}", file_name, e)))
}

/// Challenges compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl ChallengeSource for BundledSource {
    fn name(&self) -> String {
        "bundled".to_string()
    }

    fn load(&self) -> ChallengeResult<Vec<Challenge>> {
        BUNDLED
            .iter()
            .map(|(file_name, content)| parse_record(file_name, content))
            .collect()
    }
}

/// Every `*.json` file in a directory, in file-name order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChallengeSource for DirectorySource {
    fn name(&self) -> String {
        self.dir.display().to_string()
    }

    fn load(&self) -> ChallengeResult<Vec<Challenge>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        paths
            .iter()
            .map(|path| {
                let content = std::fs::read_to_string(path)?;
                parse_record(&path.display().to_string(), &content)
            })
            .collect()
    }
}

/// Ordered, id-unique collection of challenges.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

impl Catalog {
    pub fn new(challenges: Vec<Challenge>) -> ChallengeResult<Self> {
        let mut seen = HashSet::new();
        for challenge in &challenges {
            if !seen.insert(challenge.id.as_str()) {
                return Err(ChallengeError::Validation(format!(
                    "duplicate challenge id '{}'",
                    challenge.id
                )));
            }
        }
        Ok(Self { challenges })
    }

    pub fn bundled() -> ChallengeResult<Self> {
        Self::from_sources(&[&BundledSource])
    }

    /// Concatenate sources in order. Ids must be unique across all of them.
    pub fn from_sources(sources: &[&dyn ChallengeSource]) -> ChallengeResult<Self> {
        let mut challenges = Vec::new();
        for source in sources {
            let loaded = source.load()?;
            tracing::info!(
                "Loaded {} challenges from {}",
                loaded.len(),
                source.name()
            );
            challenges.extend(loaded);
        }
        Self::new(challenges)
    }

    pub fn all(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    pub fn first(&self) -> Option<&Challenge> {
        self.challenges.first()
    }

    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn require(&self, id: &str) -> ChallengeResult<&Challenge> {
        self.get(id)
            .ok_or_else(|| ChallengeError::NotFound(format!("challenge '{}'", id)))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.challenges.iter().position(|c| c.id == id)
    }

    pub fn by_domain(&self, domain: DomainCategory) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter().filter(move |c| c.domain == domain)
    }

    pub fn by_subcategory(&self, subcategory: SkillSubcategory) -> impl Iterator<Item = &Challenge> {
        self.challenges
            .iter()
            .filter(move |c| c.subcategory == subcategory)
    }

    pub fn count_by_domain(&self, domain: DomainCategory) -> usize {
        self.by_domain(domain).count()
    }

    pub fn count_by_subcategory(&self, subcategory: SkillSubcategory) -> usize {
        self.by_subcategory(subcategory).count()
    }

    /// The challenge after `id` in catalog order, `None` for the last one or an unknown id.
    pub fn next_after(&self, id: &str) -> Option<&Challenge> {
        self.position(id)
            .and_then(|idx| self.challenges.get(idx + 1))
    }
}
