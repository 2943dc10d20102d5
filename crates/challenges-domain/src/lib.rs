pub mod catalog;
pub mod challenge;
pub mod comments;
pub mod search;
pub mod taxonomy;

pub use catalog::{BundledSource, Catalog, ChallengeSource, DirectorySource};
pub use challenge::{Challenge, ChallengeSummary, DemoKind, Difficulty, Language};
pub use comments::{Comment, CommentNode, CommentThread};
pub use taxonomy::{
    domain_structure, DomainCategory, DomainInfo, SkillSubcategory, SubcategoryInfo,
};
