use crate::cli::ListArgs;
use crate::context::CliContext;
use crate::output;
use challenges_domain::{domain_structure, ChallengeSummary};
use serde::Serialize;

#[derive(Serialize)]
struct SubcategoryEntry {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct DomainEntry {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    count: usize,
    subcategories: Vec<SubcategoryEntry>,
}

pub fn handle_list(ctx: &CliContext, args: ListArgs) -> anyhow::Result<()> {
    let summaries: Vec<ChallengeSummary> = ctx
        .catalog
        .all()
        .iter()
        .filter(|c| args.domain.map_or(true, |d| c.domain == d))
        .filter(|c| args.subcategory.map_or(true, |s| c.subcategory == s))
        .map(ChallengeSummary::from)
        .collect();
    output::output_list(summaries)
}

pub fn handle_show(ctx: &CliContext, id: &str) -> anyhow::Result<()> {
    match ctx.catalog.get(id) {
        Some(challenge) => output::output_success(challenge),
        None => output::output_error(&format!("Challenge not found: {}", id)),
    }
}

pub fn handle_taxonomy(ctx: &CliContext) -> anyhow::Result<()> {
    let domains = domain_structure()
        .iter()
        .map(|domain| DomainEntry {
            id: domain.id.as_str(),
            label: domain.label,
            icon: domain.icon,
            count: ctx.catalog.count_by_domain(domain.id),
            subcategories: domain
                .subcategories
                .iter()
                .map(|sub| SubcategoryEntry {
                    id: sub.id.as_str(),
                    label: sub.label,
                    description: sub.description,
                    count: ctx.catalog.count_by_subcategory(sub.id),
                })
                .collect(),
        })
        .collect();
    output::output_list(domains)
}
