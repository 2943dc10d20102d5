//! Taxonomy tree shown in the sidebar.

use challenges_core::Cursor;
use challenges_domain::{domain_structure, DomainCategory, SkillSubcategory};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Domain(DomainCategory),
    Subcategory(SkillSubcategory),
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    expanded: HashSet<DomainCategory>,
    pub cursor: Cursor,
}

impl Sidebar {
    pub fn new(initially_expanded: &[DomainCategory]) -> Self {
        let mut sidebar = Self {
            expanded: initially_expanded.iter().copied().collect(),
            cursor: Cursor::new(0),
        };
        sidebar.cursor.set_len(sidebar.rows().len());
        sidebar
    }

    pub fn is_expanded(&self, domain: DomainCategory) -> bool {
        self.expanded.contains(&domain)
    }

    /// Domains in taxonomy order, each followed by its subcategories when expanded.
    pub fn rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for domain in domain_structure() {
            rows.push(SidebarRow::Domain(domain.id));
            if self.is_expanded(domain.id) {
                rows.extend(
                    domain
                        .subcategories
                        .iter()
                        .map(|sub| SidebarRow::Subcategory(sub.id)),
                );
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<SidebarRow> {
        self.cursor
            .index()
            .and_then(|idx| self.rows().get(idx).copied())
    }

    /// Expands or collapses a domain. The cursor stays on the domain row.
    pub fn toggle(&mut self, domain: DomainCategory) {
        if !self.expanded.remove(&domain) {
            self.expanded.insert(domain);
        }
        tracing::debug!(
            "Sidebar domain {} expanded={}",
            domain,
            self.is_expanded(domain)
        );

        let rows = self.rows();
        self.cursor.set_len(rows.len());
        if let Some(idx) = rows.iter().position(|r| *r == SidebarRow::Domain(domain)) {
            self.cursor.select(idx);
        }
    }

    /// Expands the owning domain if needed and moves the cursor onto `subcategory`.
    pub fn reveal(&mut self, subcategory: SkillSubcategory) {
        self.expanded.insert(subcategory.domain());
        let rows = self.rows();
        self.cursor.set_len(rows.len());
        if let Some(idx) = rows
            .iter()
            .position(|r| *r == SidebarRow::Subcategory(subcategory))
        {
            self.cursor.select(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_rows() {
        let sidebar = Sidebar::new(&[DomainCategory::ReactArchitecture]);
        let rows = sidebar.rows();
        assert_eq!(rows.len(), 4 + 3);
        assert_eq!(rows[0], SidebarRow::Domain(DomainCategory::ReactArchitecture));
        assert_eq!(rows[3], SidebarRow::Subcategory(SkillSubcategory::RecursiveUi));
        assert_eq!(
            rows[4],
            SidebarRow::Domain(DomainCategory::PerformanceScalability)
        );
        assert_eq!(sidebar.cursor.len(), 7);
    }

    #[test]
    fn test_toggle_keeps_cursor_on_domain() {
        let mut sidebar = Sidebar::new(&[DomainCategory::ReactArchitecture]);
        sidebar.cursor.select(4);
        sidebar.toggle(DomainCategory::PerformanceScalability);
        assert_eq!(sidebar.rows().len(), 10);
        assert_eq!(
            sidebar.selected_row(),
            Some(SidebarRow::Domain(DomainCategory::PerformanceScalability))
        );

        sidebar.toggle(DomainCategory::ReactArchitecture);
        assert_eq!(sidebar.rows().len(), 7);
        assert_eq!(
            sidebar.selected_row(),
            Some(SidebarRow::Domain(DomainCategory::ReactArchitecture))
        );
    }

    #[test]
    fn test_reveal_expands_domain() {
        let mut sidebar = Sidebar::new(&[]);
        assert_eq!(sidebar.rows().len(), 4);
        sidebar.reveal(SkillSubcategory::ObjectLogic);
        assert!(sidebar.is_expanded(DomainCategory::CoreCsJavascript));
        assert_eq!(
            sidebar.selected_row(),
            Some(SidebarRow::Subcategory(SkillSubcategory::ObjectLogic))
        );
    }
}
