//! Canned result set behind the debounced search demo.

pub const MOCK_RESULTS: [&str; 10] = [
    "React Hooks Tutorial",
    "React Context API Guide",
    "React Performance Tips",
    "React Testing Library",
    "React Server Components",
    "React Native Basics",
    "Redux vs Context",
    "Next.js App Router",
    "TypeScript with React",
    "Tailwind CSS Setup",
];

/// Case-insensitive substring match. An empty query yields no results.
pub fn filter_results(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    MOCK_RESULTS
        .iter()
        .copied()
        .filter(|title| title.to_lowercase().contains(&needle))
        .collect()
}
