use crate::{Category, CategoryRef, Record};


/// The effective filter of a view.
///
/// Browsing by category and searching by title are mutually exclusive, so only one of them is stored.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    None,
    ByCategory(CategoryRef),
    BySearch(String),
}

impl ActiveFilter {
    /// Filter for a category selection. Selecting [`Category::All`] removes the filter.
    pub fn category(category: Category) -> Self {
        match category {
            Category::All => ActiveFilter::None,
            Category::Named(c) => ActiveFilter::ByCategory(c),
        }
    }

    /// Filter for a search query. A query that is blank after trimming removes the filter.
    ///
    /// The query is kept as typed.
    pub fn search(query: &str) -> Self {
        if query.trim().is_empty() {
            ActiveFilter::None
        } else {
            ActiveFilter::BySearch(query.to_string())
        }
    }

    /// Returns `true` if `record` passes this filter.
    ///
    /// Search matches titles that start with the trimmed query, ignoring case.
    /// Category matches by display name.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            ActiveFilter::None => true,
            ActiveFilter::ByCategory(c) => record.category.name == c.name,
            ActiveFilter::BySearch(query) => {
                starts_with_ignore_case(&record.title, query.trim())
            }
        }
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.to_lowercase().starts_with(&prefix.to_lowercase())
}
