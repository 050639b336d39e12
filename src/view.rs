use parse_display::Display;
use tracing::trace;

use crate::{paginate, PageControls, Record, ViewState};


/// What a view shows for a given [`ViewState`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct View {
    /// Records of the current page, in sort order.
    pub items: Vec<Record>,
    /// Number of records that pass the filter, on all pages.
    pub total_count: usize,
}

/// Computes the visible page of `state`.
///
/// Filters, then stable-sorts, then counts, then takes the current page.
/// A page past the end yields no items.
pub fn derive(state: &ViewState) -> View {
    let filter = state.filter();
    let mut matched: Vec<&Record> = state
        .records()
        .iter()
        .filter(|r| filter.matches(r))
        .collect();
    state.sort().sort(&mut matched);
    let total_count = matched.len();
    let items = paginate(&matched, state.current_page(), state.page_size())
        .iter()
        .map(|&r| r.clone())
        .collect();
    trace!(total_count, page = %state.current_page(), "derive");
    View { items, total_count }
}

impl View {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pagination bar for this view.
    pub fn page_controls(&self, state: &ViewState) -> PageControls {
        PageControls::new(self.total_count, state.page_size(), state.current_page())
    }
}

/// Headline describing the size of the whole collection, regardless of filter.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Summary {
    #[display("There are no records in the database.")]
    Empty,
    #[display("Showing {0} records in the database.")]
    Showing(usize),
}
impl Summary {
    pub fn of(state: &ViewState) -> Self {
        match state.records().len() {
            0 => Summary::Empty,
            n => Summary::Showing(n),
        }
    }
}
