use std::{num::NonZeroUsize, rc::Rc};

use derive_ex::Ex;
use tracing::debug;

use crate::{
    ActiveFilter, Category, CategoryId, CategoryRef, EngineConfig, PageNumber, Record, RecordId,
    SortDirective, SortField,
};


/// Everything that determines what a catalog view shows.
///
/// A `ViewState` is never modified in place. Every transition returns a new value,
/// sharing the collections it does not touch.
#[derive(Clone, Debug, PartialEq, Ex)]
#[derive_ex(Default)]
#[default(Self::new(&EngineConfig::default()))]
pub struct ViewState {
    records: Rc<[Record]>,
    categories: Rc<[Category]>,
    filter: ActiveFilter,
    sort: SortDirective,
    current_page: PageNumber,
    page_size: NonZeroUsize,
}

impl ViewState {
    /// Empty state: no records, only the [`Category::All`] entry, no filter, first page.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            records: Rc::new([]),
            categories: Rc::new([Category::All]),
            filter: ActiveFilter::None,
            sort: config.sort,
            current_page: PageNumber::FIRST,
            page_size: config.page_size,
        }
    }

    /// Replaces the collections, keeping every other field.
    ///
    /// [`Category::All`] is prepended to `categories`.
    /// Categories using the reserved id [`CategoryId::ALL`] are skipped.
    pub fn with_catalog(
        &self,
        records: impl IntoIterator<Item = Record>,
        categories: impl IntoIterator<Item = CategoryRef>,
    ) -> Self {
        let named = categories.into_iter().filter(|c| {
            let reserved = c.id == CategoryId::ALL;
            if reserved {
                debug!(name = %c.name, "with_catalog: category uses reserved id");
            }
            !reserved
        });
        Self {
            records: records.into_iter().collect(),
            categories: std::iter::once(Category::All)
                .chain(named.map(Category::Named))
                .collect(),
            ..self.clone()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }
    pub fn filter(&self) -> &ActiveFilter {
        &self.filter
    }
    pub fn sort(&self) -> SortDirective {
        self.sort
    }
    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// The selected category, or [`Category::All`] while searching or unfiltered.
    pub fn active_category(&self) -> Category {
        match &self.filter {
            ActiveFilter::ByCategory(c) => Category::Named(c.clone()),
            ActiveFilter::None | ActiveFilter::BySearch(_) => Category::All,
        }
    }

    /// The search query, or `""` while browsing by category or unfiltered.
    pub fn search_query(&self) -> &str {
        match &self.filter {
            ActiveFilter::BySearch(q) => q,
            ActiveFilter::None | ActiveFilter::ByCategory(_) => "",
        }
    }

    /// Returns `true` if `category` is the highlighted entry of the category list.
    pub fn is_active_category(&self, category: &Category) -> bool {
        self.active_category().id() == category.id()
    }

    pub fn select_category(&self, category: Category) -> Self {
        Self {
            filter: ActiveFilter::category(category),
            current_page: PageNumber::FIRST,
            ..self.clone()
        }
    }

    pub fn set_search_query(&self, query: &str) -> Self {
        Self {
            filter: ActiveFilter::search(query),
            current_page: PageNumber::FIRST,
            ..self.clone()
        }
    }

    /// Changes the sort order. The current page is kept.
    pub fn set_sort(&self, sort: SortDirective) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Sorts as a click on the `field` column header does.
    pub fn sort_by(&self, field: SortField) -> Self {
        self.set_sort(self.sort.toggled(field))
    }

    /// Moves to `page`. Pages past the end are accepted and show nothing.
    pub fn select_page(&self, page: PageNumber) -> Self {
        Self {
            current_page: page,
            ..self.clone()
        }
    }

    /// Inverts the flag of the record `id`. Returns an unchanged copy if there is no such record.
    pub fn toggle_flag(&self, id: RecordId) -> Self {
        let Some(index) = self.position(id) else {
            debug!(%id, "toggle_flag: record not found");
            return self.clone();
        };
        let records = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| if i == index { r.toggled() } else { r.clone() })
            .collect();
        Self {
            records,
            ..self.clone()
        }
    }

    /// Removes the record `id`. The current page is kept even if it becomes empty.
    pub fn remove_record(&self, id: RecordId) -> Self {
        if self.position(id).is_none() {
            debug!(%id, "remove_record: record not found");
            return self.clone();
        }
        Self {
            records: self.records.iter().filter(|r| r.id != id).cloned().collect(),
            ..self.clone()
        }
    }

    pub fn apply(&self, transition: &Transition) -> Self {
        match transition {
            Transition::SelectCategory(c) => self.select_category(c.clone()),
            Transition::SetSearchQuery(q) => self.set_search_query(q),
            Transition::SetSort(s) => self.set_sort(*s),
            Transition::SortBy(f) => self.sort_by(*f),
            Transition::SelectPage(p) => self.select_page(*p),
            Transition::ToggleFlag(id) => self.toggle_flag(*id),
            Transition::RemoveRecord(id) => self.remove_record(*id),
        }
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// A validated request to change a [`ViewState`].
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    SelectCategory(Category),
    SetSearchQuery(String),
    SetSort(SortDirective),
    SortBy(SortField),
    SelectPage(PageNumber),
    ToggleFlag(RecordId),
    RemoveRecord(RecordId),
}
impl Transition {
    /// Returns the record a point mutation targets.
    pub fn target_record(&self) -> Option<RecordId> {
        match self {
            Transition::ToggleFlag(id) | Transition::RemoveRecord(id) => Some(*id),
            _ => None,
        }
    }
}
