use std::{num::NonZeroUsize, ops::RangeInclusive};

use derive_ex::Ex;
use parse_display::Display;


/// 1-based page number.
///
/// May point past the last page; such a page is simply empty.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord, Ex)]
#[derive_ex(Default)]
#[default(Self::FIRST)]
#[display("{0}")]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Returns `None` for page `0`.
    pub fn new(page: usize) -> Option<Self> {
        NonZeroUsize::new(page).map(Self)
    }
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Index of the first item on this page.
    pub fn offset(self, page_size: NonZeroUsize) -> usize {
        (self.get() - 1).saturating_mul(page_size.get())
    }
}
impl From<NonZeroUsize> for PageNumber {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

/// Number of pages needed to show `total_count` items.
pub fn page_count(total_count: usize, page_size: NonZeroUsize) -> usize {
    total_count.div_ceil(page_size.get())
}

/// Returns the items of `page`, or an empty slice if `page` is past the end.
pub fn paginate<T>(items: &[T], page: PageNumber, page_size: NonZeroUsize) -> &[T] {
    let start = page.offset(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size.get()).min(items.len());
    &items[start..end]
}

/// What a pagination bar needs to render itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageControls {
    pub page_count: usize,
    pub current: PageNumber,
}
impl PageControls {
    pub fn new(total_count: usize, page_size: NonZeroUsize, current: PageNumber) -> Self {
        Self {
            page_count: page_count(total_count, page_size),
            current,
        }
    }

    /// Pagination is hidden when everything fits on a single page.
    pub fn is_visible(&self) -> bool {
        self.page_count > 1
    }
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> {
        self.range().filter_map(PageNumber::new)
    }
    pub fn is_current(&self, page: PageNumber) -> bool {
        self.current == page
    }
    pub fn is_out_of_range(&self) -> bool {
        self.current.get() > self.page_count
    }
    fn range(&self) -> RangeInclusive<usize> {
        1..=self.page_count
    }
}
