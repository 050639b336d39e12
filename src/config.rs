use std::num::NonZeroUsize;

use derive_ex::Ex;
use serde::{Deserialize, Serialize};

use crate::SortDirective;


/// Settings fixed for the lifetime of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ex, Serialize, Deserialize)]
#[derive_ex(Default)]
#[serde(default)]
pub struct EngineConfig {
    #[default(Self::DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroUsize,
    /// Sort applied until the first sort transition.
    pub sort: SortDirective,
}
impl EngineConfig {
    pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(4) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn with_page_size(self, page_size: NonZeroUsize) -> Self {
        Self { page_size, ..self }
    }
    pub fn with_sort(self, sort: SortDirective) -> Self {
        Self { sort, ..self }
    }
}
