use std::num::NonZeroUsize;

use crate::{Catalog, CategoryRef, EngineConfig, Record, ViewState};

pub fn horror() -> CategoryRef {
    CategoryRef::new(1, "Horror")
}
pub fn comedy() -> CategoryRef {
    CategoryRef::new(2, "Comedy")
}

/// Ghost (Horror), Gnome (Comedy), Alien (Horror), with ids 1, 2, 3.
pub fn catalog() -> Catalog {
    Catalog {
        records: vec![
            Record::new(1, "Ghost", horror()).with_stock(5).with_rate(2.0),
            Record::new(2, "Gnome", comedy()).with_stock(0).with_rate(3.0),
            Record::new(3, "Alien", horror()).with_stock(2).with_rate(4.0),
        ],
        categories: vec![horror(), comedy()],
    }
}

pub fn config(page_size: usize) -> EngineConfig {
    EngineConfig::default().with_page_size(NonZeroUsize::new(page_size).unwrap())
}

pub fn state(page_size: usize) -> ViewState {
    let c = catalog();
    ViewState::new(&config(page_size)).with_catalog(c.records, c.categories)
}

pub fn titles(items: &[Record]) -> Vec<&str> {
    items.iter().map(|r| r.title.as_str()).collect()
}
