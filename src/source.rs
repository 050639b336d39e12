use serde::{Deserialize, Serialize};

use crate::{CategoryRef, Record};


/// Supplies the whole record and category collections at once.
pub trait DataSource {
    fn records(&self) -> Vec<Record>;
    fn categories(&self) -> Vec<CategoryRef>;
}

/// An in-memory [`DataSource`].
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub records: Vec<Record>,
    pub categories: Vec<CategoryRef>,
}
impl Catalog {
    pub fn from_source(source: &(impl DataSource + ?Sized)) -> Self {
        Self {
            records: source.records(),
            categories: source.categories(),
        }
    }
}
impl DataSource for Catalog {
    fn records(&self) -> Vec<Record> {
        self.records.clone()
    }
    fn categories(&self) -> Vec<CategoryRef> {
        self.categories.clone()
    }
}
