use parse_display::Display;
use serde::{Deserialize, Serialize};


/// Identifier of a [`Record`]. Stable for the lifetime of the collection.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[display("{0}")]
#[serde(transparent)]
pub struct RecordId(pub u64);

/// Identifier of a category supplied by a data source.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[display("{0}")]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Reserved for [`Category::All`]. Never produced by a data source.
    pub const ALL: Self = Self(0);
}

/// A category as it appears on a record: identifier and display name.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{name}")]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
}
impl CategoryRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
        }
    }
}

/// An entry of the category list.
///
/// `All` is the synthetic "no category filter" entry that heads every category list.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    #[display("All categories")]
    All,
    #[display("{0}")]
    Named(CategoryRef),
}
impl Category {
    pub fn id(&self) -> CategoryId {
        match self {
            Category::All => CategoryId::ALL,
            Category::Named(c) => c.id,
        }
    }
    pub fn name(&self) -> &str {
        match self {
            Category::All => "All categories",
            Category::Named(c) => &c.name,
        }
    }
    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }
}
impl From<CategoryRef> for Category {
    fn from(value: CategoryRef) -> Self {
        Category::Named(value)
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub category: CategoryRef,
    pub stock: u32,
    pub rate: f64,
    #[serde(default)]
    pub favorite: bool,
}
impl Record {
    pub fn new(id: u64, title: impl Into<String>, category: CategoryRef) -> Self {
        Self {
            id: RecordId(id),
            title: title.into(),
            category,
            stock: 0,
            rate: 0.0,
            favorite: false,
        }
    }
    pub fn with_stock(self, stock: u32) -> Self {
        Self { stock, ..self }
    }
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Returns a copy with the flag inverted.
    pub fn toggled(&self) -> Self {
        Self {
            favorite: !self.favorite,
            ..self.clone()
        }
    }
}
