use std::cmp::Ordering;

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::Record;

#[cfg(test)]
mod tests;

/// A sortable column of [`Record`].
#[derive(Clone, Copy, Debug, Display, FromStr, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Title,
    Category,
    Stock,
    Rate,
}
impl SortField {
    /// Sortable columns in display order.
    pub const ALL: [SortField; 4] = [
        SortField::Title,
        SortField::Category,
        SortField::Stock,
        SortField::Rate,
    ];

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::Category => "Category",
            SortField::Stock => "Stock",
            SortField::Rate => "Rate",
        }
    }

    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Category => a.category.name.cmp(&b.category.name),
            SortField::Stock => a.stock.cmp(&b.stock),
            SortField::Rate => a.rate.total_cmp(&b.rate),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, FromStr, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[display("asc")]
    #[serde(rename = "asc")]
    Ascending,
    #[display("desc")]
    #[serde(rename = "desc")]
    Descending,
}
impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[display("{field} {direction}")]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}
impl SortDirective {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }
    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// The directive a click on the `field` column header produces.
    ///
    /// Clicking the current sort column flips its direction; any other column sorts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.reversed())
        } else {
            Self::ascending(field)
        }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }

    /// Stable sort; records with equal keys keep their relative order.
    pub fn sort(&self, records: &mut [&Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}
