use parse_display::Display;
use serde::{Deserialize, Serialize};

use crate::{
    CategoryId, PageNumber, RecordId, SortDirection, SortDirective, SortField, Transition,
    ViewState,
};


/// A transition request as received from a rendering layer, before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawTransition {
    SelectCategory { category_id: u32 },
    SetSearchQuery { query: String },
    SetSort { field: String, direction: String },
    SortBy { field: String },
    SelectPage { page: i64 },
    ToggleFlag { id: u64 },
    RemoveRecord { id: u64 },
}

#[non_exhaustive]
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum InputError {
    #[display("unknown category `{0}`")]
    UnknownCategory(CategoryId),
    #[display("unknown sort field `{0}`")]
    UnknownSortField(String),
    #[display("unknown sort direction `{0}`")]
    UnknownSortDirection(String),
    #[display("invalid page `{0}`")]
    InvalidPage(i64),
}

impl std::error::Error for InputError {}

impl RawTransition {
    /// Checks this request against `state` and converts it to a [`Transition`].
    ///
    /// Record ids are not checked; a transition on a missing record is a no-op.
    pub fn validate(&self, state: &ViewState) -> Result<Transition, InputError> {
        Ok(match self {
            RawTransition::SelectCategory { category_id } => {
                let id = CategoryId(*category_id);
                let category = state
                    .category(id)
                    .ok_or(InputError::UnknownCategory(id))?;
                Transition::SelectCategory(category.clone())
            }
            RawTransition::SetSearchQuery { query } => Transition::SetSearchQuery(query.clone()),
            RawTransition::SetSort { field, direction } => Transition::SetSort(SortDirective::new(
                parse_field(field)?,
                parse_direction(direction)?,
            )),
            RawTransition::SortBy { field } => Transition::SortBy(parse_field(field)?),
            RawTransition::SelectPage { page } => Transition::SelectPage(parse_page(*page)?),
            RawTransition::ToggleFlag { id } => Transition::ToggleFlag(RecordId(*id)),
            RawTransition::RemoveRecord { id } => Transition::RemoveRecord(RecordId(*id)),
        })
    }
}

fn parse_field(s: &str) -> Result<SortField, InputError> {
    s.parse()
        .map_err(|_| InputError::UnknownSortField(s.to_string()))
}
fn parse_direction(s: &str) -> Result<SortDirection, InputError> {
    s.parse()
        .map_err(|_| InputError::UnknownSortDirection(s.to_string()))
}
fn parse_page(page: i64) -> Result<PageNumber, InputError> {
    usize::try_from(page)
        .ok()
        .and_then(PageNumber::new)
        .ok_or(InputError::InvalidPage(page))
}
