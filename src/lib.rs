//! Derives what a catalog view shows from its records, filter, sort order and page.
//!
//! [`ViewState`] holds the inputs, [`derive`] computes the visible [`View`],
//! and [`ViewStore`] keeps the current pair and notifies subscribers when it is replaced.

mod config;
mod filter;
mod input;
mod page;
mod record;
mod sort;
mod source;
mod store;
mod subscription;
mod view;
mod view_state;

#[cfg(test)]
mod test_helpers;

pub use config::*;
pub use filter::*;
pub use input::*;
pub use page::*;
pub use record::*;
pub use sort::*;
pub use source::*;
pub use store::*;
pub use subscription::*;
pub use view::*;
pub use view_state::*;
