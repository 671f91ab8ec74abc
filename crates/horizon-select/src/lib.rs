//! Horizon Select - selection state for dropdown widgets.
//!
//! The [`SelectionAdapter`] holds a fixed [`OptionList`] and a selected index
//! that can be read or written as an integer or as its string form. Host UI
//! layers bind the string form, then commit it into the integer index.
//!
//! # Example
//!
//! ```
//! use horizon_select::prelude::*;
//!
//! fn main() -> Result<(), horizon_select::Error> {
//!     let adapter = SelectionAdapter::new()
//!         .with_options(OptionList::from([("12", "string"), ("21", "string")]))?
//!         .with_selected_index(1);
//!
//!     adapter.stage_selection("2");
//!     assert_eq!(adapter.commit_selection()?, 2);
//!     assert_eq!(adapter.selected_index(), 2);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
mod error;
pub mod option;
pub mod prelude;

pub use adapter::{parse_index, SelectionAdapter, SyncState};
pub use config::{AdapterConfig, ConfigFormat};
pub use error::{Error, Result};
pub use option::{OptionList, SelectOption};

pub use horizon_select_core::{ConnectionId, Property, ReadOnlyProperty, Signal};
