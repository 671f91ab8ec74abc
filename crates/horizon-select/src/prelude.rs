//! Prelude module for Horizon Select.
//!
//! ```ignore
//! use horizon_select::prelude::*;
//! ```

pub use crate::adapter::{SelectionAdapter, SyncState};
pub use crate::config::AdapterConfig;
pub use crate::option::{OptionList, SelectOption};

pub use horizon_select_core::{ConnectionId, Signal};
