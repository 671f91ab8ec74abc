//! Core primitives for Horizon Select.
//!
//! - **Signal/Slot System**: [`Signal`] notifies observers of state changes
//! - **Property System**: [`Property`] detects whether a write changed a value
//! - **Logging**: tracing target names in [`logging::targets`]
//!
//! # Example
//!
//! ```
//! use horizon_select_core::{Property, Signal};
//!
//! let index = Property::new(0_i64);
//! let index_changed = Signal::<i64>::new();
//! index_changed.connect(|i| println!("now {i}"));
//!
//! if index.set(1) {
//!     index_changed.emit(1);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionId, Signal};
