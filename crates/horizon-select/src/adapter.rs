//! Selection state adapter for dropdown widgets.
//!
//! [`SelectionAdapter`] owns an [`OptionList`] and a selected index that can
//! be read or written either as an integer (the *committed* index) or as its
//! string form (the *staged* selection). String-typed UI bindings write the
//! staged selection; [`SelectionAdapter::commit_selection`] parses it and
//! overwrites the committed index.
//!
//! The committed index is not bounds-checked against the option list. A host
//! that commits an out-of-range index sees `selected_option()` return `None`.
//!
//! # Example
//!
//! ```
//! use horizon_select::{OptionList, SelectionAdapter};
//!
//! let adapter = SelectionAdapter::new()
//!     .with_options(OptionList::from([("12", "Apples"), ("21", "Pears")]))?;
//!
//! adapter.selected_index_changed.connect(|&idx| {
//!     println!("Selected index: {}", idx);
//! });
//!
//! adapter.stage_selection("1");
//! assert!(!adapter.is_synchronized());
//!
//! assert_eq!(adapter.commit_selection()?, 1);
//! assert_eq!(adapter.selected_value(), Some("Pears"));
//! # Ok::<(), horizon_select::Error>(())
//! ```

use horizon_select_core::logging::targets;
use horizon_select_core::{Property, ReadOnlyProperty, Signal};

use crate::error::{Error, Result};
use crate::option::{OptionList, SelectOption};

/// Whether the staged selection agrees with the committed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// The staged string parses to the committed index.
    #[default]
    Synchronized,
    /// The staged string is pending a commit, or does not parse.
    Unsynchronized,
}

/// Parse a staged selection into an index.
///
/// Surrounding whitespace and a leading sign are accepted.
pub fn parse_index(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| Error::parse(input, source))
}

/// Selection state for a dropdown: an option list plus a committed index and
/// its staged string form.
///
/// # Signals
///
/// - `selection_staged(String)`: Emitted when the staged selection changes
/// - `selected_index_changed(i64)`: Emitted when the committed index changes
/// - `options_changed(usize)`: Emitted with the new length when the option
///   list is replaced
#[derive(Debug)]
pub struct SelectionAdapter {
    options: OptionList,
    initialized: bool,
    selected_index: Property<i64>,
    staged: Property<String>,

    /// Signal emitted when the staged selection changes.
    pub selection_staged: Signal<String>,
    /// Signal emitted when the committed index changes.
    pub selected_index_changed: Signal<i64>,
    /// Signal emitted when the option list is replaced.
    pub options_changed: Signal<usize>,
}

impl Default for SelectionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionAdapter {
    /// Create an adapter with no options.
    ///
    /// The committed index is `0` and the staged selection is `"0"`.
    pub fn new() -> Self {
        Self {
            options: OptionList::empty(),
            initialized: false,
            selected_index: Property::new(0),
            staged: Property::new("0".to_string()),
            selection_staged: Signal::new(),
            selected_index_changed: Signal::new(),
            options_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Store the option list and reset the selection to index `0`.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if the list is empty or an
    /// option has a blank id. On failure the adapter is left untouched.
    pub fn initialize(&mut self, options: OptionList) -> Result<()> {
        if let Err(err) = options.validate() {
            tracing::warn!(target: targets::ADAPTER, error = %err, "rejected option list");
            return Err(err);
        }

        let count = options.len();
        self.options = options;
        self.initialized = true;
        tracing::debug!(target: targets::ADAPTER, count, "initialized options");

        self.set_selected_index(0);
        self.options_changed.emit(count);
        Ok(())
    }

    /// Initialize using builder pattern.
    pub fn with_options(mut self, options: OptionList) -> Result<Self> {
        self.initialize(options)?;
        Ok(self)
    }

    /// Returns true once `initialize` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The option list.
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Position of the first option with the given id.
    pub fn find_id(&self, id: &str) -> Option<usize> {
        self.options.position_of(id)
    }

    // =========================================================================
    // Staging and committing
    // =========================================================================

    /// Set the pending string-form index.
    ///
    /// The committed index is not touched and the input is not validated.
    pub fn stage_selection(&self, index_as_string: impl Into<String>) {
        let staged = index_as_string.into();
        if self.staged.set(staged.clone()) {
            tracing::debug!(target: targets::ADAPTER, staged = %staged, "staged selection");
            self.selection_staged.emit(staged);
        }
    }

    /// The pending string-form index.
    pub fn staged_selection(&self) -> String {
        self.staged.get()
    }

    /// Parse the staged selection and overwrite the committed index.
    ///
    /// Returns the committed index. Fails with [`Error::Parse`] if the staged
    /// string is not an integer, leaving the committed index unchanged.
    #[tracing::instrument(skip(self), target = "horizon_select::adapter", level = "trace")]
    pub fn commit_selection(&self) -> Result<i64> {
        let index = self.staged.with(|staged| parse_index(staged)).inspect_err(|err| {
            tracing::warn!(target: targets::ADAPTER, error = %err, "commit rejected");
        })?;

        if let Some(previous) = self.selected_index.replace(index) {
            tracing::debug!(target: targets::ADAPTER, previous, index, "committed selection");
            if usize::try_from(index).map_or(true, |i| i >= self.options.len()) {
                tracing::debug!(
                    target: targets::ADAPTER,
                    index,
                    count = self.options.len(),
                    "committed index has no matching option"
                );
            }
            self.selected_index_changed.emit(index);
        }
        Ok(index)
    }

    /// Stage the position of the option with `id` and commit it.
    ///
    /// Fails with [`Error::UnknownOption`] if no option has that id, leaving
    /// the selection unchanged.
    pub fn select_id(&self, id: &str) -> Result<i64> {
        let position = self.find_id(id).ok_or_else(|| Error::UnknownOption {
            id: id.to_string(),
        })?;
        self.stage_selection(position.to_string());
        self.commit_selection()
    }

    // =========================================================================
    // Committed selection
    // =========================================================================

    /// The committed index.
    pub fn selected_index(&self) -> i64 {
        self.selected_index.get()
    }

    /// Read-only view of the committed index for binding layers.
    pub fn selected_index_property(&self) -> ReadOnlyProperty<'_, i64> {
        ReadOnlyProperty::new(&self.selected_index)
    }

    /// Write the committed index and its staged string together.
    ///
    /// The adapter stays synchronized. The index is not bounds-checked.
    pub fn set_selected_index(&self, index: i64) {
        let staged = index.to_string();
        if self.staged.set(staged.clone()) {
            self.selection_staged.emit(staged);
        }
        if self.selected_index.set(index) {
            tracing::debug!(target: targets::ADAPTER, index, "selected index set");
            self.selected_index_changed.emit(index);
        }
    }

    /// Set the committed index using builder pattern.
    pub fn with_selected_index(self, index: i64) -> Self {
        self.set_selected_index(index);
        self
    }

    /// The option at the committed index, if the index is in range.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.get(self.selected_index())
    }

    /// Id of the selected option.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_option().map(SelectOption::id)
    }

    /// Display value of the selected option.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_option().map(SelectOption::value)
    }

    // =========================================================================
    // Synchronization state
    // =========================================================================

    /// Whether the staged selection agrees with the committed index.
    pub fn sync_state(&self) -> SyncState {
        let committed = self.selected_index();
        match self.staged.with(|staged| parse_index(staged)) {
            Ok(index) if index == committed => SyncState::Synchronized,
            _ => SyncState::Unsynchronized,
        }
    }

    /// Returns true if the adapter is [`SyncState::Synchronized`].
    pub fn is_synchronized(&self) -> bool {
        self.sync_state() == SyncState::Synchronized
    }
}

static_assertions::assert_impl_all!(SelectionAdapter: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn two_options() -> OptionList {
        OptionList::from([("12", "string"), ("21", "string")])
    }

    #[test]
    fn test_new_adapter_is_synchronized_at_zero() {
        let adapter = SelectionAdapter::new();
        assert!(!adapter.is_initialized());
        assert_eq!(adapter.selected_index(), 0);
        assert_eq!(adapter.staged_selection(), "0");
        assert_eq!(adapter.sync_state(), SyncState::Synchronized);
        assert_eq!(adapter.option_count(), 0);
    }

    #[test]
    fn test_initialize_resets_selection() {
        let mut adapter = SelectionAdapter::new().with_selected_index(5);
        adapter.initialize(two_options()).unwrap();

        assert!(adapter.is_initialized());
        assert_eq!(adapter.selected_index(), 0);
        assert_eq!(adapter.staged_selection(), "0");
        assert_eq!(adapter.selected_id(), Some("12"));
    }

    #[test]
    fn test_initialize_rejects_empty_list_and_keeps_state() {
        let mut adapter = SelectionAdapter::new()
            .with_options(two_options())
            .unwrap()
            .with_selected_index(1);

        let err = adapter.initialize(OptionList::empty()).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert_eq!(adapter.option_count(), 2);
        assert_eq!(adapter.selected_index(), 1);
    }

    #[test]
    fn test_stage_does_not_touch_committed_index() {
        let adapter = SelectionAdapter::new().with_options(two_options()).unwrap();

        adapter.stage_selection("1");
        assert_eq!(adapter.selected_index(), 0);
        assert_eq!(adapter.staged_selection(), "1");
        assert_eq!(adapter.sync_state(), SyncState::Unsynchronized);
    }

    #[test]
    fn test_commit_out_of_range_is_accepted() {
        let adapter = SelectionAdapter::new()
            .with_options(two_options())
            .unwrap()
            .with_selected_index(1);

        adapter.stage_selection("2");
        assert_eq!(adapter.commit_selection().unwrap(), 2);
        assert_eq!(adapter.selected_index(), 2);
        assert!(adapter.is_synchronized());
        assert!(adapter.selected_option().is_none());
    }

    #[test]
    fn test_commit_parse_error_leaves_index() {
        let adapter = SelectionAdapter::new()
            .with_options(two_options())
            .unwrap()
            .with_selected_index(1);

        adapter.stage_selection("abc");
        let err = adapter.commit_selection().unwrap_err();
        assert!(err.is_parse());
        assert_eq!(adapter.selected_index(), 1);
        assert_eq!(adapter.sync_state(), SyncState::Unsynchronized);
    }

    #[test]
    fn test_parse_index_rules() {
        assert_eq!(parse_index("2").unwrap(), 2);
        assert_eq!(parse_index(" 7 ").unwrap(), 7);
        assert_eq!(parse_index("-3").unwrap(), -3);
        assert_eq!(parse_index("+4").unwrap(), 4);
        assert!(parse_index("").is_err());
        assert!(parse_index("1.5").is_err());
        assert!(parse_index("2abc").is_err());
    }

    #[test]
    fn test_signals_fire_only_on_change() {
        let adapter = SelectionAdapter::new().with_options(two_options()).unwrap();
        let staged = Arc::new(Mutex::new(Vec::new()));
        let committed = Arc::new(Mutex::new(Vec::new()));

        let staged_clone = staged.clone();
        adapter.selection_staged.connect(move |s: &String| {
            staged_clone.lock().push(s.clone());
        });
        let committed_clone = committed.clone();
        adapter.selected_index_changed.connect(move |&i| {
            committed_clone.lock().push(i);
        });

        adapter.stage_selection("1");
        adapter.stage_selection("1");
        adapter.commit_selection().unwrap();
        adapter.commit_selection().unwrap();

        assert_eq!(*staged.lock(), vec!["1".to_string()]);
        assert_eq!(*committed.lock(), vec![1]);
    }

    #[test]
    fn test_options_changed_reports_length() {
        let mut adapter = SelectionAdapter::new();
        let lengths = Arc::new(Mutex::new(Vec::new()));

        let lengths_clone = lengths.clone();
        adapter.options_changed.connect(move |&n| {
            lengths_clone.lock().push(n);
        });

        adapter.initialize(two_options()).unwrap();
        adapter
            .initialize(OptionList::from([("a", "A"), ("b", "B"), ("c", "C")]))
            .unwrap();

        assert_eq!(*lengths.lock(), vec![2, 3]);
    }

    #[test]
    fn test_select_id() {
        let adapter = SelectionAdapter::new().with_options(two_options()).unwrap();

        assert_eq!(adapter.select_id("21").unwrap(), 1);
        assert_eq!(adapter.selected_id(), Some("21"));
        assert_eq!(adapter.staged_selection(), "1");

        let err = adapter.select_id("99").unwrap_err();
        assert!(matches!(err, Error::UnknownOption { ref id } if id == "99"));
        assert_eq!(adapter.selected_index(), 1);
    }

    #[test]
    fn test_selected_index_property_view() {
        let adapter = SelectionAdapter::new().with_options(two_options()).unwrap();
        adapter.set_selected_index(1);

        let view = adapter.selected_index_property();
        assert_eq!(view.get(), 1);
    }
}
