//! Selectable options and the ordered list that holds them.
//!
//! An [`OptionList`] is the data model behind a selection adapter: an ordered
//! sequence of [`SelectOption`]s, addressed by zero-based index.
//!
//! # Example
//!
//! ```
//! use horizon_select::{OptionList, SelectOption};
//!
//! let options = OptionList::from([("12", "Apples"), ("21", "Pears")]);
//! assert_eq!(options.len(), 2);
//! assert_eq!(options.get(1).map(SelectOption::value), Some("Pears"));
//! assert_eq!(options.position_of("12"), Some(0));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Select Option
// ============================================================================

/// One selectable entry: an identifier plus a display value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    id: String,
    #[serde(alias = "val")]
    value: String,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// The option identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<I: Into<String>, V: Into<String>> From<(I, V)> for SelectOption {
    fn from((id, value): (I, V)) -> Self {
        Self::new(id, value)
    }
}

// ============================================================================
// Option List
// ============================================================================

/// An ordered list of options.
///
/// Duplicate ids are permitted; lookups by id return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
    options: Vec<SelectOption>,
}

impl OptionList {
    /// Create a list from the given options.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// Create an empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a list from `(id, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().map(SelectOption::from).collect()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the list holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get the option at a signed index.
    ///
    /// Negative and out-of-range indices yield `None`.
    pub fn get(&self, index: i64) -> Option<&SelectOption> {
        usize::try_from(index).ok().and_then(|i| self.options.get(i))
    }

    /// Iterate over the options in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    /// The options as a slice.
    pub fn as_slice(&self) -> &[SelectOption] {
        &self.options
    }

    /// Find the position of the first option with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|option| option.id == id)
    }

    /// Check that the list can back a selection.
    ///
    /// The list must be non-empty and every id must contain a
    /// non-whitespace character.
    pub fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(Error::invalid_configuration("option list is empty"));
        }
        if let Some(index) = self
            .options
            .iter()
            .position(|option| option.id.trim().is_empty())
        {
            return Err(Error::invalid_configuration(format!(
                "option at index {index} has an empty id"
            )));
        }
        Ok(())
    }
}

impl FromIterator<SelectOption> for OptionList {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<SelectOption>> for OptionList {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for OptionList {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_with_signed_index() {
        let options = OptionList::from([("12", "string"), ("21", "string")]);

        assert_eq!(options.get(0).map(SelectOption::id), Some("12"));
        assert_eq!(options.get(1).map(SelectOption::id), Some("21"));
        assert!(options.get(2).is_none());
        assert!(options.get(-1).is_none());
    }

    #[test]
    fn test_position_of_returns_first_match() {
        let options = OptionList::from([("a", "1"), ("b", "2"), ("a", "3")]);

        assert_eq!(options.position_of("a"), Some(0));
        assert_eq!(options.position_of("b"), Some(1));
        assert_eq!(options.position_of("z"), None);
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        let err = OptionList::empty().validate().unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let options = OptionList::from([("x", "ok"), ("  ", "blank")]);
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_validate_allows_duplicate_ids() {
        let options = OptionList::from([("x", "1"), ("x", "2")]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_deserialize_accepts_val_alias() {
        let options: OptionList =
            serde_json::from_str(r#"[{"id": "12", "val": "string"}, {"id": "21", "value": "other"}]"#)
                .unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options.get(0).map(SelectOption::value), Some("string"));
        assert_eq!(options.get(1).map(SelectOption::value), Some("other"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let options = OptionList::from_pairs(vec![("3", "c"), ("1", "a"), ("2", "b")]);
        let ids: Vec<&str> = options.iter().map(SelectOption::id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
