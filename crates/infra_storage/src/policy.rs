//! Load policy
//!
//! A bulk load can meet two kinds of bad records: persons that fail the
//! domain's required-field rules, and persons whose identity is already
//! loaded. `LoadPolicy` decides each case independently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What to do with a stored person whose required fields are invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnInvalid {
    /// Silently leave the person out of the result
    Drop,
    /// Abort the load with a data constraint error
    #[default]
    Fail,
}

/// What to do with a stored person whose identity is already loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnDuplicate {
    /// Skip the uniqueness check; the duplicate is kept in the result
    Skip,
    /// Abort the load with a duplicate person error
    #[default]
    Fail,
}

/// Leniency settings for converting stored persons into an address book
///
/// # Examples
///
/// ```rust
/// use infra_storage::policy::{LoadPolicy, OnDuplicate, OnInvalid};
///
/// let policy = LoadPolicy::from_skip_duplicate(true);
/// assert_eq!(policy, LoadPolicy::lenient());
/// assert_eq!(policy.on_invalid, OnInvalid::Drop);
/// assert_eq!(policy.on_duplicate, OnDuplicate::Skip);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadPolicy {
    pub on_invalid: OnInvalid,
    pub on_duplicate: OnDuplicate,
}

impl LoadPolicy {
    /// Every bad record aborts the load
    pub fn strict() -> Self {
        Self {
            on_invalid: OnInvalid::Fail,
            on_duplicate: OnDuplicate::Fail,
        }
    }

    /// Invalid persons are dropped and duplicates are kept
    pub fn lenient() -> Self {
        Self {
            on_invalid: OnInvalid::Drop,
            on_duplicate: OnDuplicate::Skip,
        }
    }

    /// Maps the single "skip duplicate" switch onto a policy
    ///
    /// `true` turns on both leniencies at once, `false` turns both off.
    pub fn from_skip_duplicate(skip_duplicate: bool) -> Self {
        if skip_duplicate {
            Self::lenient()
        } else {
            Self::strict()
        }
    }

    pub fn drops_invalid(&self) -> bool {
        self.on_invalid == OnInvalid::Drop
    }

    pub fn rejects_duplicates(&self) -> bool {
        self.on_duplicate == OnDuplicate::Fail
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "on_invalid={:?}, on_duplicate={:?}",
            self.on_invalid, self.on_duplicate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(LoadPolicy::default(), LoadPolicy::strict());
        assert!(!LoadPolicy::strict().drops_invalid());
        assert!(LoadPolicy::strict().rejects_duplicates());
    }

    #[test]
    fn test_from_skip_duplicate() {
        assert_eq!(LoadPolicy::from_skip_duplicate(false), LoadPolicy::strict());

        let lenient = LoadPolicy::from_skip_duplicate(true);
        assert!(lenient.drops_invalid());
        assert!(!lenient.rejects_duplicates());
    }

    #[test]
    fn test_policies_can_be_mixed() {
        let policy = LoadPolicy {
            on_invalid: OnInvalid::Drop,
            on_duplicate: OnDuplicate::Fail,
        };
        assert!(policy.drops_invalid());
        assert!(policy.rejects_duplicates());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let policy: LoadPolicy =
            serde_json::from_str(r#"{"on_invalid":"drop","on_duplicate":"skip"}"#).unwrap();
        assert_eq!(policy, LoadPolicy::lenient());
    }
}
