//! Field value types for a person
//!
//! Every field is a validated newtype over `String`. A value can only be
//! constructed through `new`, which enforces the field's rule and reports the
//! field's constraint message on failure.
//!
//! # Contact fields
//!
//! `Phone`, `Email` and `Address` are contact fields: the empty string is
//! accepted and means "not provided". `Name` and `Tag` must never be empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use core_kernel::CoreError;

/// Generates the shared surface of a string newtype field.
macro_rules! define_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Returns the underlying value
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the field, returning the owned value
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(field: $name) -> String {
                field.0
            }
        }
    };
}

/// Generates the constructors of a contact field, which also accepts empty.
macro_rules! define_contact_field {
    ($(#[$meta:meta])* $name:ident, $check:ident, $message:expr) => {
        define_field!($(#[$meta])* $name);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            /// Creates the field, accepting either an empty value or a valid one
            pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
                let value = value.into();
                if value.is_empty() || Self::$check(&value) {
                    Ok(Self(value))
                } else {
                    Err(CoreError::validation(Self::MESSAGE_CONSTRAINTS))
                }
            }

            /// Creates the "not provided" value
            pub fn empty() -> Self {
                Self(String::new())
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::empty()
            }
        }
    };
}

define_field!(
    /// A person's name, also their identity within an address book
    Name
);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if Self::is_valid_name(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::validation(Self::MESSAGE_CONSTRAINTS))
        }
    }

    /// First character ASCII alphanumeric, the rest ASCII alphanumeric or space
    pub fn is_valid_name(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }
}

define_contact_field!(
    /// A phone number of at least three digits
    Phone,
    is_valid_phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

impl Phone {
    pub fn is_valid_phone(value: &str) -> bool {
        value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
    }
}

define_contact_field!(
    /// An e-mail address
    Email,
    is_valid_email,
    "Emails should be of the format local-part@domain and adhere to standard constraints"
);

impl Email {
    /// Standard address syntax whose last domain label has at least two characters
    pub fn is_valid_email(value: &str) -> bool {
        value.validate_email()
            && value
                .rsplit_once('@')
                .and_then(|(_, domain)| domain.rsplit('.').next())
                .is_some_and(|label| label.len() >= 2)
    }
}

define_contact_field!(
    /// A free-form postal address
    Address,
    is_valid_address,
    "Addresses can take any values, and it should not begin with whitespace"
);

impl Address {
    pub fn is_valid_address(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

define_field!(
    /// A single-word label attached to a person
    Tag
);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if Self::is_valid_tag_name(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::validation(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn is_valid_tag_name(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
    }
}
