//! Form field names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four editable customer attributes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Surname,
    Name,
    Address,
    Telephone,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [Field::Surname, Field::Name, Field::Address, Field::Telephone];

    /// Input name, as used for parsing
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Surname => "surname",
            Field::Name => "name",
            Field::Address => "address",
            Field::Telephone => "telephone",
        }
    }

    /// Whether a submission is rejected when this field is blank
    pub fn is_required(self) -> bool {
        matches!(self, Field::Surname | Field::Name)
    }

    /// Position in [`Field::ALL`]
    pub fn index(self) -> usize {
        match self {
            Field::Surname => 0,
            Field::Name => 1,
            Field::Address => 2,
            Field::Telephone => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown field name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_names() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "email".parse::<Field>(),
            Err(ParseFieldError("email".to_string()))
        );
        // Names are matched exactly
        assert!("Surname".parse::<Field>().is_err());
    }

    #[test]
    fn index_matches_display_order() {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn only_surname_and_name_are_required() {
        let required: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required, vec![Field::Surname, Field::Name]);
    }
}
