//! # Reserved Identifiers
//!
//! Haskell 2010 reserves a fixed set of words that would otherwise lex as variable
//! identifiers. The identifier parser consults [`Keyword`] after recognizing a
//! maximal `varid`, so `if` becomes a keyword while `ifx` and `if'` stay identifiers.

/// Reserved identifiers (`reservedid` in the Haskell 2010 Report).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Case,
    Class,
    Data,
    Default,
    Deriving,
    Do,
    Else,
    Foreign,
    If,
    Import,
    In,
    Infix,
    Infixl,
    Infixr,
    Instance,
    Let,
    Module,
    Newtype,
    Of,
    Then,
    Type,
    Where,
    /// The wildcard `_`.
    #[strum(serialize = "_")]
    Underscore,
}

pub fn is_reserved(id: &str) -> bool {
    Keyword::try_from(id).is_ok()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_keywords() {
        let test_cases = [
            ("case", Keyword::Case),
            ("infixl", Keyword::Infixl),
            ("newtype", Keyword::Newtype),
            ("where", Keyword::Where),
            ("_", Keyword::Underscore),
        ];

        for (input, expected_keyword) in test_cases.iter() {
            assert_eq!(Keyword::from_str(input).unwrap(), *expected_keyword);
        }
    }

    // every keyword round-trips through its spelling
    #[test]
    fn test_all_keyword() {
        for keyword in Keyword::iter() {
            let spelled = keyword.to_string();
            assert!(is_reserved(&spelled), "{spelled} should be reserved");
            assert_eq!(Keyword::from_str(&spelled).unwrap(), keyword);
        }
        assert_eq!(Keyword::iter().count(), 23);
    }

    #[test]
    fn test_not_reserved() {
        for id in ["ifx", "If", "cases", "_x", "forall", "qualified", "as", "hiding"] {
            assert!(!is_reserved(id), "{id} should not be reserved");
        }
    }
}
