#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Lexer failures render under the `Illegal Character` and
/// `Expected Character` categories; parser failures render under
/// `Invalid Syntax`. Parsing stops at the first error, with no recovery.
pub enum SyntaxError {
    /// The lexer encountered a character that starts no token.
    IllegalCharacter {
        /// The offending character.
        found: char,
    },
    /// The lexer needed a specific following character to finish a token
    /// (currently only `=` after `!`).
    ExpectedCharacter {
        /// The character that was required.
        expected: char,
        /// The character it had to follow.
        after:    char,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket,
    /// An opening parenthesis `(` was expected but not found.
    ExpectedOpenParen,
    /// The `then` keyword was expected but not found.
    ExpectedThen,
    /// The `to` keyword was expected but not found.
    ExpectedTo,
    /// An `->` token was expected but not found.
    ExpectedArrow,
    /// An `=` token was expected but not found.
    ExpectedEquals,
    /// An identifier was expected but not found.
    ExpectedIdentifier,
    /// An atom was expected; the detail enumerates the acceptable starter
    /// tokens.
    ExpectedAtom,
    /// The top-level expression ended but unconsumed tokens remain; only a
    /// binary operator could legally continue here.
    ExpectedOperator,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { found } => write!(f, "Illegal Character: '{found}'"),

            Self::ExpectedCharacter { expected, after } => {
                write!(f, "Expected Character: '{expected}' (after '{after}')")
            },

            Self::ExpectedClosingParen => write!(f, "Invalid Syntax: Expected ')'"),

            Self::ExpectedClosingBracket => write!(f, "Invalid Syntax: Expected ']'"),

            Self::ExpectedOpenParen => write!(f, "Invalid Syntax: Expected '('"),

            Self::ExpectedThen => write!(f, "Invalid Syntax: Expected 'then'"),

            Self::ExpectedTo => write!(f, "Invalid Syntax: Expected 'to'"),

            Self::ExpectedArrow => write!(f, "Invalid Syntax: Expected '->'"),

            Self::ExpectedEquals => write!(f, "Invalid Syntax: Expected '='"),

            Self::ExpectedIdentifier => write!(f, "Invalid Syntax: Expected identifier"),

            Self::ExpectedAtom => write!(f,
                                         "Invalid Syntax: Expected int, float, string, identifier, '+', '-', '(', '[', 'if', 'for', 'while' or 'fun'"),

            Self::ExpectedOperator => write!(f,
                                             "Invalid Syntax: Expected '+', '-', '*', '/', '%', '^', '==', '!=', '<', '<=', '>', '>=', 'and' or 'or'"),
        }
    }
}

impl std::error::Error for SyntaxError {}
