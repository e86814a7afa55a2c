use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literal and identifier tokens carry their lexeme; the numeric lexeme is
/// reparsed at evaluation time rather than here.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Float literal: a digit run containing one `.`, such as `3.14` or `2.`.
    /// A second `.` ends the number and is left for the next token.
    #[regex(r"[0-9]+\.[0-9]*", |lex| lex.slice().to_string())]
    Float(String),
    /// Integer literal, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal delimited by `"`. The payload is the unescaped text;
    /// `\\`, `\"`, `\n` and `\t` are recognized, and any other `\c` denotes
    /// `c` itself.
    #[regex(r#""(\\.|[^"\\])*""#, unescape_string)]
    Str(String),
    /// `var`
    #[token("var")]
    Var,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `to`
    #[token("to")]
    To,
    /// `step`
    #[token("step")]
    Step,
    /// `while`
    #[token("while")]
    While,
    /// `fun`
    #[token("fun")]
    Fun,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    /// Reserved words never lex as identifiers.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `->`
    #[token("->")]
    Arrow,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `%`
    #[token("%")]
    Mod,
    /// `^`
    #[token("^")]
    Power,
    /// `==`
    #[token("==")]
    DoubleEquals,
    /// `=`
    #[token("=")]
    Equals,
    /// `!=`
    #[token("!=")]
    NotEquals,
    /// `<=`
    #[token("<=")]
    LessThanEquals,
    /// `<`
    #[token("<")]
    LessThan,
    /// `>=`
    #[token(">=")]
    GreaterThanEquals,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// Synthetic end-of-input sentinel. Never produced by the lexing machine;
    /// [`tokenize`] appends exactly one as the final token.
    Eof,
}

/// Strips the delimiters from a string lexeme and resolves its escapes.
fn unescape_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => text.push('\n'),
                Some('t') => text.push('\t'),
                Some(escaped) => text.push(escaped),
                None => {},
            }
        } else {
            text.push(c);
        }
    }

    text
}

/// Tokenizes a source string.
///
/// Produces the ordered token sequence terminated by exactly one
/// [`Token::Eof`], or the first lexical error. Whitespace (space, tab, CR, LF)
/// separates tokens and is otherwise ignored.
///
/// # Errors
/// - [`SyntaxError::ExpectedCharacter`] when `!` is not followed by `=`.
/// - [`SyntaxError::IllegalCharacter`] for any character that starts no
///   token. An unterminated string reports its opening quote.
///
/// # Examples
/// ```
/// use rill::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x -> 1.5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Arrow,
///                 Token::Float("1.5".to_string()),
///                 Token::Eof,]);
///
/// let err = tokenize("2 ? 3").unwrap_err();
/// assert_eq!(err.to_string(), "Illegal Character: '?'");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(match lexer.slice().chars().next() {
                    Some('!') => SyntaxError::ExpectedCharacter { expected: '=',
                                                                  after:    '!', },
                    Some(found) => SyntaxError::IllegalCharacter { found },
                    None => SyntaxError::IllegalCharacter { found: '\0' },
                });
            },
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}
