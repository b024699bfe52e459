use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The raw digit string is kept as-is; the parser converts it to a value
    /// when it builds the leaf node.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Number(text) => return write!(f, "{text}"),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Ignored => " ",
        };
        write!(f, "{symbol}")
    }
}

/// Tokenizes a full source string.
///
/// Runs the lexer over the input and collects every token together with the
/// byte offset of its first character. Whitespace never appears in the output.
/// A run of decimal digits is consumed greedily as a single `Number` token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any character no rule matches,
/// carrying the offending slice and its offset.
///
/// # Example
/// ```
/// use numera::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens[1], (Token::Plus, 2));
///
/// assert!(tokenize("1 ? 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token:  slice.to_string(),
                                                     offset: lexer.span().start, });
        }
    }

    Ok(tokens)
}
