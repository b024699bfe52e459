#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression.
    UnexpectedToken {
        /// The token encountered, spelled as in the source.
        token:  String,
        /// Byte offset of the token in the source.
        offset: usize,
    },
    /// Reached the end of input where an expression was still expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched opening parenthesis.
        offset: usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// Byte offset of the literal in the source.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset of the token in the source.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at offset {offset}: Expected closing parenthesis ')' but none found."),

            Self::LiteralTooLarge { offset } => {
                write!(f, "Error at offset {offset}: Literal is too large.")
            },

            Self::UnexpectedTrailingTokens { token, offset } => write!(f,
                                                                       "Error at offset {offset}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
