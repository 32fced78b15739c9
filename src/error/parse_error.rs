#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A word was required but no letters were found.
    ExpectedWord {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The function name position held a keyword or type name.
    InvalidFunctionName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An undeclared variable was referenced.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// The name of the enclosing function.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The same parameter name was declared twice.
    DuplicateParameter {
        /// The name of the parameter.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `=` token was expected but not found.
    ExpectedEquals {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `else` keyword was expected but not found.
    ExpectedElse {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An opening brace `{` was expected but not found.
    ExpectedOpeningBrace {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedWord { line } => {
                write!(f, "Error on line {line}: Expected a word but found no letters.")
            },

            Self::InvalidFunctionName { line } => write!(f,
                                                         "Error on line {line}: Function name must be a plain identifier."),

            Self::UnknownVariable { name, function, line } => write!(f,
                                                                     "Error on line {line}: Unknown variable '{name}' in function '{function}'."),

            Self::DuplicateParameter { name, line } => write!(f,
                                                              "Error on line {line}: Parameter '{name}' is declared twice."),

            Self::ExpectedEquals { line } => {
                write!(f, "Error on line {line}: Expected '=' after assignment target.")
            },

            Self::ExpectedElse { line } => {
                write!(f, "Error on line {line}: Expected 'else' after the true branch.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedOpeningBrace { line } => write!(f,
                                                          "Error on line {line}: Expected opening brace '{{' but none found."),
        }
    }
}

impl std::error::Error for ParseError {}
