#[derive(Debug)]
/// Represents all errors that can occur while setting up or running the path
/// executor.
pub enum RuntimeError {
    /// The parsed function never reaches a `return` statement, so there is
    /// nothing to execute towards.
    MissingReturnExpression {
        /// The name of the function.
        function: String,
    },
    /// A variable had no binding in a path's memory. The parser rejects
    /// undeclared names, so this indicates a broken internal invariant.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingReturnExpression { function } => write!(f,
                                                                 "Error: Function '{function}' never reaches a return expression."),

            Self::UnknownVariable { name } => {
                write!(f, "Error: No binding for variable '{name}' in path memory.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
