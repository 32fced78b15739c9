/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, undeclared
/// variables, and any other issues detected before execution.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while setting up or running
/// the path executor, such as a function that never reaches a return
/// expression or a missing memory binding.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
