/// Core parsing logic for the function signature and body.
///
/// Contains the parsing entry point, parameter list handling, and the body
/// loop that dispatches to statement parsing.
pub mod core;

/// Expression parsing.
///
/// Builds left-deep expression chains out of simple expressions and
/// operators, one link per operator.
pub mod expression;

/// Statement parsing.
///
/// Implements parsing for the two statement forms: assignments and
/// conditionals.
pub mod statement;
