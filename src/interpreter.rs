/// The lexer module classifies the raw character stream.
///
/// Every token corresponds to exactly one character of input: digits,
/// letters, brackets, operators, punctuation and whitespace. A single-slot
/// pushback lets the layers above un-read the one token they looked at too
/// far.
///
/// # Responsibilities
/// - Converts the input character stream into single-character tokens.
/// - Tracks the current source line for error reporting.
/// - Provides one-token pushback and whitespace skipping.
pub mod lexer;

/// The word reader assembles multi-character constructs from letter and
/// digit tokens.
///
/// Words are classified into keywords, type names and plain identifiers;
/// digit runs become integer literals. The terminating token is always
/// pushed back for the caller.
pub mod words;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser descends recursively through the function signature, body,
/// statements and expressions, validating the grammar as it goes and
/// reporting errors with line information.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (function, statements,
///   expressions).
/// - Rejects undeclared variables and malformed constructs immediately; no
///   recovery is attempted.
pub mod parser;

/// The executor module walks the parsed function symbolically.
///
/// Instead of computing numbers, the executor carries every variable's value
/// as rendered text and forks the whole set of live execution states at each
/// conditional. Each surviving path reports its final bindings, its
/// accumulated path condition and its rendered return expression.
///
/// # Responsibilities
/// - Seeds one initial path binding every parameter to a placeholder.
/// - Duplicates the active path set at each conditional, extending the
///   conditions of both halves.
/// - Renders expressions against per-path memory by substitution.
pub mod executor;
