use crate::{
    ast::{Func, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Bracket, Lexer, Token},
        parser::{
            core::{ParseResult, parse_function_body},
            expression::parse_expression,
        },
        words::{self, Keyword, Word},
    },
};

/// Parses an assignment statement, the target name having already been read
/// by the body loop.
///
/// Syntax: `<target> = <expression>`
///
/// The target must be a declared parameter of the enclosing function; the
/// language has no way to introduce new variables in a body.
///
/// # Parameters
/// - `lexer`: Token source positioned after the target name.
/// - `func`: The enclosing function, providing the declared parameters.
/// - `target`: The name read by the caller.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the target is not a declared parameter,
/// - the `=` is missing,
/// - the right-hand side fails to parse.
pub(in crate::interpreter::parser) fn parse_assign_st(lexer: &mut Lexer,
                                                      func: &Func,
                                                      target: String)
                                                      -> ParseResult<Statement> {
    if !func.input.iter().any(|param| param.name == target) {
        return Err(ParseError::UnknownVariable { name:     target,
                                                 function: func.name.clone(),
                                                 line:     lexer.line(), });
    }

    match lexer.next_token_skip_whitespace()? {
        Token::Equals => {},
        _ => return Err(ParseError::ExpectedEquals { line: lexer.line() }),
    }

    let value = parse_expression(lexer, func)?;

    Ok(Statement::Assignment { target, value })
}

/// Parses a conditional statement, the `if` keyword having already been read
/// by the body loop.
///
/// Syntax: `if ( <condition> ) { ... } else { ... }`
///
/// Both branch bodies are full nested bodies; only their statement lists are
/// kept on the resulting node. A `return` inside either branch writes the
/// enclosing function's return slot.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the parentheses around the condition are malformed,
/// - the `else` keyword is missing,
/// - either branch body fails to parse.
pub(in crate::interpreter::parser) fn parse_if_st(lexer: &mut Lexer,
                                                  func: &mut Func)
                                                  -> ParseResult<Statement> {
    match lexer.next_token_skip_whitespace()? {
        Token::Bracket(Bracket::Open) => {},
        token => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '(' after 'if', found {token:?}"),
                                                     line:  lexer.line(), });
        },
    }

    let condition = parse_expression(lexer, func)?;

    match lexer.next_token_skip_whitespace()? {
        Token::Bracket(Bracket::Close) => {},
        _ => return Err(ParseError::ExpectedClosingParen { line: lexer.line() }),
    }

    let true_branch = parse_function_body(lexer, func)?;

    match words::read_word(lexer)? {
        Word::Keyword(Keyword::Else) => {},
        _ => return Err(ParseError::ExpectedElse { line: lexer.line() }),
    }

    let false_branch = parse_function_body(lexer, func)?;

    Ok(Statement::Conditional { condition,
                                true_branch,
                                false_branch })
}
