use crate::{
    ast::{Body, Func, Statement, Variable},
    error::ParseError,
    interpreter::{
        lexer::{Bracket, Lexer, Token},
        parser::{
            expression::parse_expression,
            statement::{parse_assign_st, parse_if_st},
        },
        words::{self, Keyword, Word},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the single function a source file contains.
///
/// This is the entry point for parsing. The expected shape is
///
/// ```text
///     name(type param, type param, ...): type { ... }
/// ```
///
/// with an optionally empty parameter list.
///
/// # Parameters
/// - `lexer`: Token source positioned at the start of the input.
///
/// # Returns
/// The fully parsed [`Func`], body included.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the function name is a keyword or type name,
/// - the signature punctuation (`(`, `)`, `:`) is malformed,
/// - the return type is missing,
/// - the body fails to parse.
pub fn parse_function(lexer: &mut Lexer) -> ParseResult<Func> {
    let name = match words::read_word(lexer)? {
        Word::Identifier(name) => name,
        _ => return Err(ParseError::InvalidFunctionName { line: lexer.line() }),
    };

    match lexer.next_token_skip_whitespace()? {
        Token::Bracket(Bracket::Open) => {},
        token => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '(' after function name, found {token:?}"),
                                                     line:  lexer.line(), });
        },
    }

    let input = parse_function_params(lexer)?;

    match lexer.next_token_skip_whitespace()? {
        Token::Colon => {},
        token => {
            return Err(ParseError::UnexpectedToken { token: format!("expected ':' after parameter list, found {token:?}"),
                                                     line:  lexer.line(), });
        },
    }

    let return_type = match words::read_word(lexer)? {
        Word::TypeName(return_type) => return_type,
        word => {
            return Err(ParseError::UnexpectedToken { token: format!("expected a return type, found {word:?}"),
                                                     line:  lexer.line(), });
        },
    };

    let mut func = Func { name,
                          input,
                          return_type,
                          body: Body::default() };

    let statements = parse_function_body(lexer, &mut func)?;
    func.body.statements = statements;

    Ok(func)
}

/// Parses the comma-separated parameter list, consuming the closing `)`.
///
/// Each parameter is a type word followed by an identifier word. An
/// immediately encountered `)` produces an empty list.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a type or parameter name is missing,
/// - the same name is declared twice,
/// - neither `,` nor `)` follows a parameter.
fn parse_function_params(lexer: &mut Lexer) -> ParseResult<Vec<Variable>> {
    let mut params: Vec<Variable> = Vec::new();

    let first = lexer.next_token_skip_whitespace()?;
    if first == Token::Bracket(Bracket::Close) {
        return Ok(params);
    }
    lexer.put_back_token(first);

    loop {
        let var_type = match words::read_word(lexer)? {
            Word::TypeName(var_type) => var_type,
            word => {
                return Err(ParseError::UnexpectedToken { token: format!("expected a parameter type, found {word:?}"),
                                                         line:  lexer.line(), });
            },
        };

        let name = match words::read_word(lexer)? {
            Word::Identifier(name) => name,
            word => {
                return Err(ParseError::UnexpectedToken { token: format!("expected a parameter name, found {word:?}"),
                                                         line:  lexer.line(), });
            },
        };

        if params.iter().any(|param| param.name == name) {
            return Err(ParseError::DuplicateParameter { name,
                                                        line: lexer.line() });
        }

        params.push(Variable { name,
                               var_type,
                               value: String::new() });

        match lexer.next_token_skip_whitespace()? {
            Token::Comma => {},
            Token::Bracket(Bracket::Close) => break,
            _ => return Err(ParseError::ExpectedClosingParen { line: lexer.line() }),
        }
    }

    Ok(params)
}

/// Parses one `{ ... }` body and returns its statements.
///
/// The loop reads a word per statement: an identifier starts an assignment,
/// `if` starts a conditional, and `return` parses the return expression into
/// the function's return slot. The loop does not stop at `return`; a later
/// return expression silently replaces an earlier one, and statements after
/// a return are still parsed and executed. A `}` after a statement ends the
/// body.
///
/// Nested bodies (conditional branches) share the enclosing function's
/// return slot, so a `return` anywhere in the tree reaches it, latest one
/// winning in source order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the opening `{` is missing,
/// - a word other than an identifier, `if` or `return` starts a statement,
/// - a statement fails to parse.
pub(in crate::interpreter::parser) fn parse_function_body(lexer: &mut Lexer,
                                                          func: &mut Func)
                                                          -> ParseResult<Vec<Statement>> {
    match lexer.next_token_skip_whitespace()? {
        Token::CurlyBracket(Bracket::Open) => {},
        _ => return Err(ParseError::ExpectedOpeningBrace { line: lexer.line() }),
    }

    let mut statements = Vec::new();

    loop {
        match words::read_word(lexer)? {
            Word::Identifier(name) => statements.push(parse_assign_st(lexer, func, name)?),
            Word::Keyword(Keyword::If) => statements.push(parse_if_st(lexer, func)?),
            Word::Keyword(Keyword::Return) => {
                func.body.return_expression = Some(parse_expression(lexer, func)?);
            },
            word => {
                return Err(ParseError::UnexpectedToken { token: format!("expected a statement, found {word:?}"),
                                                         line:  lexer.line(), });
            },
        }

        let next = lexer.next_token_skip_whitespace()?;
        if next == Token::CurlyBracket(Bracket::Close) {
            break;
        }
        lexer.put_back_token(next);
    }

    Ok(statements)
}
