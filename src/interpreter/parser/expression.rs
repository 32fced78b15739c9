use crate::{
    ast::{Expr, Func, SimpleExpr, Type},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::ParseResult,
        words::{self, Keyword, Word},
    },
};

/// Parses one expression: a simple expression, extended left-associatively
/// for as long as an operator follows.
///
/// Grammar: `expr := simple (op simple)*`
///
/// Each consumed operator produces a new chain node whose left child is
/// everything parsed so far and whose own payload is the next simple
/// expression. The first non-operator token ends the chain and is pushed
/// back.
///
/// # Parameters
/// - `lexer`: Token source positioned at the first simple expression.
/// - `func`: The enclosing function, used to resolve variable references.
///
/// # Returns
/// The root of the left-deep expression chain.
pub fn parse_expression(lexer: &mut Lexer, func: &Func) -> ParseResult<Expr> {
    let (mut result, mut next) = parse_simple_expression(lexer, func)?;

    while let Token::Operator(op) = next {
        let (operand, after) = parse_simple_expression(lexer, func)?;
        result = Expr::link(result, op, operand);
        next = after;
    }

    lexer.put_back_token(next);

    Ok(result)
}

/// Parses one simple expression and eagerly reads the token that follows.
///
/// A digit run becomes an integer literal. Otherwise a word is read: a
/// declared parameter becomes a variable reference carrying that parameter's
/// type, and `true`/`false` become boolean literals. The trailing token is
/// returned so the caller can decide whether an operator chain continues.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the word is an undeclared identifier,
/// - the word is a keyword other than `true`/`false`, or a type name,
/// - no word can be read at all.
pub(in crate::interpreter::parser) fn parse_simple_expression(lexer: &mut Lexer,
                                                              func: &Func)
                                                              -> ParseResult<(Expr, Token)> {
    let value = words::read_value(lexer)?;
    if !value.is_empty() {
        let leaf = Expr::leaf(SimpleExpr::Literal(value), Type::Int);
        return Ok((leaf, lexer.next_token_skip_whitespace()?));
    }

    let leaf = match words::read_word(lexer)? {
        Word::Identifier(name) => {
            let Some(param) = func.input.iter().find(|param| param.name == name) else {
                return Err(ParseError::UnknownVariable { name,
                                                         function: func.name.clone(),
                                                         line: lexer.line() });
            };
            let var_type = param.var_type;
            Expr::leaf(SimpleExpr::Variable(name), var_type)
        },
        Word::Keyword(Keyword::True) => Expr::leaf(SimpleExpr::Literal("true".to_string()), Type::Bool),
        Word::Keyword(Keyword::False) => Expr::leaf(SimpleExpr::Literal("false".to_string()), Type::Bool),
        word => {
            return Err(ParseError::UnexpectedToken { token: format!("expected a literal or variable, found {word:?}"),
                                                     line:  lexer.line(), });
        },
    };

    Ok((leaf, lexer.next_token_skip_whitespace()?))
}
