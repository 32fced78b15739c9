use logos::Logos;

use crate::{ast::Operation, error::ParseError};

/// Whether a bracket token opens or closes its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(` or `{`
    Open,
    /// `)` or `}`
    Close,
}

/// The insignificant whitespace characters of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delim {
    /// A single space.
    Space,
    /// A line break.
    Newline,
}

/// Represents a lexical token in the source input.
///
/// Every token is derived from exactly one character; multi-character
/// constructs such as identifiers, keywords and numeric literals are
/// assembled above the lexer by the word reader. This keeps the token layer
/// a pure classification of the character stream.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// A decimal digit.
    #[regex(r"[0-9]", |lex| lex.slice().chars().next())]
    Digit(char),
    /// A lowercase letter. Uppercase letters are outside the alphabet and
    /// lex as [`Token::Invalid`].
    #[regex(r"[a-z]", |lex| lex.slice().chars().next())]
    Letter(char),
    /// A space or newline.
    #[token(" ", |_| Delim::Space)]
    #[token("\n", |lex| { lex.extras.line += 1; Delim::Newline })]
    Delim(Delim),
    /// `(` or `)`
    #[token("(", |_| Bracket::Open)]
    #[token(")", |_| Bracket::Close)]
    Bracket(Bracket),
    /// `{` or `}`
    #[token("{", |_| Bracket::Open)]
    #[token("}", |_| Bracket::Close)]
    CurlyBracket(Bracket),
    /// `+`, `-`, `>` or `<`
    #[token("+", |_| Operation::Plus)]
    #[token("-", |_| Operation::Minus)]
    #[token(">", |_| Operation::Greater)]
    #[token("<", |_| Operation::Less)]
    Operator(Operation),
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// Catch-all for any other character. Not an error by itself; it only
    /// becomes one when a grammar rule required something else.
    #[regex(r".", priority = 1)]
    Invalid,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting. Incremented as
/// newlines are produced.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A character-level token source with a single-slot pushback.
///
/// [`Lexer::next_token`] consumes exactly one character of input and
/// [`Lexer::put_back_token`] un-reads exactly one token. The pushback slot
/// holds at most one token; filling it twice without an intervening read is a
/// bug in the caller and panics.
pub struct Lexer<'src> {
    tokens:   logos::Lexer<'src, Token>,
    pushback: Option<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text, positioned at line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { tokens:   Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               pushback: None, }
    }

    /// The current 1-based source line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens.extras.line
    }

    /// Reads the next token, preferring the pushback slot over the input.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedEndOfInput` if the source is exhausted.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self.pushback.take() {
            return Ok(token);
        }

        match self.tokens.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(())) => Ok(Token::Invalid),
            None => Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
        }
    }

    /// Un-reads one token.
    ///
    /// # Panics
    /// Panics if the slot is already occupied; the single-slot discipline
    /// requires a read between any two pushbacks.
    pub fn put_back_token(&mut self, token: Token) {
        assert!(self.pushback.is_none(),
                "pushback slot used twice without an intervening read");
        self.pushback = Some(token);
    }

    /// Reads tokens until the first non-whitespace token and returns it.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedEndOfInput` if the source is exhausted.
    pub fn next_token_skip_whitespace(&mut self) -> Result<Token, ParseError> {
        let mut token = self.next_token()?;
        while let Token::Delim(_) = token {
            token = self.next_token()?;
        }
        Ok(token)
    }
}
