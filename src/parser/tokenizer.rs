use super::ast::{Expression, Token};
use super::error::Error;
use super::locations::Span;
use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;

/// Deepest parenthesis nesting accepted on one line.
pub const MAX_NESTING: usize = 128;

const LPAR: &str = "(";
const RPAR: &str = ")";

const S_WHITESPACE: &str = r"^\s+";
const S_ARROW: &str = r"^=>";
const S_PUNCTUATION: &str = r"^[-+*/%=()]";
const S_NAME: &str = r"^[A-Za-z_][A-Za-z0-9_]*";
const S_DIGIT: &str = r"[0-9]";
const S_NUMBER: &str = concatcp!("^", S_DIGIT, r"*\.?", S_DIGIT, "+");

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHITESPACE).expect("Error compiling regex."));
static ARROW: Lazy<Regex> = Lazy::new(|| Regex::new(S_ARROW).expect("Error compiling regex."));
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_PUNCTUATION).expect("Error compiling regex."));
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(S_NAME).expect("Error compiling regex."));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(S_NUMBER).expect("Error compiling regex."));

#[derive(Clone, Copy, PartialEq, Debug)]
enum LexemeClass {
    Arrow,
    Punctuation,
    Name,
    Number,
}

/// Lexical classes in the order they are tried at each position.
static LEXEME_CLASSES: Lazy<[(LexemeClass, &'static Regex); 4]> = Lazy::new(|| {
    [
        (LexemeClass::Arrow, &*ARROW),
        (LexemeClass::Punctuation, &*PUNCTUATION),
        (LexemeClass::Name, &*NAME),
        (LexemeClass::Number, &*NUMBER),
    ]
});

/// Splits a line into tokens and folds parenthesized runs into groups.
pub struct Tokenizer<'a> {
    input: &'a str,
    start: usize,
    scopes: Vec<Expression>,
    open_parens: Vec<Span>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            scopes: vec![vec![]],
            open_parens: vec![],
        }
    }

    pub fn tokenize(mut self) -> Result<Expression, Error> {
        while self.start < self.input.len() {
            if let Some(m) = WHITESPACE.find(self.rest()) {
                self.start += m.end();
                continue;
            }
            let (class, len) = self
                .match_class(self.start)
                .ok_or_else(|| self.unrecognized())?;
            let span = Span::new(self.start, self.start + len);
            let input = self.input;
            let lexeme = &input[span.start..span.end];
            self.start = span.end;
            self.push(class, lexeme, span)?;
        }
        self.finalize()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.start..]
    }

    fn match_class(&self, at: usize) -> Option<(LexemeClass, usize)> {
        let rest = &self.input[at..];
        LEXEME_CLASSES
            .iter()
            .find_map(|(class, regex)| regex.find(rest).map(|m| (*class, m.end())))
    }

    fn push(&mut self, class: LexemeClass, lexeme: &str, span: Span) -> Result<(), Error> {
        let token = match (class, lexeme) {
            (LexemeClass::Punctuation, LPAR) => {
                if self.open_parens.len() >= MAX_NESTING {
                    return Err(Error::new(span, "Parentheses nested too deeply"));
                }
                self.scopes.push(vec![]);
                self.open_parens.push(span);
                return Ok(());
            }
            (LexemeClass::Punctuation, RPAR) => {
                if self.scopes.len() < 2 {
                    return Err(Error::imbalanced(span));
                }
                self.open_parens.pop();
                Token::Group(self.scopes.pop().unwrap_or_default())
            }
            (LexemeClass::Number, _) => {
                let value = lexeme
                    .parse::<f64>()
                    .map_err(|_| Error::new(span, "invalid number literal"))?;
                Token::Number(value)
            }
            // Names such as `inf` or `nan` that read as floats are numbers.
            _ => match lexeme.parse::<f64>() {
                Ok(value) => Token::Number(value),
                Err(_) => Token::symbol(lexeme),
            },
        };
        // The outermost scope is never popped: an unmatched `)` is rejected above.
        if let Some(top) = self.scopes.last_mut() {
            top.push(token);
        }
        Ok(())
    }

    fn finalize(mut self) -> Result<Expression, Error> {
        if self.scopes.len() > 1 {
            let span = self
                .open_parens
                .first()
                .copied()
                .unwrap_or_else(|| Span::end_of(self.input));
            return Err(Error::imbalanced(span));
        }
        Ok(self.scopes.pop().unwrap_or_default())
    }

    /// Builds the error for the unmatched run starting at the current position.
    fn unrecognized(&self) -> Error {
        let end = self
            .rest()
            .char_indices()
            .skip(1)
            .map(|(i, _)| self.start + i)
            .find(|&i| {
                WHITESPACE.is_match(&self.input[i..]) || self.match_class(i).is_some()
            })
            .unwrap_or(self.input.len());
        Error::unrecognized(Span::new(self.start, end), &self.input[self.start..end])
    }
}

/// Tokenizes a single line of input into a (possibly nested) expression.
pub fn tokenize_string(input: &str) -> Result<Expression, Error> {
    let tokens = Tokenizer::new(input).tokenize()?;
    tracing::trace!(?tokens, "tokenized");
    Ok(tokens)
}
