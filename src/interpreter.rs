use crate::error::{Error, Result};
use crate::parser::{is_identifier, tokenize_string, Operator, Token};
use crate::store::Variables;

/// Deepest chain of nested reductions a single line may need.
pub const MAX_DEPTH: usize = 256;

/// A simple interpreter for arbitrarily nested arithmetic expressions.
///
/// It supports:
/// - the operators `+`, `-`, `*`, `/` and `%`,
/// - variable assignment, e.g. `x = 1` or `x = 1 + 1`,
/// - variable retrieval,
/// - nesting with parentheses.
///
/// Multiplicative operators collapse left to right as soon as both operands are
/// plain numbers, while every other operator applies to the value of the whole
/// remainder of the line. Additive chains therefore group to the right:
/// `10 - 3 - 2` is `10 - (3 - 2)`.
#[derive(Debug, Default)]
pub struct Interpreter {
    variables: Variables,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interprets one line of input.
    ///
    /// Returns `None` for an empty line, the assigned value for an assignment
    /// and the calculated value otherwise.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn interpret(&mut self, input: &str) -> Result<Option<f64>> {
        let tokens = tokenize_string(input)?;
        let result = match tokens.as_slice() {
            [] => None,
            [Token::Symbol(name)] if is_identifier(name) => Some(self.get_variable(name)?),
            [Token::Symbol(name), Token::Symbol(eq), rest @ ..]
                if is_identifier(name) && eq == "=" && !rest.is_empty() =>
            {
                let value = self.calculate(rest)?;
                self.variables.set(name, value);
                Some(value)
            }
            _ => Some(self.calculate(&tokens)?),
        };
        tracing::debug!(?result);
        Ok(result)
    }

    pub fn get_variable(&self, name: &str) -> Result<f64> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Reduces a token sequence to a single number.
    pub fn calculate(&self, tokens: &[Token]) -> Result<f64> {
        self.calculate_at(tokens, 0)
    }

    fn calculate_at(&self, tokens: &[Token], depth: usize) -> Result<f64> {
        if depth > MAX_DEPTH {
            return Err(Error::too_deep());
        }
        let depth = depth + 1;
        match tokens {
            [Token::Number(value)] => Ok(*value),
            [Token::Group(group), rest @ ..] => {
                let value = self.calculate_at(group, depth)?;
                self.reduce(value, rest, depth)
            }
            [Token::Symbol(name), rest @ ..] if is_identifier(name) => {
                let value = self.get_variable(name)?;
                self.reduce(value, rest, depth)
            }
            [Token::Number(value), rest @ ..] => self.reduce(*value, rest, depth),
            _ => Err(Error::invalid()),
        }
    }

    /// Calculates `lhs` followed by `rest`, with `lhs` already a number.
    fn reduce(&self, mut lhs: f64, mut rest: &[Token], depth: usize) -> Result<f64> {
        loop {
            let (op, tail) = match rest {
                [] => return Ok(lhs),
                [Token::Symbol(op), tail @ ..] => match Operator::from_symbol(op) {
                    Some(op) => (op, tail),
                    None => return Err(Error::invalid()),
                },
                _ => return Err(Error::invalid()),
            };
            match tail {
                [Token::Number(rhs), tail @ ..] if op.is_multiplicative() => {
                    tracing::trace!(lhs, %op, rhs, "collapse");
                    lhs = apply(op, lhs, *rhs)?;
                    rest = tail;
                }
                _ => {
                    tracing::trace!(lhs, %op, "apply to remainder");
                    let rhs = self.calculate_at(tail, depth)?;
                    return apply(op, lhs, rhs);
                }
            }
        }
    }
}

fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64> {
    op.apply(lhs, rhs).ok_or_else(|| {
        let what = match op {
            Operator::Rem => "modulo by zero",
            _ => "division by zero",
        };
        Error::ArithmeticFault(what.to_string())
    })
}
