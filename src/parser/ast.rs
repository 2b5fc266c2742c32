/// An ordered sequence of tokens, in source order.
pub type Expression = Vec<Token>;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    /// An operator, punctuation or identifier.
    Symbol(String),
    /// A parenthesized sub-expression standing in for its `(...)` span.
    Group(Expression),
}

impl Token {
    pub fn symbol(s: &str) -> Self {
        Self::Symbol(s.to_string())
    }

    /// Returns the name if this is an identifier symbol.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) if is_identifier(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Symbol(s) => Operator::from_symbol(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Group(tokens) => {
                write!(f, "(")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{token}")?;
                }
                write!(f, ")")
            }
        }
    }
}

pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }

    /// `*`, `/` and `%` collapse eagerly, left to right.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Rem)
    }

    /// Applies the operator. Returns `None` when the right operand of `/` or `%` is zero.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Sub => Some(lhs - rhs),
            Self::Mul => Some(lhs * rhs),
            Self::Div if rhs == 0.0 => None,
            Self::Div => Some(lhs / rhs),
            Self::Rem if rhs == 0.0 => None,
            // Floored modulo: the result carries the sign of the divisor.
            Self::Rem => {
                let r = lhs % rhs;
                if r == 0.0 {
                    Some(0.0_f64.copysign(rhs))
                } else if (r < 0.0) != (rhs < 0.0) {
                    Some(r + rhs)
                } else {
                    Some(r)
                }
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
