use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OperatorError {
    #[error("unknown operator symbol: {0:?}")]
    UnknownSymbol(char),

    #[error("at least one operator must be selected")]
    EmptySet,
}

//
// ─── OPERATOR ─────────────────────────────────────────────────────────────────
//

/// One of the four arithmetic operations a problem can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Parses the ASCII symbol used in configuration (`+ - * /`).
    ///
    /// `x` and `÷` are accepted as aliases for multiply and divide.
    ///
    /// # Errors
    ///
    /// Returns `OperatorError::UnknownSymbol` for any other character.
    pub fn from_symbol(symbol: char) -> Result<Self, OperatorError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' | 'x' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(OperatorError::UnknownSymbol(other)),
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Glyph shown next to the operands.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }

    /// Applies the operation. Division is true division, so `1 / 3` is not
    /// truncated and `n / 0` is non-finite.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(self, left: i64, right: i64) -> f64 {
        let (l, r) = (left as f64, right as f64);
        match self {
            Operator::Add => l + r,
            Operator::Subtract => l - r,
            Operator::Multiply => l * r,
            Operator::Divide => l / r,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Operator::Add => 1,
            Operator::Subtract => 1 << 1,
            Operator::Multiply => 1 << 2,
            Operator::Divide => 1 << 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

//
// ─── OPERATOR SET ─────────────────────────────────────────────────────────────
//

/// Non-empty set of operators a batch may draw from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Operator>", into = "Vec<Operator>")]
pub struct OperatorSet(u8);

impl OperatorSet {
    /// Builds a set from the given operators.
    ///
    /// # Errors
    ///
    /// Returns `OperatorError::EmptySet` if no operator is given.
    pub fn new(operators: &[Operator]) -> Result<Self, OperatorError> {
        let mask = operators.iter().fold(0_u8, |mask, op| mask | op.bit());
        if mask == 0 {
            return Err(OperatorError::EmptySet);
        }
        Ok(Self(mask))
    }

    /// Parses a symbol string such as `"+-"` or `"*/"`. Whitespace and
    /// commas are ignored.
    ///
    /// # Errors
    ///
    /// Returns `OperatorError::UnknownSymbol` for an unrecognised symbol and
    /// `OperatorError::EmptySet` if the string holds no symbols.
    pub fn parse(symbols: &str) -> Result<Self, OperatorError> {
        let operators = symbols
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != ',')
            .map(Operator::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&operators)
    }

    #[must_use]
    pub fn contains(&self, operator: Operator) -> bool {
        self.0 & operator.bit() != 0
    }

    /// Turns the operator on or off.
    ///
    /// # Errors
    ///
    /// Returns `OperatorError::EmptySet` when the last selected operator would
    /// be removed. The set is left unchanged.
    pub fn toggle(&mut self, operator: Operator) -> Result<(), OperatorError> {
        let next = self.0 ^ operator.bit();
        if next == 0 {
            return Err(OperatorError::EmptySet);
        }
        self.0 = next;
        Ok(())
    }

    /// Selected operators in canonical `+ - × ÷` order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Operator> {
        Operator::ALL
            .into_iter()
            .filter(|op| self.contains(*op))
            .collect()
    }

    #[must_use]
    pub fn symbols(&self) -> String {
        self.to_vec().into_iter().map(Operator::symbol).collect()
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self(Operator::Add.bit())
    }
}

impl fmt::Debug for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperatorSet({})", self.symbols())
    }
}

impl TryFrom<Vec<Operator>> for OperatorSet {
    type Error = OperatorError;

    fn try_from(value: Vec<Operator>) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<OperatorSet> for Vec<Operator> {
    fn from(value: OperatorSet) -> Self {
        value.to_vec()
    }
}
