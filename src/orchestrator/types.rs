use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an expression, and of the single task derived from it.
///
/// Assigned monotonically by the `ExpressionStore`, starting at 1. Ids are never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ExpressionId(pub u64);

impl fmt::Display for ExpressionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an expression.
///
/// `Pending` is the only non-terminal state. Both `Completed` and `Error` are final.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionStatus {
    /// Submitted, waiting for decomposition or for a worker result.
    Pending,
    /// A worker reported the result of the expression's task.
    Completed,
    /// Decomposition failed; no task was ever created.
    Error,
}

impl ExpressionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ExpressionStatus::Pending)
    }
}

/// A client-submitted arithmetic string and its resolution state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expression {
    pub id: ExpressionId,
    pub status: ExpressionStatus,
    /// Only meaningful when `status == Completed`; `0` otherwise.
    pub result: f64,
    /// The original text as submitted. Never modified after creation.
    #[serde(rename = "expr")]
    pub source_text: String,
}

impl Expression {
    pub fn pending(id: ExpressionId, source_text: String) -> Self {
        Self {
            id,
            status: ExpressionStatus::Pending,
            result: 0.0,
            source_text,
        }
    }
}

/// Binary arithmetic operator carried by a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// `*` and `/` are picked before `+` and `-` when decomposing an expression.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }

    /// Applies the operator. Division by zero follows IEEE-754 (`inf` or `NaN`).
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(other.to_string()),
        }
    }
}

/// One binary operation handed to a worker.
///
/// `id` equals the owning expression's id: there is at most one task per expression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: ExpressionId,
    pub operand_1: f64,
    pub operand_2: f64,
    pub operator: Operator,
    /// Simulated cost in milliseconds the worker should spend on the operation.
    pub operation_time: u64,
}
