//! Expression Decomposer
//!
//! Turns a whitespace-tokenized expression into exactly one `Task`.
//!
//! Operators sit at odd token positions. The first `*` or `/` found scanning left to
//! right is selected together with its two neighbours; if there is none, the leading
//! `a OP b` triple is used. Whatever remains of a longer expression is never evaluated:
//! `2 * 3 + 4` yields the task `2 * 3` and nothing else.

use super::error::DecomposeError;
use super::timing::OperationTimings;
use super::types::*;

pub fn decompose(
    id: ExpressionId,
    source_text: &str,
    timings: &OperationTimings,
) -> Result<Task, DecomposeError> {
    let tokens: Vec<&str> = source_text.split_whitespace().collect();

    // An even count means a dangling operator with no right-hand operand.
    if tokens.len() < 3 || tokens.len() % 2 == 0 {
        return Err(DecomposeError::Malformed {
            token_count: tokens.len(),
        });
    }

    let op_index = (1..tokens.len())
        .step_by(2)
        .find(|&i| {
            tokens[i]
                .parse::<Operator>()
                .map_or(false, |op| op.is_multiplicative())
        })
        .unwrap_or(1);

    let operator: Operator = tokens[op_index]
        .parse()
        .map_err(DecomposeError::UnknownOperator)?;

    let operand_1 = parse_operand(tokens[op_index - 1])?;
    let operand_2 = parse_operand(tokens[op_index + 1])?;

    Ok(Task {
        id,
        operand_1,
        operand_2,
        operator,
        operation_time: timings.duration_for(operator.symbol()),
    })
}

fn parse_operand(token: &str) -> Result<f64, DecomposeError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DecomposeError::BadOperand(token.to_string()))
}
