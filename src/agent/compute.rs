use crate::orchestrator::types::{Operator, Task};

/// Evaluates a task's operation.
///
/// Division by zero yields `0` (the protocol has no way to report a failed task,
/// and a non-finite value cannot be sent as JSON).
pub fn compute(task: &Task) -> f64 {
    if task.operator == Operator::Divide && task.operand_2 == 0.0 {
        tracing::warn!("Task {}: division by zero, reporting 0", task.id);
        return 0.0;
    }

    let result = task.operator.apply(task.operand_1, task.operand_2);
    if !result.is_finite() {
        tracing::warn!("Task {}: result overflowed, reporting 0", task.id);
        return 0.0;
    }

    result
}
