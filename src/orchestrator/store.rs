//! Expression Store
//!
//! The coordinator's single source of truth for expression state. All reads and
//! read-modify-write sequences go through one internal mutex, so callers never see
//! the raw map.

use super::types::*;

use parking_lot::Mutex;
use std::collections::HashMap;

struct StoreInner {
    expressions: HashMap<ExpressionId, Expression>,
    next_id: u64,
}

pub struct ExpressionStore {
    inner: Mutex<StoreInner>,
}

impl ExpressionStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                expressions: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Allocates the next id and stores a `Pending` expression under it.
    pub fn insert(&self, source_text: String) -> ExpressionId {
        let mut inner = self.inner.lock();
        let id = ExpressionId(inner.next_id);
        inner.next_id += 1;
        inner
            .expressions
            .insert(id, Expression::pending(id, source_text));
        id
    }

    pub fn get(&self, id: ExpressionId) -> Option<Expression> {
        self.inner.lock().expressions.get(&id).cloned()
    }

    /// Point-in-time copy of every expression. Order is unspecified.
    pub fn list(&self) -> Vec<Expression> {
        self.inner.lock().expressions.values().cloned().collect()
    }

    /// Moves a pending expression to `Completed`.
    ///
    /// Returns `false` if the id is unknown or the expression is already terminal.
    pub fn complete(&self, id: ExpressionId, result: f64) -> bool {
        self.transition(id, ExpressionStatus::Completed, result)
    }

    /// Moves a pending expression to `Error`.
    pub fn fail(&self, id: ExpressionId) -> bool {
        self.transition(id, ExpressionStatus::Error, 0.0)
    }

    fn transition(&self, id: ExpressionId, to: ExpressionStatus, result: f64) -> bool {
        let mut inner = self.inner.lock();
        match inner.expressions.get_mut(&id) {
            Some(expr) if !expr.status.is_terminal() => {
                expr.status = to;
                expr.result = result;
                true
            }
            Some(expr) => {
                tracing::warn!(
                    "Ignoring {:?} transition for expression {} (already {:?})",
                    to,
                    id,
                    expr.status
                );
                false
            }
            None => false,
        }
    }

    /// Returns `(pending, completed, error)`.
    pub fn status_counts(&self) -> (usize, usize, usize) {
        let inner = self.inner.lock();
        let mut pending = 0;
        let mut completed = 0;
        let mut error = 0;

        for expr in inner.expressions.values() {
            match expr.status {
                ExpressionStatus::Pending => pending += 1,
                ExpressionStatus::Completed => completed += 1,
                ExpressionStatus::Error => error += 1,
            }
        }

        (pending, completed, error)
    }
}

impl Default for ExpressionStore {
    fn default() -> Self {
        Self::new()
    }
}
