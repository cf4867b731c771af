//! Interpretive state tracking
//!
//! An [`InterpretiveState`] consumes parsed expressions one at a time,
//! appending each to an ordered history and measuring the drift between the
//! previous expression and the new one. What "drift" means is an open
//! question upstream, so the measurement is injected as a strategy rather
//! than implemented here; the default [`NeutralDrift`] is an explicit
//! placeholder that always reports the baseline.
//!
//! The state lives for one session: created empty, mutated only through
//! [`InterpretiveState::update`], dropped when the session ends. It moves
//! between two shapes, empty (no current expression) and populated, and no
//! operation removes history or returns it to empty. There is no internal
//! locking; a caller sharing one state across threads serializes `update`
//! calls itself.

use crate::semiotic::ast::expr::SymbolicExpr;
use std::fmt;

/// Drift between two successive expressions
pub type DriftValue = f64;

/// The baseline drift, reported when there is no previous expression and by
/// the placeholder strategy
pub const NEUTRAL_DRIFT: DriftValue = 0.0;

/// Strategy for measuring drift between successive expressions
///
/// `previous` is `None` on the first measurement of a session; strategies
/// must return their baseline value in that case.
pub trait DriftMeasure {
    fn measure(&self, previous: Option<&SymbolicExpr>, next: &SymbolicExpr) -> DriftValue;
}

/// Plain closures work as drift strategies
impl<F> DriftMeasure for F
where
    F: Fn(Option<&SymbolicExpr>, &SymbolicExpr) -> DriftValue,
{
    fn measure(&self, previous: Option<&SymbolicExpr>, next: &SymbolicExpr) -> DriftValue {
        self(previous, next)
    }
}

/// Placeholder drift strategy: always the neutral value
///
/// Upstream has not defined drift semantics (structural diff, symbol-set
/// distance, and tree-edit distance are all candidates), so this default
/// deliberately measures nothing. Swap in a real strategy via
/// [`InterpretiveState::with_measure`] once semantics exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralDrift;

impl DriftMeasure for NeutralDrift {
    fn measure(&self, _previous: Option<&SymbolicExpr>, _next: &SymbolicExpr) -> DriftValue {
        NEUTRAL_DRIFT
    }
}

/// Session state: expression history plus the current expression
pub struct InterpretiveState {
    history: Vec<SymbolicExpr>,
    current: Option<SymbolicExpr>,
    measure: Box<dyn DriftMeasure>,
}

impl InterpretiveState {
    /// Create an empty state with the placeholder drift strategy
    pub fn new() -> Self {
        Self::with_measure(NeutralDrift)
    }

    /// Create an empty state with an injected drift strategy
    pub fn with_measure(measure: impl DriftMeasure + 'static) -> Self {
        Self {
            history: Vec::new(),
            current: None,
            measure: Box::new(measure),
        }
    }

    /// Record a parsed expression and return its drift from the previous one
    ///
    /// Measures drift against the current expression (baseline on the first
    /// call), appends the expression to history, and makes it current.
    /// Accepts any well-formed expression; there are no error conditions.
    pub fn update(&mut self, expr: SymbolicExpr) -> DriftValue {
        let drift = self.measure.measure(self.current.as_ref(), &expr);
        self.history.push(expr.clone());
        self.current = Some(expr);
        drift
    }

    /// All expressions seen this session, in parse order
    pub fn history(&self) -> &[SymbolicExpr] {
        &self.history
    }

    /// The most recently recorded expression, if any
    pub fn current(&self) -> Option<&SymbolicExpr> {
        self.current.as_ref()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for InterpretiveState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InterpretiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpretiveState")
            .field("history", &self.history)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semiotic::ast::expr::SymbolicExpr as E;

    #[test]
    fn test_initial_state_is_empty() {
        let state = InterpretiveState::new();
        assert!(state.is_empty());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_first_update_returns_baseline() {
        let mut state = InterpretiveState::new();
        let drift = state.update(E::leaf("X"));
        assert_eq!(drift, NEUTRAL_DRIFT);
        assert_eq!(state.len(), 1);
        assert_eq!(state.current(), Some(&E::leaf("X")));
    }

    #[test]
    fn test_history_is_append_only() {
        let mut state = InterpretiveState::new();
        state.update(E::leaf("X"));
        state.update(E::gradient(E::leaf("Y")));

        assert_eq!(state.len(), 2);
        assert_eq!(state.history()[0], E::leaf("X"));
        assert_eq!(state.history()[1], E::gradient(E::leaf("Y")));
        assert_eq!(state.current(), Some(&E::gradient(E::leaf("Y"))));
    }

    #[test]
    fn test_injected_strategy_sees_previous_and_next() {
        let mut state = InterpretiveState::with_measure(
            |previous: Option<&SymbolicExpr>, next: &SymbolicExpr| match previous {
                None => NEUTRAL_DRIFT,
                Some(previous) => (next.depth() as f64) - (previous.depth() as f64),
            },
        );

        assert_eq!(state.update(E::leaf("X")), 0.0);
        assert_eq!(state.update(E::gradient(E::leaf("X"))), 1.0);
        assert_eq!(state.update(E::leaf("Y")), -1.0);
    }

    #[test]
    fn test_neutral_strategy_stays_neutral() {
        let mut state = InterpretiveState::new();
        state.update(E::leaf("X"));
        let drift = state.update(E::compose(E::leaf("X"), E::leaf("Y")));
        assert_eq!(drift, NEUTRAL_DRIFT);
    }

    #[test]
    fn test_same_expression_twice_is_recorded_twice() {
        let mut state = InterpretiveState::new();
        state.update(E::leaf("X"));
        state.update(E::leaf("X"));
        assert_eq!(state.len(), 2);
        assert_eq!(state.history()[0], state.history()[1]);
    }
}
