//! The stub itself: a scripted stand-in that records how it was used.

use std::collections::VecDeque;

use crate::call::Call;
use crate::value::Value;

/// A scriptable test double.
///
/// A `Stub` records every invocation and answers queries about how it was
/// used. Return values are scripted ahead of time: one-shot tuples queue up
/// FIFO via [`returns_once`](Stub::returns_once), and a default tuple set by
/// [`returns`](Stub::returns) serves every invocation once the queue drains.
///
/// # Example
///
/// ```
/// use standin::{args, Stub};
///
/// let mut stub = Stub::new();
/// stub.returns(args![42]);
///
/// let out = stub.invoke(args!["compute"]);
/// assert_eq!(out, args![42]);
/// assert!(stub.called_once());
/// assert!(stub.called_with(&args!["compute"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stub {
    calls: Vec<Call>,
    one_shot: VecDeque<Vec<Value>>,
    default_return: Vec<Value>,
}

impl Stub {
    /// Creates a fresh stub: no recorded calls, no scripted returns.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Invocation and return scripting
    // =========================================================================

    /// Records a call and returns the next scripted tuple.
    ///
    /// One-shot tuples queued by [`returns_once`](Stub::returns_once) are
    /// consumed first, oldest first. Once the queue is empty every invocation
    /// yields a clone of the default tuple, which is empty until
    /// [`returns`](Stub::returns) sets it.
    pub fn invoke(&mut self, args: Vec<Value>) -> Vec<Value> {
        self.calls.push(Call::new(args));
        match self.one_shot.pop_front() {
            Some(values) => values,
            None => self.default_return.clone(),
        }
    }

    /// Queues a tuple to be returned by exactly one future invocation.
    /// Queued tuples are consumed in the order they were added.
    pub fn returns_once(&mut self, values: Vec<Value>) -> &mut Self {
        self.one_shot.push_back(values);
        self
    }

    /// Sets the default return tuple. Last write wins.
    pub fn returns(&mut self, values: Vec<Value>) -> &mut Self {
        self.default_return = values;
        self
    }

    /// Restores the fresh state: the call log, the one-shot queue, and the
    /// default tuple are all cleared. Idempotent.
    pub fn reset(&mut self) {
        self.calls.clear();
        self.one_shot.clear();
        self.default_return.clear();
    }

    // =========================================================================
    // Call log queries
    // =========================================================================

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// True iff the stub has been invoked at least once.
    pub fn called(&self) -> bool {
        !self.calls.is_empty()
    }

    /// True iff the stub has never been invoked.
    pub fn not_called(&self) -> bool {
        self.calls.is_empty()
    }

    /// True iff the stub has been invoked exactly once.
    pub fn called_once(&self) -> bool {
        self.calls.len() == 1
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// The first recorded call, if any.
    pub fn first_call(&self) -> Option<&Call> {
        self.calls.first()
    }

    /// The `n`th recorded call, 1-indexed; `nth_call(0)` is `None`.
    pub fn nth_call(&self, n: usize) -> Option<&Call> {
        self.calls.get(n.checked_sub(1)?)
    }

    /// The most recent recorded call, if any.
    pub fn last_call(&self) -> Option<&Call> {
        self.calls.last()
    }

    // =========================================================================
    // Ordering queries
    // =========================================================================

    /// True iff this stub's first call happened before `other`'s last call.
    ///
    /// False whenever either stub has no calls. Note the asymmetric
    /// endpoints: with interleaved invocations `a.called_before(&b)` and
    /// `b.called_before(&a)` can both hold. The query asks "was I already in
    /// use before the other stub finished", not for a total order.
    pub fn called_before(&self, other: &Stub) -> bool {
        match (self.first_call(), other.last_call()) {
            (Some(first), Some(last)) => first.called_before(last),
            _ => false,
        }
    }

    /// True iff this stub's last call happened after `other`'s first call.
    ///
    /// False whenever either stub has no calls.
    pub fn called_after(&self, other: &Stub) -> bool {
        match (self.last_call(), other.first_call()) {
            (Some(last), Some(first)) => last.called_after(first),
            _ => false,
        }
    }

    // =========================================================================
    // Argument queries
    // =========================================================================

    /// True iff at least one recorded call matches the supplied arguments.
    ///
    /// Per-call semantics are those of [`Call::called_with`]: positional
    /// prefix match, with matchers allowed on the supplied side.
    pub fn called_with(&self, args: &[Value]) -> bool {
        self.calls.iter().any(|call| call.called_with(args))
    }

    /// True iff every recorded call matches the supplied arguments.
    /// Vacuously true when the stub was never invoked.
    pub fn always_called_with(&self, args: &[Value]) -> bool {
        self.calls.iter().all(|call| call.called_with(args))
    }

    /// True iff no recorded call matches the supplied arguments.
    pub fn never_called_with(&self, args: &[Value]) -> bool {
        !self.called_with(args)
    }

    /// True iff at least one recorded call matches the supplied arguments
    /// with equal argument counts.
    pub fn called_with_exactly(&self, args: &[Value]) -> bool {
        self.calls.iter().any(|call| call.called_with_exactly(args))
    }

    /// True iff every recorded call matches the supplied arguments with
    /// equal argument counts. Vacuously true when never invoked.
    pub fn always_called_with_exactly(&self, args: &[Value]) -> bool {
        self.calls.iter().all(|call| call.called_with_exactly(args))
    }

    /// True iff no recorded call matches the supplied arguments with equal
    /// argument counts.
    pub fn never_called_with_exactly(&self, args: &[Value]) -> bool {
        !self.called_with_exactly(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{any, contains, regexp};
    use crate::{args, seq};
    use std::time::Instant;

    /// The monotonic clock's granularity is platform-dependent; spin until it
    /// advances so the next call gets a strictly later timestamp.
    fn tick() {
        let mark = Instant::now();
        while Instant::now() == mark {}
    }

    #[test]
    fn test_invoke_records_calls_in_order() {
        let mut stub = Stub::new();
        assert_eq!(stub.call_count(), 0);
        stub.invoke(args![1, 2]);
        stub.invoke(args![3]);
        assert_eq!(stub.call_count(), 2);
        assert_eq!(stub.nth_call(1).unwrap().args(), args![1, 2]);
        assert_eq!(stub.nth_call(2).unwrap().args(), args![3]);
    }

    #[test]
    fn test_invoke_returns_empty_by_default() {
        let mut stub = Stub::new();
        assert_eq!(stub.invoke(args![1]), args![]);
    }

    #[test]
    fn test_returns_sets_the_default_tuple() {
        let mut stub = Stub::new();
        stub.returns(args![1, "two"]);
        assert_eq!(stub.invoke(args![]), args![1, "two"]);
        assert_eq!(stub.invoke(args![]), args![1, "two"]);
        stub.returns(args![3]);
        assert_eq!(stub.invoke(args![]), args![3]);
    }

    #[test]
    fn test_returns_once_queue_drains_fifo() {
        let mut stub = Stub::new();
        stub.returns_once(args!["a"]);
        stub.returns_once(args!["b"]);
        stub.returns(args!["c"]);
        assert_eq!(stub.invoke(args![]), args!["a"]);
        assert_eq!(stub.invoke(args![]), args!["b"]);
        assert_eq!(stub.invoke(args![]), args!["c"]);
        assert_eq!(stub.invoke(args![]), args!["c"]);
    }

    #[test]
    fn test_scripting_calls_chain() {
        let mut stub = Stub::new();
        stub.returns_once(args![1]).returns(args![0]);
        assert_eq!(stub.invoke(args![]), args![1]);
        assert_eq!(stub.invoke(args![]), args![0]);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut stub = Stub::new();
        stub.returns_once(args![1]);
        stub.returns(args![2]);
        stub.invoke(args![9]);
        stub.reset();
        assert!(stub.not_called());
        assert!(stub.first_call().is_none());
        assert_eq!(stub.invoke(args![]), args![]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut stub = Stub::new();
        stub.invoke(args![1]);
        stub.reset();
        stub.reset();
        assert!(stub.not_called());
        assert_eq!(stub.call_count(), 0);
    }

    #[test]
    fn test_call_counting() {
        let mut stub = Stub::new();
        assert!(!stub.called());
        assert!(stub.not_called());
        stub.invoke(args![]);
        assert!(stub.called());
        assert!(stub.called_once());
        stub.invoke(args![]);
        assert!(stub.called());
        assert!(!stub.called_once());
        assert_eq!(stub.call_count(), 2);
    }

    #[test]
    fn test_first_nth_and_last_call() {
        let mut stub = Stub::new();
        stub.invoke(args![1]);
        stub.invoke(args![2]);
        stub.invoke(args![3]);
        assert_eq!(stub.first_call().unwrap().args(), args![1]);
        assert_eq!(stub.nth_call(2).unwrap().args(), args![2]);
        assert_eq!(stub.last_call().unwrap().args(), args![3]);
        assert!(stub.nth_call(0).is_none());
        assert!(stub.nth_call(4).is_none());
    }

    #[test]
    fn test_fresh_stub_has_no_calls_to_fetch() {
        let stub = Stub::new();
        assert!(stub.first_call().is_none());
        assert!(stub.nth_call(1).is_none());
        assert!(stub.last_call().is_none());
        assert!(stub.calls().is_empty());
    }

    #[test]
    fn test_called_before_and_after() {
        let mut earlier = Stub::new();
        let mut later = Stub::new();
        earlier.invoke(args![]);
        tick();
        later.invoke(args![]);
        assert!(earlier.called_before(&later));
        assert!(!later.called_before(&earlier));
        assert!(later.called_after(&earlier));
        assert!(!earlier.called_after(&later));
    }

    #[test]
    fn test_ordering_is_false_without_calls_on_both_sides() {
        let mut used = Stub::new();
        used.invoke(args![]);
        let idle = Stub::new();
        assert!(!used.called_before(&idle));
        assert!(!idle.called_before(&used));
        assert!(!used.called_after(&idle));
        assert!(!idle.called_after(&used));
    }

    #[test]
    fn test_interleaved_stubs_are_before_each_other() {
        // first-of-self vs last-of-other endpoints make this a "was I in use
        // before the other finished" query, so interleaving satisfies both
        // directions at once.
        let mut s1 = Stub::new();
        let mut s2 = Stub::new();
        s2.invoke(args![]);
        tick();
        s1.invoke(args![]);
        tick();
        s2.invoke(args![]);
        assert!(s1.called_before(&s2));
        assert!(s2.called_before(&s1));
        assert!(s1.called_after(&s2));
        assert!(s2.called_after(&s1));
    }

    #[test]
    fn test_called_with_scans_every_call() {
        let mut stub = Stub::new();
        stub.invoke(args![1, 2, 3]);
        stub.invoke(args![3, 4]);
        assert!(stub.called_with(&args![1, 2]));
        assert!(stub.called_with(&args![3, 4]));
        assert!(!stub.called_with(&args![5, 6]));
    }

    #[test]
    fn test_called_with_accepts_matchers() {
        let mut stub = Stub::new();
        stub.invoke(args![seq![1, 2], "ok"]);
        assert!(stub.called_with(&args![contains(2), regexp("^o")]));
        assert!(stub.called_with(&args![any()]));
        assert!(stub.never_called_with(&args![contains(9)]));
    }

    #[test]
    fn test_always_called_with() {
        let mut stub = Stub::new();
        stub.invoke(args![1, 2]);
        stub.invoke(args![1, 3]);
        assert!(stub.always_called_with(&args![1]));
        assert!(!stub.always_called_with(&args![1, 2]));
    }

    #[test]
    fn test_never_called_with() {
        let mut stub = Stub::new();
        stub.invoke(args![1, 2]);
        assert!(stub.never_called_with(&args![2]));
        assert!(!stub.never_called_with(&args![1]));
    }

    #[test]
    fn test_called_with_exactly_family() {
        let mut stub = Stub::new();
        stub.invoke(args![1, 2, 3]);
        stub.invoke(args![3, 4]);
        assert!(stub.called_with_exactly(&args![1, 2, 3]));
        assert!(!stub.called_with_exactly(&args![1, 2]));
        assert!(!stub.always_called_with_exactly(&args![1, 2, 3]));
        assert!(stub.never_called_with_exactly(&args![4, 5]));
        assert!(!stub.never_called_with_exactly(&args![3, 4]));
    }

    #[test]
    fn test_always_called_with_exactly() {
        let mut stub = Stub::new();
        stub.invoke(args![7]);
        stub.invoke(args![7]);
        assert!(stub.always_called_with_exactly(&args![7]));
        assert!(stub.always_called_with_exactly(&args![any()]));
    }

    #[test]
    fn test_vacuous_argument_queries_on_fresh_stub() {
        let stub = Stub::new();
        assert!(!stub.called_with(&args![1]));
        assert!(stub.never_called_with(&args![1]));
        assert!(stub.always_called_with(&args![1]));
        assert!(stub.always_called_with_exactly(&args![1]));
    }
}
