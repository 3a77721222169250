//! One recorded invocation of a stub.

use std::time::Instant;

use crate::matchers::matches;
use crate::value::Value;

/// A single recorded invocation: the ordered argument list plus a monotonic
/// timestamp stamped at construction.
///
/// Calls are immutable once recorded. The timestamp is only ever used for
/// relative ordering between calls in the same process; it is never exposed
/// or persisted.
#[derive(Debug, Clone)]
pub struct Call {
    args: Vec<Value>,
    at: Instant,
}

impl Call {
    pub(crate) fn new(args: Vec<Value>) -> Self {
        Self {
            args,
            at: Instant::now(),
        }
    }

    /// The recorded arguments, in call order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The recorded argument at `index`, if the call had that many.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// True iff every supplied value matches the recorded argument at the
    /// same position.
    ///
    /// The supplied list may be shorter than the recorded one; trailing
    /// recorded arguments are ignored, so this is a prefix match. A supplied
    /// list longer than the recorded one never matches. Matchers go on the
    /// supplied side: `call.called_with(&args![any(), 2])`.
    pub fn called_with(&self, args: &[Value]) -> bool {
        if args.len() > self.args.len() {
            return false;
        }
        args.iter()
            .zip(&self.args)
            .all(|(supplied, recorded)| matches(supplied, recorded))
    }

    /// Like [`called_with`](Call::called_with), but the argument counts must
    /// also be equal.
    pub fn called_with_exactly(&self, args: &[Value]) -> bool {
        args.len() == self.args.len() && self.called_with(args)
    }

    /// True iff this call was recorded strictly before `other`.
    ///
    /// Two calls stamped at the same clock reading are neither before nor
    /// after one another.
    pub fn called_before(&self, other: &Call) -> bool {
        self.at < other.at
    }

    /// True iff this call was recorded strictly after `other`.
    pub fn called_after(&self, other: &Call) -> bool {
        self.at > other.at
    }
}
