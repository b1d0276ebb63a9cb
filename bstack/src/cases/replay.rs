use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::{Action, Interleavings};
use crate::stack::{BoundedStack, EquivClass, StackError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    /// `Ok(None)` for a push, `Ok(Some(item))` for a pop.
    pub outcome: Result<Option<usize>, StackError>,
    pub size: usize,
    pub class: EquivClass,
}

/// Per-step record of an action sequence run against a real stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    capacity: usize,
    initial: EquivClass,
    steps: Vec<Step>,
}

impl Trace {
    #[cfg(test)]
    pub(crate) fn from_steps(capacity: usize, initial: EquivClass, steps: Vec<Step>) -> Self {
        Self {
            capacity,
            initial,
            steps,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// initial state included
    pub fn visited(&self) -> BTreeSet<EquivClass> {
        std::iter::once(self.initial)
            .chain(self.steps.iter().map(|s| s.class))
            .collect()
    }

    pub fn errors(&self) -> impl Iterator<Item = (usize, StackError)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(idx, step)| step.outcome.err().map(|e| (idx, e)))
    }

    pub fn popped(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter_map(|step| step.outcome.ok().flatten())
            .collect()
    }

    pub fn final_class(&self) -> EquivClass {
        self.steps.last().map_or(self.initial, |s| s.class)
    }

    pub fn final_size(&self) -> usize {
        self.steps.last().map_or(0, |s| s.size)
    }
}

/// Runs `actions` on `BoundedStack::new(capacity)`. The i-th action pushes `i`.
/// A failed step does not stop the replay.
pub fn replay(capacity: usize, actions: &[Action]) -> Trace {
    let mut stack = BoundedStack::new(capacity);
    let initial = stack.class();

    let steps = actions
        .iter()
        .enumerate()
        .map(|(idx, &action)| {
            let outcome = match action {
                Action::Push => stack.push(idx).map(|()| None),
                Action::Pop => stack.pop().map(Some),
            };
            let step = Step {
                action,
                outcome,
                size: stack.size(),
                class: stack.class(),
            };
            trace!(capacity, idx, %action, ?outcome, size = step.size, class = %step.class, "step");
            step
        })
        .collect();

    Trace {
        capacity,
        initial,
        steps,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    pub capacity: usize,
    pub sequences: usize,
    pub visited: BTreeSet<EquivClass>,
    /// sequences with at least one overflow
    pub overflowed: usize,
    /// sequences with at least one underflow
    pub underflowed: usize,
    /// sequences with no error at all
    pub clean: usize,
    /// final sizes of the clean sequences
    pub clean_ends: BTreeSet<usize>,
}

/// Replays every interleaving of `pushes` pushes and `pops` pops on `capacity`.
pub fn coverage(capacity: usize, pushes: usize, pops: usize) -> Coverage {
    let mut report = Coverage {
        capacity,
        ..Default::default()
    };

    for actions in Interleavings::new(pushes, pops) {
        let trace = replay(capacity, &actions);
        report.sequences += 1;
        report.visited.extend(trace.visited());

        let (mut overflow, mut underflow) = (false, false);
        for (_, err) in trace.errors() {
            overflow |= err.is_overflow();
            underflow |= err.is_underflow();
        }
        report.overflowed += overflow as usize;
        report.underflowed += underflow as usize;
        if !overflow && !underflow {
            report.clean += 1;
            report.clean_ends.insert(trace.final_size());
        }
    }

    debug!(
        capacity,
        pushes,
        pops,
        sequences = report.sequences,
        clean = report.clean,
        "interleaving coverage"
    );
    report
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cases::parse_actions;
    use EquivClass::*;

    #[test]
    fn test_replay_two_slot_scenario() {
        let trace = replay(2, &parse_actions("pppooo").unwrap());
        let classes: Vec<EquivClass> = trace.steps().iter().map(|s| s.class).collect();
        assert_eq!(classes, vec![B2, B3, B3, B2, B1, B1]);

        let errors: Vec<(usize, StackError)> = trace.errors().collect();
        assert_eq!(
            errors,
            vec![(2, StackError::Overflow { capacity: 2 }), (5, StackError::Underflow)]
        );
        assert_eq!(trace.popped(), vec![1, 0]);
        assert_eq!(trace.visited(), BTreeSet::from([B1, B2, B3]));
        assert_eq!(trace.final_class(), B1);
    }

    #[test]
    fn test_replay_empty_sequence() {
        let trace = replay(0, &[]);
        assert_eq!(trace.final_class(), B0);
        assert_eq!(trace.final_size(), 0);
        assert_eq!(trace.visited(), BTreeSet::from([B0]));
    }

    #[test]
    fn test_zero_capacity_any_sequence_fails() {
        for actions in Interleavings::new(3, 3) {
            let trace = replay(0, &actions);
            assert_eq!(trace.errors().count(), 6);
            assert_eq!(trace.visited(), BTreeSet::from([B0]));
        }
    }

    #[test]
    fn test_coverage_three_by_three_on_two() {
        let report = coverage(2, 3, 3);
        assert_eq!(report.sequences, 20);
        assert_eq!(report.visited, BTreeSet::from([B1, B2, B3]));
        assert!(report.clean > 0);
        assert_eq!(report.clean_ends, BTreeSet::from([0]));
        assert!(report.overflowed > 0);
        assert!(report.underflowed > 0);
    }

    #[test]
    fn test_coverage_zero_capacity() {
        let report = coverage(0, 1, 1);
        assert_eq!(report.sequences, 2);
        assert_eq!(report.visited, BTreeSet::from([B0]));
        assert_eq!(report.clean, 0);
        assert_eq!(report.overflowed, 2);
        assert_eq!(report.underflowed, 2);
    }
}
