use std::fmt;

use anyhow::bail;
use tracing::warn;

use crate::stack::{EquivClass, StackError};

pub mod generate;
pub mod interleave;
pub mod replay;

pub use generate::{CaseGenerator, round_trip};
pub use interleave::Interleavings;
pub use replay::{Coverage, Step, Trace, coverage, replay};

/// p = push, o = pop
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Push,
    Pop,
}

impl Action {
    pub fn symbol(&self) -> char {
        match self {
            Action::Push => 'p',
            Action::Pop => 'o',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses the compact `p`/`o` notation, e.g. `"pp o"`. Whitespace is skipped;
/// error positions are character offsets into the raw input.
pub fn parse_actions(s: &str) -> anyhow::Result<Vec<Action>> {
    s.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(idx, c)| match c {
            'p' | 'P' => Ok(Action::Push),
            'o' | 'O' => Ok(Action::Pop),
            other => bail!("invalid action '{}' at position {}, expect 'p' or 'o'", other, idx),
        })
        .collect()
}

pub fn format_actions(actions: &[Action]) -> String {
    actions.iter().map(Action::symbol).collect()
}

/// A scenario replayed from `BoundedStack::new(capacity)`.
///
/// `target` is the class the stack must be in after the last action. When
/// `expected_error` is set, the last action (and only that one) must fail with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub capacity: usize,
    pub actions: Vec<Action>,
    pub target: EquivClass,
    pub expected_error: Option<StackError>,
}

impl TestCase {
    pub fn run(&self) -> anyhow::Result<Trace> {
        let trace = replay(self.capacity, &self.actions);
        self.check(&trace).inspect_err(|e| {
            warn!(case = %self.name, capacity = self.capacity, "case failed: {:#}", e);
        })?;
        Ok(trace)
    }

    /// Checks an already recorded trace against this case.
    pub fn check(&self, trace: &Trace) -> anyhow::Result<()> {
        if let Some((idx, step)) = trace
            .steps()
            .iter()
            .enumerate()
            .find(|(_, step)| !step.class.is_reachable())
        {
            bail!(
                "{}: step {} ({}) left size {} above capacity {}",
                self.name,
                idx,
                step.action,
                step.size,
                self.capacity
            );
        }

        if trace.final_class() != self.target {
            bail!(
                "{}: ended in {}, expect {}",
                self.name,
                trace.final_class(),
                self.target
            );
        }

        let errors: Vec<(usize, StackError)> = trace.errors().collect();
        match (self.expected_error, errors.as_slice()) {
            (None, []) => Ok(()),
            (None, [(idx, err), ..]) => bail!("{}: unexpected {} at step {}", self.name, err, idx),
            (Some(expected), [(idx, err)])
                if *err == expected && *idx + 1 == self.actions.len() =>
            {
                Ok(())
            }
            (Some(expected), _) => bail!(
                "{}: expect exactly one {} on the last step, got {:?}",
                self.name,
                expected,
                errors
            ),
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cap={} [{}] -> {}",
            self.name,
            self.capacity,
            format_actions(&self.actions),
            self.target
        )?;
        if let Some(err) = self.expected_error {
            write!(f, " ({})", err)?;
        }
        Ok(())
    }
}
