use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use tracing::debug;

use super::{Action, TestCase, format_actions};
use crate::stack::{EquivClass, StackError, classify};

/// Derives boundary test cases for a given capacity by walking the stack's
/// state graph.
///
/// A state is the current size (the capacity never changes). From size `s`,
/// push leads to `s + 1` when `s < capacity` and pop to `s - 1` when `s > 0`;
/// any other move raises Overflow/Underflow and ends that branch. A BFS from
/// `s = 0` visits every reachable size, so the first size seen for a class
/// comes with its shortest action path.
#[derive(Debug, Clone)]
pub struct CaseGenerator {
    capacity: usize,
    round_trip: bool,
    probes: bool,
}

impl CaseGenerator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            round_trip: true,
            probes: true,
        }
    }

    /// include the round-trip baseline in [`suite`](Self::suite)
    pub fn with_round_trip(mut self, enable: bool) -> Self {
        self.round_trip = enable;
        self
    }

    /// include the overflow/underflow probes in [`suite`](Self::suite)
    pub fn with_probes(mut self, enable: bool) -> Self {
        self.probes = enable;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reachable_classes(&self) -> BTreeSet<EquivClass> {
        self.explore().into_keys().collect()
    }

    pub fn shortest_paths(&self) -> BTreeMap<EquivClass, Vec<Action>> {
        self.explore()
    }

    /// One case per reachable class.
    pub fn cases(&self) -> Vec<TestCase> {
        self.cases_from(&self.explore())
    }

    /// Shortest path to a full stack plus one more push, and a pop on a fresh stack.
    pub fn boundary_probes(&self) -> Vec<TestCase> {
        self.probes_from(&self.explore())
    }

    pub fn suite(&self) -> Vec<TestCase> {
        let paths = self.explore();
        let mut suite = self.cases_from(&paths);
        if self.round_trip {
            suite.push(round_trip(self.capacity));
        }
        if self.probes {
            suite.extend(self.probes_from(&paths));
        }
        debug!(capacity = self.capacity, cases = suite.len(), "built case suite");
        suite
    }

    fn cases_from(&self, paths: &BTreeMap<EquivClass, Vec<Action>>) -> Vec<TestCase> {
        paths
            .iter()
            .map(|(&class, actions)| TestCase {
                name: format!("reach-{}", class),
                capacity: self.capacity,
                actions: actions.clone(),
                target: class,
                expected_error: None,
            })
            .collect()
    }

    fn probes_from(&self, paths: &BTreeMap<EquivClass, Vec<Action>>) -> Vec<TestCase> {
        let cap = self.capacity;
        let full_class = classify(cap, cap);
        let empty_class = classify(0, cap);

        let mut overflow_actions = paths.get(&full_class).cloned().unwrap_or_default();
        overflow_actions.push(Action::Push);

        vec![
            TestCase {
                name: "overflow".to_string(),
                capacity: cap,
                actions: overflow_actions,
                target: full_class,
                expected_error: Some(StackError::Overflow { capacity: cap }),
            },
            TestCase {
                name: "underflow".to_string(),
                capacity: cap,
                actions: vec![Action::Pop],
                target: empty_class,
                expected_error: Some(StackError::Underflow),
            },
        ]
    }

    fn explore(&self) -> BTreeMap<EquivClass, Vec<Action>> {
        let cap = self.capacity;
        let mut parents: HashMap<usize, Option<(usize, Action)>> = HashMap::new();
        let mut first_seen: BTreeMap<EquivClass, usize> = BTreeMap::new();
        let mut queue = VecDeque::new();

        parents.insert(0, None);
        queue.push_back(0_usize);

        while let Some(size) = queue.pop_front() {
            first_seen.entry(classify(size, cap)).or_insert(size);

            for action in [Action::Push, Action::Pop] {
                let next = match action {
                    Action::Push if size < cap => size + 1,
                    Action::Pop if size > 0 => size - 1,
                    // overflow / underflow: no successor state
                    _ => continue,
                };
                if !parents.contains_key(&next) {
                    parents.insert(next, Some((size, action)));
                    queue.push_back(next);
                }
            }
        }

        let paths: BTreeMap<EquivClass, Vec<Action>> = first_seen
            .into_iter()
            .map(|(class, size)| (class, path_to(&parents, size)))
            .collect();

        let reachable: Vec<&EquivClass> = paths.keys().collect();
        debug!(
            capacity = cap,
            states = parents.len(),
            reachable = ?reachable,
            "explored stack state graph"
        );
        for (class, path) in &paths {
            debug!(capacity = cap, %class, path = %format_actions(path), "shortest path");
        }
        paths
    }
}

fn path_to(parents: &HashMap<usize, Option<(usize, Action)>>, mut size: usize) -> Vec<Action> {
    let mut path = Vec::new();
    while let Some(Some((prev, action))) = parents.get(&size) {
        path.push(*action);
        size = *prev;
    }
    path.reverse();
    path
}

/// `capacity` pushes followed by `capacity` pops; never fails and ends empty.
pub fn round_trip(capacity: usize) -> TestCase {
    let mut actions = vec![Action::Push; capacity];
    actions.extend(std::iter::repeat_n(Action::Pop, capacity));
    TestCase {
        name: "round-trip".to_string(),
        capacity,
        actions,
        target: classify(0, capacity),
        expected_error: None,
    }
}
