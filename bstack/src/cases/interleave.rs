use super::Action;
use crate::util::binomial;

/// Every distinct ordering of `pushes` pushes and `pops` pops, in
/// lexicographic order (push sorts before pop).
///
/// The exact count is tracked while it fits in a `usize`; past that,
/// `size_hint` has no upper bound.
#[derive(Debug, Clone)]
pub struct Interleavings {
    current: Vec<Action>,
    remaining: Option<usize>,
    done: bool,
}

impl Interleavings {
    pub fn new(pushes: usize, pops: usize) -> Self {
        let mut current = vec![Action::Push; pushes];
        current.extend(std::iter::repeat_n(Action::Pop, pops));
        Self {
            current,
            remaining: pushes
                .checked_add(pops)
                .and_then(|n| binomial(n, pushes)),
            done: false,
        }
    }
}

/// In-place next permutation; false once `seq` is the last one.
fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    let Some(pivot) = seq.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(swap) = seq.iter().rposition(|x| *x > seq[pivot]) else {
        return false;
    };
    seq.swap(pivot, swap);
    seq[pivot + 1..].reverse();
    true
}

impl Iterator for Interleavings {
    type Item = Vec<Action>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        if !next_permutation(&mut self.current) {
            self.done = true;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.done, self.remaining) {
            (true, _) => (0, Some(0)),
            (false, Some(n)) => (n, Some(n)),
            (false, None) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::cases::format_actions;

    #[test]
    fn test_three_by_three() {
        let all: Vec<Vec<Action>> = Interleavings::new(3, 3).collect();
        assert_eq!(all.len(), 20);
        assert_eq!(format_actions(&all[0]), "pppooo");
        assert_eq!(format_actions(&all[19]), "oooppp");
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 20);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.iter().all(|s| s.iter().filter(|a| **a == Action::Push).count() == 3));
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(Interleavings::new(0, 0).collect::<Vec<_>>(), vec![Vec::<Action>::new()]);
        assert_eq!(Interleavings::new(2, 0).collect::<Vec<_>>(), vec![vec![Action::Push; 2]]);
        assert_eq!(Interleavings::new(0, 1).collect::<Vec<_>>(), vec![vec![Action::Pop]]);
    }

    #[test]
    fn test_size_hint() {
        let mut it = Interleavings::new(4, 2);
        assert_eq!(it.size_hint(), (15, Some(15)));
        it.next();
        assert_eq!(it.size_hint(), (14, Some(14)));
        assert_eq!(it.count(), 14);
    }

    #[test]
    fn test_size_hint_past_usize() {
        let mut it = Interleavings::new(40, 40);
        assert_eq!(it.size_hint(), (usize::MAX, None));
        assert_eq!(format_actions(&it.next().unwrap()).len(), 80);
        assert_eq!(it.size_hint().1, None);
    }
}
