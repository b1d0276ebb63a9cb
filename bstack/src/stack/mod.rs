use std::fmt;

pub mod bounded;
pub mod error;

pub use bounded::BoundedStack;
pub use error::StackError;

/// Boundary-value partition of a `(size, capacity)` pair.
///
/// | class | condition               |
/// |-------|-------------------------|
/// | b0    | size = capacity = 0     |
/// | b1    | 0 = size < capacity     |
/// | b2    | 0 < size < capacity     |
/// | b3    | 0 < size = capacity     |
/// | b4    | capacity < size         |
///
/// `B4` is an invariant violation; no `BoundedStack` can ever be in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EquivClass {
    B0,
    B1,
    B2,
    B3,
    B4,
}

impl EquivClass {
    pub const ALL: [EquivClass; 5] = [
        EquivClass::B0,
        EquivClass::B1,
        EquivClass::B2,
        EquivClass::B3,
        EquivClass::B4,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EquivClass::B0 => "b0",
            EquivClass::B1 => "b1",
            EquivClass::B2 => "b2",
            EquivClass::B3 => "b3",
            EquivClass::B4 => "b4",
        }
    }

    pub fn is_reachable(&self) -> bool {
        !matches!(self, EquivClass::B4)
    }

    /// push must fail in this class
    pub fn is_full(&self) -> bool {
        matches!(self, EquivClass::B0 | EquivClass::B3)
    }

    /// pop must fail in this class
    pub fn is_empty(&self) -> bool {
        matches!(self, EquivClass::B0 | EquivClass::B1)
    }
}

impl fmt::Display for EquivClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Total over every pair, including the unreachable region.
pub fn classify(size: usize, capacity: usize) -> EquivClass {
    if size > capacity {
        return EquivClass::B4;
    }
    match (size, capacity) {
        (0, 0) => EquivClass::B0,
        (0, _) => EquivClass::B1,
        (s, c) if s < c => EquivClass::B2,
        _ => EquivClass::B3,
    }
}

/// `(size, capacity)` representatives of every class, b4 included.
pub const BASE_CHOICES: [(usize, usize, EquivClass); 8] = [
    (0, 0, EquivClass::B0),
    (0, 2, EquivClass::B1),
    (0, 1, EquivClass::B1),
    (1, 2, EquivClass::B2),
    (2, 2, EquivClass::B3),
    (1, 1, EquivClass::B3),
    (2, 1, EquivClass::B4),
    (1, 0, EquivClass::B4),
];

/// Anything with a fixed capacity and a current size.
pub trait StackShape {
    fn capacity(&self) -> usize;
    fn size(&self) -> usize;

    fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.size())
    }

    fn class(&self) -> EquivClass {
        classify(self.size(), self.capacity())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Shape(usize, usize);

    impl StackShape for Shape {
        fn capacity(&self) -> usize {
            self.1
        }
        fn size(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn test_base_choices() {
        for (size, cap, expected) in BASE_CHOICES {
            assert_eq!(classify(size, cap), expected, "size={size} cap={cap}");
        }
    }

    #[test]
    fn test_every_class_has_a_base_choice() {
        for class in EquivClass::ALL {
            assert!(BASE_CHOICES.iter().any(|(_, _, c)| *c == class), "{class}");
        }
    }

    #[test]
    fn test_default_predicates() {
        let degenerate = Shape(0, 0);
        assert!(degenerate.is_empty());
        assert!(degenerate.is_full());
        assert_eq!(degenerate.class(), EquivClass::B0);
        assert_eq!(degenerate.remaining(), 0);

        let mid = Shape(1, 3);
        assert!(!mid.is_empty());
        assert!(!mid.is_full());
        assert_eq!(mid.remaining(), 2);
        assert_eq!(mid.class(), EquivClass::B2);

        assert_eq!(Shape(3, 2).class(), EquivClass::B4);
        assert_eq!(Shape(3, 2).remaining(), 0);
    }

    #[test]
    fn test_class_predicates_agree_with_shape() {
        for (size, cap, class) in BASE_CHOICES {
            if !class.is_reachable() {
                continue;
            }
            let shape = Shape(size, cap);
            assert_eq!(class.is_full(), shape.is_full());
            assert_eq!(class.is_empty(), shape.is_empty());
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = EquivClass::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["b0", "b1", "b2", "b3", "b4"]);
        assert!(!EquivClass::B4.is_reachable());
    }
}
