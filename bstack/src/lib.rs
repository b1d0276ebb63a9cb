pub mod cases;
pub mod stack;
pub mod util;

pub use cases::{Action, CaseGenerator, TestCase, Trace};
pub use stack::{BoundedStack, EquivClass, StackError, StackShape, classify};
