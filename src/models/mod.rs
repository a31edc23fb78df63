pub mod comparison;
pub mod food;

pub use comparison::ComparisonRow;
pub use food::{Food, MacroClass};
