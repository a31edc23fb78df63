pub mod calculations;
pub mod constants;

pub use calculations::{
    compare, equivalent_quantity, nutrition_for, parse_quantity, validate_quantity, Nutrition,
};
pub use constants::*;
