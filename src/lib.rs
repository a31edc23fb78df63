pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod search;
pub mod state;
pub mod substitution;

pub use error::{Result, SwapError};
pub use models::{ComparisonRow, Food, MacroClass};
pub use search::SearchIndex;
pub use state::SubstitutionSession;
