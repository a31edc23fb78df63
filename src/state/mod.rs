mod persistence;
mod session;

pub use persistence::load_catalog;
pub use session::{Phase, SubstitutionSession};
