pub mod index;
pub mod normalize;

pub use index::{IndexedFood, SearchIndex};
pub use normalize::normalize;
