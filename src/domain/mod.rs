pub mod content;
pub mod liked;
pub mod moodboard;

pub use content::{Place, PlaceType, Product, ProductCategory, Story, StoryCategory};
pub use liked::LikedProduct;
pub use moodboard::{Moodboard, SavedProduct};
