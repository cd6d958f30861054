pub mod sqlite;

use crate::app::Result;
use crate::domain::{LikedProduct, Moodboard, SavedProduct};

pub use sqlite::SqliteStore;

pub trait Store {
    // Moodboard operations
    fn create_moodboard(&self, title: &str, accent_color: Option<&str>) -> Result<String>;
    fn get_moodboard(&self, id: &str) -> Result<Option<Moodboard>>;
    fn get_all_moodboards(&self) -> Result<Vec<Moodboard>>;
    /// Returns false when the product was already on the board.
    fn add_product_to_moodboard(&self, moodboard_id: &str, product: &SavedProduct) -> Result<bool>;
    fn remove_product_from_moodboard(&self, moodboard_id: &str, product_id: &str) -> Result<()>;
    fn delete_moodboard(&self, id: &str) -> Result<()>;
    fn update_moodboard_title(&self, id: &str, title: &str) -> Result<()>;
    fn update_moodboard_cover(&self, id: &str, cover_image: &str) -> Result<()>;

    // Like operations
    /// Returns whether the product is liked after the call.
    fn toggle_like(&self, product: &LikedProduct) -> Result<bool>;
    fn is_liked(&self, product_id: &str) -> Result<bool>;
    fn remove_like(&self, product_id: &str) -> Result<()>;
    fn get_liked_products(&self) -> Result<Vec<LikedProduct>>;
}
