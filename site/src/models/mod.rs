// restaurant_site/src/models/mod.rs

//! Rows read from the menu database.

pub mod menu_category;
pub mod menu_item;

pub use menu_category::MenuCategoryRow;
pub use menu_item::MenuItemRow;
