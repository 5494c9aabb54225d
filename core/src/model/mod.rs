pub mod line_item;
pub mod menu_item;
pub mod money;

pub use line_item::LineItem;
pub use menu_item::{DietaryFilter, Menu, MenuCategory, MenuItem};
pub use money::{Money, TaxRate};
