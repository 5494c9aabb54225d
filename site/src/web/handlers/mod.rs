// restaurant_site/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod checkout_handlers;
pub mod menu_handlers;
pub mod session_handlers;
