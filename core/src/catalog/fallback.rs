// menu_cart/src/catalog/fallback.rs
use crate::catalog::source::CatalogSource;
use crate::error::CatalogError;
use crate::model::menu_item::{Menu, MenuCategory, MenuItem};
use crate::model::money::Money;
use async_trait::async_trait;

const IMAGE_BASE: &str = "https://images.pexels.com/photos";

/// A fixed menu served when no remote catalog is configured or the remote one
/// has nothing on it.
#[derive(Debug, Clone)]
pub struct StaticFallbackCatalog {
  menu: Menu,
}

impl StaticFallbackCatalog {
  pub fn new(menu: Menu) -> Self {
    Self { menu }
  }

  /// The house sample menu: starters, mains and desserts.
  pub fn house_menu() -> Self {
    Self::new(house_menu())
  }

  pub fn menu(&self) -> &Menu {
    &self.menu
  }
}

impl Default for StaticFallbackCatalog {
  fn default() -> Self {
    Self::house_menu()
  }
}

#[async_trait]
impl CatalogSource for StaticFallbackCatalog {
  fn name(&self) -> &str {
    "static-fallback"
  }

  async fn load_menu(&self) -> Result<Menu, CatalogError> {
    Ok(self.menu.clone())
  }

  async fn find_item(&self, id: &str) -> Result<Option<MenuItem>, CatalogError> {
    Ok(self.menu.find_item(id).cloned())
  }
}

fn dish(id: &str, name: &str, description: &str, euros: i64, photo: &str) -> MenuItem {
  MenuItem::new(id, name, Money::from_euros(euros))
    .with_description(description)
    .with_image(format!(
      "{base}/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=600",
      base = IMAGE_BASE,
      photo = photo
    ))
}

fn house_menu() -> Menu {
  Menu::new(vec![
    MenuCategory {
      id: "1".to_string(),
      name: "Starters".to_string(),
      description: "Begin your culinary journey".to_string(),
      display_order: 1,
      items: vec![
        dish("1", "Irish Oysters", "Fresh Galway Bay oysters with mignonette", 18, "566345").with_dietary(false, false, true),
        dish("2", "Soup of the Day", "Chef's daily creation with artisan bread", 12, "539451").with_dietary(true, false, false),
        dish("3", "Smoked Salmon", "Irish smoked salmon with capers and dill cream", 16, "3535383").with_dietary(false, false, true),
      ],
    },
    MenuCategory {
      id: "2".to_string(),
      name: "Main Courses".to_string(),
      description: "Signature dishes prepared with care".to_string(),
      display_order: 2,
      items: vec![
        dish("4", "Grilled Ribeye", "Premium Irish beef with peppercorn sauce and vegetables", 35, "769289").with_dietary(false, false, true),
        dish("5", "Pan-Seared Salmon", "Atlantic salmon with lemon butter and seasonal vegetables", 28, "1640777").with_dietary(false, false, true),
        dish("6", "Mushroom Risotto", "Creamy arborio rice with wild mushrooms and truffle oil", 24, "1438672").with_dietary(true, false, true),
        dish("7", "Lamb Shank", "Slow-braised Irish lamb with rosemary jus", 32, "8753647").with_dietary(false, false, true),
      ],
    },
    MenuCategory {
      id: "3".to_string(),
      name: "Desserts".to_string(),
      description: "Sweet endings to remember".to_string(),
      display_order: 3,
      items: vec![
        dish("8", "Chocolate Fondant", "Warm chocolate cake with vanilla ice cream", 12, "291528").with_dietary(true, false, false),
        dish("9", "Irish Cream Cheesecake", "Classic cheesecake with Baileys", 10, "140831").with_dietary(true, false, false),
        dish("10", "Seasonal Fruit Tart", "Fresh fruit on almond cream with pastry", 11, "1126359").with_dietary(true, false, false),
      ],
    },
  ])
}
