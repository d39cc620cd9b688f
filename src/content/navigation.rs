use crate::types::{MegaMenuType, NavigationLink};

fn mega_menu_link(title: &str, value: &str, menu_type: MegaMenuType) -> NavigationLink {
    NavigationLink {
        title: title.to_string(),
        value: value.to_string(),
        children: Vec::new(),
        is_mega_menu: true,
        mega_menu_type: Some(menu_type),
    }
}

/// Header navigation, left to right.
pub(super) fn links() -> Vec<NavigationLink> {
    vec![
        // No products index page; the value is only a key.
        mega_menu_link("Product", "products", MegaMenuType::Products),
        mega_menu_link("Docs", "/docs/", MegaMenuType::Docs),
        mega_menu_link("Pricing", "/pricing/", MegaMenuType::Pricing),
        mega_menu_link("Resources", "/blog/", MegaMenuType::Resources),
    ]
}
