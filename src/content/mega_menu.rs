use crate::types::{
    MegaMenuConfig, MegaMenuConfigs, MegaMenuItems, MegaMenuType, MenuItem, Product,
};

fn config(items: MegaMenuItems, columns: u32, item_width: &str) -> (MegaMenuType, MegaMenuConfig) {
    (
        items.menu_type(),
        MegaMenuConfig {
            items,
            columns,
            item_width: item_width.to_string(),
        },
    )
}

/// Dropdown layouts. Items are copies of the menu tables, in declared order.
pub(super) fn mega_menu_configs(
    products: &[Product],
    docs: &[MenuItem],
    pricing: &[MenuItem],
    resources: &[MenuItem],
) -> MegaMenuConfigs {
    MegaMenuConfigs::from([
        config(MegaMenuItems::Products(products.to_vec()), 5, "140px"),
        config(MegaMenuItems::Docs(docs.to_vec()), 4, "160px"),
        config(MegaMenuItems::Pricing(pricing.to_vec()), 2, "200px"),
        config(MegaMenuItems::Resources(resources.to_vec()), 3, "200px"),
    ])
}
