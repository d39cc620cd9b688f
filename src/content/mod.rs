//! The site's content tables.
//!
//! Every table is built once, on first access, into a single immutable
//! [`SiteContent`] and handed out as `&'static` borrows. Nothing mutates it
//! afterwards, so readers on any thread share it without locking.
//!
//! | Table | Accessor | Rendered as |
//! |-------|----------|-------------|
//! | case studies | [`case_studies`] | `/case-studies/{slug}/` pages |
//! | docs menu | [`docs_menu`] | docs mega-menu |
//! | pricing menu | [`pricing_menu`] | pricing mega-menu |
//! | resources menu | [`resources_menu`] | resources mega-menu |
//! | products | [`products`] | product mega-menu grid |
//! | navigation | [`links`] | header |
//! | mega-menu layouts | [`mega_menu_configs`] | header dropdowns |

mod case_studies;
mod mega_menu;
mod menus;
mod navigation;
mod products;

use crate::types::{
    CaseStudy, MegaMenuConfig, MegaMenuConfigs, MegaMenuType, MenuItem, NavigationLink, Product,
    SiteContent,
};
use std::sync::LazyLock;

static CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    let docs_menu = menus::docs_menu();
    let pricing_menu = menus::pricing_menu();
    let resources_menu = menus::resources_menu();
    let products = products::products();
    let mega_menus =
        mega_menu::mega_menu_configs(&products, &docs_menu, &pricing_menu, &resources_menu);

    SiteContent {
        case_studies: case_studies::case_studies(),
        docs_menu,
        pricing_menu,
        resources_menu,
        products,
        links: navigation::links(),
        mega_menus,
    }
});

/// All tables, bundled.
pub fn site_content() -> &'static SiteContent {
    &CONTENT
}

pub fn case_studies() -> &'static [CaseStudy] {
    &CONTENT.case_studies
}

pub fn docs_menu() -> &'static [MenuItem] {
    &CONTENT.docs_menu
}

pub fn pricing_menu() -> &'static [MenuItem] {
    &CONTENT.pricing_menu
}

pub fn resources_menu() -> &'static [MenuItem] {
    &CONTENT.resources_menu
}

pub fn products() -> &'static [Product] {
    &CONTENT.products
}

pub fn links() -> &'static [NavigationLink] {
    &CONTENT.links
}

pub fn mega_menu_configs() -> &'static MegaMenuConfigs {
    &CONTENT.mega_menus
}

/// Case study routed at `slug`, if any.
pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    CONTENT.case_study(slug)
}

pub fn mega_menu_config(menu_type: MegaMenuType) -> Option<&'static MegaMenuConfig> {
    CONTENT.mega_menu(menu_type)
}

/// Products linking to `href`, in catalog order.
pub fn products_with_href(href: &str) -> Vec<&'static Product> {
    CONTENT.products_with_href(href)
}
