//! Record types shared by the content tables, the lint and the JSON export.
//!
//! Field names serialize in camelCase because the exported JSON is read by
//! the page templates, which already use those names (`useCase`, `ctoName`,
//! `itemWidth`, `isMegaMenu`, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// An image reference, relative to the assets root.
///
/// Serializes as a bare string: `"case-studies/lerian-logo.png"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageAsset(String);

impl ImageAsset {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location of the referenced file under `root`.
    pub fn path_under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.0)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer success story, routed at `/case-studies/{slug}/`.
///
/// `challenge`, `solution` and `result` carry inline HTML (links, `<strong>`,
/// `<ul>` lists) and are emitted unescaped by the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub use_case: String,
    /// Name of the person quoted on the page.
    pub cto_name: String,
    pub cto_title: String,
    pub cto_quote: String,
    pub logo: ImageAsset,
    /// Portrait shown next to the quote.
    pub cto_image: ImageAsset,
    pub challenge: String,
    pub solution: String,
    pub result: String,
    /// SEO `<title>`.
    pub page_title: String,
    /// SEO meta description.
    pub page_description: String,
}

/// Common view over [`MenuItem`] and [`Product`].
pub trait LinkEntry {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn icon(&self) -> &str;
    fn href(&self) -> &str;
}

/// An entry of a text menu (docs, pricing, resources).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub description: String,
    /// Icon identifier, e.g. `book-open`.
    #[serde(rename = "value")]
    pub icon: String,
    pub href: String,
}

/// An entry of the product catalog, rendered in the product mega-menu grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    #[serde(rename = "value")]
    pub icon: String,
    pub href: String,
}

impl LinkEntry for MenuItem {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn icon(&self) -> &str {
        &self.icon
    }
    fn href(&self) -> &str {
        &self.href
    }
}

impl LinkEntry for Product {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn icon(&self) -> &str {
        &self.icon
    }
    fn href(&self) -> &str {
        &self.href
    }
}

/// The kinds of mega-menu the header knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MegaMenuType {
    Products,
    Docs,
    Pricing,
    Resources,
}

impl MegaMenuType {
    pub const ALL: [MegaMenuType; 4] = [
        MegaMenuType::Products,
        MegaMenuType::Docs,
        MegaMenuType::Pricing,
        MegaMenuType::Resources,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MegaMenuType::Products => "products",
            MegaMenuType::Docs => "docs",
            MegaMenuType::Pricing => "pricing",
            MegaMenuType::Resources => "resources",
        }
    }
}

impl fmt::Display for MegaMenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mega-menu type '{0}'")]
pub struct UnknownMegaMenuType(pub String);

impl FromStr for MegaMenuType {
    type Err = UnknownMegaMenuType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MegaMenuType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownMegaMenuType(s.to_string()))
    }
}

/// A node of the header navigation tree.
///
/// `value` is a route path (`/docs/`) or, for the product menu, an abstract
/// key (`products`) that has no page of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationLink {
    pub title: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationLink>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_mega_menu: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mega_menu_type: Option<MegaMenuType>,
}

impl NavigationLink {
    /// This link followed by all of its descendants, depth-first.
    pub fn walk(&self) -> Vec<&NavigationLink> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

/// Items of one mega-menu. Each variant pins the item type it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "items", rename_all = "lowercase")]
pub enum MegaMenuItems {
    Products(Vec<Product>),
    Docs(Vec<MenuItem>),
    Pricing(Vec<MenuItem>),
    Resources(Vec<MenuItem>),
}

impl MegaMenuItems {
    pub fn menu_type(&self) -> MegaMenuType {
        match self {
            MegaMenuItems::Products(_) => MegaMenuType::Products,
            MegaMenuItems::Docs(_) => MegaMenuType::Docs,
            MegaMenuItems::Pricing(_) => MegaMenuType::Pricing,
            MegaMenuItems::Resources(_) => MegaMenuType::Resources,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MegaMenuItems::Products(items) => items.len(),
            MegaMenuItems::Docs(items)
            | MegaMenuItems::Pricing(items)
            | MegaMenuItems::Resources(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> Vec<&dyn LinkEntry> {
        match self {
            MegaMenuItems::Products(items) => items.iter().map(|p| p as &dyn LinkEntry).collect(),
            MegaMenuItems::Docs(items)
            | MegaMenuItems::Pricing(items)
            | MegaMenuItems::Resources(items) => {
                items.iter().map(|m| m as &dyn LinkEntry).collect()
            }
        }
    }
}

/// Layout and contents of one mega-menu dropdown.
///
/// `items` is flattened, so the JSON reads
/// `{"type": "pricing", "items": [...], "columns": 2, "itemWidth": "200px"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MegaMenuConfig {
    #[serde(flatten)]
    pub items: MegaMenuItems,
    /// Grid column count.
    pub columns: u32,
    /// CSS width of one grid cell, e.g. `140px`.
    pub item_width: String,
}

pub type MegaMenuConfigs = BTreeMap<MegaMenuType, MegaMenuConfig>;

/// Every table the site exports, bundled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub case_studies: Vec<CaseStudy>,
    pub docs_menu: Vec<MenuItem>,
    pub pricing_menu: Vec<MenuItem>,
    pub resources_menu: Vec<MenuItem>,
    pub products: Vec<Product>,
    pub links: Vec<NavigationLink>,
    pub mega_menus: MegaMenuConfigs,
}

impl SiteContent {
    pub fn case_study(&self, slug: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|c| c.slug == slug)
    }

    /// Config for a mega-menu type. A missing entry is a content error
    /// reported by the lint, so this is a plain lookup.
    pub fn mega_menu(&self, menu_type: MegaMenuType) -> Option<&MegaMenuConfig> {
        self.mega_menus.get(&menu_type)
    }

    /// Config a navigation link opens, if it is a mega-menu link.
    pub fn mega_menu_for(&self, link: &NavigationLink) -> Option<&MegaMenuConfig> {
        if !link.is_mega_menu {
            return None;
        }
        link.mega_menu_type.and_then(|t| self.mega_menu(t))
    }

    pub fn products_with_href(&self, href: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.href == href).collect()
    }

    /// Every navigation link in the tree, depth-first.
    pub fn all_links(&self) -> Vec<&NavigationLink> {
        self.links.iter().flat_map(|l| l.walk()).collect()
    }

    /// Every image reference, in table order, duplicates included.
    pub fn image_assets(&self) -> Vec<&ImageAsset> {
        self.case_studies
            .iter()
            .flat_map(|c| [&c.logo, &c.cto_image])
            .collect()
    }
}
