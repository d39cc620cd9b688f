//! Shared test utilities for the distr-site test suite.
//!
//! Provides panicking lookups, bulk extractors and small builders over
//! [`SiteContent`] so tests read as assertions about content rather than
//! iterator plumbing.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = crate::content::site_content();
//! let product = find_product(content, "Alerts");
//! assert_eq!(product.href, "/docs/product/agents/");
//! ```

use std::path::Path;

use crate::types::{
    CaseStudy, MegaMenuType, MenuItem, NavigationLink, Product, SiteContent,
};

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a top-level or nested navigation link by title. Panics if not found.
pub fn find_link<'a>(content: &'a SiteContent, title: &str) -> &'a NavigationLink {
    content
        .all_links()
        .into_iter()
        .find(|l| l.title == title)
        .unwrap_or_else(|| {
            let titles = link_titles(content);
            panic!("link '{title}' not found. Available: {titles:?}")
        })
}

/// Find a product by title. Panics if not found.
pub fn find_product<'a>(content: &'a SiteContent, title: &str) -> &'a Product {
    content
        .products
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = content.products.iter().map(|p| p.title.as_str()).collect();
            panic!("product '{title}' not found. Available: {titles:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

pub fn case_study_slugs(content: &SiteContent) -> Vec<&str> {
    content.case_studies.iter().map(|c| c.slug.as_str()).collect()
}

/// Top-level navigation titles in order.
pub fn link_titles(content: &SiteContent) -> Vec<&str> {
    content.links.iter().map(|l| l.title.as_str()).collect()
}

/// Hrefs of every menu and product entry, tables first, then mega-menus.
pub fn all_item_hrefs(content: &SiteContent) -> Vec<&str> {
    let tables = content
        .docs_menu
        .iter()
        .chain(&content.pricing_menu)
        .chain(&content.resources_menu)
        .map(|m| m.href.as_str())
        .chain(content.products.iter().map(|p| p.href.as_str()));
    let menus = content
        .mega_menus
        .values()
        .flat_map(|c| c.items.entries())
        .map(|e| e.href());
    tables.chain(menus).collect()
}

// =========================================================================
// Builders
// =========================================================================

pub fn menu_item(title: &str, href: &str) -> MenuItem {
    MenuItem {
        title: title.to_string(),
        description: format!("{title} description"),
        icon: "circle".to_string(),
        href: href.to_string(),
    }
}

pub fn plain_link(title: &str, value: &str) -> NavigationLink {
    NavigationLink {
        title: title.to_string(),
        value: value.to_string(),
        children: Vec::new(),
        is_mega_menu: false,
        mega_menu_type: None,
    }
}

pub fn mega_link(title: &str, value: &str, menu_type: Option<MegaMenuType>) -> NavigationLink {
    NavigationLink {
        is_mega_menu: true,
        mega_menu_type: menu_type,
        ..plain_link(title, value)
    }
}

/// Mutable copy of a case study, for tests that break invariants.
pub fn case_study_copy(content: &SiteContent, slug: &str) -> CaseStudy {
    content
        .case_study(slug)
        .cloned()
        .unwrap_or_else(|| panic!("case study '{slug}' not found"))
}

// =========================================================================
// Asset fixtures
// =========================================================================

/// Write a solid PNG of the given size, creating parent directories.
pub fn write_png(path: &Path, width: u32, height: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbImage::from_pixel(width, height, image::Rgb([30, 60, 90]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a JPEG of the given size, creating parent directories.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
    .save_with_format(path, image::ImageFormat::Jpeg)
    .unwrap();
}

pub fn write_svg(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        path,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 120 32"><rect width="120" height="32"/></svg>"#,
    )
    .unwrap();
}

/// Populate `root` with a file for every image the built-in tables reference.
pub fn write_all_referenced_assets(content: &SiteContent, root: &Path) {
    for asset in content.image_assets() {
        let path = asset.path_under(root);
        match asset.extension().as_deref() {
            Some("svg") => write_svg(&path),
            Some("png") => write_png(&path, 64, 32),
            _ => write_jpeg(&path, 48, 48),
        }
    }
}
