//! JSON export of the content tables.
//!
//! The page templates read one JSON file per table. [`load`] reads the same
//! directory back into a [`SiteContent`], which is how `check --from` lints
//! content edited outside the crate.
//!
//! ```text
//! dist/content/
//! ├── case-studies.json
//! ├── docs-menu.json
//! ├── pricing-menu.json
//! ├── resources-menu.json
//! ├── products.json
//! ├── navigation.json
//! ├── mega-menus.json
//! └── images.json        (only when images were resolved)
//! ```
//!
//! `images.json` maps each image reference (`case-studies/lerian-logo.png`)
//! to its metadata (`src`, `width`, `height`, `format`) so templates can size
//! logos and portraits without reading the files themselves.

use crate::assets::AssetIndex;
use crate::types::SiteContent;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

pub const CASE_STUDIES_FILE: &str = "case-studies.json";
pub const DOCS_MENU_FILE: &str = "docs-menu.json";
pub const PRICING_MENU_FILE: &str = "pricing-menu.json";
pub const RESOURCES_MENU_FILE: &str = "resources-menu.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const NAVIGATION_FILE: &str = "navigation.json";
pub const MEGA_MENUS_FILE: &str = "mega-menus.json";
pub const IMAGES_FILE: &str = "images.json";

/// One written table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    /// Number of top-level entries in the table.
    pub entries: usize,
}

/// Write every table as JSON into `dir`, creating it if needed.
pub fn export(
    content: &SiteContent,
    dir: &Path,
    pretty: bool,
) -> Result<Vec<ExportedFile>, ExportError> {
    fs::create_dir_all(dir)?;
    Ok(vec![
        write_table(dir, CASE_STUDIES_FILE, &content.case_studies, pretty)?,
        write_table(dir, DOCS_MENU_FILE, &content.docs_menu, pretty)?,
        write_table(dir, PRICING_MENU_FILE, &content.pricing_menu, pretty)?,
        write_table(dir, RESOURCES_MENU_FILE, &content.resources_menu, pretty)?,
        write_table(dir, PRODUCTS_FILE, &content.products, pretty)?,
        write_table(dir, NAVIGATION_FILE, &content.links, pretty)?,
        write_table(dir, MEGA_MENUS_FILE, &content.mega_menus, pretty)?,
    ])
}

/// Write the resolved image metadata of `index` into `dir`.
///
/// References that failed to resolve are left out; the lint reports them.
pub fn export_images(
    index: &AssetIndex,
    dir: &Path,
    pretty: bool,
) -> Result<ExportedFile, ExportError> {
    fs::create_dir_all(dir)?;
    write_table(dir, IMAGES_FILE, &index.resolved, pretty)
}

trait TableLen {
    fn table_len(&self) -> usize;
}

impl<T> TableLen for Vec<T> {
    fn table_len(&self) -> usize {
        self.len()
    }
}

impl<K, V> TableLen for std::collections::BTreeMap<K, V> {
    fn table_len(&self) -> usize {
        self.len()
    }
}

fn write_table<T: Serialize + TableLen>(
    dir: &Path,
    file: &str,
    table: &T,
    pretty: bool,
) -> Result<ExportedFile, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(table)
    } else {
        serde_json::to_string(table)
    }
    .map_err(|source| ExportError::Json {
        file: file.to_string(),
        source,
    })?;
    let path = dir.join(file);
    fs::write(&path, json)?;
    Ok(ExportedFile {
        path,
        entries: table.table_len(),
    })
}

/// Read a directory written by [`export`] back into a [`SiteContent`].
pub fn load(dir: &Path) -> Result<SiteContent, ExportError> {
    Ok(SiteContent {
        case_studies: read_table(dir, CASE_STUDIES_FILE)?,
        docs_menu: read_table(dir, DOCS_MENU_FILE)?,
        pricing_menu: read_table(dir, PRICING_MENU_FILE)?,
        resources_menu: read_table(dir, RESOURCES_MENU_FILE)?,
        products: read_table(dir, PRODUCTS_FILE)?,
        links: read_table(dir, NAVIGATION_FILE)?,
        mega_menus: read_table(dir, MEGA_MENUS_FILE)?,
    })
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, ExportError> {
    let content = fs::read_to_string(dir.join(file))?;
    serde_json::from_str(&content).map_err(|source| ExportError::Json {
        file: file.to_string(),
        source,
    })
}

/// The whole bundle as one JSON document.
pub fn to_json(content: &SiteContent) -> Result<String, ExportError> {
    serde_json::to_string_pretty(content).map_err(|source| ExportError::Json {
        file: "<bundle>".to_string(),
        source,
    })
}

pub fn from_json(json: &str) -> Result<SiteContent, ExportError> {
    serde_json::from_str(json).map_err(|source| ExportError::Json {
        file: "<bundle>".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::RasterProbe;
    use crate::content::site_content;
    use crate::test_helpers::{write_png, write_svg};
    use crate::types::{CaseStudy, ImageAsset, MegaMenuType, NavigationLink, Product};
    use tempfile::TempDir;

    #[test]
    fn export_writes_every_table() {
        let tmp = TempDir::new().unwrap();
        let files = export(site_content(), tmp.path(), true).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "case-studies.json",
                "docs-menu.json",
                "pricing-menu.json",
                "resources-menu.json",
                "products.json",
                "navigation.json",
                "mega-menus.json",
            ]
        );
        let counts: Vec<usize> = files.iter().map(|f| f.entries).collect();
        assert_eq!(counts, vec![3, 4, 2, 4, 10, 4, 4]);
        assert!(files.iter().all(|f| f.path.is_file()));
    }

    #[test]
    fn export_then_load_is_identical() {
        let tmp = TempDir::new().unwrap();
        export(site_content(), tmp.path(), false).unwrap();
        let loaded = load(tmp.path()).unwrap();
        assert_eq!(&loaded, site_content());
    }

    #[test]
    fn bundle_round_trip() {
        let json = to_json(site_content()).unwrap();
        assert_eq!(&from_json(&json).unwrap(), site_content());
    }

    #[test]
    fn exported_json_uses_template_field_names() {
        let tmp = TempDir::new().unwrap();
        export(site_content(), tmp.path(), true).unwrap();

        let studies: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(tmp.path().join(CASE_STUDIES_FILE)).unwrap(),
        )
        .unwrap();
        let first = &studies[0];
        assert_eq!(first["slug"], "lerian");
        assert_eq!(first["useCase"], "Lifecycle Management Platform");
        assert_eq!(first["ctoImage"], "testimonials/testimonial-7.jpg");
        assert_eq!(first["pageTitle"], "Lerian Studio Case Study");

        let nav: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(tmp.path().join(NAVIGATION_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(nav[0]["isMegaMenu"], true);
        assert_eq!(nav[0]["megaMenuType"], "products");

        let menus: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(tmp.path().join(MEGA_MENUS_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(menus["products"]["columns"], 5);
        assert_eq!(menus["products"]["itemWidth"], "140px");
        assert_eq!(menus["products"]["type"], "products");
        assert!(menus["products"]["items"].is_array());
        assert_eq!(menus["products"]["items"][0]["value"], "rocket");
        assert_eq!(menus["pricing"]["items"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn images_file_holds_resolved_metadata() {
        let assets = TempDir::new().unwrap();
        write_png(&assets.path().join("case-studies/lerian-logo.png"), 120, 40);
        write_svg(&assets.path().join("case-studies/sophris-logo.svg"));
        let lerian = ImageAsset::new("case-studies/lerian-logo.png");
        let sophris = ImageAsset::new("case-studies/sophris-logo.svg");
        let missing = ImageAsset::new("testimonials/nobody.jpg");
        let index = AssetIndex::build(
            assets.path(),
            [&lerian, &sophris, &missing],
            &RasterProbe,
        );

        let out = TempDir::new().unwrap();
        let file = export_images(&index, out.path(), true).unwrap();
        assert_eq!(file.path, out.path().join(IMAGES_FILE));
        assert_eq!(file.entries, 2);

        let images: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&file.path).unwrap()).unwrap();
        let logo = &images["case-studies/lerian-logo.png"];
        assert_eq!(logo["src"], "case-studies/lerian-logo.png");
        assert_eq!(logo["width"], 120);
        assert_eq!(logo["height"], 40);
        assert_eq!(logo["format"], "png");
        let svg = &images["case-studies/sophris-logo.svg"];
        assert_eq!(svg["format"], "svg");
        assert!(svg.get("width").is_none());
        assert!(images.get("testimonials/nobody.jpg").is_none());
    }

    #[test]
    fn single_tables_round_trip() {
        let content = site_content();

        let json = serde_json::to_string(&content.case_studies).unwrap();
        let back: Vec<CaseStudy> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content.case_studies);

        let json = serde_json::to_string(&content.products).unwrap();
        let back: Vec<Product> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content.products);

        let json = serde_json::to_string(&content.links).unwrap();
        let back: Vec<NavigationLink> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content.links);
    }

    #[test]
    fn load_reports_file_of_bad_json() {
        let tmp = TempDir::new().unwrap();
        export(site_content(), tmp.path(), true).unwrap();
        fs::write(tmp.path().join(PRODUCTS_FILE), "[{\"title\": 1}]").unwrap();

        match load(tmp.path()) {
            Err(ExportError::Json { file, .. }) => assert_eq!(file, PRODUCTS_FILE),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load(&tmp.path().join("absent"));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }

    #[test]
    fn edited_export_keeps_missing_config_as_absent() {
        let tmp = TempDir::new().unwrap();
        export(site_content(), tmp.path(), true).unwrap();
        let mut menus: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(tmp.path().join(MEGA_MENUS_FILE)).unwrap(),
        )
        .unwrap();
        menus.as_object_mut().unwrap().remove("docs");
        fs::write(tmp.path().join(MEGA_MENUS_FILE), menus.to_string()).unwrap();

        let loaded = load(tmp.path()).unwrap();
        assert!(loaded.mega_menu(MegaMenuType::Docs).is_none());
        assert!(loaded.mega_menu(MegaMenuType::Products).is_some());
    }
}
