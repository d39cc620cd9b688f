//! Image reference resolution.
//!
//! Case studies point at logos and portraits by path relative to the assets
//! root. The template layer imports those files and receives metadata about
//! them (source path, pixel size, format). This module performs the same
//! resolution so that a missing or unreadable file fails the build instead of
//! the page render.
//!
//! ## Probing
//!
//! Raster images are identified with the `image` crate from their header
//! bytes, without a full decode. SVG files are accepted on their extension and
//! carry no pixel dimensions.
//!
//! The [`ImageProbe`] trait keeps the filesystem out of unit tests that only
//! care about how results are collected.

use crate::types::{ImageAsset, SiteContent};
use image::ImageReader;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("image not found: {0}")]
    Missing(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read image {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// What a probe learns about one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// `(width, height)` in pixels; `None` for vector images.
    pub dimensions: Option<(u32, u32)>,
    /// Short format name: `png`, `jpeg`, `webp`, `svg`.
    pub format: String,
}

/// Resolved metadata for an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageMetadata {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub format: String,
}

pub trait ImageProbe {
    fn identify(&self, path: &Path) -> Result<ImageInfo, AssetError>;
}

/// Probe backed by the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterProbe;

impl ImageProbe for RasterProbe {
    fn identify(&self, path: &Path) -> Result<ImageInfo, AssetError> {
        if !path.is_file() {
            return Err(AssetError::Missing(path.to_path_buf()));
        }
        if is_svg(path) {
            return Ok(ImageInfo {
                dimensions: None,
                format: "svg".to_string(),
            });
        }

        let reader = ImageReader::open(path)
            .map_err(|source| AssetError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .with_guessed_format()
            .map_err(|source| AssetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let format = reader
            .format()
            .ok_or_else(|| AssetError::UnsupportedFormat(path.to_path_buf()))?;
        let name = format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or("unknown")
            .to_string();
        let (width, height) = reader.into_dimensions().map_err(|e| AssetError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(ImageInfo {
            dimensions: Some((width, height)),
            format: name,
        })
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Resolve one reference under `root`.
pub fn resolve(
    root: &Path,
    asset: &ImageAsset,
    probe: &dyn ImageProbe,
) -> Result<ImageMetadata, AssetError> {
    let info = probe.identify(&asset.path_under(root))?;
    Ok(ImageMetadata {
        src: asset.as_str().to_string(),
        width: info.dimensions.map(|(w, _)| w),
        height: info.dimensions.map(|(_, h)| h),
        format: info.format,
    })
}

/// Every distinct image reference in the content, sorted.
pub fn referenced_assets(content: &SiteContent) -> BTreeSet<&ImageAsset> {
    content.image_assets().into_iter().collect()
}

/// Resolution results for a set of references.
#[derive(Debug, Default)]
pub struct AssetIndex {
    pub root: PathBuf,
    pub resolved: BTreeMap<ImageAsset, ImageMetadata>,
    pub failed: BTreeMap<ImageAsset, AssetError>,
}

impl AssetIndex {
    /// Resolve every reference in `assets`, collecting failures instead of
    /// stopping at the first one.
    pub fn build<'a>(
        root: &Path,
        assets: impl IntoIterator<Item = &'a ImageAsset>,
        probe: &dyn ImageProbe,
    ) -> Self {
        let mut index = AssetIndex {
            root: root.to_path_buf(),
            ..Default::default()
        };
        for asset in assets {
            if index.resolved.contains_key(asset) || index.failed.contains_key(asset) {
                continue;
            }
            match resolve(root, asset, probe) {
                Ok(meta) => {
                    index.resolved.insert(asset.clone(), meta);
                }
                Err(e) => {
                    index.failed.insert(asset.clone(), e);
                }
            }
        }
        index
    }

    pub fn get(&self, asset: &ImageAsset) -> Option<&ImageMetadata> {
        self.resolved.get(asset)
    }

    /// Image files under the root that are not in the index, as
    /// root-relative `/`-separated paths.
    pub fn unreferenced(&self, extensions: &[String]) -> Result<Vec<String>, AssetError> {
        let files = list_asset_files(&self.root, extensions)?;
        Ok(files
            .into_iter()
            .filter(|rel| {
                let asset = ImageAsset::new(rel.as_str());
                !self.resolved.contains_key(&asset) && !self.failed.contains_key(&asset)
            })
            .collect())
    }
}

/// Image files under `root` with one of `extensions`, as sorted
/// root-relative paths using `/` separators.
pub fn list_asset_files(root: &Path, extensions: &[String]) -> Result<Vec<String>, AssetError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            AssetError::Io {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
        if !matches {
            continue;
        }
        if let Ok(rel) = path.strip_prefix(root) {
            let rel: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(rel.join("/"));
        }
    }
    files.sort();
    Ok(files)
}
