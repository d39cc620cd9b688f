//! # distr-site
//!
//! Content tables for the Distr marketing site: case studies, the header
//! navigation with its mega-menus, the docs/pricing/resources menus and the
//! product catalog.
//!
//! The tables are plain typed data. Page templates outside this crate read
//! them (directly, or as JSON written by [`export`]) and render HTML; nothing
//! here renders, fetches or mutates anything.
//!
//! # Build Step
//!
//! ```text
//! 1. Check    content tables + assets/  →  report   (errors fail the build)
//! 2. Export   content tables            →  dist/content/*.json
//! ```
//!
//! The lint exists because the tables reference each other by key
//! (`megaMenuType` → mega-menu config) and reference files by path (logos,
//! portraits). A broken reference is a content mistake and must stop the
//! build, while reads stay infallible lookups returning `Option`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Record types: `CaseStudy`, `MenuItem`, `Product`, `NavigationLink`, `MegaMenuConfig` |
//! | [`content`] | The literal tables, built once into an immutable `SiteContent` |
//! | [`check`] | Build-time lint over slugs, hrefs, mega-menu keys and images |
//! | [`assets`] | Resolves image references to size/format metadata |
//! | [`export`] | JSON export for the templates, and loading it back |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Tagged Mega-Menu Items
//!
//! A mega-menu holds either products or menu items. [`types::MegaMenuItems`]
//! has one variant per mega-menu type, so the products menu cannot be given
//! docs entries by accident and the JSON carries the type next to the items.
//!
//! ## HTML Bodies Beside the Code
//!
//! Case study bodies are multi-paragraph HTML. They live in
//! `content/case-studies/<slug>/*.html` and are embedded with `include_str!`,
//! which keeps the Rust tables short and the copy editable as HTML.

pub mod assets;
pub mod check;
pub mod config;
pub mod content;
pub mod export;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
