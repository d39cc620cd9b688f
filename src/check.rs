//! Content lint.
//!
//! The tables carry no runtime validation: lookups return `Option` and the
//! templates render whatever they are given. Broken content is instead
//! caught here, at build time, and reported as a list of [`Issue`]s.
//!
//! ## Rules
//!
//! | Rule | Severity |
//! |------|----------|
//! | case study slug empty, duplicated, or not `[a-z0-9-]` | error |
//! | menu/product href empty, relative, or with a disallowed scheme | error |
//! | internal href without trailing `/` (`links.trailing_slash`) | warning |
//! | mega-menu link without a type, or whose type has no config | error |
//! | plain link whose value is not a valid href | error |
//! | config key that differs from its items' variant | error |
//! | config with zero columns or an empty item width | error |
//! | config no link opens | warning |
//! | image reference missing or unreadable | error |
//! | image file nothing references (`assets.report_unused`) | warning |

use crate::assets::AssetIndex;
use crate::config::SiteConfig;
use crate::types::{LinkEntry, MegaMenuType, SiteContent};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("content check failed: {errors} error(s), {warnings} warning(s)")]
    Failed { errors: usize, warnings: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// What is wrong. The message is the `Display` output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    #[error("slug is empty")]
    EmptySlug,
    #[error("slug '{0}' is used by more than one case study")]
    DuplicateSlug(String),
    #[error("slug '{0}' is not URL safe (use a-z, 0-9 and '-')")]
    UnsafeSlug(String),
    #[error("href is empty")]
    EmptyHref,
    #[error("href '{0}' is neither a site path nor an absolute URL")]
    InvalidHref(String),
    #[error("href '{href}' uses scheme '{scheme}', which is not allowed")]
    DisallowedScheme { href: String, scheme: String },
    #[error("href '{0}' has no trailing slash")]
    MissingTrailingSlash(String),
    #[error("mega-menu link has no megaMenuType")]
    MissingMegaMenuType,
    #[error("megaMenuType '{0}' has no mega-menu config")]
    UnknownMegaMenuType(MegaMenuType),
    #[error("config '{key}' holds {actual} items")]
    MismatchedMegaMenuItems {
        key: MegaMenuType,
        actual: MegaMenuType,
    },
    #[error("columns must be greater than zero")]
    ZeroColumns,
    #[error("itemWidth is empty")]
    EmptyItemWidth,
    #[error("mega-menu '{0}' is not opened by any navigation link")]
    UnusedMegaMenu(MegaMenuType),
    #[error("image '{asset}' cannot be resolved: {reason}")]
    UnresolvedImage { asset: String, reason: String },
    #[error("image file '{0}' is not referenced by any table")]
    UnreferencedImage(String),
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::MissingTrailingSlash(_)
            | IssueKind::UnusedMegaMenu(_)
            | IssueKind::UnreferencedImage(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// One finding, with a human-readable location such as
/// `products[3] "Alerts"` or `caseStudies[0] "lerian".logo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub location: String,
    pub kind: IssueKind,
}

impl Issue {
    fn new(location: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity(), self.location, self.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// `Err` when the report has errors, or warnings and `deny_warnings`.
    pub fn into_result(self, deny_warnings: bool) -> Result<Report, CheckError> {
        let errors = self.errors().count();
        let warnings = self.warnings().count();
        if errors > 0 || (deny_warnings && warnings > 0) {
            return Err(CheckError::Failed { errors, warnings });
        }
        Ok(self)
    }

    fn push(&mut self, location: impl Into<String>, kind: IssueKind) {
        self.issues.push(Issue::new(location, kind));
    }
}

/// Lint the tables without touching the filesystem.
pub fn check(content: &SiteContent, config: &SiteConfig) -> Report {
    check_with_assets(content, config, None)
}

/// Lint the tables and, when an index is given, their image references.
pub fn check_with_assets(
    content: &SiteContent,
    config: &SiteConfig,
    assets: Option<&AssetIndex>,
) -> Report {
    let mut report = Report::default();
    check_case_studies(content, &mut report);
    check_entries(content, config, &mut report);
    check_navigation(content, config, &mut report);
    check_mega_menus(content, &mut report);
    if let Some(index) = assets {
        check_assets(content, config, index, &mut report);
    }
    report
}

fn check_case_studies(content: &SiteContent, report: &mut Report) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for (i, study) in content.case_studies.iter().enumerate() {
        let location = format!("caseStudies[{i}] \"{}\"", study.title);
        let slug = study.slug.as_str();
        if slug.is_empty() {
            report.push(location, IssueKind::EmptySlug);
            continue;
        }
        if !is_url_safe_slug(slug) {
            report.push(location.clone(), IssueKind::UnsafeSlug(slug.to_string()));
        }
        if !seen.insert(slug) && reported.insert(slug) {
            report.push(location, IssueKind::DuplicateSlug(slug.to_string()));
        }
    }
}

fn is_url_safe_slug(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn check_entries(content: &SiteContent, config: &SiteConfig, report: &mut Report) {
    let tables: [(&str, Vec<&dyn LinkEntry>); 4] = [
        ("docsMenu", as_entries(&content.docs_menu)),
        ("pricingMenu", as_entries(&content.pricing_menu)),
        ("resourcesMenu", as_entries(&content.resources_menu)),
        ("products", as_entries(&content.products)),
    ];
    for (table, entries) in tables {
        check_entry_list(table, &entries, config, report);
    }
    for (key, menu) in &content.mega_menus {
        let table = format!("megaMenus.{key}");
        check_entry_list(&table, &menu.items.entries(), config, report);
    }
}

fn as_entries<T: LinkEntry>(items: &[T]) -> Vec<&dyn LinkEntry> {
    items.iter().map(|i| i as &dyn LinkEntry).collect()
}

fn check_entry_list(
    table: &str,
    entries: &[&dyn LinkEntry],
    config: &SiteConfig,
    report: &mut Report,
) {
    for (i, entry) in entries.iter().enumerate() {
        let location = format!("{table}[{i}] \"{}\"", entry.title());
        if let Some(kind) = href_issue(entry.href(), config) {
            report.push(location, kind);
        }
    }
}

/// The problem with `href`, if any. Site paths start with `/`; anything else
/// must be `scheme://host...` with an allowed scheme.
pub fn href_issue(href: &str, config: &SiteConfig) -> Option<IssueKind> {
    if href.is_empty() {
        return Some(IssueKind::EmptyHref);
    }
    if href.starts_with("//") {
        return Some(IssueKind::InvalidHref(href.to_string()));
    }
    if href.starts_with('/') {
        let path = href.split(['?', '#']).next().unwrap_or(href);
        if config.links.trailing_slash && !path.ends_with('/') && !has_file_extension(path) {
            return Some(IssueKind::MissingTrailingSlash(href.to_string()));
        }
        return None;
    }
    let Some((scheme, rest)) = href.split_once("://") else {
        return Some(IssueKind::InvalidHref(href.to_string()));
    };
    let valid_scheme = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c));
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if !valid_scheme || host.is_empty() || host.contains(char::is_whitespace) {
        return Some(IssueKind::InvalidHref(href.to_string()));
    }
    let scheme = scheme.to_ascii_lowercase();
    if !config.links.allowed_schemes.contains(&scheme) {
        return Some(IssueKind::DisallowedScheme {
            href: href.to_string(),
            scheme,
        });
    }
    None
}

/// `/white-paper.pdf` style paths point at files, not pages.
fn has_file_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .and_then(|last| last.rsplit_once('.'))
        .is_some_and(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
}

fn check_navigation(content: &SiteContent, config: &SiteConfig, report: &mut Report) {
    for (i, link) in content.all_links().into_iter().enumerate() {
        let location = format!("links[{i}] \"{}\"", link.title);
        if link.is_mega_menu {
            match link.mega_menu_type {
                None => report.push(location, IssueKind::MissingMegaMenuType),
                Some(t) if content.mega_menu(t).is_none() => {
                    report.push(location, IssueKind::UnknownMegaMenuType(t))
                }
                Some(_) => {}
            }
        } else if let Some(kind) = href_issue(&link.value, config) {
            report.push(location, kind);
        }
    }
}

fn check_mega_menus(content: &SiteContent, report: &mut Report) {
    let opened: BTreeSet<MegaMenuType> = content
        .all_links()
        .into_iter()
        .filter(|l| l.is_mega_menu)
        .filter_map(|l| l.mega_menu_type)
        .collect();

    for (key, menu) in &content.mega_menus {
        let location = format!("megaMenus.{key}");
        let actual = menu.items.menu_type();
        if actual != *key {
            report.push(
                location.clone(),
                IssueKind::MismatchedMegaMenuItems { key: *key, actual },
            );
        }
        if menu.columns == 0 {
            report.push(location.clone(), IssueKind::ZeroColumns);
        }
        if menu.item_width.trim().is_empty() {
            report.push(location.clone(), IssueKind::EmptyItemWidth);
        }
        if !opened.contains(key) {
            report.push(location, IssueKind::UnusedMegaMenu(*key));
        }
    }
}

fn check_assets(
    content: &SiteContent,
    config: &SiteConfig,
    index: &AssetIndex,
    report: &mut Report,
) {
    for (i, study) in content.case_studies.iter().enumerate() {
        for (field, asset) in [("logo", &study.logo), ("ctoImage", &study.cto_image)] {
            if let Some(err) = index.failed.get(asset) {
                report.push(
                    format!("caseStudies[{i}] \"{}\".{field}", study.slug),
                    IssueKind::UnresolvedImage {
                        asset: asset.to_string(),
                        reason: err.to_string(),
                    },
                );
            }
        }
    }

    if !config.assets.report_unused || !index.root.is_dir() {
        return;
    }
    match index.unreferenced(&config.assets.extensions) {
        Ok(files) => {
            for file in files {
                report.push(config.assets_root.clone(), IssueKind::UnreferencedImage(file));
            }
        }
        Err(e) => report.push(
            config.assets_root.clone(),
            IssueKind::UnresolvedImage {
                asset: config.assets_root.clone(),
                reason: e.to_string(),
            },
        ),
    }
}
