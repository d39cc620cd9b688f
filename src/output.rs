//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every entity (case study, menu entry, navigation link) is shown by its
//! positional index and title, with secondary facts (href, slug, images) on
//! indented context lines.
//!
//! ## Content inventory
//!
//! ```text
//! Case Studies
//! 001 Lerian Studio
//!     Slug: lerian
//!     Company: Lerian (Banking/Financial Infrastructure)
//!     Images: case-studies/lerian-logo.png, testimonials/testimonial-7.jpg
//!     Challenge: Lerian provides banking and financial infrastructure...
//!
//! Navigation
//! 001 Product → mega-menu products (5 columns × 140px, 10 items)
//! 002 Docs → /docs/ [mega-menu docs (4 columns × 160px, 4 items)]
//!
//! Products
//! 001 Deployment Agents → /docs/product/agents/
//! ```
//!
//! ## Check report
//!
//! ```text
//! error: products[3] "Alerts": href 'docs/x' is neither a site path nor an absolute URL
//! warning: megaMenus.resources: mega-menu 'resources' is not opened by any navigation link
//!
//! 1 error, 1 warning
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function is pure and returns `Vec<String>`; the `print_*`
//! wrappers write to stdout.

use crate::check::Report;
use crate::export::ExportedFile;
use crate::types::{LinkEntry, NavigationLink, SiteContent};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// First line of `text`, cut to `max` characters with `...` appended.
fn preview(text: &str, max: usize) -> String {
    let plain = strip_html_tags(text);
    let first = plain.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    if first.chars().count() <= max {
        first.to_string()
    } else {
        let cut: String = first.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

fn count(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn entry_lines(title: &str, entries: &[&dyn LinkEntry], lines: &mut Vec<String>) {
    lines.push(title.to_string());
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            entry.title(),
            entry.href()
        ));
    }
}

fn link_lines(
    content: &SiteContent,
    links: &[NavigationLink],
    depth: usize,
    lines: &mut Vec<String>,
) {
    for (i, link) in links.iter().enumerate() {
        let header = format!("{}{} {}", indent(depth), format_index(i + 1), link.title);
        let menu = content.mega_menu_for(link).map(|m| {
            format!(
                "mega-menu {} ({} × {}, {})",
                m.items.menu_type(),
                count(m.columns as usize, "column", "columns"),
                m.item_width,
                count(m.items.len(), "item", "items")
            )
        });
        let line = match (link.value.starts_with('/'), menu) {
            (true, Some(menu)) => format!("{header} → {} [{menu}]", link.value),
            (false, Some(menu)) => format!("{header} → {menu}"),
            (_, None) if link.is_mega_menu => {
                format!("{header} → {} [mega-menu unresolved]", link.value)
            }
            (_, None) => format!("{header} → {}", link.value),
        };
        lines.push(line);
        link_lines(content, &link.children, depth + 1, lines);
    }
}

// ============================================================================
// Content inventory
// ============================================================================

/// Format every table as a readable inventory.
pub fn format_content(content: &SiteContent) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Case Studies".to_string());
    for (i, study) in content.case_studies.iter().enumerate() {
        let ctx = indent(1);
        lines.push(format!("{} {}", format_index(i + 1), study.title));
        lines.push(format!("{ctx}Slug: {}", study.slug));
        lines.push(format!("{ctx}Company: {} ({})", study.company, study.industry));
        lines.push(format!("{ctx}Quote: {} ({})", study.cto_name, study.cto_title));
        lines.push(format!("{ctx}Images: {}, {}", study.logo, study.cto_image));
        lines.push(format!("{ctx}Challenge: {}", preview(&study.challenge, 60)));
    }

    lines.push(String::new());
    lines.push("Navigation".to_string());
    link_lines(content, &content.links, 0, &mut lines);

    let tables: [(&str, Vec<&dyn LinkEntry>); 4] = [
        (
            "Products",
            content.products.iter().map(|p| p as &dyn LinkEntry).collect(),
        ),
        (
            "Docs Menu",
            content.docs_menu.iter().map(|m| m as &dyn LinkEntry).collect(),
        ),
        (
            "Pricing Menu",
            content.pricing_menu.iter().map(|m| m as &dyn LinkEntry).collect(),
        ),
        (
            "Resources Menu",
            content.resources_menu.iter().map(|m| m as &dyn LinkEntry).collect(),
        ),
    ];
    for (title, entries) in tables {
        lines.push(String::new());
        entry_lines(title, &entries, &mut lines);
    }

    lines
}

pub fn print_content(content: &SiteContent) {
    for line in format_content(content) {
        println!("{}", line);
    }
}

// ============================================================================
// Check report
// ============================================================================

/// One line per issue, then a summary line.
pub fn format_report(report: &Report) -> Vec<String> {
    let mut lines: Vec<String> = report.issues.iter().map(|i| i.to_string()).collect();
    if report.is_clean() {
        lines.push("No issues found".to_string());
        return lines;
    }
    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        count(report.errors().count(), "error", "errors"),
        count(report.warnings().count(), "warning", "warnings")
    ));
    lines
}

pub fn print_report(report: &Report) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Export
// ============================================================================

pub fn format_export(files: &[ExportedFile]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            format!(
                "{} ({})",
                f.path.display(),
                count(f.entries, "entry", "entries")
            )
        })
        .collect()
}

pub fn print_export(files: &[ExportedFile]) {
    for line in format_export(files) {
        println!("{}", line);
    }
}
