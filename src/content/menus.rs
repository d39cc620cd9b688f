use crate::types::MenuItem;

fn item(title: &str, description: &str, icon: &str, href: &str) -> MenuItem {
    MenuItem {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        href: href.to_string(),
    }
}

pub(super) fn docs_menu() -> Vec<MenuItem> {
    vec![
        item(
            "Docs",
            "Complete documentation for getting started with Distr and understanding core concepts",
            "book-open",
            "/docs/",
        ),
        item(
            "Guides",
            "Step-by-step guides for common tasks and workflows in Distr",
            "map",
            "/docs/guides/",
        ),
        item(
            "Integrations",
            "Connect Distr with your existing tools and workflows through our API, SDK, and integrations",
            "plug",
            "/docs/integrations/",
        ),
        item(
            "Self-Hosting",
            "Deploy and manage your own Distr instance on Kubernetes or Docker",
            "server",
            "/docs/self-hosting/",
        ),
    ]
}

pub(super) fn pricing_menu() -> Vec<MenuItem> {
    vec![
        item(
            "Pricing",
            "Flexible pricing plans for teams of all sizes, from startups to enterprises",
            "credit-card",
            "/pricing/",
        ),
        item(
            "Contact",
            "Get in touch with our team for custom solutions and enterprise support",
            "mail",
            "/contact/",
        ),
    ]
}

pub(super) fn resources_menu() -> Vec<MenuItem> {
    vec![
        item(
            "Blog",
            "Latest news, updates, and insights from the Distr team",
            "newspaper",
            "/blog/",
        ),
        item(
            "Case Studies",
            "Learn how companies are using Distr to distribute their software",
            "briefcase",
            "/case-studies/",
        ),
        item(
            "Glossary",
            "Understand key terms and concepts in software distribution",
            "book-text",
            "/glossary/",
        ),
        item(
            "White Paper",
            "Deep dive into the building blocks of modern software distribution",
            "file-text",
            "/white-paper/building-blocks/",
        ),
    ]
}
