use crate::types::Product;

fn product(title: &str, description: &str, icon: &str, href: &str) -> Product {
    Product {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        href: href.to_string(),
    }
}

// Several features are documented on the agents page, hence the shared href.
pub(super) fn products() -> Vec<Product> {
    vec![
        product(
            "Deployment Agents",
            "Standardize your Docker or Helm deployments embedded with agents in Kubernetes, \
             Docker Compose, VM or Bare Metal environments",
            "rocket",
            "/docs/product/agents/",
        ),
        product(
            "Container Registry",
            "Distribute Docker Images, Helm Charts, or every OCI compatible artifact like large \
             LLM Models with our high performance OCI registry",
            "package",
            "/docs/product/registry/",
        ),
        product(
            "License Management",
            "Time based access control and entitlements for Applications and Artifacts - managed \
             in a central place",
            "key",
            "/docs/product/license-management/",
        ),
        product(
            "Alerts",
            "Receive notification in realtime when deployments report an error or go stale",
            "bell",
            "/docs/product/agents/",
        ),
        product(
            "Logs and Metrics",
            "Collect Logs and Metrics in realtime and directly download them as bundle for better \
             Customer support",
            "chart-line",
            "/docs/product/agents/",
        ),
        product(
            "Compatibility Matrix",
            "Automatically test, if your Application is compatible across a matrix of possible \
             deployment environments",
            "check-circle",
            "/docs/product/agents/",
        ),
        product(
            "Pre Flight Checks",
            "Determine if needed resources are available or execute custom pre and post \
             installation scripts",
            "clipboard-check",
            "/docs/product/agents/",
        ),
        product(
            "Customer Portal",
            "Where customers can download Artifacts and manage their Applications",
            "circle-user",
            "/docs/product/customer-portal/",
        ),
        product(
            "Integrations / BYOC",
            "Extend your pull based deployment model with push based approaches with our API \
             Integrations and GitHub Action",
            "workflow",
            "/docs/guides/automatic-deployments-from-github/",
        ),
        product(
            "Air-gapped",
            "Distribute your application with air-gapped bundles into the most isolated \
             environments",
            "server-off",
            "/docs/use-cases/air-gapped/",
        ),
    ]
}
