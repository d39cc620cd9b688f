use crate::types::{CaseStudy, ImageAsset};

/// Long-form bodies live next to the crate as HTML fragments.
macro_rules! body {
    ($slug:literal, $part:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/content/case-studies/",
            $slug,
            "/",
            $part,
            ".html"
        ))
        .trim_end()
        .to_string()
    };
}

pub(super) fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            slug: "lerian".to_string(),
            title: "Lerian Studio".to_string(),
            company: "Lerian".to_string(),
            industry: "Banking/Financial Infrastructure".to_string(),
            use_case: "Lifecycle Management Platform".to_string(),
            cto_name: "Jefferson Rodrigues".to_string(),
            cto_title: "Co-Founder & CTO".to_string(),
            cto_quote: "Our main goal is to simplify the daily operations. No more manual \
                installations, updates, or rollbacks — everything can now be handled with a \
                single click with Distr."
                .to_string(),
            logo: ImageAsset::new("case-studies/lerian-logo.png"),
            cto_image: ImageAsset::new("testimonials/testimonial-7.jpg"),
            challenge: body!("lerian", "challenge"),
            solution: body!("lerian", "solution"),
            result: body!("lerian", "result"),
            page_title: "Lerian Studio Case Study".to_string(),
            page_description: "How Lerian uses Distr to power their Lifecycle Management \
                platform for banking and financial infrastructure"
                .to_string(),
        },
        CaseStudy {
            slug: "sophris".to_string(),
            title: "Sophris.ai".to_string(),
            company: "Sophris.ai".to_string(),
            industry: "AI/Engineering Tools".to_string(),
            use_case: "Circuit Board Validation".to_string(),
            cto_name: "Ansh Gupta".to_string(),
            cto_title: "CTO".to_string(),
            cto_quote: "Distr eliminated nearly all deployment headaches. Updates that used \
                to take days now take minutes."
                .to_string(),
            logo: ImageAsset::new("case-studies/sophris/sophris-ai-logo.png"),
            cto_image: ImageAsset::new("case-studies/sophris/ansh-gupta.jpeg"),
            challenge: body!("sophris", "challenge"),
            solution: body!("sophris", "solution"),
            result: body!("sophris", "result"),
            page_title: "Sophris.ai Case Study".to_string(),
            page_description: "How Sophris.ai uses Distr to streamline on-premises software \
                distribution"
                .to_string(),
        },
        CaseStudy {
            slug: "basedash".to_string(),
            title: "Basedash".to_string(),
            company: "Basedash".to_string(),
            industry: "Developer Tools".to_string(),
            use_case: "Self-Hosted Deployment".to_string(),
            cto_name: "Derek Reynolds".to_string(),
            cto_title: "Product Engineer".to_string(),
            cto_quote: "Having a dedicated space for all our self-hosted customers that can \
                manage authenticated registry access is great."
                .to_string(),
            logo: ImageAsset::new("case-studies/basedash/Basedash_Light.svg"),
            cto_image: ImageAsset::new("case-studies/basedash/reynolds.jpeg"),
            challenge: body!("basedash", "challenge"),
            solution: body!("basedash", "solution"),
            result: body!("basedash", "result"),
            page_title: "Basedash Case Study".to_string(),
            page_description: "How Basedash uses Distr to deliver and manage self-hosted \
                deployments for their customers"
                .to_string(),
        },
    ]
}
