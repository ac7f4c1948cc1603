//! Shared test fixtures: a page template with every default mount point and
//! one well-formed document per section.

use serde_json::{json, Value};

use crate::sections::SectionKind;

pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Portfolio</title></head>
<body>
<section id="about"><div class="about-content" id="about-content">placeholder</div></section>
<section id="experience"><div class="timeline" id="experience-timeline">placeholder</div></section>
<section id="projects"><div class="projects-grid" id="projects-grid">placeholder</div></section>
<section id="skills"><div id="skills-container">placeholder</div></section>
<section id="education"><div id="education-content">placeholder</div></section>
</body>
</html>"#;

pub fn default_mount_keys() -> Vec<&'static str> {
    SectionKind::ALL
        .iter()
        .map(|k| k.default_mount_key())
        .collect()
}

pub fn sample_document(kind: SectionKind) -> Value {
    match kind {
        SectionKind::About => json!({
            "summary": { "title": "Hello", "text": "About me" },
            "info": [{ "icon": "fas fa-map", "text": "Lahore" }],
            "stats": [{ "value": "5", "label": "Years" }]
        }),
        SectionKind::Experience => json!({
            "experiences": [{
                "date": "2023 - Present", "title": "Engineer", "company": "Acme",
                "location": "Remote", "responsibilities": ["Shipped things"]
            }]
        }),
        SectionKind::Projects => json!({
            "projects": [{
                "icon": "fas fa-robot", "title": "Bot", "description": "A bot",
                "tags": ["Rust"], "stats": [{ "icon": "fas fa-star", "text": "10 stars" }]
            }]
        }),
        SectionKind::Skills => json!({
            "categories": [{
                "icon": "fas fa-code", "name": "Languages",
                "skills": [{ "name": "Rust", "icon": "fab fa-rust" }]
            }]
        }),
        SectionKind::Education => json!({
            "degree": {
                "title": "BSc", "institution": "Uni", "date": "2020 - 2024",
                "cgpa": 3.8, "coursework": "Algorithms"
            },
            "certifications": [{ "title": "Cert", "issuer": "Org", "year": 2023 }]
        }),
    }
}
