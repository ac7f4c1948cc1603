//! Page template and its mount points.
//!
//! A `Page` is parsed once per page load from the HTML template. Each
//! requested mount key that resolves to an element becomes a `MountPoint`
//! whose inner content can be replaced independently of every other mount.

pub mod template;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use template::{split_mounts, Piece};
pub use template::TemplateError;

/// A container in the page that one section renderer owns exclusively.
#[derive(Debug)]
pub struct MountPoint {
    key: String,
    content: Mutex<String>,
}

impl MountPoint {
    fn new(key: &str, initial: String) -> Self {
        Self {
            key: key.to_string(),
            content: Mutex::new(initial),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the whole inner content of the mount point.
    pub fn replace(&self, markup: String) {
        *self.lock() = markup;
    }

    #[cfg(test)]
    pub fn content(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.content.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
enum Segment {
    Static(String),
    Mount(usize),
}

/// A parsed page template.
#[derive(Debug)]
pub struct Page {
    segments: Vec<Segment>,
    mounts: Vec<MountPoint>,
}

impl Page {
    /// Parses `template`, registering a mount point for every key in
    /// `mount_keys` that names an element in it.
    ///
    /// Keys that are missing, name a void element, or sit inside another
    /// registered mount are simply absent from the page.
    pub fn parse<S: AsRef<str>>(template: &str, mount_keys: &[S]) -> Result<Self, TemplateError> {
        let mut keys: Vec<&str> = Vec::new();
        for key in mount_keys {
            if !keys.contains(&key.as_ref()) {
                keys.push(key.as_ref());
            }
        }

        let mut segments = Vec::new();
        let mut mounts: Vec<MountPoint> = Vec::new();
        for piece in split_mounts(template, &keys)? {
            match piece {
                Piece::Static(text) => segments.push(Segment::Static(text)),
                Piece::Mount { key, initial } => {
                    segments.push(Segment::Mount(mounts.len()));
                    mounts.push(MountPoint::new(key, initial));
                }
            }
        }

        for key in keys.iter().filter(|k| !mounts.iter().any(|m| m.key == **k)) {
            debug!("Mount point '{key}' not present in template");
        }

        Ok(Self { segments, mounts })
    }

    /// Looks up a mount point by key. Absence is a normal state.
    pub fn mount(&self, key: &str) -> Option<&MountPoint> {
        self.mounts.iter().find(|m| m.key == key)
    }

    pub fn mount_keys(&self) -> impl Iterator<Item = &str> {
        self.mounts.iter().map(MountPoint::key)
    }

    /// Serializes the page with the current content of every mount point.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => html.push_str(text),
                Segment::Mount(i) => html.push_str(&self.mounts[*i].lock()),
            }
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<html><body>
<section id="about"><div id="about-content"><p>Loading...</p></div></section>
<section id="experience"><div id="experience-timeline"></div></section>
</body></html>"#;

    #[test]
    fn test_unchanged_page_round_trips() {
        let page = Page::parse(TEMPLATE, &["about-content", "experience-timeline"]).unwrap();
        assert_eq!(page.to_html(), TEMPLATE);
    }

    #[test]
    fn test_mount_lookup_present_and_absent() {
        let page = Page::parse(TEMPLATE, &["about-content", "projects-grid"]).unwrap();
        assert!(page.mount("about-content").is_some());
        assert!(page.mount("projects-grid").is_none());
        assert!(page.mount("experience-timeline").is_none());
    }

    #[test]
    fn test_replace_swaps_inner_content_only() {
        let page = Page::parse(TEMPLATE, &["about-content"]).unwrap();
        page.mount("about-content")
            .unwrap()
            .replace("<h3>Hi</h3>".to_string());
        let html = page.to_html();
        assert!(html.contains(r#"<div id="about-content"><h3>Hi</h3></div>"#));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn test_replace_twice_does_not_accumulate() {
        let page = Page::parse(TEMPLATE, &["experience-timeline"]).unwrap();
        let mount = page.mount("experience-timeline").unwrap();
        mount.replace("<p>one</p>".to_string());
        mount.replace("<p>one</p>".to_string());
        assert_eq!(mount.content(), "<p>one</p>");
        assert_eq!(page.to_html().matches("<p>one</p>").count(), 1);
    }

    #[test]
    fn test_nested_mount_is_ignored() {
        let page = Page::parse(TEMPLATE, &["about", "about-content"]).unwrap();
        assert!(page.mount("about").is_some());
        assert!(page.mount("about-content").is_none());
    }

    #[test]
    fn test_duplicate_keys_register_once() {
        let page = Page::parse(TEMPLATE, &["about-content", "about-content"]).unwrap();
        assert_eq!(page.mount_keys().count(), 1);
        assert_eq!(page.to_html(), TEMPLATE);
    }

    #[test]
    fn test_mounts_out_of_key_order_serialize_in_document_order() {
        let page = Page::parse(TEMPLATE, &["experience-timeline", "about-content"]).unwrap();
        page.mount("about-content").unwrap().replace("A".to_string());
        page.mount("experience-timeline").unwrap().replace("E".to_string());
        let html = page.to_html();
        let a = html.find(r#"id="about-content">A<"#).unwrap();
        let e = html.find(r#"id="experience-timeline">E<"#).unwrap();
        assert!(a < e);
    }

    #[test]
    fn test_text_with_less_than_does_not_swallow_siblings() {
        let template = r#"<div class="wrap"><div id="about-content">I <3 Rust</div><p>footer</p></div>"#;
        let page = Page::parse(template, &["about-content"]).unwrap();
        let mount = page.mount("about-content").unwrap();
        assert_eq!(mount.content(), "I <3 Rust");

        mount.replace("NEW".to_string());
        assert_eq!(
            page.to_html(),
            r#"<div class="wrap"><div id="about-content">NEW</div><p>footer</p></div>"#
        );
    }

    #[test]
    fn test_text_with_less_than_keeps_mount_present() {
        let template = r#"<section><div id="about-content">I <3 Rust</div><div id="x">k</div></section>"#;
        let page = Page::parse(template, &["about-content", "x"]).unwrap();
        assert!(page.mount("about-content").is_some());
        assert_eq!(page.mount("x").unwrap().content(), "k");
        assert_eq!(page.to_html(), template);
    }
}
