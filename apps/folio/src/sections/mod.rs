// Section renderers: one per data-driven block of the portfolio page.
// Each turns one validated content document into markup and writes it into
// the mount point it owns. Markup construction is pure and synchronous.

pub mod about;
pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::page::Page;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("malformed {section} document: {source}")]
    Malformed {
        section: SectionKind,
        #[source]
        source: serde_json::Error,
    },
}

/// What a single render attempt did to its mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The mount point's content was replaced.
    Rendered,
    /// The document could not be loaded; nothing was touched.
    NoDocument,
    /// The page has no such mount point; nothing was touched.
    NoMount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    About,
    Experience,
    Projects,
    Skills,
    Education,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Education,
    ];

    /// Short name, also used as the key in a content bundle.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
        }
    }

    pub fn default_path(self) -> &'static str {
        match self {
            SectionKind::About => "data/about.json",
            SectionKind::Experience => "data/experience.json",
            SectionKind::Projects => "data/projects.json",
            SectionKind::Skills => "data/skills.json",
            SectionKind::Education => "data/education.json",
        }
    }

    pub fn default_mount_key(self) -> &'static str {
        match self {
            SectionKind::About => "about-content",
            SectionKind::Experience => "experience-timeline",
            SectionKind::Projects => "projects-grid",
            SectionKind::Skills => "skills-container",
            SectionKind::Education => "education-content",
        }
    }

    /// Validates `document` against this section's record type and builds its markup.
    pub fn build_markup(self, document: &Value) -> Result<String, RenderError> {
        match self {
            SectionKind::About => parse(self, document).map(|d| about::render(&d)),
            SectionKind::Experience => parse(self, document).map(|d| experience::render(&d)),
            SectionKind::Projects => parse(self, document).map(|d| projects::render(&d)),
            SectionKind::Skills => parse(self, document).map(|d| skills::render(&d)),
            SectionKind::Education => parse(self, document).map(|d| education::render(&d)),
        }
    }

    /// Renders `document` into the mount point `mount_key` of `page`.
    ///
    /// A missing document or a missing mount point is a silent no-op. A
    /// malformed document leaves the mount point untouched and returns an error.
    pub fn render(
        self,
        document: Option<&Value>,
        page: &Page,
        mount_key: &str,
    ) -> Result<RenderOutcome, RenderError> {
        let Some(document) = document else {
            return Ok(RenderOutcome::NoDocument);
        };
        let Some(mount) = page.mount(mount_key) else {
            return Ok(RenderOutcome::NoMount);
        };
        let markup = self.build_markup(document)?;
        mount.replace(markup);
        Ok(RenderOutcome::Rendered)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn parse<T: DeserializeOwned>(section: SectionKind, document: &Value) -> Result<T, RenderError> {
    T::deserialize(document).map_err(|source| RenderError::Malformed { section, source })
}

/// Escapes text for use in element content and double-quoted attributes.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
