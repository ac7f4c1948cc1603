//! Mount point discovery over a page template.
//!
//! `lol_html` tokenizes the template once and wraps the inner content of each
//! requested element in sentinel markers. Bytes outside the markers come back
//! exactly as written, so splitting on them yields the static parts of the
//! page and the initial content of every mount point.

use std::collections::HashSet;

use lol_html::errors::RewritingError;
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use thiserror::Error;
use tracing::debug;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to tokenize page template: {0}")]
    Rewrite(#[from] RewritingError),

    #[error("no free private-use character to mark mount points with")]
    NoSentinel,
}

/// One piece of a template split at its mount points, in document order.
#[derive(Debug, PartialEq, Eq)]
pub enum Piece<'k> {
    Static(String),
    Mount { key: &'k str, initial: String },
}

/// Splits `template` around the first element whose `id` equals each key.
///
/// A key is left out (and its element stays in static text) when no element
/// carries it, when that element is void or self-closing, when it never
/// closes, or when it sits inside another mount point.
pub fn split_mounts<'k>(template: &str, keys: &[&'k str]) -> Result<Vec<Piece<'k>>, TemplateError> {
    let sentinel = pick_sentinel(template)?;
    let marked = mark(template, keys, sentinel)?;

    let mut spans: Vec<(usize, usize, usize, usize)> = Vec::new();
    for (index, key) in keys.iter().enumerate() {
        let open = open_marker(sentinel, index);
        let close = close_marker(sentinel, index);
        match (marked.find(&open), marked.find(&close)) {
            (Some(start), Some(end)) if start < end => {
                spans.push((index, start, start + open.len(), end));
            }
            (Some(_), _) => debug!("Mount point '{key}' is never closed; ignoring"),
            _ => {}
        }
    }
    spans.sort_by_key(|&(_, start, _, _)| start);

    let mut pieces = Vec::new();
    let mut cursor = 0usize;
    for (index, start, inner_start, inner_end) in spans {
        if start < cursor {
            debug!("Mount point '{}' is nested inside another mount; ignoring", keys[index]);
            continue;
        }
        pieces.push(Piece::Static(strip_markers(&marked[cursor..start], sentinel)));
        pieces.push(Piece::Mount {
            key: keys[index],
            initial: strip_markers(&marked[inner_start..inner_end], sentinel),
        });
        cursor = inner_end + close_marker(sentinel, index).len();
    }
    pieces.push(Piece::Static(strip_markers(&marked[cursor..], sentinel)));

    Ok(pieces)
}

/// Rewrites `template` with open and close markers just inside the first
/// element carrying each key as its `id`.
fn mark(template: &str, keys: &[&str], sentinel: char) -> Result<String, RewritingError> {
    let mut seen = HashSet::new();
    let rewritten = rewrite_str(
        template,
        RewriteStrSettings {
            element_content_handlers: vec![element!("[id]", |el| {
                let Some(id) = el.get_attribute("id") else {
                    return Ok(());
                };
                let Some(index) = keys.iter().position(|k| *k == id) else {
                    return Ok(());
                };
                if !seen.insert(index) {
                    return Ok(());
                }

                let name = el.tag_name().to_ascii_lowercase();
                if el.is_self_closing() || VOID_ELEMENTS.contains(&name.as_str()) {
                    debug!("Mount point '{id}' is a <{name}> and cannot hold content");
                    return Ok(());
                }
                el.prepend(&open_marker(sentinel, index), ContentType::Html);
                el.append(&close_marker(sentinel, index), ContentType::Html);
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    );
    rewritten
}

fn pick_sentinel(template: &str) -> Result<char, TemplateError> {
    ('\u{E000}'..='\u{F8FF}')
        .find(|&c| !template.contains(c))
        .ok_or(TemplateError::NoSentinel)
}

fn open_marker(sentinel: char, index: usize) -> String {
    format!("{sentinel}+{index}{sentinel}")
}

fn close_marker(sentinel: char, index: usize) -> String {
    format!("{sentinel}-{index}{sentinel}")
}

/// Removes every marker from `text`. Markers are delimited by a pair of
/// sentinels and the sentinel appears nowhere else.
fn strip_markers(text: &str, sentinel: char) -> String {
    text.split(sentinel).step_by(2).collect()
}
