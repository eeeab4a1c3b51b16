// crates/placeslim-core/src/extract.rs

//! Pulls the JSON payload out of a script-style declaration such as
//! `export const areaContents = {...};` and parses it.

use crate::error::Result;
use crate::loader;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// `[export] const|let|var <name> =`, the head of a declaration.
static DECLARATION_HEAD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*")
        .expect("declaration head pattern is valid")
});

/// An object or array literal followed by `;`.
///
/// Greedy, so it runs to the last closing bracket that is followed by a
/// terminator.
static PAYLOAD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A([\[{].*[\]}])\s*;").expect("payload pattern is valid")
});

/// Returns the payload text declared under `identifier`.
///
/// Declarations with other names (sibling exports, commented examples) are
/// skipped. Without a terminated literal after the head, the text after the
/// head (or the whole text, if `identifier` is never declared) is trimmed and
/// stripped of trailing `;`. That fallback is a heuristic; whatever it leaves
/// behind is handed to the JSON parser as-is.
pub fn extract_payload<'a>(text: &'a str, identifier: &str) -> &'a str {
    let head = DECLARATION_HEAD_RE
        .captures_iter(text)
        .find(|caps| &caps[1] == identifier)
        .and_then(|caps| caps.get(0));

    let rest = match head {
        Some(head) => &text[head.end()..],
        None => text,
    };

    if head.is_some() {
        if let Some(payload) = PAYLOAD_RE.captures(rest).and_then(|caps| caps.get(1)) {
            return payload.as_str();
        }
    }

    debug!(identifier, "no terminated declaration matched, trimming");
    rest.trim().trim_end_matches(';')
}

/// Extracts and parses the payload into a generic JSON tree.
pub fn parse_declaration(text: &str, identifier: &str) -> Result<Value> {
    let payload = extract_payload(text, identifier);
    Ok(serde_json::from_str(payload)?)
}

/// Reads `path` and parses the object declared under `identifier`.
pub fn load_tree(path: &Path, identifier: &str) -> Result<Value> {
    info!(path = %path.display(), "loading source dataset");
    let text = loader::read_to_string(path)?;
    parse_declaration(&text, identifier)
}
