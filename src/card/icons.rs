//! Built-in icon badge set.
//!
//! Icons are small inline SVG documents on a 24×24 viewbox, stroked in white
//! to sit on the glass panel. They are parsed once on first use and
//! rasterized by the renderer at capture time.

use std::{collections::HashMap, sync::Arc};

use anyhow::Context;

use crate::foundation::error::GlassResult;

const STAR: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><polygon points="12 2 15.1 8.3 22 9.3 17 14.1 18.2 21 12 17.8 5.8 21 7 14.1 2 9.3 8.9 8.3 12 2"/></svg>"##;

const HEART: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3.4 1-4.5 2.5C10.9 4 9.3 3 7.5 3A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7z"/></svg>"##;

const ZAP: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/></svg>"##;

const QUOTE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M3 21c3-2 4-5 4-9H3V5h8v7c0 5-2 8-6 9z"/><path d="M13 21c3-2 4-5 4-9h-4V5h8v7c0 5-2 8-6 9z"/></svg>"##;

const SUN: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="4"/><line x1="12" y1="2" x2="12" y2="5"/><line x1="12" y1="19" x2="12" y2="22"/><line x1="2" y1="12" x2="5" y2="12"/><line x1="19" y1="12" x2="22" y2="12"/><line x1="4.9" y1="4.9" x2="7" y2="7"/><line x1="17" y1="17" x2="19.1" y2="19.1"/><line x1="4.9" y1="19.1" x2="7" y2="17"/><line x1="17" y1="7" x2="19.1" y2="4.9"/></svg>"##;

const LEAF: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M11 20A7 7 0 0 1 4 13c0-5 4-9 16-10-1 12-5 17-9 17z"/><path d="M4 21c2-4 5-8 10-11"/></svg>"##;

const SPARKLES: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9L12 3z"/><path d="M19 16l.9 2.1L22 19l-2.1.9L19 22l-.9-2.1L16 19l2.1-.9L19 16z"/></svg>"##;

const LIGHTBULB: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M9 18h6M10 22h4M12 2a7 7 0 0 1 4 12.7c-.6.5-1 1.2-1 2V18H9v-1.3c0-.8-.4-1.5-1-2A7 7 0 0 1 12 2z"/></svg>"##;

/// Names of the built-in icons, in picker order.
pub const ICON_NAMES: &[&str] = &[
    "Sparkles",
    "Star",
    "Heart",
    "Zap",
    "Quote",
    "Sun",
    "Leaf",
    "Lightbulb",
];

fn svg_for(name: &str) -> Option<&'static str> {
    match name {
        "Sparkles" => Some(SPARKLES),
        "Star" => Some(STAR),
        "Heart" => Some(HEART),
        "Zap" => Some(ZAP),
        "Quote" => Some(QUOTE),
        "Sun" => Some(SUN),
        "Leaf" => Some(LEAF),
        "Lightbulb" => Some(LIGHTBULB),
        _ => None,
    }
}

/// Lazily parsed icon trees, keyed by icon name.
#[derive(Default)]
pub struct IconSet {
    parsed: HashMap<String, Arc<usvg::Tree>>,
}

impl IconSet {
    /// Empty set; icons parse on first lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and cache the named icon.
    ///
    /// Returns `Ok(None)` for names outside the built-in set.
    pub fn get(&mut self, name: &str) -> GlassResult<Option<Arc<usvg::Tree>>> {
        if let Some(tree) = self.parsed.get(name) {
            return Ok(Some(tree.clone()));
        }
        let Some(svg) = svg_for(name) else {
            return Ok(None);
        };
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
            .with_context(|| format!("parse built-in icon '{name}'"))?;
        let tree = Arc::new(tree);
        self.parsed.insert(name.to_string(), tree.clone());
        Ok(Some(tree))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/icons.rs"]
mod tests;
