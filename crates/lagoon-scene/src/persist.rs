//! Scene persistence: mapping the item collection to and from `.aqua`
//! documents.
//!
//! The on-disk shape is load-bearing: element and attribute names, and the
//! per-item attribute order (`x`, `y`, fish speeds, then `type` last) are
//! what existing files and their readers expect.

use std::fmt;
use std::fs;
use std::path::Path;

use lagoon_aqua::{Element, ParseError};

use crate::item::{Item, ItemKind};
use crate::scene::Scene;

// ── AquaError ─────────────────────────────────────────────────────────────

/// Failure to save or load a scene file.
///
/// Always returned to the caller; the scene never terminates the process,
/// and a failed load leaves the in-memory contents untouched.
#[derive(Debug)]
pub enum AquaError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl fmt::Display for AquaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AquaError::Io(e) => write!(f, "scene file i/o failed: {}", e),
            AquaError::Parse(e) => write!(f, "scene file is malformed: {}", e),
        }
    }
}

impl std::error::Error for AquaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AquaError::Io(e) => Some(e),
            AquaError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for AquaError {
    fn from(e: std::io::Error) -> Self {
        AquaError::Io(e)
    }
}

impl From<ParseError> for AquaError {
    fn from(e: ParseError) -> Self {
        AquaError::Parse(e)
    }
}

// ── Item nodes ────────────────────────────────────────────────────────────

impl Item {
    /// Appends this item's `item` node to `parent`.
    pub(crate) fn save_node(&self, parent: &mut Element) {
        let mut node = Element::new("item");
        node.set_attr("x", self.x().to_string());
        node.set_attr("y", self.y().to_string());
        if let Some(v) = self.velocity() {
            node.set_attr("speedx", v.x.to_string());
            node.set_attr("speedy", v.y.to_string());
        }
        node.set_attr("type", self.kind().tag());
        parent.push_child(node);
    }

    /// Reads position (and, for fish, velocity) from `node`. Absent or
    /// malformed numeric attributes fall back to zero.
    pub(crate) fn load_node(&mut self, node: &Element) {
        self.set_location(attr_f64(node, "x"), attr_f64(node, "y"));
        if self.kind().is_fish() {
            self.set_velocity(attr_f64(node, "speedx"), attr_f64(node, "speedy"));
        }
    }
}

fn attr_f64(node: &Element, name: &str) -> f64 {
    node.attr(name).and_then(|v| v.parse().ok()).unwrap_or(0.0)
}

// ── Scene persistence ─────────────────────────────────────────────────────

impl Scene {
    /// Serializes the scene to its document tree: an `aqua` root with one
    /// `item` child per item, in z-order.
    pub fn to_tree(&self) -> Element {
        let mut root = Element::new("aqua");
        for item in self.items() {
            item.save_node(&mut root);
        }
        root
    }

    /// Replaces the scene contents with the items of a parsed document.
    ///
    /// Children other than `item`, and `item` nodes whose `type` is missing
    /// or unrecognized, are skipped without failing the load — the rest of
    /// the document still populates.
    pub fn populate_from_tree(&mut self, root: &Element) {
        self.clear();
        for node in root.children.iter().filter(|c| c.name == "item") {
            let tag = node.attr_or("type", "");
            let Some(kind) = ItemKind::from_tag(tag) else {
                log::warn!("skipping item with unrecognized type {:?}", tag);
                continue;
            };
            let Some(index) = self.spawn(kind) else {
                continue;
            };
            self.item_mut(index).load_node(node);
        }
    }

    /// Writes the scene to `path`. Failures are returned, never thrown, and
    /// the in-memory scene is unaffected either way.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AquaError> {
        let doc = lagoon_aqua::write_document(&self.to_tree());
        fs::write(path, doc)?;
        Ok(())
    }

    /// Loads the scene from `path`.
    ///
    /// The file is read and parsed before anything is mutated: an unreadable
    /// or malformed file returns the error with the current contents intact.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), AquaError> {
        let src = fs::read_to_string(path)?;
        let root = lagoon_aqua::parse_str(&src)?;
        self.populate_from_tree(&root);
        Ok(())
    }
}
