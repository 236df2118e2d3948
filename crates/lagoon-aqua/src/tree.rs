// ── Attribute ─────────────────────────────────────────────────────────────

/// A single `name="value"` attribute.
///
/// Attributes are kept in a `Vec` rather than a map: the scene file format
/// is attribute-order sensitive on write, and documents are small enough
/// that linear lookup wins over hashing.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

// ── Element ───────────────────────────────────────────────────────────────

/// An element node in an `.aqua` document tree.
///
/// The format is attribute-only: character data between tags carries no
/// meaning and is discarded by the parser.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing the value if the name is already present,
    /// appending otherwise. Append order is preserved on write.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Returns the attribute value, or `None` if absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Returns the attribute value, or `default` if absent.
    pub fn attr_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }
}
