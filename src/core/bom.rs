use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One resolved position in the bill of materials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub article: String,
    pub name: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(article: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            article: article.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// Bill of materials: one line per distinct article, in insertion order.
///
/// When two resolvers select the same article the quantities are summed.
/// This matters for double-flap configurations, where the base assembly is
/// the plain 1 m section and the extension resolver emits the same article.
#[derive(Debug, Default)]
pub struct Bom {
    lines: Vec<LineItem>,
    by_article: HashMap<String, usize>,
}

impl Bom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line, merging quantities on article collision
    pub fn add(&mut self, line: LineItem) {
        if let Some(&idx) = self.by_article.get(&line.article) {
            self.lines[idx].quantity += line.quantity;
        } else {
            self.by_article.insert(line.article.clone(), self.lines.len());
            self.lines.push(line);
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<LineItem> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
