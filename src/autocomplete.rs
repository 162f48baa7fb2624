//! Case-insensitive prefix autocomplete over the catalog's course names.
//!
//! A plain prefix tree, built once from the full name list and rebuilt
//! wholesale on catalog reload. No update operations.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Node {
    // BTreeMap keeps completions in lexicographic order.
    children: BTreeMap<char, Node>,
    terminal: bool,
}

#[derive(Debug, Default)]
pub struct AutoCompleter {
    root: Node,
}

impl AutoCompleter {
    /// Builds the tree, upper-casing every name at insertion.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Node::default();
        for name in names {
            let mut node = &mut root;
            for ch in name.as_ref().to_uppercase().chars() {
                node = node.children.entry(ch).or_default();
            }
            node.terminal = true;
        }
        Self { root }
    }

    /// Every stored course name sharing `prefix`, case-insensitively. The
    /// empty prefix returns everything.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let folded = prefix.to_uppercase();
        let mut node = &self.root;
        for ch in folded.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        let mut matches = Vec::new();
        collect(node, folded, &mut matches);
        matches
    }
}

fn collect(node: &Node, prefix: String, matches: &mut Vec<String>) {
    if node.terminal {
        matches.push(prefix.clone());
    }
    for (ch, child) in &node.children {
        let mut extended = prefix.clone();
        extended.push(*ch);
        collect(child, extended, matches);
    }
}
