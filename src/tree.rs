//! Rendering a directory-tree overview of the snapshot.

use crate::types::FileEntry;
use std::collections::BTreeMap;

/// One node of the derived directory tree, keyed by name. Files are leaves;
/// directories carry their children. `BTreeMap` gives the lexical sibling
/// order the rendering relies on.
#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

/// Renders a `tree`-style overview of the entries' relative paths.
///
/// Children are listed in lexical order at every level; the last child at a
/// level uses the closing connector `└── ` and all others `├── `. Each line
/// ends with a newline. An empty entry list renders the empty string.
pub fn render_tree(entries: &[FileEntry]) -> String {
    let mut root = TreeNode::default();
    for entry in entries {
        let mut cursor = &mut root;
        for part in entry.rel_path.components() {
            let name = part.as_os_str().to_string_lossy().into_owned();
            cursor = cursor.children.entry(name).or_default();
        }
    }
    render_level(&root, "")
}

fn render_level(node: &TreeNode, prefix: &str) -> String {
    let mut out = String::new();
    let last = node.children.len().saturating_sub(1);
    for (i, (name, child)) in node.children.iter().enumerate() {
        let connector = if i == last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');
        if !child.children.is_empty() {
            let extension = if i == last { "    " } else { "│   " };
            out.push_str(&render_level(child, &format!("{prefix}{extension}")));
        }
    }
    out
}
