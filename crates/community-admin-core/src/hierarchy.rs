//! Organizational Hierarchy
//!
//! Country -> state -> city -> chapter tree with per-node expand state.
//! Expand state lives outside the tree, keyed by node id, so the tree itself
//! stays immutable once built.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Default number of levels expanded on first render (root and its children)
pub const DEFAULT_EXPAND_DEPTH: usize = 2;

/// Node kind determines styling only, never behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Country,
    State,
    City,
    Chapter,
}

/// Leading icon for a hierarchy row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIcon {
    MapPin,
    Users,
}

impl NodeIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NodeIcon::MapPin => "📍",
            NodeIcon::Users => "👥",
        }
    }
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Country => "country",
            NodeKind::State => "state",
            NodeKind::City => "city",
            NodeKind::Chapter => "chapter",
        }
    }

    /// Countries and states render as headings
    pub fn is_heading(&self) -> bool {
        matches!(self, NodeKind::Country | NodeKind::State)
    }

    pub fn icon(&self) -> Option<NodeIcon> {
        match self {
            NodeKind::City => Some(NodeIcon::MapPin),
            NodeKind::Chapter => Some(NodeIcon::Users),
            _ => None,
        }
    }

    /// CSS class for the node label
    pub fn label_class(&self) -> &'static str {
        match self {
            NodeKind::Country => "node-label node-country",
            NodeKind::State => "node-label node-state",
            NodeKind::City => "node-label node-city",
            NodeKind::Chapter => "node-label node-chapter",
        }
    }
}

/// A node of the hierarchy as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn new(id: &str, name: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            member_count: None,
            children: Vec::new(),
        }
    }

    pub fn chapter(id: &str, name: &str, member_count: u32) -> Self {
        Self {
            member_count: Some(member_count),
            ..Self::new(id, name, NodeKind::Chapter)
        }
    }

    pub fn with_children(mut self, children: Vec<HierarchyNode>) -> Self {
        self.children = children;
        self
    }

    /// Empty `children` and absent `children` both mean leaf
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// "(145 members)" when a member count is known
    pub fn member_annotation(&self) -> Option<String> {
        self.member_count.map(|n| format!("({} members)", n))
    }
}

#[derive(Debug, Clone)]
struct NodeEntry {
    parent: Option<String>,
    depth: usize,
    /// Child positions from the root down to this node
    path: Vec<usize>,
    has_children: bool,
}

/// A validated hierarchy with an id index
#[derive(Debug, Clone)]
pub struct HierarchyTree {
    root: HierarchyNode,
    index: HashMap<String, NodeEntry>,
}

/// One rendered row of the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRow<'a> {
    pub node: &'a HierarchyNode,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

impl VisibleRow<'_> {
    /// Left indentation in pixels
    pub fn indent_px(&self) -> usize {
        self.depth * 24
    }
}

impl HierarchyTree {
    /// Index the tree, rejecting duplicate node ids
    pub fn new(root: HierarchyNode) -> Result<Self> {
        let mut index = HashMap::new();
        let mut stack: Vec<(&HierarchyNode, Option<&str>, Vec<usize>)> =
            vec![(&root, None, Vec::new())];

        while let Some((node, parent, path)) = stack.pop() {
            if index.contains_key(&node.id) {
                return Err(CoreError::DuplicateNodeId {
                    id: node.id.clone(),
                });
            }
            for (pos, child) in node.children.iter().enumerate() {
                let mut child_path = path.clone();
                child_path.push(pos);
                stack.push((child, Some(node.id.as_str()), child_path));
            }
            index.insert(
                node.id.clone(),
                NodeEntry {
                    parent: parent.map(str::to_string),
                    depth: path.len(),
                    path,
                    has_children: node.has_children(),
                },
            );
        }

        debug!(nodes = index.len(), root = %root.id, "hierarchy indexed");
        Ok(Self { root, index })
    }

    pub fn root(&self) -> &HierarchyNode {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn find(&self, id: &str) -> Option<&HierarchyNode> {
        let entry = self.index.get(id)?;
        let mut node = &self.root;
        for &pos in &entry.path {
            node = node.children.get(pos)?;
        }
        Some(node)
    }

    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|e| e.depth)
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.index.get(id)?.parent.as_deref()
    }

    pub fn chapter_count(&self) -> usize {
        self.nodes().filter(|n| n.kind == NodeKind::Chapter).count()
    }

    pub fn total_members(&self) -> u64 {
        self.nodes().filter_map(|n| n.member_count).map(u64::from).sum()
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> impl Iterator<Item = &HierarchyNode> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Rows to render, in display order
    ///
    /// A node appears iff all of its ancestors are expanded.
    pub fn visible_rows(&self, state: &ExpandState) -> Vec<VisibleRow<'_>> {
        let mut rows = Vec::new();
        let mut stack = vec![(&self.root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            let has_children = node.has_children();
            let expanded = has_children && state.is_expanded(&node.id);
            rows.push(VisibleRow {
                node,
                depth,
                has_children,
                expanded,
            });
            if expanded {
                for child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        rows
    }

    /// Whether every ancestor of `id` is expanded. Unknown ids are not visible.
    pub fn is_visible(&self, id: &str, state: &ExpandState) -> bool {
        let Some(entry) = self.index.get(id) else {
            return false;
        };
        let mut parent = entry.parent.as_deref();
        while let Some(pid) = parent {
            if !state.is_expanded(pid) {
                return false;
            }
            parent = self.index.get(pid).and_then(|e| e.parent.as_deref());
        }
        true
    }
}

/// Expanded/collapsed flag per node id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpandState {
    expanded: HashMap<String, bool>,
}

impl ExpandState {
    /// Parents shallower than `depth` start expanded, the rest collapsed.
    /// Leaves are never marked expanded.
    pub fn with_default_depth(tree: &HierarchyTree, depth: usize) -> Self {
        let expanded = tree
            .index
            .iter()
            .map(|(id, entry)| (id.clone(), entry.has_children && entry.depth < depth))
            .collect();
        Self { expanded }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Ids currently expanded
    pub fn expanded_ids(&self) -> HashSet<&str> {
        self.expanded
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Flip one node's flag and return its new value
    pub fn toggle(&mut self, tree: &HierarchyTree, id: &str) -> Result<bool> {
        let entry = tree
            .index
            .get(id)
            .ok_or_else(|| CoreError::UnknownNode { id: id.to_string() })?;
        if !entry.has_children {
            return Err(CoreError::LeafNode { id: id.to_string() });
        }
        let flag = self.expanded.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        debug!(id, expanded = *flag, "hierarchy node toggled");
        Ok(*flag)
    }

    pub fn expand_all(&mut self, tree: &HierarchyTree) {
        for (id, entry) in &tree.index {
            if entry.has_children {
                self.expanded.insert(id.clone(), true);
            }
        }
    }

    pub fn collapse_all(&mut self) {
        for flag in self.expanded.values_mut() {
            *flag = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> HierarchyTree {
        HierarchyTree::new(
            HierarchyNode::new("country", "Country", NodeKind::Country).with_children(vec![
                HierarchyNode::new("state", "State", NodeKind::State).with_children(vec![
                    HierarchyNode::new("city", "City", NodeKind::City)
                        .with_children(vec![HierarchyNode::chapter("chapter", "Chapter", 12)]),
                ]),
            ]),
        )
        .unwrap()
    }

    fn visible_ids(tree: &HierarchyTree, state: &ExpandState) -> Vec<String> {
        tree.visible_rows(state)
            .iter()
            .map(|r| r.node.id.clone())
            .collect()
    }

    #[test]
    fn test_initial_render_of_chain() {
        let tree = chain();
        let state = ExpandState::with_default_depth(&tree, DEFAULT_EXPAND_DEPTH);

        let rows = tree.visible_rows(&state);
        assert_eq!(visible_ids(&tree, &state), vec!["country", "state", "city"]);
        assert!(rows[0].expanded);
        assert!(rows[1].expanded);
        assert!(!rows[2].expanded);
        assert!(rows[2].has_children);
        assert!(!tree.is_visible("chapter", &state));
    }

    #[test]
    fn test_toggle_reveals_chapter() {
        let tree = chain();
        let mut state = ExpandState::with_default_depth(&tree, DEFAULT_EXPAND_DEPTH);

        assert!(state.toggle(&tree, "city").unwrap());
        assert_eq!(
            visible_ids(&tree, &state),
            vec!["country", "state", "city", "chapter"]
        );
        let rows = tree.visible_rows(&state);
        assert_eq!(rows[3].depth, 3);
        assert_eq!(rows[3].indent_px(), 72);
    }

    #[test]
    fn test_toggle_leaf_and_unknown() {
        let tree = chain();
        let mut state = ExpandState::with_default_depth(&tree, DEFAULT_EXPAND_DEPTH);
        assert!(matches!(state.toggle(&tree, "chapter"), Err(CoreError::LeafNode { .. })));
        assert!(matches!(state.toggle(&tree, "nope"), Err(CoreError::UnknownNode { .. })));
    }

    #[test]
    fn test_collapsing_ancestor_hides_descendants_but_keeps_their_state() {
        let tree = chain();
        let mut state = ExpandState::with_default_depth(&tree, DEFAULT_EXPAND_DEPTH);
        state.toggle(&tree, "city").unwrap();
        state.toggle(&tree, "state").unwrap();

        assert_eq!(visible_ids(&tree, &state), vec!["country", "state"]);
        assert!(state.is_expanded("city"));

        state.toggle(&tree, "state").unwrap();
        assert!(tree.is_visible("chapter", &state));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let root = HierarchyNode::new("a", "A", NodeKind::Country).with_children(vec![
            HierarchyNode::new("b", "B", NodeKind::State),
            HierarchyNode::new("b", "B again", NodeKind::State),
        ]);
        assert!(matches!(
            HierarchyTree::new(root),
            Err(CoreError::DuplicateNodeId { id }) if id == "b"
        ));
    }

    #[test]
    fn test_index_lookups() {
        let tree = chain();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.depth_of("city"), Some(2));
        assert_eq!(tree.parent_of("chapter"), Some("city"));
        assert_eq!(tree.parent_of("country"), None);
        assert_eq!(tree.find("chapter").unwrap().member_count, Some(12));
        assert_eq!(tree.chapter_count(), 1);
        assert_eq!(tree.total_members(), 12);
    }

    #[test]
    fn test_kind_presentation() {
        assert!(NodeKind::Country.is_heading());
        assert!(NodeKind::State.is_heading());
        assert_eq!(NodeKind::City.icon(), Some(NodeIcon::MapPin));
        assert_eq!(NodeKind::Chapter.icon(), Some(NodeIcon::Users));
        assert_eq!(NodeKind::Country.icon(), None);
    }

    #[test]
    fn test_member_annotation() {
        assert_eq!(
            HierarchyNode::chapter("x", "X", 145).member_annotation().as_deref(),
            Some("(145 members)")
        );
        assert_eq!(HierarchyNode::new("y", "Y", NodeKind::City).member_annotation(), None);
    }

    #[test]
    fn test_empty_children_is_leaf() {
        let json = r#"{"id":"c","name":"C","type":"city","children":[]}"#;
        let node: HierarchyNode = serde_json::from_str(json).unwrap();
        assert!(!node.has_children());
        let tree = HierarchyTree::new(node).unwrap();
        let state = ExpandState::with_default_depth(&tree, DEFAULT_EXPAND_DEPTH);
        let rows = tree.visible_rows(&state);
        assert!(!rows[0].has_children);
        assert!(!rows[0].expanded);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let tree = chain();
        let mut state = ExpandState::with_default_depth(&tree, 0);
        assert_eq!(visible_ids(&tree, &state), vec!["country"]);

        state.expand_all(&tree);
        assert_eq!(tree.visible_rows(&state).len(), 4);

        state.collapse_all();
        assert!(state.expanded_ids().is_empty());
    }

    #[test]
    fn test_default_depth_skips_shallow_leaves() {
        let tree = HierarchyTree::new(
            HierarchyNode::new("country", "Country", NodeKind::Country).with_children(vec![
                HierarchyNode::chapter("hq", "Head Office", 4),
                HierarchyNode::new("state", "State", NodeKind::State)
                    .with_children(vec![HierarchyNode::new("city", "City", NodeKind::City)]),
            ]),
        )
        .unwrap();
        let state = ExpandState::with_default_depth(&tree, DEFAULT_EXPAND_DEPTH);

        let expanded = state.expanded_ids();
        assert_eq!(expanded, HashSet::from(["country", "state"]));
        assert!(!state.is_expanded("hq"));
        assert!(!state.is_expanded("city"));
    }
}
