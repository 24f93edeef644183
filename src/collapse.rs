//! Collapsing of stale branches.
//!
//! A child directory that has no remaining children of its own and is no
//! more recently touched than its parent adds no information to the summary,
//! so it is folded into the parent: its file count (plus one for the
//! directory itself) is added to the parent's and the node disappears from
//! the output. The decision runs bottom-up, so a directory whose children
//! were all absorbed becomes childless and may in turn be absorbed one level
//! up. A child that keeps any children survives regardless of age.
//!
//! [`collapse`] is a pure transformation: it reads the built tree and
//! produces a new reduced one, which makes idempotence directly testable.

use crate::data::{Node, NodeId, Tree};

/// Returns the reduced form of `tree`.
///
/// Kept children preserve their relative (walk) order. Running the pass
/// again on its own output changes nothing.
pub fn collapse(tree: &Tree) -> Tree {
    if tree.is_empty() {
        return Tree::new();
    }

    let mut kept: Vec<Vec<NodeId>> = vec![Vec::new(); tree.len()];
    let mut absorbed: Vec<u64> = vec![0; tree.len()];
    plan(tree, Tree::ROOT, &mut kept, &mut absorbed);

    let mut reduced = Tree::new();
    emit(tree, Tree::ROOT, &kept, &absorbed, &mut reduced, None);
    reduced
}

/// Post-order pass deciding, per node, which children survive and how many
/// files/directories the node absorbs from the rest.
fn plan(tree: &Tree, id: NodeId, kept: &mut [Vec<NodeId>], absorbed: &mut [u64]) {
    for &child in &tree.node(id).children {
        plan(tree, child, kept, absorbed);
    }

    let age = tree.node(id).age;
    for &child in &tree.node(id).children {
        let node = tree.node(child);
        // Kept only if it still has children, or is strictly newer. The
        // strict comparison is deliberate: equal-age leaves get absorbed.
        if kept[child].is_empty() && node.age >= age {
            let folded = node.num_files + absorbed[child] + 1;
            absorbed[id] += folded;
        } else {
            kept[id].push(child);
        }
    }
}

/// Pre-order pass copying the surviving nodes into a fresh arena.
fn emit(
    src: &Tree,
    id: NodeId,
    kept: &[Vec<NodeId>],
    absorbed: &[u64],
    dst: &mut Tree,
    parent: Option<NodeId>,
) -> NodeId {
    let node = src.node(id);
    let copy = Node::new(node.name.clone(), node.age, node.num_files + absorbed[id]);
    let new_id = match parent {
        None => dst.push_root(copy),
        Some(p) => dst.attach(p, copy),
    };
    for &child in &kept[id] {
        emit(src, child, kept, absorbed, dst, Some(new_id));
    }
    new_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn node(name: &str, age: u64, num_files: u64) -> Node {
        Node::new(PathBuf::from(name), age, num_files)
    }

    /// Sum of `num_files + 1` over every node reachable from the root.
    fn total_count(tree: &Tree) -> u64 {
        fn walk(tree: &Tree, id: NodeId) -> u64 {
            tree.node(id).num_files
                + 1
                + tree
                    .node(id)
                    .children
                    .iter()
                    .map(|&c| walk(tree, c))
                    .sum::<u64>()
        }
        walk(tree, Tree::ROOT)
    }

    #[test]
    fn test_stale_leaf_is_absorbed() {
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 0, 1));
        tree.attach(root, node("old", 365, 1));

        let reduced = collapse(&tree);

        let root = reduced.node(Tree::ROOT);
        assert!(root.children.is_empty());
        // one own file + old's file + old itself
        assert_eq!(root.num_files, 3);
        assert_eq!(root.age, 0);
    }

    #[test]
    fn test_newer_leaf_is_kept() {
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 30, 0));
        tree.attach(root, node("fresh", 2, 4));

        let reduced = collapse(&tree);

        let root = reduced.node(Tree::ROOT);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.num_files, 0);
        assert_eq!(reduced.node(root.children[0]).num_files, 4);
    }

    #[test]
    fn test_equal_age_leaf_is_absorbed() {
        // The boundary is strict: equal age means no extra information
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 7, 0));
        tree.attach(root, node("same", 7, 2));

        let reduced = collapse(&tree);

        assert!(reduced.node(Tree::ROOT).children.is_empty());
        assert_eq!(reduced.node(Tree::ROOT).num_files, 3);
    }

    #[test]
    fn test_child_with_surviving_children_is_never_absorbed() {
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 0, 0));
        let mid = tree.attach(root, node("mid", 200, 0));
        tree.attach(mid, node("mid/fresh", 1, 1));

        let reduced = collapse(&tree);

        // mid keeps its fresh child, so mid itself survives despite its age
        let root = reduced.node(Tree::ROOT);
        assert_eq!(root.children.len(), 1);
        let mid = reduced.node(root.children[0]);
        assert_eq!(mid.name, PathBuf::from("mid"));
        assert_eq!(mid.children.len(), 1);
    }

    #[test]
    fn test_absorption_cascades_bottom_up() {
        // deep's children collapse into it, leaving it childless and stale,
        // so it is then absorbed by the root in the same pass.
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 0, 1));
        let deep = tree.attach(root, node("deep", 100, 1));
        let deeper = tree.attach(deep, node("deep/deeper", 150, 2));
        tree.attach(deeper, node("deep/deeper/deepest", 365, 3));

        let reduced = collapse(&tree);

        let root = reduced.node(Tree::ROOT);
        assert!(root.children.is_empty());
        // 1 own + (1 + 2 + 3) files + 3 absorbed directories
        assert_eq!(root.num_files, 10);
    }

    #[test]
    fn test_kept_children_preserve_walk_order() {
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 50, 0));
        tree.attach(root, node("b", 10, 0));
        tree.attach(root, node("a", 20, 0));
        tree.attach(root, node("stale", 300, 0));

        let reduced = collapse(&tree);

        let names: Vec<_> = reduced
            .node(Tree::ROOT)
            .children
            .iter()
            .map(|&c| reduced.node(c).name.clone())
            .collect();
        assert_eq!(names, vec![PathBuf::from("b"), PathBuf::from("a")]);
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 10, 2));
        let a = tree.attach(root, node("a", 5, 1));
        tree.attach(a, node("a/x", 5, 1));
        tree.attach(a, node("a/y", 3, 0));
        tree.attach(root, node("b", 10, 4));

        let once = collapse(&tree);
        let twice = collapse(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_counts_are_conserved() {
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 10, 2));
        let a = tree.attach(root, node("a", 5, 1));
        tree.attach(a, node("a/x", 9, 1));
        tree.attach(a, node("a/y", 3, 0));
        let b = tree.attach(root, node("b", 10, 4));
        tree.attach(b, node("b/z", 365, 7));

        let before = total_count(&tree);
        let reduced = collapse(&tree);

        assert_eq!(total_count(&reduced), before);
    }

    #[test]
    fn test_fully_stale_tree_collapses_to_root_line() {
        // End-to-end shape: one fresh file at the root, one old/ subdir
        // whose file is past the horizon. old/ is childless and not newer,
        // so the whole scan reduces to a single root node.
        let mut tree = Tree::new();
        let root = tree.push_root(node("", 0, 1));
        tree.attach(root, node("old", 365, 1));

        let reduced = collapse(&tree);

        assert_eq!(reduced.len(), 1);
        let root = reduced.node(Tree::ROOT);
        // 2 files + the old directory; +1 for the root gives the 4 entries scanned
        assert_eq!(root.num_files, 3);
        assert_eq!(root.age, 0);
    }
}
