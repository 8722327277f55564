/*! Depth-first iteration over a [Tree]. The hierarchy is recovered from the node spans as
 * the arena is traversed; no child references are stored.
 */

use super::{DepthLevel, Tree, TreeNode};
use core::iter::{Enumerate, FusedIterator};
use core::slice;

/// Iterator over siblings in a contiguous range of the arena. Each sibling is yielded
/// together with an iterator over its own children, which is `None` for a leaf. The
/// descendants of a sibling are skipped unless that nested iterator is consumed.
pub struct DepthFirstIterator<'a, T> {
    tree: &'a Tree<T>,
    index: usize,
    /// Exclusive end of the range
    end: usize,
}

impl<'a, T> DepthFirstIterator<'a, T> {
    pub(super) fn new(tree: &'a Tree<T>, start: usize, end: usize) -> Self {
        DepthFirstIterator {
            tree,
            index: start,
            end,
        }
    }
}

// Derive would require `T: Clone`
impl<T> Clone for DepthFirstIterator<'_, T> {
    fn clone(&self) -> Self {
        DepthFirstIterator {
            tree: self.tree,
            index: self.index,
            end: self.end,
        }
    }
}

impl<'a, T> Iterator for DepthFirstIterator<'a, T> {
    type Item = (&'a T, Option<DepthFirstIterator<'a, T>>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }
        let tree = self.tree;
        let node = &tree.buffer[self.index];
        let children = (node.end > self.index)
            .then(|| DepthFirstIterator::new(tree, self.index + 1, node.end + 1));

        // skip the sub-tree
        self.index = node.end + 1;
        Some((&node.data, children))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.index);
        (remaining.min(1), Some(remaining))
    }
}

impl<T> FusedIterator for DepthFirstIterator<'_, T> {}

/// Flat iterator over all nodes in depth-first order, yielding each node with its depth.
pub struct PreOrderIterator<'a, T> {
    nodes: Enumerate<slice::Iter<'a, TreeNode<T>>>,
    /// Span ends of the ancestors of the next node
    stack: Vec<usize>,
}

impl<'a, T> PreOrderIterator<'a, T> {
    pub(super) fn new(tree: &'a Tree<T>) -> Self {
        PreOrderIterator {
            nodes: tree.buffer.iter().enumerate(),
            stack: Vec::with_capacity(tree.depth()),
        }
    }
}

impl<'a, T> Iterator for PreOrderIterator<'a, T> {
    type Item = (DepthLevel, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, node) = self.nodes.next()?;
        while self.stack.last().map_or(false, |end| *end < index) {
            self.stack.pop();
        }
        let level = DepthLevel::new(self.stack.len());
        if node.end > index {
            self.stack.push(node.end);
        }
        Some((level, &node.data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> ExactSizeIterator for PreOrderIterator<'_, T> {}

impl<T> FusedIterator for PreOrderIterator<'_, T> {}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    /// Recursively collects the loads, descending into every sub-iterator
    fn flatten<T: Copy>(iter: DepthFirstIterator<'_, T>, result: &mut Vec<T>) {
        for (data, children) in iter {
            result.push(*data);
            if let Some(children) = children {
                flatten(children, result);
            }
        }
    }

    /// Renders the nesting as `a(b,c)` for easier comparison
    fn render(iter: DepthFirstIterator<'_, &str>) -> String {
        iter.map(|(data, children)| match children {
            Some(children) => format!("{data}({})", render(children)),
            None => data.to_string(),
        })
        .join(",")
    }

    fn layered() -> (Tree<char>, Vec<(char, usize)>) {
        // Layout of the tree
        //     a       g   h
        //    / \      |
        //   b   e     i
        //  / \  |
        // c  d  f
        let appended = vec![
            ('a', 0),
            ('b', 1),
            ('c', 2),
            ('d', 2),
            ('e', 1),
            ('f', 2),
            ('g', 0),
            ('i', 1),
            ('h', 0),
        ];
        let mut tree = Tree::new();
        for (data, level) in &appended {
            tree.append(*data, DepthLevel::new(*level));
        }
        (tree, appended)
    }

    #[test_log::test]
    fn test_scenario() {
        let mut tree = Tree::new();
        tree.append("A", DepthLevel::ROOT);
        tree.append("B", DepthLevel::new(1));
        tree.append("C", DepthLevel::new(1));
        tree.append("D", DepthLevel::ROOT);

        let mut roots = tree.iter();
        let (a, children) = roots.next().unwrap();
        assert_eq!(*a, "A");
        let children = children.unwrap().collect_vec();
        assert_eq!(children.iter().map(|(data, _)| **data).collect_vec(), ["B", "C"]);
        assert!(children.iter().all(|(_, sub)| sub.is_none()));

        let (d, children) = roots.next().unwrap();
        assert_eq!(*d, "D");
        assert!(children.is_none());
        assert!(roots.next().is_none());

        assert_eq!(render(tree.iter()), "A(B,C),D");
    }

    #[test_log::test]
    fn test_pre_order_identity() {
        let (tree, appended) = layered();
        let mut result = vec![];
        flatten(tree.iter(), &mut result);
        assert_eq!(result, appended.iter().map(|(data, _)| *data).collect_vec());
    }

    #[test_log::test]
    fn test_siblings_only() {
        let (tree, _) = layered();
        let roots = tree.iter().map(|(data, _)| *data).collect_vec();
        assert_eq!(roots, ['a', 'g', 'h']);

        let mut summary = String::new();
        for (data, children) in &tree {
            summary.push(*data);
            summary.push_str(&children.map_or(0, |c| c.count()).to_string());
        }
        assert_eq!(summary, "a2g1h0");
    }

    #[test_log::test]
    fn test_leaves_have_no_children() {
        let tree: Tree<_> = "xyz".chars().collect();
        let result = tree.iter().map(|(data, children)| (*data, children.is_none())).collect_vec();
        assert_eq!(result, [('x', true), ('y', true), ('z', true)]);
    }

    #[test_log::test]
    fn test_sub_iteration_and_restart() {
        let (tree, _) = layered();

        // children of "b" (index 1)
        let sub = tree.iter_sub(1).unwrap();
        assert_eq!(sub.clone().map(|(data, _)| *data).collect_vec(), ['c', 'd']);
        assert_eq!(sub.count(), 2);

        // leaf "h" (index 8)
        assert!(tree.iter_sub(8).unwrap().next().is_none());
        assert!(tree.iter_sub(9).is_none());

        let mut roots = tree.iter();
        assert_eq!(roots.size_hint(), (1, Some(9)));
        roots.by_ref().for_each(drop);
        assert_eq!(roots.size_hint(), (0, Some(0)));
        assert!(roots.next().is_none());
    }

    #[test_log::test]
    fn test_depths() {
        let (tree, appended) = layered();
        let iter = tree.iter_depth();
        assert_eq!(iter.len(), appended.len());

        let result = iter.map(|(level, data)| (*data, level.value())).collect_vec();
        assert_eq!(result, appended);
    }

    #[test_log::test]
    fn test_deep_strand() {
        // A strand nested three levels deep followed by siblings on every level
        let mut tree = Tree::new();
        tree.append("r", DepthLevel::ROOT);
        tree.append_strand(["s1", "s2", "s3"], DepthLevel::new(1));
        tree.append("t3", DepthLevel::new(3));
        tree.append("t2", DepthLevel::new(2));
        tree.append("t1", DepthLevel::new(1));

        assert_eq!(render(tree.iter()), "r(s1(s2(s3,t3),t2),t1)");

        let depths = tree.iter_depth().map(|(level, _)| level.value()).collect_vec();
        assert_eq!(depths, [0, 1, 2, 3, 3, 2, 1]);
    }
}
