//! Arena-backed ordered tree.
//!
//! Nodes live in one `Vec` and refer to each other by index. A node owns its children through the index
//! list and knows its parent through a plain (non-owning) index, so climbing to the parent and attaching
//! a child are both O(1) without any reference cycles. Every algorithm here is iterative: strict trees
//! are as deep as the RNA is long, far deeper than the call stack would like.
//!

/// Index of a node inside its tree.
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct Node<K> {
    pub key: K,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Tree<K> {
    nodes: Vec<Node<K>>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<K> Tree<K> {
    /// Create a tree holding just a root.
    pub fn new(root_key: K) -> Self {
        let mut tree = Self::default();
        tree.attach(None, root_key);
        tree
    }

    /// Add a node. `None` as parent creates the root and is only allowed on an empty tree.
    pub fn attach(&mut self, parent: Option<NodeId>, key: K) -> NodeId {
        debug_assert!(parent.is_some() || self.nodes.is_empty());
        let id = self.nodes.len();
        self.nodes.push(Node {
            key,
            parent,
            children: Vec::with_capacity(2),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    /// Append a new last child to `parent` and return it.
    pub fn add_child(&mut self, parent: NodeId, key: K) -> NodeId {
        self.attach(Some(parent), key)
    }

    /// The root, or None for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.nodes[id].children.get(index).copied()
    }

    pub fn arity(&self, id: NodeId) -> usize {
        self.nodes[id].children.len()
    }

    pub fn key(&self, id: NodeId) -> &K {
        &self.nodes[id].key
    }

    pub fn set_key(&mut self, id: NodeId, key: K) {
        self.nodes[id].key = key;
    }

    /// Node ids in preorder, starting at the root. Lazy and restartable.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder {
            tree: self,
            stack: self.root().into_iter().collect(),
        }
    }

    /// Only the leaves (arity 0), in preorder.
    pub fn preorder_leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.preorder().filter(move |&id| self.arity(id) == 0)
    }

    /// Node keys in preorder.
    pub fn labels(&self) -> impl Iterator<Item = &K> + '_ {
        self.preorder().map(move |id| self.key(id))
    }

    /// Number of nodes reachable from the root.
    pub fn size(&self) -> usize {
        self.preorder().count()
    }

    /// Bracket form of the tree shape. Every node opens a bracket, then its children follow;
    /// the closing bracket is written unless `balanced` is false and the node has exactly two
    /// children. Dropping those closers is what makes the topology code shorter.
    pub fn bracket_string(&self, balanced: bool) -> String {
        let mut out = String::with_capacity(2 * self.nodes.len());
        // (node, entered) pairs: a node is visited once on the way down and once on the way up
        let mut stack: Vec<(NodeId, bool)> = self.root().into_iter().map(|id| (id, false)).collect();
        while let Some((id, entered)) = stack.pop() {
            if entered {
                if balanced || self.arity(id) != 2 {
                    out.push(')');
                }
                continue;
            }
            out.push('(');
            stack.push((id, true));
            stack.extend(self.children(id).iter().rev().map(|&child| (child, false)));
        }
        out
    }
}

/// Preorder iterator over node ids.
pub struct Preorder<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod test {
    use super::Tree;

    /// a(b(d, e), c)
    fn sample() -> Tree<char> {
        let mut tree = Tree::new('a');
        let root = tree.root().unwrap();
        let b = tree.add_child(root, 'b');
        tree.add_child(root, 'c');
        tree.add_child(b, 'd');
        tree.add_child(b, 'e');
        tree
    }

    #[test]
    fn preorder_test() {
        let tree = sample();
        let labels: String = tree.labels().collect();
        assert_eq!(labels, "abdec");
        let leaves: String = tree.preorder_leaves().map(|id| *tree.key(id)).collect();
        assert_eq!(leaves, "dec");
        assert_eq!(tree.size(), 5);
        // restartable
        assert_eq!(tree.preorder().count(), tree.preorder().count());
    }

    #[test]
    fn parent_test() {
        let tree = sample();
        let root = tree.root().unwrap();
        let b = tree.child(root, 0).unwrap();
        let e = tree.child(b, 1).unwrap();
        assert_eq!(*tree.key(e), 'e');
        assert_eq!(tree.parent(e), Some(b));
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.arity(b), 2);
    }

    #[test]
    fn bracket_test() {
        let tree = sample();
        assert_eq!(tree.bracket_string(true), "((()())())");
        assert_eq!(tree.bracket_string(false), "((()()()");
    }

    #[test]
    fn unary_bracket_test() {
        let mut tree = Tree::new('u');
        let root = tree.root().unwrap();
        tree.add_child(root, 'e');
        assert_eq!(tree.bracket_string(false), "(())");
    }

    #[test]
    fn empty_test() {
        let tree: Tree<char> = Tree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.bracket_string(true), "");
    }
}
