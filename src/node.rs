//! The owning tree behind a [`crate::trie::Trie`].
//!
//! A [`Branch`] maps edges to child nodes. Real symbols lead to deeper
//! branches, while the single [`Edge::End`] slot of a branch, if present,
//! holds the [`Node::Leaf`] for the key spelled by the path to that branch.
use std::collections::BTreeMap;
use std::fmt;
use std::mem;

/// Label of a child slot in a branch.
///
/// `End` is the terminator. It is declared first so that the derived
/// ordering places it before every real symbol: a shorter key is always
/// visited before the longer keys it prefixes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Edge<S> {
    End,
    Symbol(S),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node<S, K, V> {
    Branch(Branch<S, K, V>),
    Leaf(K, V),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Branch<S, K, V> {
    pub(crate) children: BTreeMap<Edge<S>, Node<S, K, V>>,
}

impl<S, K, V> Default for Branch<S, K, V> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }
}

// A long key nests one branch per symbol, so teardown must not recurse.
impl<S, K, V> Drop for Branch<S, K, V> {
    fn drop(&mut self) {
        let mut pending = vec![mem::take(&mut self.children)];
        while let Some(children) = pending.pop() {
            for (_, node) in children {
                if let Node::Branch(mut branch) = node {
                    pending.push(mem::take(&mut branch.children));
                }
            }
        }
    }
}

impl<S: Ord, K, V> Branch<S, K, V> {
    /// Follow `symbol` out of this branch, creating an empty branch for it
    /// if nothing is there yet.
    pub(crate) fn child_or_insert(&mut self, symbol: S) -> &mut Branch<S, K, V> {
        match self
            .children
            .entry(Edge::Symbol(symbol))
            .or_insert_with(|| Node::Branch(Branch::default()))
        {
            Node::Branch(branch) => branch,
            Node::Leaf(..) => unreachable!("leaves only hang off terminator edges"),
        }
    }

    /// Store a leaf under this branch's terminator, returning the leaf it
    /// replaced.
    pub(crate) fn set_leaf(&mut self, key: K, value: V) -> Option<(K, V)> {
        match self.children.insert(Edge::End, Node::Leaf(key, value))? {
            Node::Leaf(key, value) => Some((key, value)),
            Node::Branch(_) => unreachable!("terminator edges only hold leaves"),
        }
    }

    /// Remove the leaf at the end of `symbols`.
    ///
    /// Branches on the path which are left without children are removed
    /// from their parents. If the path from this branch dies entirely, this
    /// branch is left empty and the caller is responsible for it.
    pub(crate) fn remove<I>(&mut self, symbols: I) -> Option<(K, V)>
    where
        I: IntoIterator<Item = S>,
    {
        // Record the edge taken out of every branch on the path, and how
        // many children that branch has.
        let mut edges = Vec::new();
        let mut widths = Vec::new();
        let mut branch = &*self;
        for symbol in symbols {
            let edge = Edge::Symbol(symbol);
            let Node::Branch(child) = branch.children.get(&edge)? else {
                unreachable!("leaves only hang off terminator edges")
            };
            widths.push(branch.children.len());
            edges.push(edge);
            branch = child;
        }

        let last = self.descendant_mut(&edges);
        let removed = match last.children.remove(&Edge::End)? {
            Node::Leaf(key, value) => (key, value),
            Node::Branch(_) => unreachable!("terminator edges only hold leaves"),
        };
        if last.children.is_empty() {
            // Climb while the parent holds nothing but the dead path
            let mut cut = edges.len();
            while cut > 0 && widths[cut - 1] == 1 {
                cut -= 1;
            }
            match cut.checked_sub(1) {
                None => self.children.clear(),
                Some(parent) => {
                    self.descendant_mut(&edges[..parent])
                        .children
                        .remove(&edges[parent]);
                }
            }
        }
        Some(removed)
    }

    // Follow a path already known to exist.
    fn descendant_mut(&mut self, edges: &[Edge<S>]) -> &mut Branch<S, K, V> {
        let mut branch = self;
        for edge in edges {
            branch = match branch.children.get_mut(edge) {
                Some(Node::Branch(child)) => child,
                _ => unreachable!("path was walked before"),
            };
        }
        branch
    }

    /// Find the branch reached by following `symbols` from this one.
    pub(crate) fn descendant<I>(&self, symbols: I) -> Option<&Branch<S, K, V>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut branch = self;
        for symbol in symbols {
            match branch.children.get(&Edge::Symbol(symbol))? {
                Node::Branch(child) => branch = child,
                Node::Leaf(..) => return None,
            }
        }
        Some(branch)
    }

    pub(crate) fn leaf(&self) -> Option<(&K, &V)> {
        match self.children.get(&Edge::End)? {
            Node::Leaf(key, value) => Some((key, value)),
            Node::Branch(_) => None,
        }
    }
}

impl<S: fmt::Display, K, V: fmt::Display> Branch<S, K, V> {
    /// Depth first rendering, two spaces of indentation per level.
    pub(crate) fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![self.children.iter()];
        while let Some(children) = stack.last_mut() {
            let next = children.next();
            let indent = (stack.len() - 1) * 2;
            match next {
                None => {
                    stack.pop();
                }
                Some((_, Node::Leaf(_, value))) => writeln!(f, "{:indent$}:{}", "", value)?,
                Some((Edge::Symbol(symbol), Node::Branch(branch))) => {
                    writeln!(f, "{:indent$}{}", "", symbol)?;
                    stack.push(branch.children.iter());
                }
                Some((Edge::End, Node::Branch(_))) => {
                    unreachable!("terminator edges only hold leaves")
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl<S: Ord, K, V> Branch<S, K, V> {
    /// Walk the subtree asserting its structural invariants and return the
    /// number of leaves below it.
    pub(crate) fn validate(&self) -> usize {
        assert!(!self.children.is_empty(), "empty branch left in the tree");
        let mut leaves = 0;
        for (edge, node) in &self.children {
            match (edge, node) {
                (Edge::End, Node::Leaf(..)) => leaves += 1,
                (Edge::Symbol(_), Node::Branch(branch)) => leaves += branch.validate(),
                (Edge::End, Node::Branch(_)) => panic!("branch under a terminator edge"),
                (Edge::Symbol(_), Node::Leaf(..)) => panic!("leaf under a symbol edge"),
            }
        }
        leaves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_with(keys: &[&str]) -> Branch<char, String, usize> {
        let mut root = Branch::default();
        for (idx, key) in keys.iter().enumerate() {
            let mut branch = &mut root;
            for symbol in key.chars() {
                branch = branch.child_or_insert(symbol);
            }
            branch.set_leaf(key.to_string(), idx);
        }
        root
    }

    #[test]
    fn it_orders_terminator_before_symbols() {
        assert!(Edge::End < Edge::Symbol('\0'));
        assert!(Edge::Symbol('a') < Edge::Symbol('b'));
    }

    #[test]
    fn it_replaces_an_existing_leaf() {
        let mut root: Branch<char, String, usize> = Branch::default();
        assert!(root.set_leaf("".to_string(), 1).is_none());
        assert_eq!(root.set_leaf("".to_string(), 2), Some(("".to_string(), 1)));
        assert_eq!(root.leaf(), Some((&"".to_string(), &2)));
    }

    #[test]
    fn it_prunes_dead_branches_on_remove() {
        let mut root = branch_with(&["abc", "ab", "x"]);
        assert_eq!(root.validate(), 3);
        assert_eq!(root.remove("abc".chars()), Some(("abc".to_string(), 0)));
        assert_eq!(root.validate(), 2);
        let ab = root.descendant("ab".chars()).unwrap();
        assert_eq!(ab.children.len(), 1);
        assert!(ab.leaf().is_some());
    }

    #[test]
    fn it_ignores_missing_keys_on_remove() {
        let mut root = branch_with(&["abc"]);
        assert!(root.remove("ab".chars()).is_none());
        assert!(root.remove("abcd".chars()).is_none());
        assert!(root.remove("q".chars()).is_none());
        assert_eq!(root.validate(), 1);
    }

    #[test]
    fn it_finds_descendants() {
        let root = branch_with(&["wer", "wir"]);
        assert!(root.descendant("wi".chars()).is_some());
        assert!(root.descendant("wo".chars()).is_none());
        assert!(root.descendant("wer".chars()).unwrap().leaf().is_some());
        assert!(root.descendant("wi".chars()).unwrap().leaf().is_none());
    }
}
