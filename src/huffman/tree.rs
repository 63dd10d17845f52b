use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::{FrequencyTable, Symbol};

#[derive(Clone, Copy, Debug)]
enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

// `index` doubles as the insertion sequence number: leaves come first in
// frequency table order, inner nodes follow in merge order.
#[derive(Clone, Copy, Debug)]
struct Node {
    frequency: usize,
    index: usize,
    kind: NodeKind,
}

/// Huffman tree stored as an arena of nodes. Inner nodes own their children
/// through arena indices; the tree never changes after construction.
#[derive(Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

/// Borrowed view of a single node of a [`HuffmanTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a HuffmanTree,
    index: usize,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two least frequent nodes.
    /// Among equally frequent nodes the one inserted first is taken first and
    /// becomes the left child.
    ///
    /// Returns `None` for an empty table. A table with a single symbol yields
    /// a tree that consists of one leaf.
    pub fn build(frequencies: &FrequencyTable) -> Option<HuffmanTree> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut nodes: Vec<Node> = Vec::with_capacity(frequencies.len() * 2);

        for entry in frequencies {
            let node = Node {
                frequency: entry.frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf {
                    symbol: entry.symbol,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        // merge nodes until one is left
        while heap.len() > 1 {
            let (Some(Reverse(t1)), Some(Reverse(t2))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let node = Node {
                frequency: t1.frequency + t2.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: t1.index,
                    right: t2.index,
                },
            };
            log::debug!(
                "Merged nodes {} (f:{}) and {} (f:{}) into {} (f:{})",
                t1.index,
                t1.frequency,
                t2.index,
                t2.frequency,
                node.index,
                node.frequency
            );
            heap.push(Reverse(node));
            nodes.push(node);
        }

        let Reverse(root) = heap.pop()?;
        Some(HuffmanTree {
            nodes,
            root_index: root.index,
        })
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            index: self.root_index,
        }
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        // a full binary tree with n leaves has n - 1 inner nodes
        (self.nodes.len() + 1) / 2
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.index]
    }

    fn child(&self, index: usize) -> NodeRef<'a> {
        NodeRef {
            tree: self.tree,
            index,
        }
    }

    /// Symbol of a leaf; inner nodes carry none.
    pub fn symbol(&self) -> Option<Symbol> {
        match self.node().kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    pub fn frequency(&self) -> usize {
        self.node().frequency
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        match self.node().kind {
            NodeKind::Inner { left, .. } => Some(self.child(left)),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        match self.node().kind {
            NodeKind::Inner { right, .. } => Some(self.child(right)),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node().kind, NodeKind::Leaf { .. })
    }

    /// Both children of an inner node, `None` for a leaf.
    pub fn children(&self) -> Option<(NodeRef<'a>, NodeRef<'a>)> {
        self.left().zip(self.right())
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("node", self.node())
            .finish()
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn label_center(line: &str) -> usize {
    let start = line.chars().position(|c| c != ' ').unwrap_or(0);
    (start * 2 + line.trim().chars().count()) / 2
}

// Tree visualization
impl NodeRef<'_> {
    fn get_string(&self) -> Vec<String> {
        let Some((node_left, node_right)) = self.children() else {
            let symbol = self.symbol().map(|s| s.escape_debug().to_string());
            return vec![format!(
                "({}:{})",
                symbol.unwrap_or_default(),
                self.frequency()
            )];
        };

        let label = self.frequency().to_string();
        let label_width = label.chars().count();
        let left_box = node_left.get_string();
        let right_box = node_right.get_string();
        let left_width = left_box[0].chars().count();
        let right_width = right_box[0].chars().count();
        let mut result: Vec<String> = Vec::new();

        result.push(format!(
            "{}{}{}",
            SPACE.repeat(left_width),
            label,
            SPACE.repeat(right_width)
        ));
        result.push(format!(
            "{}║{}",
            SPACE.repeat(left_width + label_width / 2),
            SPACE.repeat(label_width - label_width / 2 - 1 + right_width)
        ));

        let left_pos = label_center(&left_box[0]);
        let right_pos = label_center(&right_box[0]);
        result.push(format!(
            "{}╔{}╩{}╗{}",
            SPACE.repeat(left_pos),
            BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1 + label_width / 2),
            BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(label_width - label_width / 2 - 1 + right_pos),
            SPACE.repeat(right_width - right_pos - 1)
        ));

        let left_depth = left_box.len();
        let right_depth = right_box.len();
        for i in 0..std::cmp::max(left_depth, right_depth) {
            let left_str = left_box
                .get(i)
                .cloned()
                .unwrap_or_else(|| SPACE.repeat(left_width));
            let right_str = right_box
                .get(i)
                .cloned()
                .unwrap_or_else(|| SPACE.repeat(right_width));
            result.push(format!(
                "{}{}{}",
                left_str,
                SPACE.repeat(label_width),
                right_str
            ));
        }
        result
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strs = self.root().get_string();
        for s in strs.iter() {
            writeln!(f, "{}", s.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeRef};
    use crate::huffman::FrequencyTable;

    fn build_tree(text: &str) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::count(text)).expect("Tree must exist for non-empty text")
    }

    fn collect_leaf_depths(node: NodeRef, depth: usize, depths: &mut Vec<(char, usize)>) {
        match node.children() {
            Some((left, right)) => {
                collect_leaf_depths(left, depth + 1, depths);
                collect_leaf_depths(right, depth + 1, depths);
            }
            None => depths.push((node.symbol().unwrap(), depth)),
        }
    }

    fn assert_inner_nodes_are_full(node: NodeRef) {
        if node.is_leaf() {
            assert!(node.left().is_none() && node.right().is_none());
            assert!(node.symbol().is_some(), "Leaf without symbol");
            return;
        }
        let (left, right) = node
            .children()
            .expect("Inner node must have exactly two children");
        assert!(node.symbol().is_none(), "Inner node must not carry a symbol");
        assert_eq!(
            node.frequency(),
            left.frequency() + right.frequency(),
            "Inner node frequency must be the sum of its children"
        );
        assert_inner_nodes_are_full(left);
        assert_inner_nodes_are_full(right);
    }

    #[test]
    fn test_build_from_empty_table() {
        assert!(HuffmanTree::build(&FrequencyTable::default()).is_none());
    }

    #[test]
    fn test_build_single_symbol() {
        let tree = build_tree("aaaa");
        let root = tree.root();
        assert!(root.is_leaf(), "Single symbol tree must be a leaf");
        assert_eq!(root.symbol(), Some('a'));
        assert_eq!(root.frequency(), 4);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_build_two_symbols_less_frequent_goes_left() {
        let tree = build_tree("aaab");
        let (left, right) = tree.root().children().unwrap();
        assert_eq!(left.symbol(), Some('b'));
        assert_eq!(right.symbol(), Some('a'));
        assert_eq!(tree.root().frequency(), 4);
    }

    #[test]
    fn test_earlier_symbol_wins_ties() {
        let tree = build_tree("xy");
        let (left, right) = tree.root().children().unwrap();
        assert_eq!(left.symbol(), Some('x'), "First inserted node must go left");
        assert_eq!(right.symbol(), Some('y'));
    }

    #[test]
    fn test_merged_node_loses_ties_against_older_nodes() {
        // c and d merge into a node of frequency 2, which then ties with b and r
        let tree = build_tree("abracadabra");
        let (a, rest) = tree.root().children().unwrap();
        assert_eq!(a.symbol(), Some('a'));
        let (cd, br) = rest.children().unwrap();
        let (c, d) = cd.children().unwrap();
        let (b, r) = br.children().unwrap();
        assert_eq!(
            [c.symbol(), d.symbol(), b.symbol(), r.symbol()],
            [Some('c'), Some('d'), Some('b'), Some('r')]
        );
    }

    #[test]
    fn test_node_count_matches_merge_steps() {
        let tree = build_tree("mississippi river");
        let distinct = FrequencyTable::count("mississippi river").len();
        assert_eq!(tree.leaf_count(), distinct);
        assert_eq!(tree.node_count(), 2 * distinct - 1);
    }

    #[test]
    fn test_every_inner_node_has_two_children() {
        let tree = build_tree("she sells sea shells by the sea shore");
        assert_inner_nodes_are_full(tree.root());
        assert_eq!(tree.root().frequency(), 37);
    }

    #[test]
    fn test_higher_frequent_symbols_have_less_or_equal_depth() {
        let text = "aaaaaaaaaaaaaaaaabbbccccccccccccdddeeeeeeeeeeeeeeeeeeffffffffffffggggggggggggg";
        let frequencies = FrequencyTable::count(text);
        let tree = build_tree(text);
        let mut depths = vec![];
        collect_leaf_depths(tree.root(), 0, &mut depths);
        for &(symbol, depth) in &depths {
            for &(other_symbol, other_depth) in &depths {
                if frequencies.get(symbol) > frequencies.get(other_symbol) {
                    assert!(
                        depth <= other_depth,
                        "Symbol {} is deeper than less frequent symbol {}",
                        symbol,
                        other_symbol
                    );
                }
            }
        }
    }

    #[test]
    fn test_display_single_leaf() {
        let tree = build_tree("aa");
        assert_eq!(tree.to_string(), "(a:2)\n");
    }

    #[test]
    fn test_display_two_leaves() {
        let tree = build_tree("aaab");
        let expected = "     4\n     ║\n  ╔══╩══╗\n(b:1) (a:3)\n";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_display_escapes_whitespace() {
        let tree = build_tree("\n\n");
        assert_eq!(tree.to_string(), "(\\n:2)\n");
    }
}
