use log::trace;

use super::alphabet::Alphabet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    Leaf {
        byte: u8,
        freq: u32,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        freq: u32,
    },
}

impl Node {
    /// Aggregate frequency of everything below (and including) this node.
    pub fn freq(&self) -> u32 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    /// Follow one edge: `false` (0) goes left, `true` (1) goes right. None at a leaf.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { &**right } else { &**left }),
        }
    }

    /// Longest root-to-leaf path below this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves below this node.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaves() + right.leaves(),
        }
    }
}

/// A node waiting in the reduction queue. `seq` is the order in which it entered the queue:
/// alphabet position for leaves, then one more for each merged node.
#[derive(Eq, PartialEq, Debug)]
struct Pending {
    seq: usize,
    node: Node,
}

impl Ord for Pending {
    /// BinaryHeap pops the greatest entry, so the lowest frequency is greatest.
    /// Among equal frequencies the most recently queued entry is greatest.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Huffman code tree, rebuilt from an Alphabet on both sides of the codec.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CodeTree {
    root: Node,
}

impl CodeTree {
    /// Build the tree for `alphabet`, or None if the alphabet is empty.
    ///
    /// Tie-break rule: the two nodes merged at each step are the two lowest-frequency nodes,
    /// and among equal frequencies the most recently queued node goes first. The first node
    /// taken becomes the left child (bit 0), the second the right child (bit 1). The merged
    /// node is queued last. This is the same tree that repeatedly stable-sorting the node list
    /// by descending frequency and popping two nodes off its tail would give.
    ///
    /// A single-symbol alphabet gives a tree whose root is a bare leaf.
    pub fn build(alphabet: &Alphabet) -> Option<Self> {
        let mut queue: BinaryHeap<Pending> = alphabet
            .iter()
            .enumerate()
            .map(|(seq, sym)| Pending {
                seq,
                node: Node::Leaf {
                    byte: sym.byte,
                    freq: sym.freq as u32,
                },
            })
            .collect();
        let mut next_seq = queue.len();

        // Pare the queue down to a single node; an empty queue means an empty alphabet.
        let root = loop {
            let left = queue.pop()?.node;
            let right = match queue.pop() {
                Some(pending) => pending.node,
                None => break left,
            };
            let freq = left.freq() + right.freq();
            queue.push(Pending {
                seq: next_seq,
                node: Node::Internal {
                    left: Box::new(left),
                    right: Box::new(right),
                    freq,
                },
            });
            next_seq += 1;
        };

        trace!(
            "Built code tree: {} leaves, depth {}, weight {}",
            root.leaves(),
            root.depth(),
            root.freq()
        );
        Some(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the alphabet had a single symbol and the root is that leaf.
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.root, Node::Leaf { .. })
    }
}
