use rustc_hash::FxHashMap;

use super::tree::{CodeTree, Node};
use crate::bitstream::bitbuffer::BitBuffer;

/// Byte to code lookup derived from a CodeTree. Left edges are 0 bits, right edges 1 bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeMap {
    codes: FxHashMap<u8, BitBuffer>,
}

impl CodeMap {
    /// Walk the whole tree and record the path to every leaf.
    /// A tree that is a single leaf gets the fixed one bit code `0`.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut codes = FxHashMap::default();
        match tree.root() {
            Node::Leaf { byte, .. } => {
                codes.insert(*byte, BitBuffer::from_iter([false]));
            }
            root => collect_codes(root, &BitBuffer::new(), &mut codes),
        }
        Self { codes }
    }

    /// Code for `byte`, or None if the byte is not in the alphabet.
    pub fn get(&self, byte: u8) -> Option<&BitBuffer> {
        self.codes.get(&byte)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitBuffer)> {
        self.codes.iter().map(|(&byte, code)| (byte, code))
    }

    /// True if no code is a prefix of another code.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().all(|(a, code_a)| {
            self.codes
                .iter()
                .all(|(b, code_b)| a == b || !code_a.is_prefix_of(code_b))
        })
    }
}

/// Recursively walk the tree and record the path taken to each leaf.
fn collect_codes(node: &Node, prefix: &BitBuffer, codes: &mut FxHashMap<u8, BitBuffer>) {
    match node {
        Node::Internal { left, right, .. } => {
            for (bit, child) in [(false, left), (true, right)] {
                let mut path = prefix.clone();
                path.push_bit(bit);
                collect_codes(child, &path, codes);
            }
        }
        Node::Leaf { byte, .. } => {
            codes.insert(*byte, prefix.clone());
        }
    }
}
