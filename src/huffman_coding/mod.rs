//! The huffman_coding module derives the static Huffman code used by huffpack.
//!
//! - alphabet: the distinct bytes of the input with one byte weights, in first-occurrence order.
//! - tree: greedy reduction of the alphabet into a binary code tree with a fixed tie-break rule.
//! - code_map: byte to bit sequence table read off the tree.
//!
//! The tree is never stored. The decoder rebuilds it from the alphabet in the container, so the
//! reduction must give exactly the same tree on both sides; see `CodeTree::build` for the rule.
//!

pub mod alphabet;
pub mod code_map;
pub mod tree;
