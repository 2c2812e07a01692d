use huffpack::huffman_coding::{alphabet::Alphabet, code_map::CodeMap, tree::CodeTree, tree::Node};
use huffpack::{decode, encode, Container, HuffError};
use proptest::prelude::*;

const SKEWED_TEXT: &[u8] = b"the tree in the east sees these three trees; the streets are neat and the seas are green here, so see the tree";

fn round_trip(data: &[u8]) -> Vec<u8> {
    let bytes = encode(data).unwrap().serialize();
    decode(&Container::deserialize(&bytes).unwrap()).unwrap()
}

#[test]
fn repeated_single_byte() {
    let data = vec![b'a'; 100];
    let container = encode(&data).unwrap();
    let tree = CodeTree::build(&container.alphabet).unwrap();
    assert_eq!(CodeMap::from_tree(&tree).len(), 1);
    assert!(container.payload.len() <= (100 + 7) / 8);
    assert_eq!(round_trip(&data), data);
}

#[test]
fn two_equal_symbols() {
    let container = encode(b"abab").unwrap();
    let tree = CodeTree::build(&container.alphabet).unwrap();
    match tree.root() {
        Node::Internal { left, right, freq } => {
            assert_eq!(*freq, 4);
            assert!(matches!(**left, Node::Leaf { .. }));
            assert!(matches!(**right, Node::Leaf { .. }));
        }
        other => panic!("expected an internal root, got {:?}", other),
    }
    let map = CodeMap::from_tree(&tree);
    assert!(map.iter().all(|(_, code)| code.len() == 1));
    assert_eq!(round_trip(b"abab"), b"abab".to_vec());
}

#[test]
fn empty_buffer() {
    let container = encode(b"").unwrap();
    assert!(container.alphabet.is_empty());
    assert!(decode(&container).unwrap().is_empty());
    assert!(round_trip(b"").is_empty());
}

#[test]
fn skewed_text_shrinks() {
    assert_eq!(SKEWED_TEXT.len(), 110);
    let bytes = encode(SKEWED_TEXT).unwrap().serialize();
    assert!(bytes.len() < SKEWED_TEXT.len());
    assert_eq!(round_trip(SKEWED_TEXT), SKEWED_TEXT.to_vec());
}

#[test]
fn wrong_magic_is_rejected() {
    let mut bytes = encode(SKEWED_TEXT).unwrap().serialize();
    bytes[0..4].copy_from_slice(b"XXXX");
    assert!(matches!(
        Container::deserialize(&bytes),
        Err(HuffError::Format(_))
    ));
}

#[test]
fn repeated_sample_shrinks() {
    let data = b"ajhhsg238oidjwnfdwpnjnwcdijwcipdhbwdhidciwspdcsoacdsoducbkshodbhokbk\x08,diuwer823iu4dsazfuwpc89249\n\x00".repeat(9);
    let bytes = encode(&data).unwrap().serialize();
    assert!(bytes.len() < data.len());
    assert_eq!(round_trip(&data), data);
}

#[test]
fn counts_above_255_round_trip() {
    let mut data = vec![b'e'; 5000];
    data.extend(std::iter::repeat(b't').take(1200));
    data.extend(b"a rarely seen tail".iter());
    let container = encode(&data).unwrap();
    assert!(container.alphabet.iter().all(|s| s.freq >= 1));
    assert_eq!(round_trip(&data), data);
}

#[test]
fn all_byte_values() {
    let data: Vec<u8> = (0..=255u8).cycle().take(256 * 3 + 17).collect();
    let container = encode(&data).unwrap();
    assert_eq!(container.alphabet.len(), 256);
    assert_eq!(container.payload_offset(), 10 + 512);
    assert_eq!(round_trip(&data), data);
}

proptest! {
    #[test]
    fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn prop_round_trip_small_alphabet(data in proptest::collection::vec(0u8..4, 1..4096)) {
        prop_assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn prop_container_round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let container = encode(&data).unwrap();
        prop_assert_eq!(Container::deserialize(&container.serialize()).unwrap(), container);
    }

    #[test]
    fn prop_deterministic(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(encode(&data).unwrap(), encode(&data).unwrap());
    }

    #[test]
    fn prop_prefix_free(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let tree = CodeTree::build(&Alphabet::from_data(&data)).unwrap();
        prop_assert!(CodeMap::from_tree(&tree).is_prefix_free());
    }

    #[test]
    fn prop_deserialize_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = Container::deserialize(&bytes);
    }
}
