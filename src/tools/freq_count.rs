use rustc_hash::FxHashMap;

/// Returns a frequency count of the input data as (byte, count) pairs, in the order
/// each byte value first appears.
pub fn ordered_freqs(data: &[u8]) -> Vec<(u8, u32)> {
    let mut slots: FxHashMap<u8, usize> = FxHashMap::default();
    let mut freqs: Vec<(u8, u32)> = Vec::with_capacity(256);
    for &byte in data {
        let slot = *slots.entry(byte).or_insert_with(|| {
            freqs.push((byte, 0));
            freqs.len() - 1
        });
        freqs[slot].1 += 1;
    }
    freqs
}
