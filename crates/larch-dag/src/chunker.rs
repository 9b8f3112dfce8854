//! Fixed-size chunker for splitting file content into storable blocks.

/// Engine-wide block size: 256 KiB.
pub const BLOCK_SIZE: usize = 256 * 1024;

/// Fixed-size chunker.
///
/// Splits a byte buffer into contiguous slices of `block_size` bytes; only
/// the final slice may be shorter, and it is never empty. Empty input
/// produces no chunks. Chunking is pure -- no hashing, no storage, no copies:
/// every chunk borrows from the input buffer and lives only until it is
/// written.
pub struct Chunker {
    block_size: usize,
}

impl Chunker {
    /// Create a chunker with the given block size in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is zero.
    pub fn new(block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be non-zero");
        Self { block_size }
    }

    /// Split `data` into ordered fixed-size slices.
    pub fn chunk<'a>(&self, data: &'a [u8]) -> Vec<&'a [u8]> {
        if data.is_empty() {
            return Vec::new();
        }
        data.chunks(self.block_size).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        let chunker = Chunker::new(1024);
        assert!(chunker.chunk(b"").is_empty());
    }

    #[test]
    fn input_below_block_size_is_one_chunk() {
        let chunker = Chunker::new(16);
        let data = vec![0xABu8; 10];
        let chunks = chunker.chunk(&data);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], &data[..]);
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let chunker = Chunker::new(16);
        let data = vec![0xCDu8; 32];
        let chunks = chunker.chunk(&data);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 16);
        assert_eq!(chunks[1].len(), 16);
    }

    #[test]
    fn one_past_the_boundary_adds_a_one_byte_tail() {
        let chunker = Chunker::new(16);
        let data = vec![0u8; 17];
        let chunks = chunker.chunk(&data);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 16);
        assert_eq!(chunks[1].len(), 1);
    }

    #[test]
    fn scenario_300000_bytes_at_block_size() {
        // 300000 = 262144 + 37856
        let chunker = Chunker::new(BLOCK_SIZE);
        let data = vec![0x5Au8; 300_000];
        let chunks = chunker.chunk(&data);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 262_144);
        assert_eq!(chunks[1].len(), 37_856);
    }

    #[test]
    #[should_panic(expected = "block size must be non-zero")]
    fn zero_block_size_panics() {
        let _ = Chunker::new(0);
    }

    proptest! {
        #[test]
        fn chunk_count_is_ceil_div(len in 0usize..4096, block in 1usize..512) {
            let data = vec![0u8; len];
            let chunks = Chunker::new(block).chunk(&data);
            prop_assert_eq!(chunks.len(), len.div_ceil(block));
        }

        #[test]
        fn concatenation_reproduces_input(data in proptest::collection::vec(any::<u8>(), 0..2048), block in 1usize..256) {
            let chunks = Chunker::new(block).chunk(&data);
            let rebuilt: Vec<u8> = chunks.concat();
            prop_assert_eq!(rebuilt, data);
        }

        #[test]
        fn only_the_last_chunk_is_short(data in proptest::collection::vec(any::<u8>(), 1..2048), block in 1usize..256) {
            let chunks = Chunker::new(block).chunk(&data);
            for chunk in &chunks[..chunks.len() - 1] {
                prop_assert_eq!(chunk.len(), block);
            }
            let last = chunks[chunks.len() - 1];
            prop_assert!(!last.is_empty());
            prop_assert!(last.len() <= block);
        }
    }
}
