use larch_types::Digest;

/// A mutable, resettable hash object.
///
/// One logical instance is threaded by exclusive borrow through a whole
/// ingest traversal, so implementations carry state across calls and must be
/// reset before each independent computation. [`digest_data`] enforces that
/// discipline; the engine never drives a digester any other way.
///
/// Concurrent use of one instance is ruled out by the `&mut` receiver. A
/// parallel traversal (if ever added) needs one instance per branch.
pub trait Digester {
    /// Discard any accumulated state.
    fn reset(&mut self);

    /// Feed input bytes into the current computation.
    fn write(&mut self, data: &[u8]);

    /// Produce the digest of everything written since the last reset.
    fn finish(&mut self) -> Digest;
}

impl Digester for blake3::Hasher {
    fn reset(&mut self) {
        blake3::Hasher::reset(self);
    }

    fn write(&mut self, data: &[u8]) {
        self.update(data);
    }

    fn finish(&mut self) -> Digest {
        Digest::from_raw(self.finalize().as_bytes().to_vec())
    }
}

/// Compute the digest of `data`, independent of any prior use of `digester`.
///
/// Resets first, so the result is a pure function of `data` and the
/// algorithm -- never of what the shared instance hashed before.
pub fn digest_data<D: Digester + ?Sized>(digester: &mut D, data: &[u8]) -> Digest {
    digester.reset();
    digester.write(data);
    digester.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_one_shot_blake3() {
        let data = b"hello world";
        let mut hasher = blake3::Hasher::new();
        let d = digest_data(&mut hasher, data);
        assert_eq!(d.as_bytes(), blake3::hash(data).as_bytes());
        assert_eq!(d.len(), 32);
    }

    #[test]
    fn deterministic_across_calls() {
        let mut hasher = blake3::Hasher::new();
        let d1 = digest_data(&mut hasher, b"payload");
        let d2 = digest_data(&mut hasher, b"payload");
        assert_eq!(d1, d2);
    }

    #[test]
    fn reset_isolates_from_prior_state() {
        // A dirty hasher must give the same answer as a fresh one.
        let mut dirty = blake3::Hasher::new();
        dirty.update(b"leftover state from an earlier computation");
        let d_dirty = digest_data(&mut dirty, b"input");

        let mut fresh = blake3::Hasher::new();
        let d_fresh = digest_data(&mut fresh, b"input");

        assert_eq!(d_dirty, d_fresh);
    }

    #[test]
    fn different_inputs_differ() {
        let mut hasher = blake3::Hasher::new();
        let d1 = digest_data(&mut hasher, b"one");
        let d2 = digest_data(&mut hasher, b"two");
        assert_ne!(d1, d2);
    }

    /// Digester that records the order of calls made against it.
    struct Recording {
        calls: Vec<&'static str>,
    }

    impl Digester for Recording {
        fn reset(&mut self) {
            self.calls.push("reset");
        }

        fn write(&mut self, _data: &[u8]) {
            self.calls.push("write");
        }

        fn finish(&mut self) -> Digest {
            self.calls.push("finish");
            Digest::from_raw(vec![0xee])
        }
    }

    #[test]
    fn digest_data_resets_before_writing() {
        let mut rec = Recording { calls: Vec::new() };
        let _ = digest_data(&mut rec, b"abc");
        assert_eq!(rec.calls, vec!["reset", "write", "finish"]);
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut hasher = blake3::Hasher::new();
        let dynamic: &mut dyn Digester = &mut hasher;
        let d = digest_data(dynamic, b"dyn");
        assert_eq!(d.as_bytes(), blake3::hash(b"dyn").as_bytes());
    }
}
