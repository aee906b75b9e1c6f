//! Generic structures, not specific to proofs or caves.

pub mod frontier;
