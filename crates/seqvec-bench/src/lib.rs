//! Benchmark-only crate; see `benches/seq_ops.rs`.
