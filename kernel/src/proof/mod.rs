//! Proof module: canonical bytes, content hashing, step-trace digests.
//!
//! Depends on `step`. Nothing in the kernel depends on `proof`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod trace_hash;
