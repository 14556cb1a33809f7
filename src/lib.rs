//! # ignsync
//!
//! Core library for synchronizing a flat Python source tree into an
//! Ignition gateway project's `script-python` resource tree.
//!
//! The library scans both trees for modules, partitions them by identity
//! into "missing in Ignition", "missing in Python", and "present in both",
//! deep-compares the shared modules byte-for-byte, and materializes
//! missing or drifted modules in the Ignition tree. Propagation is
//! strictly one-way: Ignition-only modules are reported, never deleted.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

/// Module identity and path mapping between the two tree conventions
pub mod module;

/// Tree scanning for both layout conventions
pub mod scanner;

/// Identity partitioning and byte-exact content comparison
pub mod comparison;

/// One-way propagation engine
pub mod sync;

/// Configuration file parsing and root resolution
pub mod config;

pub(crate) mod workers;
