//! CARDIAC decimal virtual machine.
//!
//! This crate provides the execution engine for a CARDIAC-style educational
//! computer: 100 signed three-digit memory cells, a single accumulator, a
//! program counter, and ten instructions encoded as `opcode * 100 + address`.
//! Input and output are injected through the [`ext::io`] collaborator traits.

/// Core machine implementation, including memory, instruction decoding, and
/// the fetch-decode-execute loop
pub mod core;

/// Extensions to the core machine, including input/output collaborators
pub mod ext;

/// Error types for the execution engine
pub mod error;

pub use error::VmError;
