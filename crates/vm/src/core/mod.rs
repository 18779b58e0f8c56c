/// Memory implementation for the 100-cell decimal store
pub mod memory;

/// Opcode definitions and instruction-word encoding
pub mod opcodes;

/// Core virtual machine implementation
pub mod vm;
