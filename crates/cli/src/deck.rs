//! Memory-deck loading for the host binary.
//!
//! A deck is a plain-text snapshot of the machine's memory: whitespace or
//! newline separated signed integers filling cells from address 0, `#`
//! starting a line comment, unnamed trailing cells left at zero.

use std::fs;

use cardiac_vm::core::{
    memory::{Memory, MEMORY_SIZE},
    opcodes::{encode, OpCode::*},
};
use eyre::{bail, Result, WrapErr};

/// Reads and parses a deck file into a memory snapshot.
pub(crate) fn load_deck(path: &str) -> Result<Memory> {
    let contents =
        fs::read_to_string(path).wrap_err_with(|| format!("failed to read deck file {path}"))?;
    parse_deck(&contents)
}

/// Parses deck text into a memory snapshot, rejecting values outside the
/// three-digit-with-sign domain and decks longer than memory.
pub(crate) fn parse_deck(contents: &str) -> Result<Memory> {
    let mut cells = [0i16; MEMORY_SIZE];
    let mut index = 0usize;

    for (line_number, line) in contents.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split_whitespace() {
            if index >= MEMORY_SIZE {
                bail!("deck has more than {MEMORY_SIZE} values");
            }

            let value: i16 = token
                .parse()
                .wrap_err_with(|| format!("invalid deck value {token:?} on line {}", line_number + 1))?;
            if !(-999..=999).contains(&value) {
                bail!("deck value {value} on line {} outside -999..=999", line_number + 1);
            }

            cells[index] = value;
            index += 1;
        }
    }

    Ok(Memory::from(cells))
}

/// The built-in demo program: the main routine computes a shifted sum, then
/// jumps to a subroutine that echoes one input value and returns through the
/// cell-99 convention.
pub(crate) fn demo_memory() -> Memory {
    let mut memory = Memory::new();

    // main routine
    memory.cells[1] = encode(Cla, 20);
    memory.cells[2] = encode(Add, 21);
    memory.cells[3] = encode(Sft, 21); // * 100 / 10
    memory.cells[4] = encode(Sto, 23);
    memory.cells[5] = encode(Out, 23);
    memory.cells[6] = encode(Jmp, 10);
    memory.cells[7] = encode(Hrs, 1);

    // subroutine
    memory.cells[10] = encode(Inp, 24);
    memory.cells[11] = encode(Out, 24);
    memory.cells[12] = encode(Cla, 99); // load return address
    memory.cells[13] = encode(Sto, 14); // store it in the next cell
    memory.cells[14] = 0; // filled by the previous instruction

    // data
    memory.cells[20] = -3;
    memory.cells[21] = -6;
    memory.cells[23] = 999;
    memory.cells[24] = 888;

    memory
}
