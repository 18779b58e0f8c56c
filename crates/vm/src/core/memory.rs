/// The number of cells in a CARDIAC memory.
pub const MEMORY_SIZE: usize = 100;

/// The word modulus. Every stored value and the accumulator are reduced into
/// the symmetric range `-999..=999` with truncating (round-toward-zero)
/// modulo by this constant.
pub const WORD_MODULUS: i16 = 1000;

/// The run-marker cell. The engine sets `memory[0] = 1` unconditionally at
/// the start of every run.
pub const RUN_MARKER_CELL: usize = 0;

/// The return-address cell. `JMP` writes `800 + pc` here so a subroutine can
/// copy the value into its own `HRS` slot and later resume the caller.
pub const RETURN_ADDRESS_CELL: usize = 99;

/// The [`Memory`] struct represents the memory of a CARDIAC machine: a fixed
/// array of 100 signed three-digit cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    /// The memory cells, each holding a value in `-999..=999` once written by
    /// a store-class instruction. Initial snapshots are taken verbatim, so a
    /// harness may inject out-of-domain words to exercise decode errors.
    pub cells: [i16; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[i16; MEMORY_SIZE]> for Memory {
    fn from(cells: [i16; MEMORY_SIZE]) -> Self {
        Memory { cells }
    }
}

impl Memory {
    /// Creates a new zeroed [`Memory`].
    ///
    /// ```
    /// use cardiac_vm::core::memory::Memory;
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.read(42), 0);
    /// ```
    pub fn new() -> Memory {
        Memory { cells: [0; MEMORY_SIZE] }
    }

    /// Reads the cell at the given address.
    ///
    /// Addresses produced by instruction decoding are always within `0..100`,
    /// so this indexes directly.
    pub fn read(&self, address: usize) -> i16 {
        self.cells[address]
    }

    /// Stores a value into the cell at the given address, reduced into the
    /// three-digit-with-sign domain.
    ///
    /// The reduction uses truncating modulo, so negative values keep their
    /// sign.
    ///
    /// ```
    /// use cardiac_vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.write(10, 1234);
    /// assert_eq!(memory.read(10), 234);
    /// memory.write(10, -1234);
    /// assert_eq!(memory.read(10), -234);
    /// ```
    pub fn write(&mut self, address: usize, value: i16) {
        self.cells[address] = value % WORD_MODULUS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_in_range() {
        let mut memory = Memory::new();
        memory.write(0, 999);
        memory.write(1, -999);
        assert_eq!(memory.read(0), 999);
        assert_eq!(memory.read(1), -999);
    }

    #[test]
    fn test_write_wraps_symmetric() {
        let mut memory = Memory::new();
        memory.write(5, 1666);
        assert_eq!(memory.read(5), 666);
        memory.write(5, -1666);
        assert_eq!(memory.read(5), -666);
        memory.write(5, 1000);
        assert_eq!(memory.read(5), 0);
    }

    #[test]
    fn test_snapshot_taken_verbatim() {
        let mut cells = [0i16; MEMORY_SIZE];
        cells[17] = 9934;
        let memory = Memory::from(cells);
        assert_eq!(memory.read(17), 9934);
    }
}
