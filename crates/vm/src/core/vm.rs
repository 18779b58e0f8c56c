use tracing::debug;

#[cfg(feature = "step-tracing")]
use tracing::trace;

use crate::{
    core::{
        memory::{Memory, MEMORY_SIZE, RETURN_ADDRESS_CELL, RUN_MARKER_CELL, WORD_MODULUS},
        opcodes::{decode, OpCode},
    },
    error::VmError,
    ext::io::{InputSource, OutputSink},
};

/// Powers of ten for the `SFT` digit shift. Shift counts are single decimal
/// digits, and `999 * 10^9` still fits an i64 intermediate.
const POWERS_OF_TEN: [i64; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The [`Vm`] struct represents one CARDIAC machine run. It owns the
/// [`Memory`] and the two registers for the duration of the run; the final
/// memory is read back through the caller's `Vm` handle after
/// [`Vm::execute`] returns.
#[derive(Clone, Debug)]
pub struct Vm {
    /// The 100-cell memory, mutated in place during execution.
    pub memory: Memory,

    /// The accumulator, always within `-999..=999` after each instruction.
    pub accumulator: i16,

    /// The current program counter.
    pub program_counter: usize,
}

/// [`ExecutionResult`] is the result of a single halted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The address the halting `HRS` instruction left in the program counter.
    pub halt_address: usize,

    /// The number of instructions executed, the halting `HRS` included.
    pub instructions_executed: u64,
}

impl Vm {
    /// Creates a new [`Vm`] over the given memory snapshot, starting at the
    /// given program counter. Fails fast if the start is outside `0..100`.
    ///
    /// ```
    /// use cardiac_vm::core::{memory::Memory, vm::Vm};
    ///
    /// let vm = Vm::new(Memory::new(), 1).expect("valid start");
    /// assert_eq!(vm.accumulator, 0);
    /// assert!(Vm::new(Memory::new(), 100).is_err());
    /// ```
    pub fn new(memory: Memory, start: usize) -> Result<Vm, VmError> {
        if start >= MEMORY_SIZE {
            return Err(VmError::StartOutOfRange(start));
        }

        Ok(Vm { memory, accumulator: 0, program_counter: start })
    }

    /// Runs the fetch-decode-execute loop until a `HRS` instruction halts the
    /// machine, calling the input source at each `INP` and the output sink at
    /// each `OUT`.
    ///
    /// A program without a reachable `HRS` never returns; bounding execution
    /// is the caller's responsibility. Collaborator failures and invalid
    /// opcodes abandon the run mid-cycle with the memory left as-is.
    pub fn execute<I, O>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<ExecutionResult, VmError>
    where
        I: InputSource,
        O: OutputSink,
    {
        // The run marker doubles as the CARDIAC bootstrap word (001 = INP 01),
        // so a run entered at cell 0 keeps its own entry instruction instead.
        if self.program_counter != RUN_MARKER_CELL {
            self.memory.write(RUN_MARKER_CELL, 1);
        }

        debug!(start = self.program_counter, "starting run");

        let mut instructions_executed = 0u64;
        loop {
            let halted = self.step(input, output)?;
            instructions_executed += 1;

            if let Some(halt_address) = halted {
                debug!(halt_address, instructions_executed, "machine halted");
                return Ok(ExecutionResult { halt_address, instructions_executed });
            }
        }
    }

    /// Executes the next instruction. Returns the halt address once the
    /// machine executes `HRS`, the sole loop exit.
    fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Option<usize>, VmError>
    where
        I: InputSource,
        O: OutputSink,
    {
        let fetch_pc = self.program_counter;
        if fetch_pc >= MEMORY_SIZE {
            return Err(VmError::ProgramCounterOutOfRange(fetch_pc));
        }

        let instruction = self.memory.read(fetch_pc);
        let (opcode_digit, address) = decode(instruction);
        let opcode = OpCode::from_digit(opcode_digit)
            .ok_or(VmError::InvalidOpcode { program_counter: fetch_pc, instruction })?;

        // A defined opcode bounds the word to 0..=999, so the address is a
        // valid cell index.
        let address = address as usize;

        self.program_counter += 1;

        #[cfg(feature = "step-tracing")]
        trace!(
            pc = fetch_pc,
            opcode = opcode.name(),
            address,
            accumulator = self.accumulator,
            "executing instruction"
        );

        match opcode {
            OpCode::Inp => {
                let value = input.read().map_err(VmError::Input)?;
                self.memory.write(address, value);
            }
            OpCode::Cla => self.accumulator = self.memory.read(address),
            OpCode::Add => {
                self.accumulator = self.accumulator.wrapping_add(self.memory.read(address))
            }
            OpCode::Tac => {
                if self.accumulator < 0 {
                    self.program_counter = address;
                }
            }
            OpCode::Sft => {
                let left = address / 10;
                let right = address % 10;
                let shifted =
                    i64::from(self.accumulator) * POWERS_OF_TEN[left] / POWERS_OF_TEN[right];
                self.accumulator = (shifted % i64::from(WORD_MODULUS)) as i16;
            }
            OpCode::Out => {
                output.write(self.memory.read(address)).map_err(VmError::Output)?;
            }
            OpCode::Sto => self.memory.write(address, self.accumulator),
            OpCode::Sub => {
                self.accumulator = self.accumulator.wrapping_sub(self.memory.read(address))
            }
            OpCode::Jmp => {
                self.memory.write(RETURN_ADDRESS_CELL, 800 + self.program_counter as i16);
                self.program_counter = address;
            }
            OpCode::Hrs => {
                self.program_counter = address;
                return Ok(Some(address));
            }
        }

        // Symmetric (truncating) modulo, load-bearing for TAC on negative
        // accumulators.
        self.accumulator %= WORD_MODULUS;

        Ok(None)
    }
}
