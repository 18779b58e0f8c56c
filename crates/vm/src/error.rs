/// Error type for the execution engine.
///
/// All failures surface to whoever invoked the engine; the engine itself
/// never logs or swallows them.
#[derive(Debug, thiserror::Error)]
pub enum VmError {
    /// A fetched instruction word decoded to an opcode outside `0..=9`.
    /// Reports the fetch-time program counter and the raw word so corrupted
    /// decks are diagnosable instead of silently mis-executing.
    #[error("invalid opcode in word {instruction} at program counter {program_counter}")]
    InvalidOpcode {
        /// The program counter the word was fetched from.
        program_counter: usize,
        /// The raw instruction word.
        instruction: i16,
    },
    /// The caller supplied a starting program counter outside `0..=99`.
    #[error("start program counter {0} out of range 0..100")]
    StartOutOfRange(usize),
    /// The program counter advanced past the last memory cell without
    /// reaching a halt instruction.
    #[error("program counter {0} ran off the end of memory")]
    ProgramCounterOutOfRange(usize),
    /// The input source failed or was cancelled; the run is abandoned
    /// mid-cycle and the triggering `INP` did not complete.
    #[error("input source failed: {0}")]
    Input(#[source] eyre::Report),
    /// The output sink failed; same abandonment semantics as input failures.
    #[error("output sink failed: {0}")]
    Output(#[source] eyre::Report),
}
