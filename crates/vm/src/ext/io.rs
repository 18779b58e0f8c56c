//! Input and output collaborators for the execution engine.
//!
//! The engine never reads or writes a channel itself; it is handed one
//! [`InputSource`] and one [`OutputSink`] per run and calls them at each
//! `INP` and `OUT` instruction. Choosing a channel is therefore an adapter
//! choice made by the caller, never a flag checked inside the engine.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use eyre::{bail, Result, WrapErr};

/// A source of input values, called once per `INP` instruction.
///
/// The call may block indefinitely waiting for external data; the engine
/// does not proceed past the `INP` until it returns. Failures (including
/// cancellation signalled by the source) propagate to the engine's caller
/// unchanged.
pub trait InputSource {
    /// Produces the next signed input value.
    fn read(&mut self) -> Result<i16>;
}

/// A sink for output values, called once per `OUT` instruction.
pub trait OutputSink {
    /// Consumes one signed output value.
    fn write(&mut self, value: i16) -> Result<()>;
}

impl<I: InputSource + ?Sized> InputSource for Box<I> {
    fn read(&mut self) -> Result<i16> {
        (**self).read()
    }
}

impl<O: OutputSink + ?Sized> OutputSink for Box<O> {
    fn write(&mut self, value: i16) -> Result<()> {
        (**self).write(value)
    }
}

/// An [`InputSource`] that always returns the same value.
#[derive(Clone, Copy, Debug)]
pub struct FixedInput(pub i16);

impl InputSource for FixedInput {
    fn read(&mut self) -> Result<i16> {
        Ok(self.0)
    }
}

/// An [`InputSource`] that pops values from a fixed queue and fails once the
/// queue is exhausted. Used for deterministic multi-value input streams in
/// tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    values: VecDeque<i16>,
}

impl ScriptedInput {
    /// Creates a scripted source yielding the given values in order.
    pub fn new(values: impl IntoIterator<Item = i16>) -> ScriptedInput {
        ScriptedInput { values: values.into_iter().collect() }
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self) -> Result<i16> {
        match self.values.pop_front() {
            Some(value) => Ok(value),
            None => bail!("scripted input exhausted"),
        }
    }
}

/// An [`InputSource`] that parses one signed integer per line from a
/// buffered reader.
#[derive(Debug)]
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl LineInput<io::StdinLock<'static>> {
    /// Creates a line source reading from standard input.
    pub fn stdin() -> Self {
        LineInput::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    /// Creates a line source over any buffered reader.
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read(&mut self) -> Result<i16> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line).wrap_err("failed to read input line")?;
        if bytes == 0 {
            bail!("input stream ended before the program halted");
        }
        line.trim().parse::<i16>().wrap_err_with(|| format!("invalid input value {:?}", line.trim()))
    }
}

/// An [`OutputSink`] that discards every value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullOutput;

impl OutputSink for NullOutput {
    fn write(&mut self, _value: i16) -> Result<()> {
        Ok(())
    }
}

/// An [`OutputSink`] that writes one value per line to a writer.
#[derive(Debug)]
pub struct WriteOutput<W: Write> {
    writer: W,
}

impl WriteOutput<io::Stdout> {
    /// Creates a sink writing to standard output.
    pub fn stdout() -> Self {
        WriteOutput::new(io::stdout())
    }
}

impl<W: Write> WriteOutput<W> {
    /// Creates a sink over any writer.
    pub fn new(writer: W) -> Self {
        WriteOutput { writer }
    }
}

impl<W: Write> OutputSink for WriteOutput<W> {
    fn write(&mut self, value: i16) -> Result<()> {
        writeln!(self.writer, "{value}").wrap_err("failed to write output value")?;
        Ok(())
    }
}

/// An [`OutputSink`] that records every value for later assertions.
#[derive(Clone, Debug, Default)]
pub struct RecordedOutput {
    /// The values received, in emission order.
    pub values: Vec<i16>,
}

impl OutputSink for RecordedOutput {
    fn write(&mut self, value: i16) -> Result<()> {
        self.values.push(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_input_repeats() {
        let mut input = FixedInput(666);
        assert_eq!(input.read().expect("read failed"), 666);
        assert_eq!(input.read().expect("read failed"), 666);
    }

    #[test]
    fn test_scripted_input_exhaustion() {
        let mut input = ScriptedInput::new([1, -2]);
        assert_eq!(input.read().expect("read failed"), 1);
        assert_eq!(input.read().expect("read failed"), -2);
        assert!(input.read().is_err());
    }

    #[test]
    fn test_line_input_parses_signed_values() {
        let mut input = LineInput::new("42\n  -999\n".as_bytes());
        assert_eq!(input.read().expect("read failed"), 42);
        assert_eq!(input.read().expect("read failed"), -999);
        assert!(input.read().is_err());
    }

    #[test]
    fn test_line_input_rejects_garbage() {
        let mut input = LineInput::new("axe\n".as_bytes());
        assert!(input.read().is_err());
    }

    #[test]
    fn test_write_output_one_value_per_line() {
        let mut buffer = Vec::new();
        {
            let mut output = WriteOutput::new(&mut buffer);
            output.write(-90).expect("write failed");
            output.write(666).expect("write failed");
        }
        assert_eq!(String::from_utf8(buffer).expect("invalid utf8"), "-90\n666\n");
    }

    #[test]
    fn test_recorded_output_captures_in_order() {
        let mut output = RecordedOutput::default();
        output.write(1).expect("write failed");
        output.write(2).expect("write failed");
        assert_eq!(output.values, vec![1, 2]);
    }
}
