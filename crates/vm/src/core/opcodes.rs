//! CARDIAC opcodes and instruction-word encoding.
//!
//! An instruction word is a signed three-digit value `opcode * 100 + address`
//! with the opcode in `0..=9` and the address in `0..=99`. This encoding is
//! the wire format between a program loader and the engine and is preserved
//! exactly for compatibility with existing CARDIAC decks.

/// The ten CARDIAC opcodes, selected by the leading digit of an instruction
/// word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// `0xx` — read one value from the input source, reduce it modulo 1000,
    /// and store it into `memory[address]`.
    Inp = 0,
    /// `1xx` — load `memory[address]` into the accumulator.
    Cla = 1,
    /// `2xx` — add `memory[address]` to the accumulator.
    Add = 2,
    /// `3xx` — branch to `address` if the accumulator is strictly negative.
    Tac = 3,
    /// `4xx` — shift the accumulator's digits left then right; the address
    /// digits `LR` encode the two shift counts.
    Sft = 4,
    /// `5xx` — send `memory[address]` to the output sink.
    Out = 5,
    /// `6xx` — store the accumulator into `memory[address]`.
    Sto = 6,
    /// `7xx` — subtract `memory[address]` from the accumulator.
    Sub = 7,
    /// `8xx` — write `800 + pc` into cell 99, then jump to `address`.
    Jmp = 8,
    /// `9xx` — set the program counter to `address` and halt.
    Hrs = 9,
}

impl OpCode {
    /// Returns the opcode for a decoded leading digit, or `None` if the digit
    /// is outside the defined `0..=9` range (negative or four-digit words
    /// decode outside it).
    ///
    /// ```
    /// use cardiac_vm::core::opcodes::OpCode;
    ///
    /// assert_eq!(OpCode::from_digit(1), Some(OpCode::Cla));
    /// assert_eq!(OpCode::from_digit(10), None);
    /// assert_eq!(OpCode::from_digit(-1), None);
    /// ```
    pub fn from_digit(digit: i16) -> Option<OpCode> {
        match digit {
            0 => Some(OpCode::Inp),
            1 => Some(OpCode::Cla),
            2 => Some(OpCode::Add),
            3 => Some(OpCode::Tac),
            4 => Some(OpCode::Sft),
            5 => Some(OpCode::Out),
            6 => Some(OpCode::Sto),
            7 => Some(OpCode::Sub),
            8 => Some(OpCode::Jmp),
            9 => Some(OpCode::Hrs),
            _ => None,
        }
    }

    /// Returns the mnemonic of the opcode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            OpCode::Inp => "INP",
            OpCode::Cla => "CLA",
            OpCode::Add => "ADD",
            OpCode::Tac => "TAC",
            OpCode::Sft => "SFT",
            OpCode::Out => "OUT",
            OpCode::Sto => "STO",
            OpCode::Sub => "SUB",
            OpCode::Jmp => "JMP",
            OpCode::Hrs => "HRS",
        }
    }

    /// Returns the numeric opcode digit.
    #[inline]
    pub const fn code(&self) -> i16 {
        *self as i16
    }
}

/// Encodes an opcode and address into an instruction word.
///
/// ```
/// use cardiac_vm::core::opcodes::{encode, OpCode};
///
/// assert_eq!(encode(OpCode::Cla, 23), 123);
/// assert_eq!(encode(OpCode::Inp, 24), 24);
/// ```
pub fn encode(opcode: OpCode, address: i16) -> i16 {
    opcode.code() * 100 + address
}

/// Decodes an instruction word into its `(opcode digit, address)` pair using
/// truncating division, so both components of a negative word come out
/// negative rather than silently aliasing a defined opcode.
///
/// ```
/// use cardiac_vm::core::opcodes::decode;
///
/// assert_eq!(decode(123), (1, 23));
/// assert_eq!(decode(999), (9, 99));
/// assert_eq!(decode(-123), (-1, -23));
/// ```
pub fn decode(word: i16) -> (i16, i16) {
    (word / 100, word % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OpCode; 10] = [
        OpCode::Inp,
        OpCode::Cla,
        OpCode::Add,
        OpCode::Tac,
        OpCode::Sft,
        OpCode::Out,
        OpCode::Sto,
        OpCode::Sub,
        OpCode::Jmp,
        OpCode::Hrs,
    ];

    #[test]
    fn test_encode_decode_round_trip() {
        for opcode in ALL {
            for address in [0i16, 1, 10, 23, 50, 99] {
                let word = encode(opcode, address);
                assert_eq!(decode(word), (opcode.code(), address));
                assert_eq!(OpCode::from_digit(opcode.code()), Some(opcode));
            }
        }
    }

    #[test]
    fn test_from_digit_rejects_out_of_range() {
        assert_eq!(OpCode::from_digit(10), None);
        assert_eq!(OpCode::from_digit(99), None);
        assert_eq!(OpCode::from_digit(-1), None);
    }

    #[test]
    fn test_decode_negative_word() {
        // a negative cell must not decode to a defined opcode
        let (opcode, address) = decode(-512);
        assert_eq!((opcode, address), (-5, -12));
        assert_eq!(OpCode::from_digit(opcode), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(OpCode::Inp.name(), "INP");
        assert_eq!(OpCode::Hrs.name(), "HRS");
    }
}
