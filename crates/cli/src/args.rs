use clap::Args;

/// Arguments for the `run` subcommand.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Path to the memory deck to run: whitespace-separated signed integers
    /// filling memory from cell 0, `#` starts a comment, remaining cells are
    /// zero.
    #[clap(required = true)]
    pub deck: String,

    /// The starting program counter (the classic convention starts at 1).
    #[clap(long = "start-pc", value_name = "PC", default_value_t = 1)]
    pub start_pc: usize,

    /// Answer every INP instruction with this fixed value instead of reading
    /// one line per value from stdin.
    #[clap(long = "input-value", value_name = "VALUE")]
    pub input_value: Option<i16>,

    /// Discard OUT values instead of printing one per line.
    #[clap(long = "no-output")]
    pub no_output: bool,

    /// Print the final contents of all 100 memory cells after the run halts.
    #[clap(long = "dump-memory")]
    pub dump_memory: bool,
}

/// Arguments for the `demo` subcommand.
#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// The fixed value fed to the demo subroutine's INP instruction.
    #[clap(long = "input-value", value_name = "VALUE", default_value_t = 666)]
    pub input_value: i16,
}
