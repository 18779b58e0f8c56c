pub(crate) mod args;
pub(crate) mod deck;
pub(crate) mod error;
pub(crate) mod log_args;

use args::{DemoArgs, RunArgs};
use clap::{Parser, Subcommand};
use error::Error;
use log_args::LogArgs;
use tracing::info;

use cardiac_vm::{
    core::vm::Vm,
    ext::io::{FixedInput, InputSource, LineInput, NullOutput, OutputSink, WriteOutput},
};

#[derive(Debug, Parser)]
#[clap(name = "cardiac", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "Virtual machine for the CARDIAC decimal educational computer")]
pub enum Subcommands {
    #[clap(name = "run", about = "Run a memory deck loaded from a file")]
    Run(RunArgs),

    #[clap(name = "demo", about = "Run the built-in shifted-sum demo program")]
    Demo(DemoArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    args.logs.init_tracing();

    match args.sub {
        Subcommands::Run(cmd) => run(cmd),
        Subcommands::Demo(cmd) => demo(cmd),
    }
}

fn run(cmd: RunArgs) -> Result<(), Error> {
    let memory = deck::load_deck(&cmd.deck)?;
    let mut vm = Vm::new(memory, cmd.start_pc)?;

    // the channel choice is an adapter choice, made here and never inside
    // the engine
    let mut input: Box<dyn InputSource> = match cmd.input_value {
        Some(value) => Box::new(FixedInput(value)),
        None => Box::new(LineInput::stdin()),
    };
    let mut output: Box<dyn OutputSink> = if cmd.no_output {
        Box::new(NullOutput)
    } else {
        Box::new(WriteOutput::stdout())
    };

    let result = vm.execute(&mut input, &mut output)?;
    info!(
        halt_address = result.halt_address,
        instructions = result.instructions_executed,
        "program halted"
    );

    if cmd.dump_memory {
        dump_memory(&vm);
    }

    Ok(())
}

fn demo(cmd: DemoArgs) -> Result<(), Error> {
    let mut vm = Vm::new(deck::demo_memory(), 1)?;
    let mut input = FixedInput(cmd.input_value);
    let mut output = WriteOutput::stdout();

    vm.execute(&mut input, &mut output)?;

    println!("memory[23] = {}", vm.memory.read(23));
    println!("memory[24] = {}", vm.memory.read(24));

    Ok(())
}

/// Prints the final memory as ten rows of ten cells.
fn dump_memory(vm: &Vm) {
    for (row, chunk) in vm.memory.cells.chunks(10).enumerate() {
        let cells = chunk.iter().map(|cell| format!("{cell:>4}")).collect::<Vec<_>>().join(" ");
        println!("{:>2}: {cells}", row * 10);
    }
}
