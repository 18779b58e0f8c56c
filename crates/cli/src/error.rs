#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("VM error: {0}")]
    Vm(#[from] cardiac_vm::VmError),
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
