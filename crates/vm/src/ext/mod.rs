/// Input and output collaborators injected into the engine
pub mod io;
