pub mod assembler;

pub use assembler::{DocumentAssembler, PipelineError};
