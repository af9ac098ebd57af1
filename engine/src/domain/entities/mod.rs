pub mod process;

pub use process::{Process, ProcessBuilder};
