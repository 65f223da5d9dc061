pub mod collector;
pub mod cpu;
pub mod kill;
pub mod memory;
pub mod process;
pub mod snapshot;
pub mod source;
