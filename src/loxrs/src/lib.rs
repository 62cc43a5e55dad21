// loxrs/src/lib.rs

pub mod cli;
pub mod constants;
