// loxrs/src/constants.rs

/// Exit status for command line usage errors (sysexits.h EX_USAGE).
pub const EX_USAGE: u8 = 64;

/// Exit status for lexical errors in the input (sysexits.h EX_DATAERR).
pub const EX_DATAERR: u8 = 65;
