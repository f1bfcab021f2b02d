//! The `vshuffle` command line tool: argument types and the shuffle driver.

pub mod parsers;
pub mod run;
