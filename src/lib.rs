pub mod color;
pub mod config;
pub mod cube;
pub mod derive;
pub mod r#move;
pub mod scan;
pub mod scramble;
pub mod solve;
pub mod state;
pub mod stats;

pub mod prelude;


#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;
