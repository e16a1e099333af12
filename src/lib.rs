#[macro_use]
extern crate failure;
extern crate itertools;

pub mod polymer;
