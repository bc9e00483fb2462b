#![forbid(unsafe_code)]

mod builtin;
pub mod model;
