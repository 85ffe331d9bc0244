//! Types used throughout the library.

pub mod err;
