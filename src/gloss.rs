//! Main module for gloss parsing and rendering.

pub mod ast;
pub mod error;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod render;
pub mod testing;
pub mod token;
