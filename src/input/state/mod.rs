mod core;
mod pointer;
#[cfg(test)]
mod tests;

pub use core::{BoardState, DrawingState, Gesture};
