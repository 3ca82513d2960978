//! Command implementations for the ttt-minimax CLI

pub mod solve;
