//! Concrete `RulesEngine` implementations.

pub mod checkers;
