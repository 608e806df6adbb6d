//! Arithmetic drill, quizzes the facts of an addition, subtraction or multiplication table.

/// Main traits and types
pub mod traits;

/// The arithmetic operations.
pub mod operation;

// / Fact tables for an operation.
pub mod table;

// / Question selection.
pub mod algorithm;

// / Keeps the score.
pub mod recorder;

/// Terminal and plain line consoles.
pub mod console;

// / The question and answer loop.
pub mod training;
