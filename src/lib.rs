//! # Koan - Closure and Wrapper Exercises
//!
//! Koan is a small instructional crate that works through three classic
//! closure exercises in Rust: a documentation-length checker, a Fibonacci
//! generator with enclosed state, and a call counter built as a wrapping
//! instrument. A README quality gate keeps the project's own documentation
//! honest.
//!
//! ## Core Concepts
//!
//! - **Checkers**: a threshold captured at construction time classifies
//!   functions by the length of their attached documentation text
//! - **Generators**: a `(previous, current)` pair advanced in place yields
//!   an infinite lazy sequence, one value per call
//! - **Counters**: wrappers share one count table with the object that
//!   issued them, so every call is recorded and externally observable
//!
//! ## Modules
//!
//! - [`doc_check`] - Documentation-length checking with an enclosed threshold
//! - [`fib`] - Iterative Fibonacci generation over arbitrary-precision values
//! - [`counter`] - Call counting via shared-table wrapper instrumentation
//! - [`arith`] - Sample arithmetic wired through one shared counter
//! - [`readme_gate`] - README documentation-quality gate
//! - [`ui`] - Quiet-mode gate and color helpers for CLI output
//!
//! ## Example
//!
//! ```
//! use num_bigint::BigUint;
//! use koan::arith::CountedArith;
//! use koan::fib::Fibonacci;
//!
//! let mut fib = Fibonacci::new();
//! assert_eq!(fib.next_value(), BigUint::from(0u8));
//! assert_eq!(fib.next_value(), BigUint::from(1u8));
//!
//! let ops = CountedArith::new();
//! assert_eq!(ops.add(1.0, 2.0), 3.0);
//! assert_eq!(ops.count("add").unwrap(), 1);
//! ```

pub mod arith;
pub mod counter;
pub mod doc_check;
pub mod fib;
pub mod readme_gate;
pub mod ui;
