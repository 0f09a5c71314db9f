//! # Toy Library
//!
//! Not an intrinsically useful library: it shows how a package exposes a generic type,
//! a consumer of that type, a few free functions, and a test program. Python bindings
//! live in the `python/` crate next to the workspace.
//!
//! - **`value_wrapper`**: `ValueWrapper<T>`, an immutable single-value holder.
//! - **`int_printer`**: `IntPrinter`, which snapshots a wrapped integer and shows it on demand.
//! - **`play`**: `wind_up`, `wind_down` and `play_ints`.
//! - **`test_program`**: options and body of the `toylibrary_test_program` binary.
//!
//! ```rust
//! use toylibrary::{IntPrinter, ValueWrapper};
//!
//! let wrapped = ValueWrapper::new(7);
//! let printer = IntPrinter::new(&wrapped);
//!
//! let mut out = Vec::new();
//! printer.show_to(&mut out).unwrap();
//! assert_eq!(out, b"7\n");
//! ```

pub mod error;
pub mod int_printer;
pub mod play;
pub mod test_program;
pub mod value_wrapper;

pub use error::ToyError;
pub use int_printer::IntPrinter;
pub use value_wrapper::ValueWrapper;
