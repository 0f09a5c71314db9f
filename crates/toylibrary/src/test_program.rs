//! Body of the `toylibrary_test_program` binary.
//!
//! Parses two optional integers, wraps the first in a [`ValueWrapper`], and shows it
//! through an [`IntPrinter`] as many times as the second asks.

use crate::error::ToyError;
use crate::int_printer::IntPrinter;
use crate::value_wrapper::ValueWrapper;
use clap::Parser;
use std::io::Write;

/// Default value shown when `--number_to_print` is not given
pub const DEFAULT_NUMBER_TO_PRINT: i32 = 7;
/// Default repeat count when `--times_to_print_number` is not given
pub const DEFAULT_TIMES_TO_PRINT_NUMBER: i32 = 3;

/// Command-line options of the test program
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "toylibrary_test_program")]
#[command(about = "Print a wrapped integer a number of times", long_about = None)]
pub struct Options {
    /// Number you want to print to the screen
    #[arg(
        long = "number_to_print",
        alias = "number-to-print",
        default_value_t = DEFAULT_NUMBER_TO_PRINT,
        allow_negative_numbers = true
    )]
    pub number_to_print: i32,

    /// Times you want to print the number
    #[arg(
        long = "times_to_print_number",
        alias = "times-to-print-number",
        default_value_t = DEFAULT_TIMES_TO_PRINT_NUMBER,
        allow_negative_numbers = true
    )]
    pub times_to_print_number: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            number_to_print: DEFAULT_NUMBER_TO_PRINT,
            times_to_print_number: DEFAULT_TIMES_TO_PRINT_NUMBER,
        }
    }
}

/// Shows `number_to_print` on `out`, one line per repetition.
///
/// # Errors
///
/// `ToyError::ParameterDomainIssue` if the repeat count is negative; nothing is written.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<(), ToyError> {
    if options.times_to_print_number < 0 {
        return Err(ToyError::ParameterDomainIssue(
            "# of times to print number must be 0 or greater".to_string(),
        ));
    }

    let wrapped_number_to_print = ValueWrapper::new(options.number_to_print);
    let printer = IntPrinter::new(&wrapped_number_to_print);

    for _ in 0..options.times_to_print_number {
        printer.show_to(out)?;
    }
    tracing::debug!(
        number = options.number_to_print,
        times = options.times_to_print_number,
        "printing done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let parsed = Options::try_parse_from(["prog"]).unwrap();
        assert_eq!(parsed, Options::default());
    }

    #[test]
    fn parses_both_options() {
        let parsed = Options::try_parse_from([
            "prog",
            "--number_to_print",
            "-4",
            "--times-to-print-number",
            "2",
        ])
        .unwrap();
        assert_eq!(parsed.number_to_print, -4);
        assert_eq!(parsed.times_to_print_number, 2);
    }
}
