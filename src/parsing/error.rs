/*!

The catalog of structural parse failures. Each failure carries its own
message, and any of them aborts the analysis outright; no partial result is
ever produced from a failed parse.

*/

use thiserror::Error;


#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
  #[error("Invalid character")]
  InvalidCharacter,

  /// A close parenthesis with no matching open. Also flags the input as
  /// parenthesis-mismatched.
  #[error("Excessive )")]
  ExcessiveClose,

  /// A `#` or `,` with nothing before it.
  #[error("Invalid {0}")]
  InvalidSeparator(char),

  /// `0` cannot be used as a multiplicity inside a sum.
  #[error("0 is not used in array")]
  ZeroMultiplicity,

  #[error("Number after term is invalid expression")]
  NumberAfterTerm,

  #[error("Term after term is invalid expression")]
  TermAfterTerm,

  /// The input ended on a dangling separator.
  #[error("String expected to continue")]
  ExpectedContinuation,

  /// An integer reached past the configured maximum. Carries the maximum.
  #[error("Exceeding maximum allowed integer {0}")]
  ExceedsMaximum(u32),
}
