/*!

An analyzer for ordinal notations built from Buchholz's ψ collapsing
functions. Given a textual expression, the analyzer parses it into a term,
decides whether the term is a well-founded ordinal notation, computes an
order-equivalent notation when it is not, and renders terms in canonical,
ordinal, and simplified arithmetic forms.

Buchholz, W. (1986): A New System of Proof-Theoretic Ordinal Functions.
  Annals of Pure and Applied Logic, 32:195-207.
  https://doi.org/10.1016/0168-0072(86)90052-7

*/
#[macro_use]
mod format;
mod analysis;
mod config;
mod notation;
mod order;
mod parsing;
mod term;
pub mod logging;

pub use analysis::{analyze, analyze_with, Analysis, Report, Verdict};
pub use config::{Limits, DEFAULT_MAX_INT};
pub use format::{DisplayForm, Formattable, Formatter};
pub use order::NotationOrder;
pub use parsing::{parse, ParseError, ParseOutcome, Parser};
pub use term::{Level, Term, TermKind};
