/*!

Input normalization ahead of the scan. A deficit of close parentheses is
repaired (the single silent correction, always surfaced through the repair
flag); decorative markers are stripped and the ω glyph canonicalized in one
multi-literal pass; finally the ω aliases are rewritten into scannable text.

*/

use aho_corasick::AhoCorasick;
use lazy_static::lazy_static;

use crate::{
  config::Limits,
  parsing::error::ParseError
};


lazy_static! {
  /// Spaces and the decorative D/ψ prefixes vanish; the ω glyph becomes `w`.
  static ref MARKERS: AhoCorasick = AhoCorasick::new(&[" ", "D", "ψ", "ω"]);
}
static MARKER_SUBSTITUTIONS: [&str; 4] = ["", "", "", "w"];


/// Append the missing close parentheses, if any. Returns the repaired text
/// and whether a repair took place.
pub(crate) fn repair_parentheses(input: &str) -> (String, bool) {
  let open  = input.chars().filter(|&c| c == '(').count();
  let close = input.chars().filter(|&c| c == ')').count();
  if open <= close {
    return (input.to_string(), false);
  }

  let mut repaired = String::with_capacity(input.len() + open - close);
  repaired.push_str(input);
  for _ in close..open {
    repaired.push(')');
  }
  (repaired, true)
}

/// Strip markers and expand the ω aliases: `w(` becomes the sentinel level
/// with an explicit argument, a bare `w` the three-level expansion
/// ψ0(ψ0(ψ0(0))). The sentinel integer is reserved; spelling it out is
/// already past the maximum.
pub(crate) fn normalize(repaired: &str, limits: &Limits) -> Result<String, ParseError> {
  let text = MARKERS.replace_all(repaired, &MARKER_SUBSTITUTIONS);

  if text.contains(&limits.omega().to_string()) {
    return Err(ParseError::ExceedsMaximum(limits.max_int));
  }

  let text = text.replace("w(", &format!("{}(", limits.omega()));
  Ok(text.replace('w', "0(0(0))"))
}
