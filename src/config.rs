/*!

Numeric limits governing the analyzer. Integers appearing in the textual
input are bounded by `max_int`; anything larger is rejected, never clamped.
The level one past the maximum is reserved as the ω sentinel. The limits are
passed into the parser and carried by the formatter rather than hard-coded
at the use sites.

*/

/// Bound on integers accepted in input, matching the reference analyzer.
pub const DEFAULT_MAX_INT: u32 = 10_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Limits {
  pub max_int: u32,
}

impl Limits {
  /// The sentinel level denoting ω. Orders above every accepted integer.
  pub fn omega(&self) -> u32 {
    self.max_int + 1
  }
}

impl Default for Limits {
  fn default() -> Limits {
    Limits {
      max_int: DEFAULT_MAX_INT
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn omega_is_one_past_the_maximum() {
    let limits = Limits::default();
    assert_eq!(limits.max_int, 10_000);
    assert_eq!(limits.omega(), 10_001);

    let small = Limits { max_int: 6 };
    assert_eq!(small.omega(), 7);
  }
}
