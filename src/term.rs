/*!

Primitive term node types.

A term denotes an ordinal built from Buchholz's ψ functions: `Zero` is the
ordinal 0, `Principal(v, a)` is ψ_v(a), and `Sum` is an order-significant sum
of at least two subterms. A single-element sum is never constructed; it
collapses to its element. Terms are persistent: subtrees are shared through
`Rc`, and no operation mutates a term in place.

*/

use std::{
  hash::{Hash, Hasher},
  rc::Rc
};

use strum_macros::{
  EnumDiscriminants,
  IntoStaticStr
};
use fnv::FnvHasher;

use crate::format::{
  Formattable,
  Formatter
};

/// A subscript of ψ. The value `Limits::omega()` is the ω sentinel.
pub type Level = u32;


#[derive(Clone, PartialEq, Eq, Debug, IntoStaticStr, EnumDiscriminants)]
#[strum_discriminants(name(TermKind))]
pub enum Term {
  Zero,
  Principal(Level, Rc<Term>),
  Sum(Rc<Vec<Term>>)
}


impl Term {
  /// Reports the `TermKind` of `self`.
  pub fn kind(&self) -> TermKind {
    self.into()
  }

  /// Is `self` a principal term, i.e. of the form ψ_v(a)?
  pub fn is_principal(&self) -> bool {
    matches!(self, Term::Principal(..))
  }

  /// Is `self` the unit ψ0(0), the term denoting the ordinal 1?
  pub(crate) fn is_unit(&self) -> bool {
    match self {
      Term::Principal(0, arg) => **arg == Term::Zero,
      _ => false
    }
  }

  /// Number of elements `self` contributes when viewed as a sum sequence.
  /// A principal term is its own single element; `Zero` contributes none.
  pub fn len(&self) -> usize {
    match self {
      Term::Zero => 0,
      Term::Principal(..) => 1,
      Term::Sum(items) => items.len()
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// The `index`-th element of the sum sequence view.
  pub(crate) fn element(&self, index: usize) -> &Term {
    match self {
      Term::Sum(items) => &items[index],
      term => term
    }
  }

  /// FNV-1a fingerprint. Unequal fingerprints imply unequal terms, which is
  /// the direction the order relation cares about.
  pub(crate) fn fingerprint(&self) -> u64 {
    let mut hasher = FnvHasher::default();
    self.hash(&mut hasher);
    hasher.finish()
  }
}


/**
  A `Zero` must not collide with an empty sum sequence, and a `Principal`
  with level 0 must not collide with its own argument, so each variant
  hashes a type-specific prefix before its data.
*/
impl Hash for Term {
  fn hash<H: Hasher>(&self, hasher: &mut H) {
    match self {
      Term::Zero => {
        hasher.write(&[173, 24 , 91 , 7  , 202, 58 , 144, 66]);
      }

      Term::Principal(level, arg) => {
        hasher.write(&[31 , 209, 166, 12 , 78 , 230, 95 , 141]);
        hasher.write_u32(*level);
        arg.hash(hasher);
      }

      Term::Sum(items) => {
        hasher.write(&[88 , 119, 7  , 250, 163, 36 , 211, 74]);
        for item in items.as_ref() {
          item.hash(hasher);
        }
      }

    }
  }
}

display_formattable_impl!(Term);


/// Construction helpers for principal terms live in a module named after the
/// variant, keeping `Term`'s impl to operations sensible for every variant.
#[allow(non_snake_case)]
pub(crate) mod Principal {
  use super::*;

  /// ψ_level(arg).
  pub(crate) fn new(level: Level, arg: Term) -> Term {
    Term::Principal(level, Rc::new(arg))
  }

  /// ψ0(0), the unit.
  pub(crate) fn unit() -> Term {
    new(0, Term::Zero)
  }
}


#[allow(non_snake_case)]
pub(crate) mod Sum {
  use super::*;

  /// A sum holds at least two items.
  pub(crate) fn new(items: Vec<Term>) -> Term {
    debug_assert!(items.len() >= 2, "a sum holds at least two items");
    Term::Sum(Rc::new(items))
  }

  /// Collapsing constructor: an empty sequence is `Zero`, a singleton is its
  /// element, anything longer is a `Sum`.
  pub(crate) fn collapsed(mut items: Vec<Term>) -> Term {
    match items.len() {
      0 => Term::Zero,
      1 => items.remove(0),
      _ => Term::Sum(Rc::new(items))
    }
  }

  /// The term for the numeral `n`: `n` repeated units.
  pub(crate) fn from_count(n: u32) -> Term {
    collapsed(vec![Principal::unit(); n as usize])
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kinds_and_classification() {
    assert_eq!(Term::Zero.kind(), TermKind::Zero);
    assert!(!Term::Zero.is_principal());
    assert!(Principal::unit().is_principal());
    assert!(!Sum::from_count(2).is_principal());
  }

  #[test]
  fn sum_sequence_view() {
    let unit = Principal::unit();
    assert_eq!(Term::Zero.len(), 0);
    assert_eq!(unit.len(), 1);
    assert_eq!(unit.element(0), &unit);

    let sum = Sum::from_count(3);
    assert_eq!(sum.len(), 3);
    assert_eq!(sum.element(2), &unit);
  }

  #[test]
  fn numerals_collapse() {
    assert_eq!(Sum::from_count(0), Term::Zero);
    assert_eq!(Sum::from_count(1), Principal::unit());
    assert_eq!(Sum::from_count(2).len(), 2);
  }

  #[test]
  fn unit_recognition() {
    assert!(Principal::unit().is_unit());
    assert!(!Term::Zero.is_unit());
    assert!(!Principal::new(1, Term::Zero).is_unit());
    assert!(!Principal::new(0, Principal::unit()).is_unit());
  }

  #[test]
  fn fingerprints_separate_shapes() {
    // An empty-argument principal term, a bare zero, and a numeral all
    // involve the same leaves; the prefixes keep them apart.
    let zero = Term::Zero;
    let unit = Principal::unit();
    assert_ne!(zero.fingerprint(), unit.fingerprint());
    assert_ne!(unit.fingerprint(), Sum::from_count(2).fingerprint());
    assert_eq!(unit.fingerprint(), Principal::unit().fingerprint());
  }
}
