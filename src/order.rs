/*!

The strict order on terms, clauses (<1)-(<3) of Buchholz (1986), p.200.
Over well-formed terms the relation is a total order: irreflexive,
transitive, and trichotomous.

*/

use std::cmp::Ordering;

use crate::term::Term;

/// A total order on terms.
///
/// Distinct from Rust's in-built `Ord` trait: the ordering is the one the
/// notation system defines, not one that is natural for the underlying
/// representation, and the well-foundedness machinery does not need Rust's
/// ordering ecosystem.
pub trait NotationOrder {
  fn cmp(&self, other: &Self) -> Ordering;

  fn is_equal(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }

  fn is_greater(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Greater
  }

  fn is_less(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Less
  }
}

impl NotationOrder for Term {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {

      // (<1): 0 is below every nonzero term.
      (Term::Zero, Term::Zero) => Ordering::Equal,
      (Term::Zero, _)          => Ordering::Less,
      (_, Term::Zero)          => Ordering::Greater,

      // (<2): levels compare as integers (the ω sentinel is the largest),
      // equal levels fall through to the arguments.
      (Term::Principal(u, a), Term::Principal(v, b)) => {
        match u.cmp(v) {
          Ordering::Equal => NotationOrder::cmp(a.as_ref(), b.as_ref()),
          ordering        => ordering
        }
      }

      // (<3): at least one side is a sum. Both sides degrade to their
      // element sequences; the first position holding unequal terms decides,
      // and a shared prefix leaves the shorter sequence smaller.
      (a, b) => {
        for i in 0..a.len().min(b.len()) {
          let (left, right) = (a.element(i), b.element(i));
          if left.fingerprint() != right.fingerprint() || left != right {
            return NotationOrder::cmp(left, right);
          }
        }
        a.len().cmp(&b.len())
      }

    } // end match
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::term::{Principal, Sum, Term};

  fn psi(level: u32, arg: Term) -> Term {
    Principal::new(level, arg)
  }

  #[test]
  fn zero_is_the_least_term() {
    assert!(!Term::Zero.is_less(&Term::Zero));
    assert!(Term::Zero.is_less(&Principal::unit()));
    assert!(!Principal::unit().is_less(&Term::Zero));
    assert!(Term::Zero.is_less(&Sum::from_count(2)));
  }

  #[test]
  fn principal_terms_compare_by_level_then_argument() {
    let low = psi(0, Term::Zero);
    let high = psi(3, Term::Zero);
    assert!(low.is_less(&high));
    assert!(!high.is_less(&low));

    // Same level: the arguments decide.
    let small_arg = psi(1, Term::Zero);
    let large_arg = psi(1, Principal::unit());
    assert!(small_arg.is_less(&large_arg));

    // The sentinel level beats every numbered level.
    let limits = crate::config::Limits::default();
    let omega_level = psi(limits.omega(), Term::Zero);
    assert!(psi(10_000, Term::Zero).is_less(&omega_level));
  }

  #[test]
  fn sums_compare_positionally() {
    let unit = Principal::unit();
    let two = Sum::from_count(2);
    let three = Sum::from_count(3);

    // Shared prefix: the shorter sequence is smaller.
    assert!(unit.is_less(&two));
    assert!(two.is_less(&three));
    assert!(!three.is_less(&two));

    // First differing position decides, later positions are ignored.
    let a = Sum::new(vec![psi(2, Term::Zero), unit.clone()]);
    let b = Sum::new(vec![psi(1, Term::Zero), Sum::from_count(2), unit.clone()]);
    assert!(b.is_less(&a));
    assert!(!a.is_less(&b));
  }

  #[test]
  fn irreflexive_and_trichotomous() {
    let samples = [
      Term::Zero,
      Principal::unit(),
      Sum::from_count(2),
      psi(1, Sum::from_count(2)),
      Sum::new(vec![psi(2, Term::Zero), Principal::unit()]),
    ];
    for a in samples.iter() {
      assert!(a.is_equal(a));
      assert!(!a.is_less(a));
      for b in samples.iter() {
        let decisions = [a.is_less(b), b.is_less(a), a.is_equal(b)];
        assert_eq!(decisions.iter().filter(|&&d| d).count(), 1);
      }
    }
  }

  #[test]
  fn transitive_over_sample_chain() {
    let chain = [
      Term::Zero,
      Principal::unit(),
      Sum::from_count(2),
      psi(0, Principal::unit()),
      psi(1, Term::Zero),
      psi(1, Principal::unit()),
    ];
    for i in 0..chain.len() {
      for j in i + 1..chain.len() {
        assert!(chain[i].is_less(&chain[j]), "expected {} < {}", chain[i], chain[j]);
      }
    }
  }
}
