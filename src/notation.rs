/*!

Membership in OT, the inductively defined set of ordinal notations, after
clauses (OT1)-(OT3) and the bounding operator G_u of Buchholz (1986), p.201.

A failed judgement carries a corrective term in its `Err`: an
order-equivalent term one repair step closer to OT. Every failure branch
builds the least correction restoring the violated clause, never an
arbitrary witness, so re-running the judgement on its own corrections
converges. Corrections are fresh trees; the term under judgement is never
modified.

*/

use std::rc::Rc;

use crate::{
  order::NotationOrder,
  term::{Level, Principal, Term}
};


/// Is `term` an ordinal notation? `Err` carries the corrective term.
pub(crate) fn check_notation(term: &Term) -> Result<(), Term> {
  match term {
    // (OT1)
    Term::Zero => Ok(()),

    // (OT2)
    Term::Sum(items) => {
      // The sequence must be non-increasing. One bubble step on the first
      // offending pair is the least reordering, and keeps the denoted
      // ordinal intact.
      for i in 0..items.len() - 1 {
        if items[i].is_less(&items[i + 1]) {
          let mut corrected = items.as_ref().clone();
          corrected.swap(i, i + 1);
          return Err(Term::Sum(Rc::new(corrected)));
        }
      }
      // Once ordered, every element must itself be a notation.
      for (i, item) in items.iter().enumerate() {
        if let Err(correction) = check_notation(item) {
          let mut corrected = items.as_ref().clone();
          corrected[i] = correction;
          return Err(Term::Sum(Rc::new(corrected)));
        }
      }
      Ok(())
    }

    // (OT3): ψ_v(b) requires b ∈ OT and G_v(b) < b. Either failure's
    // correction substitutes for the argument.
    Term::Principal(v, b) => {
      check_notation(b).map_err(|correction| Term::Principal(*v, Rc::new(correction)))?;
      check_bound(*v, b, b).map_err(|correction| Term::Principal(*v, Rc::new(correction)))
    }

  } // end match
}

/// Does G_u(a) < b hold? Structural recursion on `a`, clauses (G1)-(G3).
/// `Err` carries the corrective term for `a`.
fn check_bound(u: Level, a: &Term, b: &Term) -> Result<(), Term> {
  match a {
    // (G1)
    Term::Zero => Ok(()),

    // (G2): every element against the same bound.
    Term::Sum(items) => {
      for (i, item) in items.iter().enumerate() {
        if let Err(correction) = check_bound(u, item, b) {
          // (OT2) ran first, so the sequence is ordered and the correction
          // bounds everything past the failing element: truncate there and
          // substitute.
          if i == 0 {
            return Err(correction);
          }
          let mut corrected: Vec<Term> = items[..=i].to_vec();
          corrected[i] = correction;
          return Err(Term::Sum(Rc::new(corrected)));
        }
      }
      Ok(())
    }

    // (G3): levels below u contribute nothing. Otherwise
    // G_u(ψ_w(c)) = {c} ∪ G_u(c), so both c < b and G_u(c) < b must hold.
    Term::Principal(w, c) => {
      if *w < u {
        return Ok(());
      }
      if !c.is_less(b) {
        // {c} < b fails. ψ_{w+1}(0) bounds every ψ_w term; the correction
        // is the smaller of it and c.
        let limit = Principal::new(w + 1, Term::Zero);
        if limit.is_less(c) {
          return Err(limit);
        }
        return Err(c.as_ref().clone());
      }
      check_bound(u, c, b).map_err(|correction| Term::Principal(*w, Rc::new(correction)))
    }

  } // end match
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::term::Sum;

  fn psi(level: u32, arg: Term) -> Term {
    Principal::new(level, arg)
  }

  fn zero() -> Term {
    Term::Zero
  }

  #[test]
  fn zero_and_small_notations() {
    assert!(check_notation(&zero()).is_ok());
    assert!(check_notation(&Principal::unit()).is_ok());
    assert!(check_notation(&Sum::from_count(3)).is_ok());
    assert!(check_notation(&psi(1, psi(1, zero()))).is_ok());
  }

  #[test]
  fn deeply_nested_notations() {
    // ψ1(ψ2(ψ0(ψ4(0)))) and ψ2(ψ6(ψ3(ψ6(0)))) are notations.
    let a = psi(1, psi(2, psi(0, psi(4, zero()))));
    assert!(check_notation(&a).is_ok());
    let b = psi(2, psi(6, psi(3, psi(6, zero()))));
    assert!(check_notation(&b).is_ok());
  }

  #[test]
  fn out_of_order_sum_corrects_by_one_swap() {
    let unit = Principal::unit();
    let term = Sum::new(vec![unit.clone(), psi(1, zero())]);
    let correction = check_notation(&term).unwrap_err();
    assert_eq!(correction, Sum::new(vec![psi(1, zero()), unit]));
    // The correction itself passes.
    assert!(check_notation(&correction).is_ok());
  }

  #[test]
  fn failing_element_is_replaced_in_place() {
    // The sum is ordered, but its first element ψ0(ψ1(ψ4(0))) is not a
    // notation; it is replaced by its own correction, the rest stays put.
    let term = Sum::new(vec![psi(0, psi(1, psi(4, zero()))), Principal::unit()]);
    let correction = check_notation(&term).unwrap_err();
    assert_eq!(
      correction,
      Sum::new(vec![psi(0, psi(2, zero())), Principal::unit()])
    );
  }

  #[test]
  fn unbounded_argument_corrects_to_the_level_threshold() {
    // ψ0(ψ1(ψ4(0))): inside G_0, the level-1 subterm exposes ψ4(0), which is
    // not below the argument; the threshold ψ2(0) is the lesser correction.
    let term = psi(0, Sum::new(vec![psi(1, psi(4, zero())), Principal::unit()]));
    let correction = check_notation(&term).unwrap_err();
    assert_eq!(correction, psi(0, psi(2, zero())));
    assert!(check_notation(&correction).is_ok());
  }

  #[test]
  fn exposed_argument_corrects_to_itself_when_below_threshold() {
    // ψ0(ψ0(ψ1(0))+ψ0(0)): G_0 exposes ψ1(0), which is not below the whole
    // argument, and ψ1(0) is not above the threshold ψ1(0), so the exposed
    // term itself is the correction.
    let inner = Sum::new(vec![psi(0, psi(1, zero())), Principal::unit()]);
    let term = psi(0, inner);
    let correction = check_notation(&term).unwrap_err();
    assert_eq!(correction, psi(0, psi(1, zero())));
    assert!(check_notation(&correction).is_ok());
  }

  #[test]
  fn bound_failure_truncates_an_ordered_sum() {
    // ψ0(ψ3(0)+ψ1(ψ4(0))+ψ0(0)): the middle element fails the bound check;
    // the correction truncates after it and substitutes ψ2(0).
    let arg = Sum::new(vec![
      psi(3, zero()),
      psi(1, psi(4, zero())),
      Principal::unit()
    ]);
    let term = psi(0, arg);
    let correction = check_notation(&term).unwrap_err();
    assert_eq!(correction, psi(0, Sum::new(vec![psi(3, zero()), psi(2, zero())])));
    assert!(check_notation(&correction).is_ok());
  }

  #[test]
  fn lower_levels_are_excluded_from_the_bound() {
    // ψ2(ψ0(ψ4(0))) is a notation: level 0 < 2 keeps the ψ4(0) invisible
    // to G_2.
    let term = psi(2, psi(0, psi(4, zero())));
    assert!(check_notation(&term).is_ok());
  }

  #[test]
  fn corrections_preserve_the_original() {
    let original = Sum::new(vec![Principal::unit(), psi(1, zero())]);
    let before = original.clone();
    let _ = check_notation(&original);
    assert_eq!(original, before);
  }
}
