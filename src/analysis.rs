/*!

The analysis facade: parse, classify, iterate the corrective judgement to a
fixpoint, render. An `Analysis` is computed eagerly and never changes
afterwards. The parsed term and its principal/sum classification always
describe the original input; the normalization loop works on its own copies.

*/

use crate::{
  config::Limits,
  format::{DisplayForm, Formattable, Formatter},
  logging::{log, Channel},
  notation::check_notation,
  parsing::{ParseError, Parser},
  term::Term
};


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
  /// The text as supplied.
  pub input: String,
  /// The text after parenthesis repair; identical to `input` when none occurred.
  pub string: String,
  pub parenthesis_corrected: bool,
  /// A parse failure short-circuits everything downstream.
  pub outcome: Result<Report, ParseError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
  /// The term as parsed, untouched by normalization.
  pub term: Term,
  pub term_string: String,
  /// Whether the parsed term is a principal term ψ_v(a).
  pub is_principal: bool,
  pub verdict: Verdict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
  /// The term is an ordinal notation.
  Notation {
    ordinal: String,
    simplified: String
  },
  /// Not a notation, but the corrective fixpoint converged on a notation
  /// denoting the same ordinal.
  Equivalent {
    notation: Term,
    notation_string: String,
    ordinal: String,
    simplified: String
  },
  /// Not a notation, and no corrective term made progress.
  NoEquivalent,
}

impl Verdict {
  pub fn is_notation(&self) -> bool {
    matches!(self, Verdict::Notation { .. })
  }

  /// The ordinal expression, when one exists.
  pub fn ordinal(&self) -> Option<&str> {
    match self {
      Verdict::Notation { ordinal, .. }
      | Verdict::Equivalent { ordinal, .. } => Some(ordinal),
      Verdict::NoEquivalent => None
    }
  }

  pub fn simplified(&self) -> Option<&str> {
    match self {
      Verdict::Notation { simplified, .. }
      | Verdict::Equivalent { simplified, .. } => Some(simplified),
      Verdict::NoEquivalent => None
    }
  }
}


/// Analyze with the default limits.
pub fn analyze(input: &str) -> Analysis {
  analyze_with(input, Limits::default())
}

pub fn analyze_with(input: &str, limits: Limits) -> Analysis {
  let outcome = Parser::new(limits).parse(input);

  Analysis {
    input: input.to_string(),
    string: outcome.string,
    parenthesis_corrected: outcome.parenthesis_corrected,
    outcome: outcome.result.map(|term| classify(term, limits))
  }
}

fn classify(term: Term, limits: Limits) -> Report {
  let term_string = term.format(&Formatter::new(DisplayForm::Term, limits));
  let is_principal = term.is_principal();
  let verdict = normalize(&term, limits);

  Report {
    term,
    term_string,
    is_principal,
    verdict
  }
}

/// Re-invoke the judgement on its latest correction until it succeeds or
/// stops producing progress.
fn normalize(term: &Term, limits: Limits) -> Verdict {
  let renderings = |notation: &Term| {
    (
      notation.format(&Formatter::new(DisplayForm::Ordinal, limits)),
      notation.format(&Formatter::new(DisplayForm::Simplified, limits))
    )
  };

  let mut current = match check_notation(term) {
    Ok(()) => {
      let (ordinal, simplified) = renderings(term);
      return Verdict::Notation {
        ordinal,
        simplified
      };
    }
    Err(correction) => correction
  };

  loop {
    log(
      Channel::Debug,
      2,
      &format!("corrective term: {}", current.format(&Formatter::new(DisplayForm::Term, limits)))
    );
    match check_notation(&current) {
      Ok(()) => {
        let (ordinal, simplified) = renderings(&current);
        let notation_string = current.format(&Formatter::new(DisplayForm::Term, limits));
        return Verdict::Equivalent {
          notation: current,
          notation_string,
          ordinal,
          simplified
        };
      }
      Err(next) => {
        if next == current {
          return Verdict::NoEquivalent;
        }
        current = next;
      }
    }
  }
}
