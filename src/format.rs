/*!

A `Formatter` holds the information needed to express a term as a string:
the display form and the numeric limits (the level equal to the ω sentinel
prints as "ω"). Formatting is distinct from Rust's standard `Display` trait
because the same term renders differently depending on the context: the
canonical term form the parser round-trips, the ordinal form that is only
meaningful once the term is known to be a notation, and the simplified
arithmetic form with numerals and ω substituted in.

*/

use std::borrow::Cow;

use smallvec::SmallVec;
use strum::EnumString;

use crate::{
  config::{Limits, DEFAULT_MAX_INT},
  term::{Level, Term}
};


#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumString, Hash)]
pub enum DisplayForm {
  /// Canonical D-notation, e.g. `(D0(0),D0(0))`. Round-trips through the parser.
  #[strum(serialize = "TermForm")]
  Term,
  /// ψ-notation, e.g. `ψ0(0)+ψ0(0)`. Valid only for ordinal notations.
  #[strum(serialize = "OrdinalForm")]
  Ordinal,
  /// ψ-notation with unit runs collapsed to numerals and ψ0(1) written ω.
  #[strum(serialize = "SimplifiedForm")]
  Simplified,
}

impl Default for DisplayForm {
  fn default() -> DisplayForm {
    DisplayForm::Term
  }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
/// Parameters used in methods that transform terms into strings.
pub struct Formatter {
  pub form  : DisplayForm,
  pub limits: Limits,
}

static DEFAULT_FORMATTER: Cow<Formatter> = Cow::Owned(Formatter {
  form  : DisplayForm::Term,
  limits: Limits { max_int: DEFAULT_MAX_INT }
});

impl Formatter {
  pub fn default() -> Cow<'static, Formatter> {
    DEFAULT_FORMATTER.clone()
  }

  pub fn new(form: DisplayForm, limits: Limits) -> Formatter {
    Formatter {
      form,
      limits
    }
  }
}

impl From<DisplayForm> for Formatter {
  fn from(form: DisplayForm) -> Self {
    Formatter {
      form,
      limits: Limits::default()
    }
  }
}

pub trait Formattable {
  fn format(&self, formatter: &Formatter) -> String;
}


macro_rules! display_formattable_impl {
  ($type_name:ty) => {
    impl std::fmt::Display for $type_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(&Formatter::default()))
      }
    }
  }
}


impl Formattable for Term {
  fn format(&self, formatter: &Formatter) -> String {
    match formatter.form {
      DisplayForm::Term       => term_form(self, formatter.limits),
      DisplayForm::Ordinal    => ordinal_form(self, formatter.limits),
      DisplayForm::Simplified => simplified_form(self, formatter.limits),
    }
  }
}


/// Level label: decimal, or "ω" at the sentinel.
fn level_label(level: Level, limits: Limits) -> String {
  if level == limits.omega() {
    "ω".to_string()
  } else {
    level.to_string()
  }
}

fn term_form(term: &Term, limits: Limits) -> String {
  match term {
    Term::Zero => "0".to_string(),

    Term::Principal(level, arg) => {
      if arg.len() > 1 {
        // A multi-element sum renders with its own parentheses.
        format!("D{}{}", level_label(*level, limits), term_form(arg, limits))
      } else {
        format!("D{}({})", level_label(*level, limits), term_form(arg, limits))
      }
    }

    Term::Sum(items) => {
      let rendered: Vec<String> = items.iter()
                                       .map(|item| term_form(item, limits))
                                       .collect();
      format!("({})", rendered.join(","))
    }
  }
}

/// The argument is always parenthesized, and sums join with a bare "+", so
/// nested sums flatten in the rendered text. Addition here is the literal
/// stored order, not commutative arithmetic.
fn ordinal_form(term: &Term, limits: Limits) -> String {
  match term {
    Term::Zero => "0".to_string(),

    Term::Principal(level, arg) => {
      format!("ψ{}({})", level_label(*level, limits), ordinal_form(arg, limits))
    }

    Term::Sum(items) => {
      items.iter()
           .map(|item| ordinal_form(item, limits))
           .collect::<Vec<String>>()
           .join("+")
    }
  }
}

/// The element sequence of a term with nested sums spliced in, in the same
/// left-to-right layout the ordinal rendering produces.
fn flatten<'t>(term: &'t Term, out: &mut SmallVec<[&'t Term; 8]>) {
  match term {
    Term::Sum(items) => {
      for item in items.iter() {
        flatten(item, out);
      }
    }
    term => out.push(term)
  }
}

fn simplified_form(term: &Term, limits: Limits) -> String {
  match term {
    Term::Zero => "0".to_string(),

    term if term.is_unit() => "1".to_string(),

    Term::Principal(0, arg) if arg.is_unit() => "ω".to_string(),

    Term::Principal(level, arg) => {
      format!("ψ{}({})", level_label(*level, limits), simplified_form(arg, limits))
    }

    Term::Sum(_) => {
      let mut elements: SmallVec<[&Term; 8]> = SmallVec::new();
      flatten(term, &mut elements);

      // Each maximal run of consecutive units collapses to its length.
      let mut parts: Vec<String> = Vec::new();
      let mut i = 0;
      while i < elements.len() {
        if elements[i].is_unit() {
          let mut run = 1;
          while i + run < elements.len() && elements[i + run].is_unit() {
            run += 1;
          }
          parts.push(run.to_string());
          i += run;
        } else {
          parts.push(simplified_form(elements[i], limits));
          i += 1;
        }
      }
      parts.join("+")
    }
  }
}
