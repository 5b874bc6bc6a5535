/*!

Console entry point. Takes one ordinal notation as the single command-line
argument and prints its analysis as a fixed textual report.

*/

use std::{env, process};

use yansi::Paint;

use buchholz::{analyze, Analysis, Verdict};


fn main() {
  let mut args = env::args();
  let program = args.next().unwrap_or_else(|| "buchholz".to_string());

  match args.next() {
    Some(input) => print_report(&analyze(&input)),
    None => {
      eprintln!("Usage: {} 'ordinal'", program);
      process::exit(1);
    }
  }
}

fn print_report(analysis: &Analysis) {
  println!("Input: {}", analysis.input);

  let report = match &analysis.outcome {
    Ok(report) => report,
    Err(error) => {
      println!("{}", Paint::red("Invalid string."));
      println!("{}", error);
      return;
    }
  };

  if analysis.parenthesis_corrected {
    println!("Parenthesis corrected: {}", analysis.string);
  }
  println!("a = {}", report.term_string);

  match &report.verdict {
    Verdict::Notation { ordinal, simplified } => {
      println!("where a ∈ OT.");
      println!("o(a) = {}", ordinal);
      if simplified != ordinal {
        println!(" = {}", simplified);
      }
    }

    Verdict::Equivalent { notation_string, ordinal, simplified, .. } => {
      println!("where a ∈ T, a ∉ OT. Showing b ∈ OT where o(a) = o(b):");
      println!("b = {}", notation_string);
      println!("o(a) = o(b) = {}", ordinal);
      if simplified != ordinal {
        println!(" = {}", simplified);
      }
    }

    Verdict::NoEquivalent => {
      println!("where a ∈ T, a ∉ OT.");
    }
  }
}
