
pub use verbosity::*;


// Global control over verbose messaging.
pub(crate) mod verbosity {
  use std::{io::{Stdout, stdout, Write}, sync::Mutex};

  use lazy_static::lazy_static;
  use strum_macros::IntoStaticStr;
  use yansi::Paint;

  #[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
  pub enum Channel {
    Error,
    Notice,
    Debug
  }

  pub(crate) static mut VERBOSITY: i32 = 0;
  lazy_static! {
    static ref VERBOSE_STREAM: Mutex<Stdout> = Mutex::new(stdout());
  }

  fn verbosity_is_at_least(lvl: i32) -> bool {
    // Mutable static variables require `unsafe`, as they are not thread safe.
    unsafe {
      VERBOSITY >= lvl
    }
  }

  pub fn set_verbosity(new_value: i32) {
    unsafe {
      VERBOSITY = new_value;
    }
  }

  fn channel_tag(channel: Channel) -> String {
    let name: &'static str = channel.into();
    match channel {
      Channel::Error  => Paint::red(name).to_string(),
      Channel::Notice => Paint::green(name).to_string(),
      Channel::Debug  => Paint::blue(name).to_string(),
    }
  }

  pub(crate) fn verbose_emit(channel: Channel, msg: &str) {
    let mut stream = VERBOSE_STREAM.lock().unwrap();
    let _ = writeln!(stream, "[{}] {}", channel_tag(channel), msg);
  }

  /// Only emits a message if the verbosity level is at least `level`.
  pub(crate) fn log(channel: Channel, level: i32, msg: &str) {
    if verbosity_is_at_least(level) {
      verbose_emit(channel, msg);
    }
  }
}
