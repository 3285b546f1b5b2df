use std::fmt;

use clap::{builder::PossibleValue, ValueEnum};

/// Minimum level of messages that will be logged
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::None,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Error => Some(PossibleValue::new("error")),
            Self::Warn => Some(PossibleValue::new("warn")),
            Self::Info => Some(PossibleValue::new("info")),
            Self::Debug => Some(PossibleValue::new("debug")),
            Self::Trace => Some(PossibleValue::new("trace")),
            Self::None => Some(PossibleValue::new("none")),
        }
    }
}

impl LogLevel {
    fn level(&self) -> usize {
        *self as usize
    }
    pub fn is_none(&self) -> bool {
        self.level() > 4
    }
    pub fn get_level(&self) -> usize {
        if self.level() > 4 {
            0
        } else {
            self.level()
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_possible_value() {
            Some(v) => write!(f, "{}", v.get_name()),
            None => write!(f, "unknown"),
        }
    }
}

/// Initialize stderr logging at the requested level
pub fn init_log(verbose: LogLevel) {
    stderrlog::new()
        .quiet(verbose.is_none())
        .verbosity(verbose.get_level())
        .init()
        .unwrap();
}
