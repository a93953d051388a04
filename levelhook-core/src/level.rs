//! Severity levels used as dispatch keys.

use crate::error::LevelParseError;
use std::{fmt, str::FromStr};

/// Log severity, most severe first.
///
/// The numeric value of each variant matches its position in [`Level::ALL`],
/// which is also what [`TryFrom<u8>`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// The logger is about to panic.
    Panic = 0,
    /// The process is about to exit.
    Fatal = 1,
    /// An operation failed.
    Error = 2,
    /// Something unexpected that the program recovered from.
    Warn = 3,
    /// Normal operational messages.
    Info = 4,
    /// Verbose diagnostics.
    Debug = 5,
    /// Very fine-grained diagnostics.
    Trace = 6,
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Level; 7] = [
        Level::Panic,
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Lowercase name of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(LevelParseError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelParseError;

    fn try_from(value: u8) -> Result<Self, LevelParseError> {
        Level::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LevelParseError::OutOfRange(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" Info ".parse::<Level>().unwrap(), Level::Info);

        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, LevelParseError::UnknownName(ref name) if name == "verbose"));
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_numeric_levels() {
        assert_eq!(Level::try_from(0).unwrap(), Level::Panic);
        assert_eq!(Level::try_from(6).unwrap(), Level::Trace);
        assert!(matches!(
            Level::try_from(7),
            Err(LevelParseError::OutOfRange(7))
        ));
        for level in Level::ALL {
            assert_eq!(Level::try_from(level as u8).unwrap(), level);
        }
    }

    #[test]
    fn test_ordering_most_severe_first() {
        assert!(Level::Panic < Level::Error);
        assert!(Level::Warn < Level::Debug);
    }
}
