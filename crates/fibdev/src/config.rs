//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};
use fibdev_core::Whence;

/// fibdev — seekable Fibonacci device.
#[derive(Parser, Debug)]
#[command(name = "fibdev", version, about)]
pub struct AppConfig {
    /// Fibonacci index to read (shorthand for an absolute seek).
    #[arg(short, long, env = "FIBDEV_N", conflicts_with_all = ["seek", "from", "to"])]
    pub n: Option<u64>,

    /// Seek offset applied before reading.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub seek: i64,

    /// Seek origin.
    #[arg(long, value_enum, default_value = "start")]
    pub whence: WhenceArg,

    /// Print every term from this index (requires --to).
    #[arg(long, requires = "to")]
    pub from: Option<u64>,

    /// Last index of the range started by --from.
    #[arg(long, requires = "from")]
    pub to: Option<u64>,

    /// Quiet mode (only output the digits).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (include digit counts).
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Seek origin flag, mapped onto the core [`Whence`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhenceArg {
    /// From index 0.
    Start,
    /// From the current session position.
    Cur,
    /// Counted back from the highest supported index.
    End,
}

impl From<WhenceArg> for Whence {
    fn from(arg: WhenceArg) -> Self {
        match arg {
            WhenceArg::Start => Whence::Start,
            WhenceArg::Cur => Whence::Current,
            WhenceArg::End => Whence::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whence_mapping() {
        assert_eq!(Whence::from(WhenceArg::Start), Whence::Start);
        assert_eq!(Whence::from(WhenceArg::Cur), Whence::Current);
        assert_eq!(Whence::from(WhenceArg::End), Whence::End);
    }

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["fibdev"]).unwrap();
        assert_eq!(config.n, None);
        assert_eq!(config.seek, 0);
        assert_eq!(config.whence, WhenceArg::Start);
        assert!(!config.quiet);
    }

    #[test]
    fn negative_seek_offset() {
        let config = AppConfig::try_parse_from(["fibdev", "--seek", "-3", "--whence", "cur"])
            .unwrap();
        assert_eq!(config.seek, -3);
        assert_eq!(config.whence, WhenceArg::Cur);
    }

    #[test]
    fn range_requires_both_ends() {
        assert!(AppConfig::try_parse_from(["fibdev", "--from", "0"]).is_err());
        assert!(AppConfig::try_parse_from(["fibdev", "--to", "5"]).is_err());
        let config = AppConfig::try_parse_from(["fibdev", "--from", "0", "--to", "5"]).unwrap();
        assert_eq!(config.from, Some(0));
        assert_eq!(config.to, Some(5));
    }

    #[test]
    fn n_conflicts_with_seek() {
        assert!(AppConfig::try_parse_from(["fibdev", "-n", "10", "--seek", "5"]).is_err());
    }
}
