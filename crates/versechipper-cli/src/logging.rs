use stderrlog::{LogLevelNum, Timestamp};

/// `prepare` reports corpus, vocabulary, and batch statistics at info.
pub const PREPARE_VERBOSITY: u8 = 3;

/// `inspect` writes batches to stdout; stderr only carries warnings.
pub const INSPECT_VERBOSITY: u8 = 2;

/// The most detailed verbosity; trace.
const MAX_VERBOSITY: u8 = 5;

fn log_level(verbosity: u8) -> LogLevelNum {
    match verbosity {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// More log detail per repeat (-v, -vv); per-line skips show at debug.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The command's default verbosity, raised by one per `-v`;
    /// `0` when quiet.
    pub fn verbosity(
        &self,
        default: u8,
    ) -> u8 {
        if self.quiet {
            return 0;
        }
        default
            .saturating_add(self.verbose)
            .min(MAX_VERBOSITY)
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level(self.verbosity(default)))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct LogCli {
        #[command(flatten)]
        logging: LogArgs,
    }

    fn parse(args: &[&str]) -> LogArgs {
        let mut argv = vec!["versechipper"];
        argv.extend_from_slice(args);
        LogCli::try_parse_from(argv)
            .unwrap()
            .logging
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&[]).verbosity(PREPARE_VERBOSITY), 3);
        assert_eq!(parse(&[]).verbosity(INSPECT_VERBOSITY), 2);
        assert_eq!(parse(&["-v"]).verbosity(INSPECT_VERBOSITY), 3);
        assert_eq!(parse(&["-vv"]).verbosity(PREPARE_VERBOSITY), 5);
        assert_eq!(parse(&["-vvvvv"]).verbosity(PREPARE_VERBOSITY), 5);
        assert_eq!(parse(&["-q", "-v"]).verbosity(PREPARE_VERBOSITY), 0);
    }

    #[test]
    fn test_timestamps() {
        assert!(parse(&["--ts"]).ts);
        assert!(parse(&["-t"]).ts);
        assert!(!parse(&[]).ts);
    }
}
