//! Console output gating for the CLI

/// Output level for CLI reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Build a level from the global verbose/quiet flags.
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Print a normal-priority line.
    pub fn info(self, msg: &str) {
        if self != Self::Quiet {
            println!("{msg}");
        }
    }

    /// Print a line only in verbose mode.
    pub fn debug(self, msg: &str) {
        if self == Self::Verbose {
            println!("{msg}");
        }
    }
}
