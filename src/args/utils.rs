//! Shared utilities for argument processing.

/// What: Determine the log filter based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Filter directive string (e.g. `info`, `debug`, or a full `RUST_LOG` value).
///
/// Details:
/// - Verbose flag overrides everything else.
/// - A non-empty `RUST_LOG` wins over `--log-level`.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        return "debug".to_string();
    }
    match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => v,
        _ => args.log_level.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn verbose_forces_debug() {
        let args = crate::args::Args::parse_from(["hnview", "-v", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&args), "debug");
    }
}
