// Tests for logger configuration

use super::*;
use crate::primitives::LogLevel;

fn config(level: LogLevel) -> LoggerConfig {
    LoggerConfig {
        level,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    }
}

#[test]
fn test_default_filter_tracks_verbosity() {
    assert_eq!(default_filter(&config(LogLevel::Error)), "ragsim=error,error");
    assert_eq!(default_filter(&config(LogLevel::Debug)), "ragsim=debug,debug");
    assert_eq!(default_filter(&config(LogLevel::Trace)), "ragsim=trace,trace");
}
