// Unit tests for logger initialization
// Tests focus on idempotence and error handling

use crate::logger::{initialize, level_for};

use std::path::PathBuf;

use log::LevelFilter;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: A global logger can only be set once. A second call from
/// another code path must not abort the command.
///
/// **BUG THIS CATCHES**: Would catch the Once or AtomicBool guards being removed,
/// making fern fail when installing a second global logger.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::tempdir().expect("tempdir");

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path(), LevelFilter::Debug);
    let result2 = initialize(temp_dir.path(), LevelFilter::Debug);

    // THEN: Both return Ok
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: Verifies that an unusable log directory is reported, not panicked on.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped.
#[test]
fn given_invalid_log_dir_when_initialized_then_returns_error_or_already_set() {
    // GIVEN: A path that cannot hold a file
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Initializing against it
    let result = initialize(&invalid_dir, LevelFilter::Info);

    // THEN: Either the guard short-circuits (another test won the race) or the
    // failure comes back as a Cli error
    if let Err(err) = result {
        assert!(format!("{err:?}").contains("Cli"));
    }
}

#[test]
fn given_verbosity_when_mapped_then_level_never_drops_below_default() {
    assert!(level_for(1) >= LevelFilter::Info);
    assert_eq!(level_for(2), LevelFilter::Debug);
    assert_eq!(level_for(3), LevelFilter::Trace);
    assert_eq!(level_for(9), LevelFilter::Trace);
}
