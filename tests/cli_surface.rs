use browser_bridge::cli::{Cli, Command};
use browser_bridge::install::supported_browsers;
use clap::{CommandFactory, Parser};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn init_parses_required_and_optional_flags() {
    let cli = Cli::try_parse_from([
        "browser-bridge",
        "init",
        "--browser",
        "chrome",
        "--extension-id",
        "abcdefghijklmnop",
        "--profile-directory",
        "Profile 1",
    ])
    .unwrap();

    let Command::Init(args) = cli.command;
    assert_eq!(args.browser, "chrome");
    assert_eq!(args.extension_id, "abcdefghijklmnop");
    assert_eq!(args.profile_directory.as_deref(), Some("Profile 1"));
}

#[test]
fn init_requires_browser_and_extension_id() {
    assert!(Cli::try_parse_from(["browser-bridge", "init"]).is_err());
    assert!(
        Cli::try_parse_from(["browser-bridge", "init", "--browser", "chrome"]).is_err(),
        "--extension-id is required"
    );
    assert!(
        Cli::try_parse_from(["browser-bridge", "init", "--extension-id", "abc"]).is_err(),
        "--browser is required"
    );
}

#[test]
fn init_rejects_browsers_outside_the_table() {
    let err = Cli::try_parse_from([
        "browser-bridge",
        "init",
        "--browser",
        "netscape",
        "--extension-id",
        "abc",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn every_advertised_browser_parses() {
    // The value set clap advertises (and completes) is the table itself.
    for browser in supported_browsers() {
        let parsed = Cli::try_parse_from([
            "browser-bridge",
            "init",
            "--browser",
            browser,
            "--extension-id",
            "abc",
        ]);
        assert!(parsed.is_ok(), "{browser} should be accepted");
    }
}
