mod common;

use common::TestEnv;

#[test]
fn test_version_flag_prints_package_version() {
    let env = TestEnv::new();

    let result = env.run(&["--version"]);

    assert!(result.is_success());
    assert!(
        result.stdout.contains(env!("CARGO_PKG_VERSION")),
        "expected version in output; got:\n{}",
        result.stdout
    );
}

#[test]
fn test_dashboard_uses_box_borders() {
    let env = TestEnv::new();

    let result = env.run_with_env(&[], &[("TERM", "xterm-256color"), ("LANG", "en_US.UTF-8")]);

    assert!(result.is_success());
    assert!(
        result.stdout.contains('╭'),
        "expected dashboard output to use themed box borders; got:\n{}",
        result.stdout
    );
}
