use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_flags() {
    cargo_bin_cmd!("yajuws")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--tick-ms"))
        .stdout(predicate::str::contains("--fast-boot"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn test_quit_from_main_menu() {
    cargo_bin_cmd!("yajuws")
        .args(["--fast-boot", "--tick-ms", "10", "--no-color"])
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[9] Quit"))
        .stdout(predicate::str::contains("See you again!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    cargo_bin_cmd!("yajuws")
        .args(["--fast-boot", "--tick-ms", "10", "--no-color"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("See you again!"));
}

#[test]
fn test_task_manager_then_quit() {
    cargo_bin_cmd!("yajuws")
        .args(["--fast-boot", "--tick-ms", "10", "--no-color"])
        .write_stdin("8\n\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("See you again!"));
}

#[test]
fn test_unknown_theme_rejected() {
    cargo_bin_cmd!("yajuws")
        .args(["--theme", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn test_zero_tick_rejected() {
    cargo_bin_cmd!("yajuws")
        .args(["--tick-ms", "0", "--fast-boot"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick period must be positive"));
}
