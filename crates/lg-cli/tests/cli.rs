use assert_cmd::Command;
use predicates::prelude::*;

fn lg() -> Command {
    Command::cargo_bin("lg").unwrap()
}

#[test]
fn check_validates_the_gallery() {
    lg().arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("26 rooms"))
        .stdout(predicate::str::contains("13 dark rooms"));
}

#[test]
fn info_prints_metadata_json() {
    lg().arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Lost in Gallery\""));
}

#[test]
fn play_opens_on_the_title_screen_and_exits_on_eof() {
    lg().arg("play")
        .args(["--seed", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("LOST IN GALLERY"))
        .stdout(predicate::str::contains("Type IN to begin."));
}

#[test]
fn play_accepts_commands_and_quit() {
    lg().args(["play", "--seed", "1"])
        .write_stdin("HELP\nIN\nLOOK POSTER\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TALK X"))
        .stdout(predicate::str::contains("reception room"))
        .stdout(predicate::str::contains("Gregor Alacandre"));
}

#[test]
fn play_reports_errors_without_crashing() {
    lg().args(["play", "--seed", "1"])
        .write_stdin("FROLIC\nN\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("That's not a valid command."))
        .stdout(predicate::str::contains("doesn't have an exit"));
}

#[test]
fn default_invocation_plays() {
    lg().write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LOST IN GALLERY"));
}
