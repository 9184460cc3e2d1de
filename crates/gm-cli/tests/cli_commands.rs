//! Integration tests for gm-cli commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn gm() -> Command {
    let mut cmd = Command::cargo_bin("gm").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_default_d20() {
    gm().args(["roll", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on a d20"));
}

#[test]
fn roll_one_sided_die() {
    gm().args(["roll", "--sides", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled 1 on a d1"));
}

#[test]
fn roll_zero_sides_fails() {
    gm().args(["roll", "--sides", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one side"));
}

#[test]
fn roll_is_reproducible_with_seed() {
    let first = gm().args(["roll", "--seed", "7"]).output().unwrap();
    let second = gm().args(["roll", "--seed", "7"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_guaranteed_success() {
    gm().args(["check", "100", "--dc", "5", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vs DC 5 - Success"));
}

#[test]
fn check_negative_skill_fails() {
    gm().args(["check", "-100", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill -100 vs DC 10 - Fail"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_session_round_trip() {
    gm().args(["play", "--seed", "42"])
        .write_stdin(
            "character add c1 Aria\n\
             give c1 sword\n\
             inventory c1\n\
             act c1 opens the door\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Character added: c1 (Aria)"))
        .stdout(predicate::str::contains("c1 carries: sword"))
        .stdout(predicate::str::contains(
            "Action 'opens the door' performed by c1.",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_reports_bad_commands_and_continues() {
    gm().args(["play"])
        .write_stdin("juggle\nstate set weather rain\nstate get weather\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: juggle"))
        .stdout(predicate::str::contains("weather = rain"));
}

#[test]
fn play_stops_after_quit_with_trailing_words() {
    gm().args(["play", "--seed", "1"])
        .write_stdin("quit now\nparty\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("The party is empty.").not());
}

#[test]
fn play_ends_on_eof() {
    gm().args(["play"])
        .write_stdin("xp c1 5\nxp c1 5\nprogress c1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("c1: level 1, 10 XP"));
}
