use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use assert_cmd::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("atm"));
    cmd.write_stdin("1\nB\n-\n30\n+\n20\n=\nX\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Ada."))
        .stdout(predicate::str::contains("Your balance is 100."))
        .stdout(predicate::str::contains("Dispensing 30."))
        .stdout(predicate::str::contains("Withdrew 30. Your balance is 70."))
        .stdout(predicate::str::contains("Deposited 20. Your balance is 90."))
        .stdout(predicate::str::contains("Shutting down. Goodbye."));

    Ok(())
}

#[test]
fn test_cli_rejects_bad_input_and_continues() {
    let mut cmd = Command::new(cargo_bin!("atm"));
    cmd.write_stdin("999\n1\n?\n-\n-5\n1000\nB\nX\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid id: 999 is not a known account",
        ))
        .stdout(predicate::str::contains("Unrecognized action: ?"))
        .stdout(predicate::str::contains("Invalid amount: -5 is negative"))
        .stdout(predicate::str::contains(
            "Insufficient funds: requested 1000, balance 100",
        ))
        .stdout(predicate::str::contains("Your balance is 100."))
        .stdout(predicate::str::contains("Dispensing").not());
}

#[test]
fn test_cli_end_of_input_shuts_down() {
    let mut cmd = Command::new(cargo_bin!("atm"));
    cmd.write_stdin("2\nB\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Your balance is 250."));
}

#[test]
fn test_cli_seed_file_and_report() {
    let mut cmd = Command::new(cargo_bin!("atm"));
    cmd.args(["--seed", "tests/fixtures/seed.csv", "--report"])
        .write_stdin("7\n-\n15\n=\n1\n+\n1\nX\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Lin."))
        .stdout(predicate::str::contains("id,name,balance\n1,Ada,101\n7,Lin,25\n"));
}

#[test]
fn test_cli_malformed_seed_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut seed = tempfile::NamedTempFile::new()?;
    writeln!(seed, "name,id,balance")?;
    writeln!(seed, "Ada,one,100")?;
    seed.flush()?;

    let mut cmd = Command::new(cargo_bin!("atm"));
    cmd.arg("--seed").arg(seed.path()).write_stdin("X\n");

    cmd.assert().failure();

    Ok(())
}
