use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("nwsim").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--land-terrain"));
}

#[test]
fn test_default_run_renders_coast_map() {
    let mut cmd = Command::cargo_bin("nwsim").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("20x15 map, 8 players"))
        // Right half of the default map is ocean.
        .stdout(predicate::str::contains("~~~~~"))
        // Settlements show up as '#'.
        .stdout(predicate::str::contains("#"));
}

#[test]
fn test_unknown_terrain_id_fails() {
    let mut cmd = Command::cargo_bin("nwsim").unwrap();
    cmd.args(["--land-terrain", "terrain.lava"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("terrain.lava"));
}

#[test]
fn test_forest_land_renders_as_f() {
    let mut cmd = Command::cargo_bin("nwsim").unwrap();
    cmd.args(["--land-terrain", "terrain.forest", "--camps", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fffff"));
}
