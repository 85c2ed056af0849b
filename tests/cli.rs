use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn draws_route_around_walls() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
    cmd.arg("tests/data/walls.json");

    cmd.assert().success().stdout(
        "Path: (0, 0) -> (1, 0) -> (1, 1) -> (1, 2) -> (2, 2)\nCost: 4\nxxo\noxo\noxx\n",
    );
}

#[test]
fn reads_input_json_by_default() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cost: 4"));
}

#[test]
fn heap_selection_prints_the_same() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
    cmd.args(["tests/data/two_by_two.json", "--selection", "heap"]);

    cmd.assert()
        .success()
        .stdout("Path: (0, 0) -> (1, 0) -> (1, 1)\nCost: 6\nxx\nox\n");
}

#[test]
fn target_is_root() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
    cmd.arg("tests/data/single_cell.json");

    cmd.assert().success().stdout("Path: (0, 0)\nCost: 0\nx\n");
}

#[test]
fn target_outside_fails() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
    cmd.arg("tests/data/outside.json");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("(5, 0) is outside of the Grid"));
}

#[test]
fn jagged_board_fails() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
    cmd.arg("tests/data/jagged.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid grid"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
    cmd.arg("tests/data/missing.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("tests/data/missing.json"));
}

#[test]
fn fractional_costs() {
    for selection in ["linear", "heap"] {
        let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
        cmd.args(["tests/data/fractional.json", "--selection", selection]);

        cmd.assert()
            .success()
            .stdout("Path: (0, 0) -> (1, 0) -> (1, 1)\nCost: 6.75\nxx\nox\n");
    }
}

#[test]
fn negative_cost_fails() {
    let mut cmd = Command::cargo_bin("grid_dijkstra").unwrap();
    cmd.arg("tests/data/negative.json");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cell (0, 1) has invalid cost -2"));
}
