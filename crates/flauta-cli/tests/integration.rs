//! Integration tests for flauta-cli.
//!
//! Drive the `flauta` binary end to end: design listing, solving factory and
//! file designs, JSON output, and rejection of unbuildable geometry.

use std::process::Command;

/// Helper to get the path to the `flauta` binary built by cargo.
fn flauta_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_flauta"))
}

/// An intentionally unbuildable design: a D5 fundamental on a wide 19 mm
/// bore cannot fit the half-step hole.
const UNBUILDABLE_DESIGN: &str = r#"
name = "Wide D5"

[tube]
bore_diameter = 19.0
wall_thickness = 2.0

[embouchure]
diameter = 10.0

[fundamental]
frequency = 587.33

[[holes]]
cents = 200.0
diameter = 6.0

[[holes]]
cents = 400.0
diameter = 6.5

[[holes]]
cents = 500.0
diameter = 7.0
"#;

// ---------------------------------------------------------------------------
// `flauta designs`
// ---------------------------------------------------------------------------

#[test]
fn designs_lists_factory_designs() {
    let output = flauta_bin()
        .arg("designs")
        .output()
        .expect("failed to run flauta designs");

    assert!(output.status.success(), "flauta designs failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Factory designs"), "got: {stdout}");
    assert!(stdout.contains("c4-six-hole"));
    assert!(stdout.contains("d5-six-hole"));
}

#[test]
fn designs_shows_one_as_toml() {
    let output = flauta_bin()
        .args(["designs", "c4-six-hole"])
        .output()
        .expect("failed to run flauta designs c4-six-hole");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bore_diameter = 14.3"), "got: {stdout}");
    assert!(stdout.contains("[[holes]]"));
}

#[test]
fn designs_unknown_name_fails() {
    let output = flauta_bin()
        .args(["designs", "no-such-design"])
        .output()
        .expect("failed to run flauta designs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("design not found"), "got: {stderr}");
}

#[test]
fn designs_save_copies_into_user_dir() {
    let temp = tempfile::TempDir::new().unwrap();

    let output = flauta_bin()
        .args(["designs", "c4-six-hole", "--save"])
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .output()
        .expect("failed to run flauta designs --save");

    assert!(output.status.success(), "flauta designs --save failed");

    let listing = flauta_bin()
        .arg("designs")
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&listing.stdout);
    assert!(stdout.contains("User designs"), "got: {stdout}");
}

// ---------------------------------------------------------------------------
// `flauta solve`
// ---------------------------------------------------------------------------

#[test]
fn solve_factory_design_prints_table() {
    let output = flauta_bin()
        .args(["solve", "c4-six-hole"])
        .output()
        .expect("failed to run flauta solve");

    assert!(output.status.success(), "flauta solve failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Design: C4 six hole"), "got: {stdout}");
    assert!(stdout.contains("Acoustic end"));
    assert!(stdout.contains("Embouchure center"));
    // Six table rows.
    for hole_number in 1..=6 {
        assert!(
            stdout.contains(&format!("   {hole_number}  ")),
            "missing row {hole_number} in: {stdout}"
        );
    }
}

#[test]
fn solve_json_is_machine_readable() {
    let output = flauta_bin()
        .args(["solve", "c4-six-hole", "--json"])
        .output()
        .expect("failed to run flauta solve --json");

    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be valid JSON");

    let end_x = value["acoustic_end_x"].as_f64().unwrap();
    assert!(end_x > 0.0);

    let holes = value["holes"].as_array().unwrap();
    assert_eq!(holes.len(), 6);

    let mut previous = f64::INFINITY;
    for hole in holes {
        let acoustic = hole["acoustic_position"].as_f64().unwrap();
        let physical = hole["physical_position"].as_f64().unwrap();
        assert!(acoustic < previous, "acoustic positions must decrease");
        assert!(physical >= 0.0 && physical <= end_x);
        previous = acoustic;
    }
}

#[test]
fn solve_design_file_from_disk() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("one-hole.toml");
    std::fs::write(
        &path,
        r#"
name = "One hole"

[tube]
bore_diameter = 19.0
wall_thickness = 2.0

[embouchure]
diameter = 10.0

[fundamental]
frequency = 261.63

[[holes]]
frequency = 293.66
diameter = 8.0
"#,
    )
    .unwrap();

    let output = flauta_bin()
        .args(["solve", path.to_str().unwrap()])
        .output()
        .expect("failed to run flauta solve on a file");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Design: One hole"));
    assert!(stdout.contains("D4"), "nearest note column, got: {stdout}");
}

#[test]
fn solve_unbuildable_design_fails_with_hole_index() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("wide-d5.toml");
    std::fs::write(&path, UNBUILDABLE_DESIGN).unwrap();

    let output = flauta_bin()
        .args(["solve", path.to_str().unwrap()])
        .output()
        .expect("failed to run flauta solve");

    assert!(!output.status.success(), "unbuildable design must fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not buildable"), "got: {stderr}");
    assert!(stderr.contains("hole 3 cannot be placed"), "got: {stderr}");
}

#[test]
fn solve_unknown_design_fails() {
    let output = flauta_bin()
        .args(["solve", "no-such-design"])
        .output()
        .expect("failed to run flauta solve");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("design not found"), "got: {stderr}");
}

#[test]
fn solve_temperature_override_changes_placement() {
    let baseline = flauta_bin()
        .args(["solve", "c4-six-hole", "--json"])
        .output()
        .unwrap();
    let warm = flauta_bin()
        .args(["solve", "c4-six-hole", "--json", "--temperature", "30"])
        .output()
        .unwrap();

    assert!(baseline.status.success());
    assert!(warm.status.success());

    let baseline: serde_json::Value = serde_json::from_slice(&baseline.stdout).unwrap();
    let warm: serde_json::Value = serde_json::from_slice(&warm.stdout).unwrap();

    let cold_end = baseline["acoustic_end_x"].as_f64().unwrap();
    let warm_end = warm["acoustic_end_x"].as_f64().unwrap();
    assert!(
        warm_end > cold_end,
        "warmer air must lengthen the flute: {cold_end} vs {warm_end}"
    );
}

// ---------------------------------------------------------------------------
// `flauta notes`
// ---------------------------------------------------------------------------

#[test]
fn notes_derives_six_hole_layout() {
    let output = flauta_bin()
        .args(["notes", "--fundamental", "261.63"])
        .output()
        .expect("failed to run flauta notes");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("261.63 Hz (C4)"), "got: {stdout}");
    // 200 cents above C4 is D4.
    assert!(stdout.contains("293.66"), "got: {stdout}");
    // 1100 cents above C4 is B4.
    assert!(stdout.contains("493.88"), "got: {stdout}");
}

#[test]
fn notes_accepts_midi_fundamental() {
    let output = flauta_bin()
        .args(["notes", "--midi", "74", "--cents", "200,400"])
        .output()
        .expect("failed to run flauta notes");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("587.33 Hz (D5)"), "got: {stdout}");
    assert!(stdout.contains("E5"));
    assert!(stdout.contains("F#5"));
}

#[test]
fn notes_common_lists_named_pitches() {
    let output = flauta_bin()
        .args(["notes", "--common"])
        .output()
        .expect("failed to run flauta notes --common");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Common fundamentals"), "got: {stdout}");
    assert!(stdout.contains("A4 (440 Hz)"), "got: {stdout}");
    assert!(stdout.contains("D5 (587.33 Hz)"), "got: {stdout}");
}

#[test]
fn notes_requires_a_fundamental() {
    let output = flauta_bin()
        .arg("notes")
        .output()
        .expect("failed to run flauta notes");

    assert!(!output.status.success());
}
