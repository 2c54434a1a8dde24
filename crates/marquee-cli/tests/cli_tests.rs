use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOW: &str = "2030-01-01T00:00:00Z";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// A `marquee` command with plain output, the clock pinned at `now` and the
/// given database.
fn marquee_cmd_at(db_path: &Path, now: &str) -> Command {
    let mut cmd = Command::cargo_bin("marquee").expect("Failed to find marquee binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .arg("--now")
        .arg(now);
    cmd
}

fn marquee_cmd(db_path: &Path) -> Command {
    marquee_cmd_at(db_path, NOW)
}

fn create_venue(db_path: &Path, name: &str, city: &str, state: &str) {
    marquee_cmd(db_path)
        .args(["venue", "create", name, "--city", city, "--state", state])
        .assert()
        .success();
}

fn create_artist(db_path: &Path, name: &str) {
    marquee_cmd(db_path)
        .args([
            "artist",
            "create",
            name,
            "--city",
            "San Francisco",
            "--state",
            "CA",
        ])
        .assert()
        .success();
}

/// Venues 1-3 and artists 1-3, with one past show at venue 1 and three
/// upcoming shows at venue 3.
fn seed_sample(db_path: &Path) {
    create_venue(db_path, "The Musical Hop", "San Francisco", "CA");
    create_venue(db_path, "The Dueling Pianos Bar", "New York", "NY");
    create_venue(
        db_path,
        "Park Square Live Music & Coffee",
        "San Francisco",
        "CA",
    );
    create_artist(db_path, "Guns N Petals");
    create_artist(db_path, "Matt Quevado");
    create_artist(db_path, "The Wild Sax Band");

    for (artist, venue, start) in [
        ("1", "1", "2019-05-21T21:30:00Z"),
        ("3", "3", "2035-04-15T20:00:00Z"),
        ("3", "3", "2035-04-01T20:00:00Z"),
        ("2", "3", "2035-04-08T20:00:00Z"),
    ] {
        marquee_cmd(db_path)
            .args(["show", "create", artist, venue, start])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_create_venue_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    marquee_cmd(&db_path)
        .args([
            "venue",
            "create",
            "The Musical Hop",
            "--city",
            "San Francisco",
            "--state",
            "CA",
            "--genres",
            "Jazz,Reggae,Swing",
            "--seeking-talent",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Venue The Musical Hop was successfully listed (ID: 1)",
        ))
        .stdout(predicate::str::contains("Jazz, Reggae, Swing"));
}

#[test]
fn test_cli_create_venue_requires_city_and_state() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    marquee_cmd(&db_path)
        .args(["venue", "create", "Nowhere Hall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--city"));
}

#[test]
fn test_cli_default_command_groups_venues() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("## New York, NY"))
        .stdout(predicate::str::contains("## San Francisco, CA"))
        .stdout(predicate::str::contains(
            "- The Musical Hop (ID: 1): 0 upcoming shows",
        ))
        .stdout(predicate::str::contains(
            "- Park Square Live Music & Coffee (ID: 3): 3 upcoming shows",
        ));
}

#[test]
fn test_cli_list_empty_venues() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    marquee_cmd(&db_path)
        .args(["venue", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No venues found."));
}

#[test]
fn test_cli_search_venues_ignores_case() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .args(["venue", "search", "MUSIC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 venues matching \"MUSIC\""))
        .stdout(predicate::str::contains("The Musical Hop"))
        .stdout(predicate::str::contains("Park Square Live Music & Coffee"))
        .stdout(predicate::str::contains("Dueling").not());
}

#[test]
fn test_cli_search_artists_without_match() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .args(["artist", "search", "zydeco"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No artists found matching \"zydeco\".",
        ));
}

#[test]
fn test_cli_show_venue_detail() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .args(["venue", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 3. Park Square Live Music & Coffee"))
        .stdout(predicate::str::contains("## Upcoming Shows (3)"))
        .stdout(predicate::str::contains("## Past Shows (0)"))
        .stdout(predicate::str::contains("**The Wild Sax Band** (artist 3)"));
}

#[test]
fn test_cli_show_missing_venue_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    marquee_cmd(&db_path)
        .args(["venue", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to show venue"))
        .stderr(predicate::str::contains("99"));
}

#[test]
fn test_cli_now_flag_moves_the_partition() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd_at(&db_path, "2040-01-01T00:00:00Z")
        .args(["artist", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Upcoming Shows (0)"))
        .stdout(predicate::str::contains("## Past Shows (2)"));
}

#[test]
fn test_cli_json_detail_uses_canonical_times() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    let output = marquee_cmd(&db_path)
        .args(["--json", "venue", "show", "1"])
        .output()
        .expect("Failed to run marquee");
    assert!(output.status.success());

    let detail: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(detail["name"], "The Musical Hop");
    assert_eq!(detail["past_shows_count"], 1);
    assert_eq!(detail["upcoming_shows_count"], 0);
    assert_eq!(detail["past_shows"][0]["artist_name"], "Guns N Petals");
    assert_eq!(
        detail["past_shows"][0]["start_time"],
        "2019-05-21T21:30:00Z"
    );
}

#[test]
fn test_cli_json_search_result_shape() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    let output = marquee_cmd(&db_path)
        .args(["--json", "venue", "search", "Music"])
        .output()
        .expect("Failed to run marquee");
    assert!(output.status.success());

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(result["count"], 2);
    assert_eq!(result["data"][1]["name"], "Park Square Live Music & Coffee");
    assert_eq!(result["data"][1]["num_upcoming_shows"], 3);
}

#[test]
fn test_cli_show_list_chronological() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    let output = marquee_cmd(&db_path)
        .args(["--json", "show", "list", "--chronological"])
        .output()
        .expect("Failed to run marquee");
    assert!(output.status.success());

    let roster: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let times: Vec<&str> = roster
        .as_array()
        .expect("roster is an array")
        .iter()
        .map(|entry| entry["start_time"].as_str().unwrap())
        .collect();
    assert_eq!(
        times,
        vec![
            "2019-05-21T21:30:00Z",
            "2035-04-01T20:00:00Z",
            "2035-04-08T20:00:00Z",
            "2035-04-15T20:00:00Z",
        ]
    );
}

#[test]
fn test_cli_show_list_names_both_ends() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .args(["show", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Guns N Petals** (artist 1) at **The Musical Hop** (venue 1)",
        ))
        .stdout(predicate::str::contains(
            "**Matt Quevado** (artist 2) at **Park Square Live Music & Coffee** (venue 3)",
        ));
}

#[test]
fn test_cli_create_show_for_missing_artist_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_venue(&db_path, "The Musical Hop", "San Francisco", "CA");

    marquee_cmd(&db_path)
        .args(["show", "create", "7", "1", "2035-04-01T20:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create show"));
}

#[test]
fn test_cli_create_show_rejects_bad_time() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_venue(&db_path, "The Musical Hop", "San Francisco", "CA");
    create_artist(&db_path, "Guns N Petals");

    marquee_cmd(&db_path)
        .args(["show", "create", "1", "1", "next friday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start_time"));
}

#[test]
fn test_cli_edit_venue_keeps_other_fields() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    marquee_cmd(&db_path)
        .args([
            "venue",
            "create",
            "The Musical Hop",
            "--city",
            "San Francisco",
            "--state",
            "CA",
            "--phone",
            "123-123-1234",
        ])
        .assert()
        .success();

    marquee_cmd(&db_path)
        .args(["venue", "edit", "1", "--city", "Oakland"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated venue with ID: 1"))
        .stdout(predicate::str::contains("- Updated city"))
        .stdout(predicate::str::contains("Oakland, CA"))
        .stdout(predicate::str::contains("123-123-1234"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .args(["venue", "delete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));

    marquee_cmd(&db_path)
        .args(["venue", "show", "3"])
        .assert()
        .success();
}

#[test]
fn test_cli_delete_artist_removes_their_shows() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .args(["artist", "delete", "3", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted artist 'The Wild Sax Band' (ID: 3)",
        ));

    marquee_cmd(&db_path)
        .args(["venue", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Upcoming Shows (1)"));
}

#[test]
fn test_cli_list_artists() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_sample(&db_path);

    marquee_cmd(&db_path)
        .args(["artist", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Guns N Petals (ID: 1)"))
        .stdout(predicate::str::contains("- The Wild Sax Band (ID: 3)"));
}
