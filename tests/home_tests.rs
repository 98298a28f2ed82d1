//! Integration tests for the home dashboard and weather commands
//!
//! No WEATHER_API_KEY is set in these tests, so live fetches fail fast and
//! the fallback paths are what gets exercised. No network is touched.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodiary_cmd;

fn init_diary(temp: &TempDir) {
    moodiary_cmd().arg("init").arg(temp.path()).assert().success();
}

fn cached_weather_json(fetched_at_ms: i64) -> String {
    format!(
        r#"{{"fetched_at_ms":{},"reading":{{"location":"Testville","temperature":10,"description":"overcast clouds","weatherType":"cloudy","icon":"04d","humidity":70,"windSpeed":1.0}}}}"#,
        fetched_at_ms
    )
}

fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

#[test]
fn test_home_without_api_key_shows_fallback_weather() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);

    moodiary_cmd()
        .current_dir(temp.path())
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good "))
        .stdout(predicate::str::contains("Seoul: 22°C"))
        .stdout(predicate::str::contains("Note:"))
        .stdout(predicate::str::contains("Recent entries"))
        .stdout(predicate::str::contains("No diary entries yet"));
}

#[test]
fn test_home_lists_three_most_recent_entries() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);

    for content in [
        "first entry of the week",
        "second entry of the week",
        "third entry of the week",
        "fourth entry of the week",
    ] {
        moodiary_cmd()
            .current_dir(temp.path())
            .arg("new")
            .arg("--emotion")
            .arg("1")
            .arg("--content")
            .arg(content)
            .assert()
            .success();
    }

    // All four share today's date, so storage order breaks the tie and the
    // first three written are shown
    moodiary_cmd()
        .current_dir(temp.path())
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("first entry of the week"))
        .stdout(predicate::str::contains("third entry of the week"))
        .stdout(predicate::str::contains("fourth entry of the week").not());
}

#[test]
fn test_weather_uses_fresh_cache_without_notice() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);

    fs::write(
        temp.path().join(".moodiary/weather.json"),
        cached_weather_json(now_ms()),
    )
    .unwrap();

    moodiary_cmd()
        .current_dir(temp.path())
        .arg("weather")
        .assert()
        .success()
        .stdout(predicate::str::contains("Testville: 10°C"))
        .stdout(predicate::str::contains("Note:").not());
}

#[test]
fn test_weather_refresh_flag_attempts_fetch() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);

    fs::write(
        temp.path().join(".moodiary/weather.json"),
        cached_weather_json(now_ms()),
    )
    .unwrap();

    // Forced fetch fails without an API key: cached reading plus a notice
    moodiary_cmd()
        .current_dir(temp.path())
        .arg("weather")
        .arg("--refresh")
        .assert()
        .success()
        .stdout(predicate::str::contains("Testville: 10°C"))
        .stdout(predicate::str::contains("WEATHER_API_KEY"));
}

#[test]
fn test_weather_manual_interval_keeps_stale_cache() {
    let temp = TempDir::new().unwrap();
    init_diary(&temp);

    moodiary_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("refresh-interval")
        .arg("0")
        .assert()
        .success();

    // Cache from long ago; manual mode never refetches on its own
    fs::write(
        temp.path().join(".moodiary/weather.json"),
        cached_weather_json(0),
    )
    .unwrap();

    moodiary_cmd()
        .current_dir(temp.path())
        .arg("weather")
        .assert()
        .success()
        .stdout(predicate::str::contains("Testville: 10°C"))
        .stdout(predicate::str::contains("Note:").not());
}
