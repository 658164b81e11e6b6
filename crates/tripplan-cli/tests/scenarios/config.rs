//! `tripplan config`: persisted base URL and its precedence

use anyhow::Result;
use tripplan_testing::{MockPlanningService, MockReply, TestWorld};

#[test]
fn test_set_show_unset_round() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "set", "https://planner.example.com/"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(
        result
            .stdout()
            .contains("https://planner.example.com/plan-trip")
    );
    assert!(world.read_config()?.contains("api_base_url"));

    let shown = world.run(&["--format", "json", "config", "show"])?;
    assert!(shown.success());
    let report = shown.json()?;
    assert_eq!(report["effective_api_url"]["source"], "config_file");
    assert_eq!(report["api_base_url"], "https://planner.example.com/");
    assert_eq!(report["endpoint"], "https://planner.example.com/plan-trip");

    let result = world.run(&["config", "unset"])?;
    assert!(result.success());
    assert!(!world.read_config()?.contains("api_base_url"));

    let shown = world.run(&["--format", "json", "config", "show"])?;
    let report = shown.json()?;
    assert_eq!(report["effective_api_url"]["source"], "default");
    assert_eq!(report["effective_api_url"]["url"], "http://localhost:8000");
    Ok(())
}

#[test]
fn test_set_rejects_non_http_url() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "set", "ftp://planner.example.com"])?;

    assert!(!result.success());
    assert!(!world.config_path().exists());
    Ok(())
}

#[test]
fn test_environment_overrides_config_file() -> Result<()> {
    let world = TestWorld::new().with_api_url("http://env-host:9000");
    world.write_raw_config("api_base_url = \"http://file-host:9000\"\n")?;

    let result = world.run(&["--format", "json", "config", "show"])?;

    let report = result.json()?;
    assert_eq!(report["effective_api_url"]["source"], "environment");
    assert_eq!(report["effective_api_url"]["url"], "http://env-host:9000");
    Ok(())
}

#[test]
fn test_saved_url_is_used_for_planning() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Cork", "Dublin"));
    let world = TestWorld::new().with_today("2024-05-10");
    world.write_raw_config(&format!("api_base_url = \"{}\"\n", service.base_url()))?;

    let result = world.run(&[
        "plan",
        "--from",
        "Cork",
        "--to",
        "Dublin",
        "--departure",
        "2024-06-01",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_broken_config_file_is_reported() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("api_base_url = [")?;

    let result = world.run(&["config", "show"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to load"));
    Ok(())
}
