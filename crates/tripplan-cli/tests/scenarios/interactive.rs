//! `tripplan interactive`: line commands read from stdin

use anyhow::Result;
use std::time::Duration;
use tripplan_testing::{MockPlanningService, MockReply, TestWorld};
use tripplan_types::messages;

fn world_for(service: &MockPlanningService) -> TestWorld {
    TestWorld::new()
        .with_today("2024-05-10")
        .with_api_url(service.base_url())
}

#[test]
fn test_edit_then_submit() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Berlin", "Prague"));
    let world = world_for(&service);

    let script = "set from Berlin\nset to Prague\nset departure 2024-05-01\nset departure 2024-06-01\nsubmit\nquit\n";
    let result = world.run_with_stdin(&["interactive"], script)?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains(messages::DEPARTURE_IN_PAST));
    assert!(result.stdout().contains("Fly from Berlin to Prague"));
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_blocked_submit_sends_nothing() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Berlin", "Prague"));
    let world = world_for(&service);

    let result = world.run_with_stdin(
        &["interactive", "--from", "Berlin", "--to", "Prague"],
        "set departure 2024-06-10\nset return 2024-06-01\nsubmit\n",
    )?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains(messages::RETURN_BEFORE_DEPARTURE));
    assert_eq!(service.request_count(), 0);
    Ok(())
}

fn json_reports(stdout: &str) -> Result<Vec<serde_json::Value>> {
    stdout
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| Ok(serde_json::from_str(line)?))
        .collect()
}

#[test]
fn test_failure_is_reported_after_pending_state() -> Result<()> {
    let service = MockPlanningService::start(MockReply::server_error());
    let world = world_for(&service);

    let result = world.run_with_stdin(
        &[
            "--format",
            "json",
            "interactive",
            "--from",
            "Lisbon",
            "--to",
            "Porto",
            "--departure",
            "2024-06-01",
        ],
        "submit\n",
    )?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let reports = json_reports(result.stdout())?;

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[1]["is_submitting"], true);
    assert_eq!(reports[1]["feedback"]["submit_enabled"], false);
    assert_eq!(reports[1]["feedback"]["helper"]["text"], messages::SUBMITTING);
    assert_eq!(reports[2]["submitted"], true);
    assert_eq!(reports[2]["is_submitting"], false);
    assert_eq!(reports[2]["error_message"], messages::SUBMISSION_FAILED);
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_fields_stay_editable_while_request_is_pending() -> Result<()> {
    let service = MockPlanningService::start(
        MockReply::itinerary("Berlin", "Prague").with_delay(Duration::from_millis(800)),
    );
    let world = world_for(&service);

    let result = world.run_with_stdin(
        &[
            "--format",
            "json",
            "interactive",
            "--from",
            "Berlin",
            "--to",
            "Prague",
            "--departure",
            "2024-06-01",
        ],
        "submit\nset to Lyon\nsubmit\n",
    )?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("A trip request is already in flight."));

    let reports = json_reports(result.stdout())?;
    let edited = reports
        .iter()
        .find(|r| r["form"]["destination"] == "Lyon")
        .expect("a report after the edit");
    assert_eq!(edited["is_submitting"], true);

    let last = reports.last().expect("final report");
    assert_eq!(last["submitted"], true);
    assert_eq!(last["form"]["destination"], "Lyon");
    assert_eq!(last["response"]["itinerary"][0]["summary"], "Fly from Berlin to Prague");

    assert_eq!(service.request_count(), 1);
    let body = service.requests()[0].json().expect("json body");
    assert_eq!(body["destination"], "Prague");
    Ok(())
}

#[test]
fn test_invalid_base_url_keeps_session_usable() -> Result<()> {
    let world = TestWorld::new()
        .with_today("2024-05-10")
        .with_api_url("not a url");

    let result = world.run_with_stdin(
        &["interactive"],
        "set from Berlin\nset to Prague\nset departure 2024-06-01\nsubmit\n",
    )?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Prague"));
    assert!(result.stdout().contains(messages::SUBMISSION_FAILED));
    assert!(!result.stderr().contains("Error:"));
    Ok(())
}

#[test]
fn test_unknown_field_does_not_end_session() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("A", "B"));
    let world = world_for(&service);

    let result = world.run_with_stdin(&["interactive"], "set budget 100\nhelp\n")?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Unknown field"));
    assert!(result.stdout().contains("Commands:"));
    Ok(())
}
