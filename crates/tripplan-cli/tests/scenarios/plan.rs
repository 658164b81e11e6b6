//! `tripplan plan`: validation gate, request shape, and service outcomes

use anyhow::Result;
use serde_json::json;
use tripplan_testing::{MockPlanningService, MockReply, TestWorld, unreachable_base_url};
use tripplan_types::messages;

const TODAY: &str = "2024-05-10";

fn world_for(service: &MockPlanningService) -> TestWorld {
    TestWorld::new()
        .with_today(TODAY)
        .with_api_url(service.base_url())
}

#[test]
fn test_plan_prints_itinerary_on_success() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("New York", "London"));
    let world = world_for(&service);

    let result = world.run(&[
        "plan",
        "--from",
        "New York",
        "--to",
        "London",
        "--departure",
        "2024-06-01",
        "--return",
        "2024-06-10",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Itinerary"));
    assert!(result.stdout().contains("Fly from New York to London"));
    assert!(result.stdout().contains("Explore London"));
    assert_eq!(service.request_count(), 1);

    let body = service.requests()[0].json().expect("json body");
    assert_eq!(
        body,
        json!({
            "origin": "New York",
            "destination": "London",
            "departure_date": "2024-06-01",
            "return_date": "2024-06-10"
        })
    );
    Ok(())
}

#[test]
fn test_past_departure_blocks_submission() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Paris", "Rome"));
    let world = world_for(&service);

    let result = world.run(&[
        "plan",
        "--from",
        "Paris",
        "--to",
        "Rome",
        "--departure",
        "2024-05-01",
    ])?;

    assert!(!result.success());
    assert!(result.stdout().contains(messages::DEPARTURE_IN_PAST));
    assert!(result.stdout().contains(messages::FIX_DATES));
    assert!(result.stderr().contains("Trip request not sent"));
    assert_eq!(service.request_count(), 0);
    Ok(())
}

#[test]
fn test_return_before_departure_blocks_submission() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Oslo", "Rome"));
    let world = world_for(&service);

    let result = world.run(&[
        "--format",
        "json",
        "plan",
        "--from",
        "Oslo",
        "--to",
        "Rome",
        "--departure",
        "2024-06-10",
        "--return",
        "2024-06-05",
    ])?;

    assert!(!result.success());
    let report = result.json()?;
    assert_eq!(report["validation"]["departure_before_today"], false);
    assert_eq!(report["validation"]["return_before_departure"], true);
    assert_eq!(report["validation"]["has_temporal_error"], true);
    assert_eq!(report["submitted"], false);
    assert_eq!(service.request_count(), 0);
    Ok(())
}

#[test]
fn test_departure_today_is_accepted() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Oslo", "Bergen"));
    let world = world_for(&service);

    let result = world.run(&[
        "plan",
        "--from",
        "Oslo",
        "--to",
        "Bergen",
        "--departure",
        TODAY,
        "--return",
        TODAY,
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_service_error_shows_fixed_message() -> Result<()> {
    let service = MockPlanningService::start(MockReply::server_error());
    let world = world_for(&service);

    let result = world.run(&[
        "--format",
        "json",
        "plan",
        "--from",
        "Lima",
        "--to",
        "Cusco",
        "--departure",
        "2024-07-01",
    ])?;

    assert!(!result.success());
    let report = result.json()?;
    assert_eq!(report["submitted"], true);
    assert_eq!(report["is_submitting"], false);
    assert_eq!(report["error_message"], messages::SUBMISSION_FAILED);
    assert_eq!(report["response"], serde_json::Value::Null);
    assert!(result.stderr().contains("Trip request failed"));
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_empty_return_is_sent_as_null() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Austin", "Denver"));
    let world = world_for(&service);

    let result = world.run(&[
        "plan",
        "--from",
        "Austin",
        "--to",
        "Denver",
        "--departure",
        "2024-08-01",
        "--return",
        "",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let request = &service.requests()[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/plan-trip");
    assert!(
        request
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    );
    let body = request.json().expect("json body");
    assert!(body.get("return_date").is_some_and(|v| v.is_null()));
    Ok(())
}

#[test]
fn test_unreachable_service_fails_with_message() -> Result<()> {
    let world = TestWorld::new()
        .with_today(TODAY)
        .with_api_url(unreachable_base_url());

    let result = world.run(&[
        "plan",
        "--from",
        "Quito",
        "--to",
        "Lima",
        "--departure",
        "2024-07-01",
    ])?;

    assert!(!result.success());
    assert!(result.stdout().contains(messages::SUBMISSION_FAILED));
    Ok(())
}

#[test]
fn test_api_url_flag_overrides_environment() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Kyoto", "Osaka"));
    let world = TestWorld::new()
        .with_today(TODAY)
        .with_api_url(unreachable_base_url());

    let base_url = service.base_url();
    let result = world.run(&[
        "--api-url",
        &base_url,
        "plan",
        "--from",
        "Kyoto",
        "--to",
        "Osaka",
        "--departure",
        "2024-06-01",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_today_flag_overrides_environment() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Nice", "Milan"));
    let world = world_for(&service);

    // 2024-05-05 is in the past for the environment's today but not for the flag's
    let result = world.run(&[
        "--today",
        "2024-05-01",
        "plan",
        "--from",
        "Nice",
        "--to",
        "Milan",
        "--departure",
        "2024-05-05",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_invalid_base_url_still_shows_date_errors() -> Result<()> {
    let world = TestWorld::new()
        .with_today(TODAY)
        .with_api_url("not a url");

    let result = world.run(&["plan", "--from", "A", "--to", "B", "--departure", "2024-05-01"])?;

    assert!(!result.success());
    assert!(result.stdout().contains(messages::DEPARTURE_IN_PAST));
    assert!(result.stderr().contains("Trip request not sent"));
    assert!(!result.stderr().contains("Invalid planning service URL"));
    Ok(())
}

#[test]
fn test_invalid_base_url_fails_like_any_service_error() -> Result<()> {
    for base_url in ["not a url", "ftp://planner.example.com"] {
        let world = TestWorld::new().with_today(TODAY).with_api_url(base_url);

        let result = world.run(&["plan", "--from", "A", "--to", "B", "--departure", "2024-06-01"])?;

        assert!(!result.success());
        assert!(result.stdout().contains(messages::SUBMISSION_FAILED));
        assert!(result.stderr().contains("Trip request failed"));
    }
    Ok(())
}

#[test]
fn test_rust_log_applies_without_level_flag() -> Result<()> {
    let service = MockPlanningService::start(MockReply::itinerary("Bath", "York"));
    let world = world_for(&service).with_env("RUST_LOG", "info");
    let args = ["plan", "--from", "Bath", "--to", "York", "--departure", "2024-06-01"];

    let result = world.run(&args)?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("trip plan received"));

    let quiet = ["--log-level", "error"].iter().chain(args.iter()).copied().collect::<Vec<_>>();
    let result = world.run(&quiet)?;
    assert!(result.success());
    assert!(!result.stderr().contains("trip plan received"));
    Ok(())
}
