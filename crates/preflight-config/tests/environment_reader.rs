//! Environment reader tests for preflight-config.
// preflight-config/tests/environment_reader.rs
// =============================================================================
// Module: Environment Reader Tests
// Description: Validate deployment environment selection via override maps.
// Purpose: Ensure environment reads are deterministic, bounded, and fail-safe.
// =============================================================================

use std::collections::BTreeMap;

use preflight_config::ENVIRONMENT_ENV_VAR;
use preflight_config::EnvironmentReader;
use preflight_core::Environment;
use preflight_core::MemoryEventSink;
use preflight_core::PreflightEvent;

type TestResult = Result<(), String>;

fn reader_with_value(value: &str) -> EnvironmentReader {
    let mut overrides = BTreeMap::new();
    overrides.insert(ENVIRONMENT_ENV_VAR.to_string(), value.to_string());
    EnvironmentReader::with_overrides(overrides)
}

#[test]
fn production_value_resolves_production() -> TestResult {
    let sink = MemoryEventSink::new();
    let environment = reader_with_value("production").resolve(&sink);
    if environment != Environment::Production {
        return Err(format!("unexpected environment {environment}"));
    }
    if !sink.is_empty() {
        return Err("recognized value should record nothing".to_string());
    }
    Ok(())
}

#[test]
fn value_matching_is_case_and_whitespace_tolerant() -> TestResult {
    let sink = MemoryEventSink::new();
    let environment = reader_with_value("  PRODUCTION  ").resolve(&sink);
    if environment != Environment::Production {
        return Err(format!("unexpected environment {environment}"));
    }
    if !sink.is_empty() {
        return Err("recognized value should record nothing".to_string());
    }
    Ok(())
}

#[test]
fn unrecognized_value_falls_back_with_one_warning() -> TestResult {
    let sink = MemoryEventSink::new();
    let environment = reader_with_value("qa").resolve(&sink);
    if environment != Environment::Staging {
        return Err(format!("unexpected environment {environment}"));
    }
    let events = sink.snapshot();
    if events.len() != 1 {
        return Err(format!("expected exactly one event, found {}", events.len()));
    }
    match &events[0] {
        PreflightEvent::EnvironmentFallback {
            rejected: Some(rejected),
            substituted: Environment::Staging,
        } if rejected == "qa" => Ok(()),
        other => Err(format!("unexpected event {}", other.kind())),
    }
}

#[test]
fn missing_variable_falls_back_with_one_warning() -> TestResult {
    let sink = MemoryEventSink::new();
    let environment = EnvironmentReader::with_overrides(BTreeMap::new()).resolve(&sink);
    if environment != Environment::Staging {
        return Err(format!("unexpected environment {environment}"));
    }
    let events = sink.snapshot();
    if events.len() != 1 {
        return Err(format!("expected exactly one event, found {}", events.len()));
    }
    match &events[0] {
        PreflightEvent::EnvironmentFallback {
            rejected: None,
            substituted: Environment::Staging,
        } => Ok(()),
        other => Err(format!("unexpected event {}", other.kind())),
    }
}

#[test]
fn oversized_value_is_clipped_before_resolution() -> TestResult {
    let sink = MemoryEventSink::new();
    let environment = reader_with_value(&"p".repeat(4_000)).resolve(&sink);
    if environment != Environment::Staging {
        return Err(format!("unexpected environment {environment}"));
    }
    let events = sink.snapshot();
    if events.len() != 1 {
        return Err(format!("expected exactly one event, found {}", events.len()));
    }
    match &events[0] {
        PreflightEvent::EnvironmentFallback {
            rejected: Some(rejected),
            ..
        } if rejected.chars().count() == 128 => Ok(()),
        PreflightEvent::EnvironmentFallback {
            rejected: Some(rejected),
            ..
        } => Err(format!("rejected value not clipped: {} chars", rejected.chars().count())),
        other => Err(format!("unexpected event {}", other.kind())),
    }
}

#[test]
fn each_resolution_records_its_own_warning() -> TestResult {
    let sink = MemoryEventSink::new();
    let reader = reader_with_value("qa");
    let _ = reader.resolve(&sink);
    let _ = reader.resolve(&sink);
    if sink.len() != 2 {
        return Err(format!("expected one warning per resolution, found {}", sink.len()));
    }
    Ok(())
}
