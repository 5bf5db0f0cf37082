mod common;

use chrono::Utc;
use common::{show_day, show_end, snapshot, stored};
use pretty_assertions::assert_eq;
use rundown_model::{
    CueStartMode, DEFAULT_RUNNER_DEADLINE_MS, Runner, RunnerElapsedCue, RunnerOriginalCue,
    RunnerState, RunnerTimesnap, get_runner_defaults, runner_from_serialized, runner_from_snapshot,
};
use serde_json::json;
use std::collections::BTreeMap;

fn sample_runner() -> Runner {
    Runner {
        id: "runner-1".into(),
        rundown_id: "rd-1".into(),
        timesnap: RunnerTimesnap {
            cue_id: Some("cue-2".into()),
            running: true,
            kickoff: 1_734_256_800_000,
            last_stop: 1_734_256_800_000,
            deadline: 1_734_257_100_000,
        },
        next_cue_id: Some("cue-3".into()),
        original_cues: BTreeMap::from([(
            "cue-2".to_string(),
            RunnerOriginalCue {
                start_time: Some("2024-12-15T10:00:00.000Z".into()),
                start_mode: CueStartMode::Fixed,
                duration: 300_000,
            },
        )]),
        elapsed_cues: BTreeMap::from([(
            "cue-1".to_string(),
            RunnerElapsedCue {
                start_time: "2024-12-15T09:55:00.000Z".into(),
                duration: 290_000,
            },
        )]),
        log: vec!["started".into()],
        created_at: show_day(),
        updated_at: show_end(),
    }
}

#[test]
fn state_spellings() {
    assert_eq!(serde_json::to_value(RunnerState::PreShow).unwrap(), json!("PRESHOW"));
    assert_eq!(serde_json::to_value(RunnerState::OnAir).unwrap(), json!("ONAIR"));
    assert_eq!(serde_json::to_value(RunnerState::Ended).unwrap(), json!("ENDED"));
}

#[test]
fn stopped_timesnap() {
    let timesnap = RunnerTimesnap::stopped_at(1_000);
    assert!(!timesnap.running);
    assert_eq!(timesnap.cue_id, None);
    assert_eq!(timesnap.kickoff, 1_000);
    assert_eq!(timesnap.last_stop, 1_000);
    assert_eq!(timesnap.deadline, 1_000 + DEFAULT_RUNNER_DEADLINE_MS);
}

#[test]
fn defaults_start_stopped_now() {
    let before = Utc::now().timestamp_millis();
    let values = get_runner_defaults().values();
    let after = Utc::now().timestamp_millis();

    let timesnap: RunnerTimesnap = serde_json::from_value(values["timesnap"].clone()).unwrap();
    assert!(timesnap.kickoff >= before && timesnap.kickoff <= after);
    assert_eq!(timesnap.deadline - timesnap.kickoff, DEFAULT_RUNNER_DEADLINE_MS);
    assert_eq!(values["originalCues"], json!({}));
    assert_eq!(values["log"], json!([]));
}

#[test]
fn nested_cue_times_stay_strings() {
    let runner = runner_from_snapshot(&snapshot(
        "runner-2",
        json!({
            "rundownId": "rd-1",
            "originalCues": {
                "cue-1": {"startTime": "2024-12-15T10:00:00.000Z", "startMode": "flexible", "duration": 0},
            },
        }),
    ))
    .unwrap();
    assert_eq!(
        runner.original_cues["cue-1"].start_time.as_deref(),
        Some("2024-12-15T10:00:00.000Z")
    );
    assert!(!runner.timesnap.running);
}

#[test]
fn fractional_clock_values_load() {
    let runner = runner_from_snapshot(&snapshot(
        "runner-3",
        json!({
            "rundownId": "rd-1",
            "timesnap": {
                "cueId": "cue-1",
                "running": true,
                "kickoff": 1_734_256_800_000.4,
                "lastStop": 1_734_256_800_000.0,
                "deadline": 1_734_257_100_000.9,
            },
            "elapsedCues": {
                "cue-0": {"startTime": "2024-12-15T09:55:00.000Z", "duration": 1_234.5},
            },
        }),
    ))
    .unwrap();
    assert_eq!(runner.timesnap.kickoff, 1_734_256_800_000);
    assert_eq!(runner.timesnap.deadline, 1_734_257_100_000);
    assert_eq!(runner.elapsed_cues["cue-0"].duration, 1_234);
}

#[test]
fn legacy_runner_without_timesnap_loads_the_same_twice() {
    let snap = snapshot("runner-4", json!({"rundownId": "rd-1"}));
    let first = runner_from_snapshot(&snap).unwrap();
    let second = runner_from_snapshot(&snap).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.timesnap, RunnerTimesnap::default());
}

#[test]
fn roundtrips() {
    let runner = sample_runner();
    let snap = stored(&runner.id, &runner.to_firestore(), runner.created_at, runner.updated_at);
    assert_eq!(runner_from_snapshot(&snap).unwrap(), runner);
    assert_eq!(runner_from_serialized(&runner.to_serialized()).unwrap(), runner);
}
