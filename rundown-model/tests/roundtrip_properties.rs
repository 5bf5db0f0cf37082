//! Property-based tests: every entity survives both storage paths.

mod common;

use chrono::{DateTime, Utc};
use common::stored;
use proptest::prelude::*;
use rundown_model::{
    Cue, CueSettings, CueStartMode, CueType, Event, Mention, cue_from_serialized,
    cue_from_snapshot, event_from_serialized, event_from_snapshot, mention_from_serialized,
    mention_from_snapshot,
};

// ── Strategies ───────────────────────────────────────────────────

/// Millisecond-precision dates between 2000 and 2100.
fn arb_date() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800_000_i64..4_102_444_800_000_i64)
        .prop_map(|millis| DateTime::from_timestamp_millis(millis).unwrap())
}

fn arb_cue_type() -> impl Strategy<Value = CueType> {
    prop_oneof![Just(CueType::Cue), Just(CueType::Heading), Just(CueType::Group)]
}

fn arb_start_mode() -> impl Strategy<Value = CueStartMode> {
    prop_oneof![Just(CueStartMode::Flexible), Just(CueStartMode::Fixed)]
}

fn arb_cue() -> impl Strategy<Value = Cue> {
    (
        ("[a-zA-Z0-9]{20}", arb_cue_type(), ".{0,40}", ".{0,40}"),
        (proptest::option::of(arb_date()), arb_start_mode(), 0_i64..3, 0_i64..86_400_000),
        (proptest::option::of("#[0-9a-f]{6}"), any::<bool>(), any::<bool>()),
        (proptest::option::of(arb_date()), any::<(bool, bool, bool)>()),
        (arb_date(), arb_date()),
    )
        .prop_map(
            |(
                (id, kind, title, subtitle),
                (start_time, start_mode, start_date_plus, duration),
                (background_color, locked, scheduled),
                (deleted_at, (hide_on_pdf, hide_on_csv, prevent_edits)),
                (created_at, updated_at),
            )| Cue {
                id,
                kind,
                title,
                subtitle,
                start_time,
                start_mode,
                start_date_plus,
                duration,
                background_color,
                locked,
                scheduled,
                deleted_at,
                settings: CueSettings {
                    hide_on_pdf,
                    hide_on_csv,
                    prevent_edits,
                },
                created_at,
                updated_at,
            },
        )
}

fn arb_event() -> impl Strategy<Value = Event> {
    (
        "[a-zA-Z0-9]{20}",
        ".{0,40}",
        proptest::option::of("[a-zA-Z0-9]{20}"),
        proptest::option::of(arb_date()),
        proptest::option::of(arb_date()),
        "[a-zA-Z0-9]{16}",
        (arb_date(), arb_date()),
    )
        .prop_map(
            |(id, name, team_id, deleted_at, archived_at, salt, (created_at, updated_at))| Event {
                id,
                name,
                team_id,
                deleted_at,
                archived_at,
                logo: String::new(),
                salt,
                created_at,
                updated_at,
            },
        )
}

fn arb_mention() -> impl Strategy<Value = Mention> {
    (
        "[a-zA-Z0-9]{20}",
        "[1-9][0-9]?",
        ".{1,20}",
        "#[0-9a-f]{6}",
        arb_date(),
        arb_date(),
    )
        .prop_map(|(id, key, name, color, created_at, updated_at)| Mention {
            id,
            key,
            name,
            color,
            description: String::new(),
            created_at,
            updated_at,
        })
}

// ── Cue ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cue_survives_the_wire(cue in arb_cue()) {
        prop_assert_eq!(cue_from_serialized(&cue.to_serialized()).unwrap(), cue);
    }

    #[test]
    fn cue_survives_the_store(cue in arb_cue()) {
        let snap = stored(&cue.id, &cue.to_firestore(), cue.created_at, cue.updated_at);
        prop_assert_eq!(cue_from_snapshot(&snap).unwrap(), cue);
    }
}

// ── Event ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn event_survives_the_wire(event in arb_event()) {
        prop_assert_eq!(event_from_serialized(&event.to_serialized()).unwrap(), event);
    }

    #[test]
    fn event_survives_the_store(event in arb_event()) {
        let snap = stored(&event.id, &event.to_firestore(), event.created_at, event.updated_at);
        prop_assert_eq!(event_from_snapshot(&snap).unwrap(), event);
    }
}

// ── Mention ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn mention_survives_both_paths(mention in arb_mention()) {
        prop_assert_eq!(mention_from_serialized(&mention.to_serialized()).unwrap(), mention.clone());
        let snap = stored(&mention.id, &mention.to_firestore(), mention.created_at, mention.updated_at);
        prop_assert_eq!(mention_from_snapshot(&snap).unwrap(), mention);
    }
}
