//! Teams and their members.

use crate::Document;
use chrono::{DateTime, SubsecRound, Utc};
use rundown_types::{
    CREATED_AT, Defaults, DocumentSnapshot, DocumentSnapshotId, Fields, FirestoreTimestamp,
    FromSerializedConfig, Result, UserRecordId, iso8601, serialized_fields,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Maps keyed by member that carry nested dates.
const MEMBER_MAPS: &[&str] = &["members", "pending"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    TeamAdmin,
    TeamBilling,
    #[default]
    TeamMember,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TeamAdmin => "team_admin",
            Self::TeamBilling => "team_billing",
            Self::TeamMember => "team_member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub role: UserRole,
    /// `None` when the stored date is missing or unreadable.
    #[serde(default, with = "iso8601::option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberFirestore {
    pub role: UserRole,
    pub created_at: Option<FirestoreTimestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberSerialized {
    pub role: UserRole,
    pub created_at: Option<String>,
}

impl TeamMember {
    #[must_use]
    pub fn to_firestore(&self) -> TeamMemberFirestore {
        TeamMemberFirestore {
            role: self.role,
            created_at: self.created_at.as_ref().map(FirestoreTimestamp::from_date),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> TeamMemberSerialized {
        TeamMemberSerialized {
            role: self.role,
            created_at: self.created_at.as_ref().map(iso8601::format),
        }
    }
}

/// A team as used by application logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: DocumentSnapshotId,
    pub name: String,
    /// Keyed by user id.
    pub members: BTreeMap<UserRecordId, TeamMember>,
    /// Invitations not yet accepted, keyed by email.
    pub pending: BTreeMap<String, TeamMember>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFirestore {
    pub name: String,
    pub members: BTreeMap<UserRecordId, TeamMemberFirestore>,
    pub pending: BTreeMap<String, TeamMemberFirestore>,
    #[serde(default)]
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSerialized {
    pub id: DocumentSnapshotId,
    pub name: String,
    pub members: BTreeMap<UserRecordId, TeamMemberSerialized>,
    pub pending: BTreeMap<String, TeamMemberSerialized>,
    #[serde(default)]
    pub api_token: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Team {
    /// Role of an accepted member.
    #[must_use]
    pub fn member_role(&self, uid: &str) -> Option<UserRole> {
        self.members.get(uid).map(|member| member.role)
    }

    #[must_use]
    pub fn is_admin(&self, uid: &str) -> bool {
        self.member_role(uid) == Some(UserRole::TeamAdmin)
    }

    #[must_use]
    pub fn to_firestore(&self) -> TeamFirestore {
        TeamFirestore {
            name: self.name.clone(),
            members: map_members(&self.members, TeamMember::to_firestore),
            pending: map_members(&self.pending, TeamMember::to_firestore),
            api_token: self.api_token.clone(),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> TeamSerialized {
        TeamSerialized {
            id: self.id.clone(),
            name: self.name.clone(),
            members: map_members(&self.members, TeamMember::to_serialized),
            pending: map_members(&self.pending, TeamMember::to_serialized),
            api_token: self.api_token.clone(),
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

fn map_members<T>(
    members: &BTreeMap<String, TeamMember>,
    convert: impl Fn(&TeamMember) -> T,
) -> BTreeMap<String, T> {
    members
        .iter()
        .map(|(key, member)| (key.clone(), convert(member)))
        .collect()
}

impl Document for Team {
    const KIND: &'static str = "teams";
    const DATE_FIELDS: &'static [&'static str] = &[];

    fn defaults() -> Defaults {
        get_team_defaults()
    }

    /// Member and invitation `createdAt` values are stored as timestamps.
    fn convert_nested_dates(fields: &mut Fields) -> Result<()> {
        for map in MEMBER_MAPS {
            let Some(Value::Object(members)) = fields.get_mut(*map) else {
                continue;
            };
            for member in members.values_mut() {
                let Some(created_at) = member.get_mut(CREATED_AT) else {
                    continue;
                };
                if let Some(timestamp) = FirestoreTimestamp::from_value(created_at)? {
                    *created_at = Value::String(iso8601::format(&timestamp.to_date()?));
                }
            }
        }
        Ok(())
    }

    /// Unreadable member dates become `null` instead of failing the team.
    fn normalize_nested_dates(fields: &mut Fields) {
        let config = FromSerializedConfig::new().date_fields(&[CREATED_AT]);
        for map in MEMBER_MAPS {
            let Some(Value::Object(members)) = fields.get_mut(*map) else {
                continue;
            };
            for member in members.values_mut() {
                if let Value::Object(member_fields) = member {
                    *member_fields = serialized_fields(std::mem::take(member_fields), &config);
                }
            }
        }
    }
}

#[must_use]
pub fn get_team_defaults() -> Defaults {
    Defaults::new()
        .value("name", "")
        .value("members", Value::Object(Fields::new()))
        .value("pending", Value::Object(Fields::new()))
        .value("apiToken", Value::Null)
}

/// A new member, created now.
#[must_use]
pub fn get_member_defaults() -> TeamMember {
    TeamMember {
        role: UserRole::TeamMember,
        created_at: Some(Utc::now().trunc_subsecs(3)),
    }
}

pub fn team_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Team> {
    Team::from_snapshot(snapshot)
}

pub fn team_from_serialized(serialized: &TeamSerialized) -> Result<Team> {
    Team::from_serialized(serialized)
}
