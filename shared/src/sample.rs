//! Synthetic records for pages that have no real data source yet.

use chrono::{DateTime, TimeDelta, Utc};
use rand::{seq::SliceRandom, Rng};

use crate::{
    config::SampleConfig,
    models::{ActivityEntry, AuditEntry, User},
};

const SAMPLE_USERS: &[&str] = &["Admin", "John Doe", "Jane Smith", "Alex Johnson", "Chris Lee"];
const SAMPLE_ACTIONS: &[&str] = &[
    "Uploaded file",
    "Deleted file",
    "Updated document",
    "Shared folder",
    "Downloaded report",
];
const HISTORY_DAYS: i64 = 30;
const APPROVAL_RATE: f64 = 0.7;

/// Users `1..=n`; roughly seven in ten are already approved.
pub fn gen_users<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<User> {
    (1..=n)
        .map(|i| User {
            id: u32::try_from(i).unwrap_or(u32::MAX),
            name: format!("User {i}"),
            email: format!("user{i}@example.com"),
            approved: rng.gen_bool(APPROVAL_RATE),
        })
        .collect()
}

/// Audit entries spread over the last thirty days.
pub fn gen_audit<R: Rng + ?Sized>(n: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<AuditEntry> {
    (0..n)
        .map(|_| {
            let (user, action, time) = random_event(now, rng);
            AuditEntry {
                time,
                user,
                action,
            }
        })
        .collect()
}

/// Activity entries spread over the last thirty days.
pub fn gen_activity<R: Rng + ?Sized>(
    n: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ActivityEntry> {
    (0..n)
        .map(|_| {
            let (user, action, time) = random_event(now, rng);
            ActivityEntry {
                user,
                action,
                time,
            }
        })
        .collect()
}

fn random_event<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> (String, String, DateTime<Utc>) {
    let user = SAMPLE_USERS.choose(rng).copied().unwrap_or("Admin");
    let action = SAMPLE_ACTIONS.choose(rng).copied().unwrap_or("Uploaded file");
    let back_ms = rng.gen_range(0..HISTORY_DAYS * 24 * 3600 * 1000);
    (user.to_string(), action.to_string(), now - TimeDelta::milliseconds(back_ms))
}

/// The three-user fixture shown when generation is off.
pub fn fixture_users() -> Vec<User> {
    [
        (1, "Alice Admin", "alice@example.com", true),
        (2, "Bob Pending", "bob@example.com", false),
        (3, "Carol User", "carol@example.com", true),
    ]
    .into_iter()
    .map(|(id, name, email, approved)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        approved,
    })
    .collect()
}

/// Single bootstrap audit line.
pub fn fixture_audit(now: DateTime<Utc>) -> Vec<AuditEntry> {
    vec![AuditEntry {
        time: now,
        user: "System".to_string(),
        action: "Initial setup".to_string(),
    }]
}

/// Three activity items: today, two days ago, ten days ago.
pub fn fixture_activity(now: DateTime<Utc>) -> Vec<ActivityEntry> {
    [
        ("John Doe", "Uploaded receipt.pdf", 0),
        ("Jane Smith", "Deleted old_contract.docx", 2),
        ("Alex Johnson", "Shared report.xlsx with team", 10),
    ]
    .into_iter()
    .map(|(user, action, days_ago)| ActivityEntry {
        user: user.to_string(),
        action: action.to_string(),
        time: now - TimeDelta::days(days_ago),
    })
    .collect()
}

/// Records for a fresh page, honouring [`SampleConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    /// Seed users.
    pub users: Vec<User>,
    /// Seed audit trail.
    pub audit: Vec<AuditEntry>,
    /// Seed activity feed.
    pub activity: Vec<ActivityEntry>,
}

impl SampleData {
    /// Generate or fall back to fixtures, as configured.
    pub fn build<R: Rng + ?Sized>(config: &SampleConfig, now: DateTime<Utc>, rng: &mut R) -> Self {
        if config.generate {
            Self {
                users: gen_users(config.users, rng),
                audit: gen_audit(config.audit, now, rng),
                activity: gen_activity(config.activity, now, rng),
            }
        } else {
            Self {
                users: fixture_users(),
                audit: fixture_audit(now),
                activity: fixture_activity(now),
            }
        }
    }
}
