//! Row models for the dashboard's lists and tables.
//!
//! Each panel repaints from scratch: it builds a [`Listing`] from the current
//! records and hands it to the markup layer. An empty listing always carries
//! the panel's empty-state message, so no container is ever rendered blank.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::{ActivityEntry, AuditEntry, Document, User};

/// Empty-state message of the activity feed.
pub const EMPTY_ACTIVITY: &str = "No activities in this period.";
/// Empty-state message of the approval queue.
pub const EMPTY_PENDING: &str = "No users need approval.";
/// Empty-state message of the user table.
pub const EMPTY_USERS: &str = "No users yet.";
/// Empty-state message of the audit table.
pub const EMPTY_AUDIT: &str = "No logs yet.";
/// Empty-state message of the document library.
pub const EMPTY_DOCUMENTS: &str = "No documents yet.";

/// Either rows to draw or the placeholder that replaces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    /// Nothing to show; render this message instead.
    Empty(&'static str),
    /// At least one row.
    Rows(Vec<T>),
}

impl<T> Listing<T> {
    /// Map `items` to rows, or produce `Empty(empty)` when there are none.
    pub fn build<I, F>(items: I, empty: &'static str, row: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> T,
    {
        let rows: Vec<T> = items.into_iter().map(row).collect();
        if rows.is_empty() {
            Listing::Empty(empty)
        } else {
            Listing::Rows(rows)
        }
    }

    /// Number of rows; zero for the empty state.
    pub fn len(&self) -> usize {
        match self {
            Listing::Empty(_) => 0,
            Listing::Rows(rows) => rows.len(),
        }
    }

    /// `true` for the empty state.
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty(_))
    }
}

/// Format a stored instant for display in the viewer's zone.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.with_timezone(zone)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Same as [`format_timestamp`] using the browser's local zone.
pub fn format_local(time: &DateTime<Utc>) -> String {
    format_timestamp(time, &Local)
}

/// Activity feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    /// Avatar letter.
    pub initial: char,
    /// Bold user name.
    pub user: String,
    /// Action text.
    pub action: String,
    /// Formatted timestamp.
    pub when: String,
}

impl ActivityRow {
    /// Build a row, formatting the time in `zone`.
    pub fn from_entry<Tz>(entry: &ActivityEntry, zone: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            initial: avatar_initial(&entry.user),
            user: entry.user.clone(),
            action: entry.action.clone(),
            when: format_timestamp(&entry.time, zone),
        }
    }
}

/// First character of a name, `'U'` for anonymous entries.
pub fn avatar_initial(name: &str) -> char {
    name.trim().chars().next().unwrap_or('U')
}

/// Activity listing for an already filtered slice.
pub fn activity_listing<'a, I, Tz>(entries: I, zone: &Tz) -> Listing<ActivityRow>
where
    I: IntoIterator<Item = &'a ActivityEntry>,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    Listing::build(entries, EMPTY_ACTIVITY, |entry| ActivityRow::from_entry(entry, zone))
}

/// Approval status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    /// Approved account.
    Approved,
    /// Waiting in the approval queue.
    Pending,
}

impl UserStatus {
    /// Column text.
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Approved => "Approved",
            UserStatus::Pending => "Pending",
        }
    }
}

/// One row of the approval queue or user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// Target of approve/deny actions.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Status column.
    pub status: UserStatus,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            status: if user.approved { UserStatus::Approved } else { UserStatus::Pending },
        }
    }
}

/// Both blocks of the users panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersView {
    /// Users still waiting for approval.
    pub pending: Listing<UserRow>,
    /// Every user with a status column.
    pub all: Listing<UserRow>,
}

impl UsersView {
    /// Partition `users` into the approval queue and the full table.
    pub fn build(users: &[User]) -> Self {
        Self {
            pending: Listing::build(
                users.iter().filter(|user| !user.approved),
                EMPTY_PENDING,
                UserRow::from,
            ),
            all: Listing::build(users, EMPTY_USERS, UserRow::from),
        }
    }
}

/// Audit table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRow {
    /// Formatted timestamp.
    pub when: String,
    /// Actor.
    pub user: String,
    /// Action text.
    pub action: String,
}

/// Audit listing formatted in `zone`.
pub fn audit_listing<Tz>(entries: &[AuditEntry], zone: &Tz) -> Listing<AuditRow>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    Listing::build(entries, EMPTY_AUDIT, |entry| AuditRow {
        when: format_timestamp(&entry.time, zone),
        user: entry.user.clone(),
        action: entry.action.clone(),
    })
}

/// Document library listing.
pub fn document_listing(documents: &[Document]) -> Listing<Document> {
    Listing::build(documents, EMPTY_DOCUMENTS, Clone::clone)
}

/// What the analytics page should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsLayout {
    /// No chart cards yet: show the empty panel, hide the grid.
    EmptyPanel,
    /// Show the chart grid, hide the empty panel.
    Charts,
}

impl AnalyticsLayout {
    /// Decide from the number of chart cards present.
    pub fn for_cards(count: u32) -> Self {
        if count == 0 {
            AnalyticsLayout::EmptyPanel
        } else {
            AnalyticsLayout::Charts
        }
    }

    /// Same, for a page whose chart container may be missing. A missing
    /// container holds no cards.
    pub fn for_container(cards: Option<u32>) -> Self {
        Self::for_cards(cards.unwrap_or(0))
    }

    /// CSS `display` of the `aiEmpty` panel.
    pub fn empty_display(self) -> &'static str {
        match self {
            AnalyticsLayout::EmptyPanel => "flex",
            AnalyticsLayout::Charts => "none",
        }
    }

    /// CSS `display` of the chart container.
    pub fn charts_display(self) -> &'static str {
        match self {
            AnalyticsLayout::EmptyPanel => "none",
            AnalyticsLayout::Charts => "grid",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::models::DocType;

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    fn user(id: u32, name: &str, approved: bool) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            approved,
        }
    }

    #[test]
    fn empty_sequences_render_placeholders() {
        let zone = FixedOffset::east_opt(0).expect("offset");
        assert_eq!(activity_listing(&[], &zone), Listing::Empty(EMPTY_ACTIVITY));
        assert_eq!(audit_listing(&[], &zone), Listing::Empty(EMPTY_AUDIT));
        assert_eq!(document_listing(&[]), Listing::Empty(EMPTY_DOCUMENTS));

        let view = UsersView::build(&[]);
        assert_eq!(view.pending, Listing::Empty(EMPTY_PENDING));
        assert_eq!(view.all, Listing::Empty(EMPTY_USERS));
        assert!(view.all.is_empty());
        assert_eq!(view.all.len(), 0);
    }

    #[test]
    fn users_view_partitions_pending() {
        let users = vec![user(1, "Alice", true), user(2, "Bob", false), user(3, "Carol", true)];
        let view = UsersView::build(&users);

        let Listing::Rows(pending) = &view.pending else {
            panic!("expected pending rows");
        };
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 2);
        assert_eq!(pending[0].status.label(), "Pending");

        let Listing::Rows(all) = &view.all else {
            panic!("expected user rows");
        };
        let ids: Vec<u32> = all.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[0].status, UserStatus::Approved);
    }

    #[test]
    fn all_approved_leaves_queue_empty() {
        let view = UsersView::build(&[user(1, "Alice", true)]);
        assert_eq!(view.pending, Listing::Empty(EMPTY_PENDING));
        assert_eq!(view.all.len(), 1);
    }

    #[test]
    fn activity_rows_format_in_viewer_zone() {
        let zone = FixedOffset::east_opt(2 * 3600).expect("offset");
        let entries = vec![
            ActivityEntry {
                user: "Jane Smith".to_string(),
                action: "Shared report.xlsx with team".to_string(),
                time: utc("2024-05-10T22:15:09Z"),
            },
            ActivityEntry {
                user: String::new(),
                action: "Logged in".to_string(),
                time: utc("2024-05-10T08:00:00Z"),
            },
        ];

        let Listing::Rows(rows) = activity_listing(&entries, &zone) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].initial, 'J');
        assert_eq!(rows[0].when, "2024-05-11 00:15:09");
        assert_eq!(rows[1].initial, 'U');
    }

    #[test]
    fn audit_rows_keep_order() {
        let zone = FixedOffset::east_opt(0).expect("offset");
        let entries = vec![
            AuditEntry {
                time: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
                user: "System".to_string(),
                action: "Initial setup".to_string(),
            },
            AuditEntry {
                time: Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap(),
                user: "Admin".to_string(),
                action: "Deleted file".to_string(),
            },
        ];
        let Listing::Rows(rows) = audit_listing(&entries, &zone) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].when, "2024-01-02 03:04:05");
        assert_eq!(rows[1].user, "Admin");
    }

    #[test]
    fn documents_listing_clones_rows() {
        let docs = vec![Document {
            name: "a.pdf".to_string(),
            doc_type: DocType::Pdf,
            size: "2 KB".to_string(),
            modified: "2024-06-01 09:05".to_string(),
            owner: "Admin".to_string(),
        }];
        assert_eq!(document_listing(&docs), Listing::Rows(docs.clone()));
    }

    #[test]
    fn analytics_layout_depends_on_cards() {
        assert_eq!(AnalyticsLayout::for_cards(0), AnalyticsLayout::EmptyPanel);
        assert_eq!(AnalyticsLayout::for_cards(3), AnalyticsLayout::Charts);
    }

    #[test]
    fn missing_chart_container_shows_empty_panel() {
        let layout = AnalyticsLayout::for_container(None);
        assert_eq!(layout, AnalyticsLayout::EmptyPanel);
        assert_eq!(layout.empty_display(), "flex");
        assert_eq!(layout.charts_display(), "none");

        let layout = AnalyticsLayout::for_container(Some(2));
        assert_eq!(layout.empty_display(), "none");
        assert_eq!(layout.charts_display(), "grid");
    }
}
