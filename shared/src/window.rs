//! Date-window filtering for timestamped feeds.

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::models::Timestamped;

/// Days used when a toolbar value cannot be parsed.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Which slice of history a feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateWindow {
    /// Since local midnight.
    Today,
    /// The trailing `n * 24h`.
    LastDays(u32),
}

impl DateWindow {
    /// Windows offered by the activity toolbar, in display order.
    pub const PRESETS: [DateWindow; 4] = [
        DateWindow::Today,
        DateWindow::LastDays(1),
        DateWindow::LastDays(7),
        DateWindow::LastDays(30),
    ];

    /// `0` selects [`DateWindow::Today`], anything else a trailing window.
    pub fn from_days(days: u32) -> Self {
        if days == 0 {
            DateWindow::Today
        } else {
            DateWindow::LastDays(days)
        }
    }

    /// Parse a `data-days` style value, falling back to seven days.
    pub fn parse(raw: &str) -> Self {
        let days = raw.trim().parse::<u32>().unwrap_or(DEFAULT_WINDOW_DAYS);
        Self::from_days(days)
    }

    /// Inverse of [`DateWindow::from_days`].
    pub fn days(self) -> u32 {
        match self {
            DateWindow::Today => 0,
            DateWindow::LastDays(days) => days,
        }
    }

    /// Toolbar built from a host page's `data-days` values, in page order.
    /// Values go through [`DateWindow::parse`], repeats are dropped and a
    /// missing "Today" button is put in front. A page without buttons gets
    /// [`DateWindow::PRESETS`].
    pub fn toolbar<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<DateWindow> {
        let mut windows: Vec<DateWindow> = Vec::new();
        for window in values.into_iter().map(Self::parse) {
            if !windows.contains(&window) {
                windows.push(window);
            }
        }
        if windows.is_empty() {
            return Self::PRESETS.to_vec();
        }
        if !windows.contains(&DateWindow::Today) {
            windows.insert(0, DateWindow::Today);
        }
        windows
    }

    /// Toolbar label.
    pub fn label(self) -> String {
        match self {
            DateWindow::Today => "Today".to_string(),
            DateWindow::LastDays(days) => format!("{days}d"),
        }
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        DateWindow::LastDays(DEFAULT_WINDOW_DAYS)
    }
}

/// Earliest instant (inclusive) that belongs to `window`, evaluated in the
/// time zone of `now`.
pub fn cutoff<Tz: TimeZone>(window: DateWindow, now: &DateTime<Tz>) -> DateTime<Tz> {
    match window {
        DateWindow::Today => start_of_day(now),
        DateWindow::LastDays(days) => TimeDelta::try_days(i64::from(days))
            .and_then(|span| now.clone().checked_sub_signed(span))
            // Windows reaching past chrono's range cover all of history.
            .unwrap_or_else(|| DateTime::<Utc>::MIN_UTC.with_timezone(&now.timezone())),
    }
}

fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    // Zones with a DST jump at midnight have no 00:00; the day then starts
    // at the first valid instant after the gap.
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| now.clone())
}

/// Records inside `window`, in their original order. The result borrows from
/// `records`; the source is never touched.
pub fn filter_window<'a, T, Tz>(
    records: &'a [T],
    window: DateWindow,
    now: &DateTime<Tz>,
) -> Vec<&'a T>
where
    T: Timestamped,
    Tz: TimeZone,
{
    let threshold = cutoff(window, now).with_timezone(&Utc);
    records
        .iter()
        .filter(|record| record.timestamp() >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

    use super::*;
    use crate::models::ActivityEntry;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).expect("valid timestamp")
    }

    /// UTC-4 zone that jumps forward `gap_hours` at local midnight on
    /// 2024-09-08, so that day has no 00:00.
    #[derive(Debug, Clone, Copy)]
    struct MidnightGap {
        gap_hours: i32,
    }

    #[derive(Debug, Clone, Copy)]
    struct GapOffset {
        zone: MidnightGap,
        fixed: FixedOffset,
    }

    impl Offset for GapOffset {
        fn fix(&self) -> FixedOffset {
            self.fixed
        }
    }

    impl MidnightGap {
        fn switch_local() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 9, 8)
                .expect("valid date")
                .and_time(NaiveTime::MIN)
        }

        fn switch_utc() -> NaiveDateTime {
            Self::switch_local() + TimeDelta::hours(4)
        }

        fn offset(self, hours: i32) -> GapOffset {
            GapOffset {
                zone: self,
                fixed: FixedOffset::east_opt(hours * 3600).expect("valid offset"),
            }
        }
    }

    impl TimeZone for MidnightGap {
        type Offset = GapOffset;

        fn from_offset(offset: &GapOffset) -> Self {
            offset.zone
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<GapOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<GapOffset> {
            let gap_end = Self::switch_local() + TimeDelta::hours(i64::from(self.gap_hours));
            if *local < Self::switch_local() {
                LocalResult::Single(self.offset(-4))
            } else if *local < gap_end {
                LocalResult::None
            } else {
                LocalResult::Single(self.offset(-4 + self.gap_hours))
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> GapOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> GapOffset {
            if *utc < Self::switch_utc() {
                self.offset(-4)
            } else {
                self.offset(-4 + self.gap_hours)
            }
        }
    }

    fn entry(user: &str, time: DateTime<FixedOffset>) -> ActivityEntry {
        ActivityEntry {
            user: user.to_string(),
            action: "Uploaded file".to_string(),
            time: time.with_timezone(&Utc),
        }
    }

    #[test]
    fn parse_falls_back_to_seven_days() {
        assert_eq!(DateWindow::parse("0"), DateWindow::Today);
        assert_eq!(DateWindow::parse(" 30 "), DateWindow::LastDays(30));
        assert_eq!(DateWindow::parse("soon"), DateWindow::LastDays(7));
        assert_eq!(DateWindow::parse(""), DateWindow::LastDays(7));
        assert_eq!(DateWindow::parse("-3"), DateWindow::LastDays(7));
    }

    #[test]
    fn host_toolbar_gains_today_and_drops_repeats() {
        assert_eq!(
            DateWindow::toolbar(["1", "7", "30"]),
            vec![
                DateWindow::Today,
                DateWindow::LastDays(1),
                DateWindow::LastDays(7),
                DateWindow::LastDays(30)
            ]
        );
        assert_eq!(
            DateWindow::toolbar(["14", "0", "bogus", "7"]),
            vec![DateWindow::LastDays(14), DateWindow::Today, DateWindow::LastDays(7)]
        );
        assert_eq!(DateWindow::toolbar([]), DateWindow::PRESETS.to_vec());
    }

    #[test]
    fn oversized_window_reaches_back_to_the_start_of_time() {
        let now = at("2024-05-10T15:42:07+02:00");
        let window = DateWindow::parse("4294967295");
        assert_eq!(window, DateWindow::LastDays(u32::MAX));
        assert_eq!(cutoff(window, &now), DateTime::<Utc>::MIN_UTC);

        let records = vec![entry("old", at("1970-01-01T00:00:00+00:00"))];
        assert_eq!(filter_window(&records, window, &now).len(), 1);
    }

    #[test]
    fn today_starts_after_a_midnight_dst_gap() {
        let zone = MidnightGap {
            gap_hours: 1,
        };
        let now = zone.with_ymd_and_hms(2024, 9, 8, 15, 0, 0).single().expect("after the gap");
        // 01:00 at UTC-3 is the first instant of the day.
        assert_eq!(
            cutoff(DateWindow::Today, &now),
            Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).single().expect("valid instant")
        );
    }

    #[test]
    fn today_falls_back_to_now_when_the_gap_swallows_two_hours() {
        let zone = MidnightGap {
            gap_hours: 2,
        };
        let now = zone.with_ymd_and_hms(2024, 9, 8, 15, 0, 0).single().expect("after the gap");
        assert_eq!(cutoff(DateWindow::Today, &now), now);
    }

    #[test]
    fn today_cutoff_is_local_midnight() {
        let now = at("2024-05-10T15:42:07+02:00");
        assert_eq!(cutoff(DateWindow::Today, &now), at("2024-05-10T00:00:00+02:00"));
    }

    #[test]
    fn trailing_cutoff_subtracts_whole_days() {
        let now = at("2024-05-10T15:42:07+02:00");
        assert_eq!(cutoff(DateWindow::LastDays(1), &now), at("2024-05-09T15:42:07+02:00"));
        assert_eq!(cutoff(DateWindow::LastDays(30), &now), at("2024-04-10T15:42:07+02:00"));
    }

    #[test]
    fn filter_keeps_order_and_inclusive_boundary() {
        let now = at("2024-05-10T12:00:00+00:00");
        let records = vec![
            entry("a", at("2024-05-10T09:00:00+00:00")),
            entry("b", at("2024-05-09T12:00:00+00:00")),
            entry("c", at("2024-05-03T12:00:00+00:00")),
            entry("d", at("2024-05-10T00:00:00+00:00")),
            entry("e", at("2024-04-01T00:00:00+00:00")),
        ];

        let users = |window| {
            filter_window(&records, window, &now)
                .into_iter()
                .map(|record| record.user.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(users(DateWindow::Today), vec!["a", "d"]);
        assert_eq!(users(DateWindow::LastDays(1)), vec!["a", "b", "d"]);
        assert_eq!(users(DateWindow::LastDays(7)), vec!["a", "b", "c", "d"]);
        assert_eq!(users(DateWindow::LastDays(30)), vec!["a", "b", "c", "d"]);
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn today_respects_time_zone_of_now() {
        // 23:30 UTC on the 9th is already the 10th in UTC+2.
        let now = at("2024-05-10T08:00:00+02:00");
        let records = vec![entry("late", Utc.with_ymd_and_hms(2024, 5, 9, 23, 30, 0).unwrap().fixed_offset())];
        assert_eq!(filter_window(&records, DateWindow::Today, &now).len(), 1);

        let utc_now = now.with_timezone(&Utc);
        assert!(filter_window(&records, DateWindow::Today, &utc_now).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_view() {
        let now = at("2024-05-10T12:00:00+00:00");
        let records: Vec<ActivityEntry> = Vec::new();
        for window in DateWindow::PRESETS {
            assert!(filter_window(&records, window, &now).is_empty());
        }
    }
}
