//! Creation/update timestamps relative to the generation time.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::errors::SeedError;
use crate::random::RandomSource;

/// How far back a record's creation time may lie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeWindow {
    /// Creation lies 1..=max_days_ago days before now.
    pub max_days_ago: u32,
    /// Whether an extra 1..=23 hours are subtracted from the creation time.
    pub hour_offset: bool,
}

impl AgeWindow {
    /// Longest accepted window, roughly a century.
    pub const MAX_DAYS_AGO: u32 = 36_500;

    pub const ITEMS: AgeWindow = AgeWindow {
        max_days_ago: 90,
        hour_offset: true,
    };

    pub const DEMANDS: AgeWindow = AgeWindow {
        max_days_ago: 30,
        hour_offset: false,
    };
}

/// Age windows per entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    pub items: AgeWindow,
    pub demands: AgeWindow,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            items: AgeWindow::ITEMS,
            demands: AgeWindow::DEMANDS,
        }
    }
}

/// Offsets a record's timestamps were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordAge {
    pub days_ago: i64,
    pub hours_ago: i64,
}

/// Derived creation and update instants plus the offsets behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTimestamps {
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub age: RecordAge,
}

/// Derives `created_at`/`updated_at` pairs relative to the generation time.
///
/// `updated_at` always subtracts one day fewer than `created_at` and no hour
/// offset, so it is strictly later.
#[derive(Debug, Clone, Copy)]
pub struct TimestampDeriver {
    window: AgeWindow,
}

impl TimestampDeriver {
    pub fn new(window: AgeWindow) -> Result<Self, SeedError> {
        if window.max_days_ago == 0 {
            return Err(SeedError::config("age window must allow at least one day"));
        }
        if window.max_days_ago > AgeWindow::MAX_DAYS_AGO {
            return Err(SeedError::config(format!(
                "age window of {} days exceeds the {} day limit",
                window.max_days_ago,
                AgeWindow::MAX_DAYS_AGO
            )));
        }
        Ok(Self { window })
    }

    /// Deriver using the default item window.
    pub const fn for_items() -> Self {
        Self {
            window: AgeWindow::ITEMS,
        }
    }

    /// Deriver using the default demand window.
    pub const fn for_demands() -> Self {
        Self {
            window: AgeWindow::DEMANDS,
        }
    }

    /// Fails only when `now` sits so close to the edge of the representable
    /// range that the offsets cannot be applied.
    pub fn derive_timestamps(
        &self,
        now: OffsetDateTime,
        rng: &mut impl RandomSource,
    ) -> Result<DerivedTimestamps, SeedError> {
        let days_ago = rng.uniform_int(1, i64::from(self.window.max_days_ago));
        let hours_ago = if self.window.hour_offset {
            rng.uniform_int(1, 23)
        } else {
            0
        };

        let created_at = now
            .checked_sub(Duration::days(days_ago) + Duration::hours(hours_ago))
            .ok_or(SeedError::TimestampRange { now, days_ago })?;
        let updated_at = now
            .checked_sub(Duration::days(days_ago - 1))
            .ok_or(SeedError::TimestampRange { now, days_ago })?;

        Ok(DerivedTimestamps {
            created_at,
            updated_at,
            age: RecordAge {
                days_ago,
                hours_ago,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_updated_after_created() {
        let now = OffsetDateTime::now_utc();
        let deriver = TimestampDeriver::new(AgeWindow::ITEMS).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..1000 {
            let ts = deriver.derive_timestamps(now, &mut rng).unwrap();
            assert!(ts.updated_at > ts.created_at);
            assert!(ts.updated_at <= now);
            assert!((1..=90).contains(&ts.age.days_ago));
            assert!((1..=23).contains(&ts.age.hours_ago));
        }
    }

    #[test]
    fn test_demand_window_has_no_hour_offset() {
        let now = OffsetDateTime::now_utc();
        let deriver = TimestampDeriver::new(AgeWindow::DEMANDS).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..500 {
            let ts = deriver.derive_timestamps(now, &mut rng).unwrap();
            assert_eq!(ts.age.hours_ago, 0);
            assert!((1..=30).contains(&ts.age.days_ago));
            assert_eq!(ts.updated_at - ts.created_at, Duration::days(1));
        }
    }

    #[test]
    fn test_exact_offsets() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(1000);
        let deriver = TimestampDeriver::new(AgeWindow::ITEMS).unwrap();
        // days: 1 + floor(0.5 * 90) = 46, hours: 1 + floor(0.0 * 23) = 1
        let mut rng = ScriptedSource::new([0.5, 0.0]);

        let ts = deriver.derive_timestamps(now, &mut rng).unwrap();
        assert_eq!(
            ts.age,
            RecordAge {
                days_ago: 46,
                hours_ago: 1
            }
        );
        assert_eq!(ts.created_at, now - Duration::days(46) - Duration::hours(1));
        assert_eq!(ts.updated_at, now - Duration::days(45));
    }

    #[test]
    fn test_zero_day_window_is_rejected() {
        let window = AgeWindow {
            max_days_ago: 0,
            hour_offset: false,
        };
        assert!(TimestampDeriver::new(window).is_err());
    }

    #[test]
    fn test_oversized_window_is_rejected() {
        let window = AgeWindow {
            max_days_ago: 10_000_000,
            hour_offset: true,
        };
        let err = TimestampDeriver::new(window).unwrap_err();
        assert!(matches!(err, SeedError::Configuration(ref msg) if msg.contains("10000000")));

        let widest = AgeWindow {
            max_days_ago: AgeWindow::MAX_DAYS_AGO,
            hour_offset: true,
        };
        let deriver = TimestampDeriver::new(widest).unwrap();
        let mut rng = ScriptedSource::new([0.999_999, 0.999_999]);
        let ts = deriver
            .derive_timestamps(OffsetDateTime::now_utc(), &mut rng)
            .unwrap();
        assert_eq!(ts.age.days_ago, i64::from(AgeWindow::MAX_DAYS_AGO));
    }

    #[test]
    fn test_out_of_range_now_is_an_error() {
        let deriver = TimestampDeriver::for_items();
        let earliest = time::Date::MIN.midnight().assume_utc();
        let mut rng = ScriptedSource::new([0.5, 0.5]);

        assert!(matches!(
            deriver.derive_timestamps(earliest, &mut rng),
            Err(SeedError::TimestampRange { days_ago: 46, .. })
        ));
    }
}
