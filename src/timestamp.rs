use std::fmt;
use std::ops::{Add, Sub};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SEC: i64 = 1_000_000_000;
const SECS_PER_DAY: i64 = 86_400;

/// A fixed-width point in time: signed 64-bit nanoseconds since the Unix
/// epoch, always UTC. There is no timezone or "kind" concept.
///
/// `Timestamp` is an immutable value type whose total order is the integer
/// order of the underlying count, which makes it a diffable key for
/// interpolation search. The representable range is roughly the years 1677
/// to 2262.
///
/// # Example
/// ```
/// use sortsearch::Timestamp;
/// use std::time::Duration;
///
/// let t = Timestamp::from_nanos(1_609_459_200_000_000_000);
/// assert_eq!(t.to_string(), "2021-01-01T00:00:00.000000000Z");
/// assert_eq!((t + Duration::from_secs(60)) - t, 60_000_000_000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The earliest representable instant.
    pub const MIN: Timestamp = Timestamp(i64::MIN);
    /// The latest representable instant.
    pub const MAX: Timestamp = Timestamp(i64::MAX);
    /// 1970-01-01T00:00:00Z.
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Creates a timestamp from a raw nanosecond count since the Unix epoch.
    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Returns the raw nanosecond count since the Unix epoch.
    #[inline]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Signed distance `self - other` in nanoseconds.
    ///
    /// Wraps only at the extreme edges of the 64-bit range (instants more
    /// than ~292 years apart), which is accepted: interpolation estimates
    /// built on the diff are refined by exact comparisons.
    #[inline]
    pub const fn diff(self, other: Timestamp) -> i64 {
        self.0.wrapping_sub(other.0)
    }

    /// Adds `nanos`, returning `None` on overflow.
    #[inline]
    pub fn checked_add_nanos(self, nanos: i64) -> Option<Timestamp> {
        self.0.checked_add(nanos).map(Timestamp)
    }

    /// Subtracts `nanos`, returning `None` on overflow.
    #[inline]
    pub fn checked_sub_nanos(self, nanos: i64) -> Option<Timestamp> {
        self.0.checked_sub(nanos).map(Timestamp)
    }

    /// The current wall-clock time.
    pub fn now() -> Timestamp {
        SystemTime::now().into()
    }
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(d) => Timestamp(d.as_nanos() as i64),
            Err(e) => Timestamp(-(e.duration().as_nanos() as i64)),
        }
    }
}

impl From<Timestamp> for SystemTime {
    fn from(ts: Timestamp) -> Self {
        if ts.0 >= 0 {
            UNIX_EPOCH + Duration::from_nanos(ts.0 as u64)
        } else {
            UNIX_EPOCH - Duration::from_nanos(ts.0.unsigned_abs())
        }
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    /// Checked addition: panics on overflow rather than silently wrapping,
    /// which would corrupt ordering comparisons downstream.
    fn add(self, rhs: Duration) -> Timestamp {
        let nanos = i64::try_from(rhs.as_nanos()).expect("duration exceeds the timestamp range");
        Timestamp(
            self.0
                .checked_add(nanos)
                .expect("timestamp addition overflowed"),
        )
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    /// Checked subtraction: panics on overflow.
    fn sub(self, rhs: Duration) -> Timestamp {
        let nanos = i64::try_from(rhs.as_nanos()).expect("duration exceeds the timestamp range");
        Timestamp(
            self.0
                .checked_sub(nanos)
                .expect("timestamp subtraction overflowed"),
        )
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = i64;

    /// Signed nanosecond distance between two instants.
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.diff(rhs)
    }
}

impl fmt::Display for Timestamp {
    /// ISO-8601-like UTC rendering: `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`.
    ///
    /// The nine fractional digits are always printed, so the text form is
    /// fixed-width, unambiguous, and lexicographically monotonic with the
    /// underlying value within a four-digit-year range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.div_euclid(NANOS_PER_SEC);
        let nanos = self.0.rem_euclid(NANOS_PER_SEC);

        let days = secs.div_euclid(SECS_PER_DAY);
        let secs_of_day = secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let (hour, minute, second) = (
            secs_of_day / 3600,
            secs_of_day % 3600 / 60,
            secs_of_day % 60,
        );

        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{nanos:09}Z"
        )
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

/// Proleptic Gregorian date for a day count relative to 1970-01-01
/// (Hinnant's `civil_from_days`).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u32, day as u32)
}
