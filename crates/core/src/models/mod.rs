pub mod bill;
pub mod expense;
pub mod goal;
pub mod income;
pub mod insight;
pub mod settings;
pub mod store;
pub mod summary;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Identifier of an income entry, expense or bill.
///
/// Legacy blobs use millisecond timestamps; new ids are allocated as
/// `max(existing) + 1` so both schemes coexist in one store.
pub type RecordId = u64;

/// A record that belongs to a calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// A record carrying a monetary amount that can be summed.
pub trait Valued {
    fn amount(&self) -> f64;
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

impl<T: Valued + ?Sized> Valued for &T {
    fn amount(&self) -> f64 {
        (**self).amount()
    }
}

/// Reads a number that older blobs may have stored as `null` (a `NaN`
/// serialized by the web app). Missing or null values become `0.0`.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Reads a whole count from a field the web form filled with `parseInt`:
/// a cleared input arrives as `null`, a mistyped one as a negative number.
/// Anything below `min` (or unreadable) becomes `min`.
fn count_at_least<'de, D>(deserializer: D, min: u32) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(match value {
        Some(v) if v.is_finite() && v >= f64::from(min) => v.min(f64::from(u32::MAX)) as u32,
        _ => min,
    })
}

/// Installment counts: `null`, zero or negative read as 1.
pub(crate) fn lenient_installments<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    count_at_least(deserializer, 1)
}

/// Streak: `null` or negative read as 0.
pub(crate) fn lenient_streak<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    count_at_least(deserializer, 0)
}
