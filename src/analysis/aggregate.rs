use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{BucketKey, Granularity, Record};
use crate::error::LensError;

/// Mean revenue for one temporal key. Keys with no matching records are
/// simply absent; there are no zero-filled gaps.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Bucket {
    pub key: BucketKey,
    pub mean_price: f64,
}

/// Round to 2 decimal places, half away from zero. For the prices this
/// data carries (positive, and the odd negative refund) that is half-up
/// on the magnitude; f64::round ties away from zero.
///
/// The tie is judged on the f64 value after scaling by 100, so a nominal
/// tie with no exact binary representation (a mean of 2.675 is really
/// 2.67499...) lands on whichever side the stored value sits.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A non-empty record batch where no record carries the named field at
/// all is structurally unusable, distinct from a merely-empty result.
/// This is a property of a whole inbound batch; subsets sliced from a
/// batch that passed are exempt (they may be all-degraded and still
/// aggregate to an empty bucket list).
pub(crate) fn check_schema(records: &[Record]) -> Result<(), LensError> {
    if records.is_empty() {
        return Ok(());
    }
    if records.iter().all(|r| r.timestamp.is_none()) {
        return Err(LensError::Schema { field: "date" });
    }
    if records.iter().all(|r| r.price.is_none()) {
        return Err(LensError::Schema { field: "price" });
    }
    Ok(())
}

/// Group records by the granularity's key and compute the mean price per
/// group, sorted ascending by key. Degraded records drop out here;
/// an all-degraded input yields no buckets.
pub(crate) fn bucketize(records: &[Record], granularity: Granularity) -> Vec<Bucket> {
    // (sum, count) per key
    let mut groups: HashMap<BucketKey, (f64, usize)> = HashMap::new();
    for record in records {
        let (Some(ts), Some(price)) = (record.timestamp, record.price) else {
            continue;
        };
        let entry = groups.entry(granularity.key_of(ts)).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }

    let mut buckets: Vec<Bucket> = groups
        .into_iter()
        .map(|(key, (sum, count))| Bucket {
            key,
            mean_price: round2(sum / count as f64),
        })
        .collect();
    buckets.sort_by_key(|bucket| bucket.key);
    buckets
}

/// Aggregate a record batch: schema precondition first, then group and
/// average. An empty batch aggregates to no buckets.
pub fn aggregate(records: &[Record], granularity: Granularity) -> Result<Vec<Bucket>, LensError> {
    check_schema(records)?;
    Ok(bucketize(records, granularity))
}
