//! Flow statistics
//!
//! Average and median over the flow-sorted record list. Both results are
//! reported in million cubic meters: the input unit (billion cubic meters)
//! is scaled by 1000 and truncated toward zero, never rounded.

use crate::core::model::FlowList;

/// Scale factor from billion to million cubic meters.
const UNIT_SCALE: f64 = 1000.0;

/// Convert a flow in billion cubic meters to whole million cubic meters,
/// discarding the fractional part (truncation toward zero, including for
/// negative values).
fn to_million_m3(flow: f64) -> i64 {
    (flow * UNIT_SCALE).trunc() as i64
}

/// Arithmetic mean of all flow values, in million cubic meters.
///
/// Returns `None` when the list is empty; callers gate display on it.
pub fn average(list: &FlowList) -> Option<i64> {
    if list.is_empty() {
        return None;
    }

    let sum: f64 = list.iter().map(|r| r.flow).sum();
    Some(to_million_m3(sum / list.count() as f64))
}

/// Median flow value, in million cubic meters.
///
/// The list is already sorted by flow, so the median falls out of the
/// sequence positions directly: with n records and mid = n / 2, an odd n
/// takes the flow at position mid (the true middle element) and an even n
/// averages the flows at positions mid - 1 and mid.
///
/// Returns `None` when the list is empty.
pub fn median(list: &FlowList) -> Option<i64> {
    let n = list.count();
    if n == 0 {
        return None;
    }

    let flows: Vec<f64> = list.iter().map(|r| r.flow).collect();
    let mid = n / 2;
    let median_flow = if n % 2 == 0 {
        (flows[mid - 1] + flows[mid]) / 2.0
    } else {
        flows[mid]
    };

    Some(to_million_m3(median_flow))
}
