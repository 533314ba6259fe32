use crate::models::time_event::TimeEvent;
use crate::utils::time::minutes_between;

/// True iff every clock-in has its clock-out.
pub fn is_paired(events: &[TimeEvent]) -> bool {
    events.len() % 2 == 0
}

/// Sum of `(out - in)` over consecutive pairs.
///
/// A pair whose OUT is earlier than its IN crosses midnight, so each pair
/// contributes a non-negative amount. Returns `None` for an odd-length
/// sequence: an open clock-in has no defined duration.
pub fn calculate_worked(events: &[TimeEvent]) -> Option<i64> {
    if !is_paired(events) {
        return None;
    }

    Some(
        events
            .chunks_exact(2)
            .map(|pair| minutes_between(pair[0].time(), pair[1].time()))
            .sum(),
    )
}
