//! Scoring module - points per lock
//!
//! One lock can complete at most four lines (the tallest piece spans four
//! rows). Any other count falls through to zero.

use crate::types::{LockEvent, LINE_SCORES};

/// Points for clearing `lines` rows with a single lock
pub fn score_for(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Build the event recorded after a clearing phase
pub fn lock_event(lines: u32) -> LockEvent {
    LockEvent {
        lines_cleared: lines,
        points: score_for(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 100);
        assert_eq!(score_for(2), 300);
        assert_eq!(score_for(3), 500);
        assert_eq!(score_for(4), 800);
    }

    #[test]
    fn test_unrecognized_counts_score_nothing() {
        assert_eq!(score_for(5), 0);
        assert_eq!(score_for(20), 0);
        assert_eq!(score_for(u32::MAX), 0);
    }

    #[test]
    fn test_lock_event() {
        let ev = lock_event(2);
        assert_eq!(ev.lines_cleared, 2);
        assert_eq!(ev.points, 300);
        assert_eq!(lock_event(0), LockEvent::default());
    }
}
