//! Decision - スワイプ判定
//!
//! What a resolved swipe gesture means.
//!
//! `judge` is a pure function (offset + threshold -> verdict). Carrying out the
//! verdict, i.e. advancing the cursor, is the swipe engine's job.

use super::artwork::Artwork;

/// Default swipe distance, in pointer units, a drag must exceed to count.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Direction of a resolved gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Like,
    Pass,
}

/// Judge a drag offset against the threshold.
///
/// Strictly greater than `threshold` likes, strictly less than `-threshold`
/// passes. Anything in between (inclusive) is undecided.
pub fn judge(offset: f64, threshold: f64) -> Option<Verdict> {
    if offset > threshold {
        Some(Verdict::Like)
    } else if offset < -threshold {
        Some(Verdict::Pass)
    } else {
        None
    }
}

/// Event emitted when the cursor resolves on an artwork.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeDecision {
    Liked(Artwork),
    Passed(Artwork),
}

impl SwipeDecision {
    pub fn new(verdict: Verdict, artwork: Artwork) -> Self {
        match verdict {
            Verdict::Like => SwipeDecision::Liked(artwork),
            Verdict::Pass => SwipeDecision::Passed(artwork),
        }
    }

    pub fn artwork(&self) -> &Artwork {
        match self {
            SwipeDecision::Liked(artwork) | SwipeDecision::Passed(artwork) => artwork,
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            SwipeDecision::Liked(_) => Verdict::Like,
            SwipeDecision::Passed(_) => Verdict::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::like(101.0, Some(Verdict::Like))]
    #[case::pass(-101.0, Some(Verdict::Pass))]
    #[case::inside(50.0, None)]
    #[case::exactly_threshold(100.0, None)]
    #[case::exactly_negative_threshold(-100.0, None)]
    #[case::zero(0.0, None)]
    fn judge_uses_strict_threshold(#[case] offset: f64, #[case] expected: Option<Verdict>) {
        assert_eq!(judge(offset, SWIPE_THRESHOLD), expected);
    }
}
