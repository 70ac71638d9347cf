//! Swipe - スワイプ操作エンジン
//!
//! Turns a horizontal drag into like / pass / nothing and walks a cursor
//! through one artwork sequence. A session is single-pass: once the cursor
//! runs off the end the engine is `Exhausted` for good, and a new engine has
//! to be built for a new sequence.
//!
//! The engine only reports decisions; keeping liked artworks is the caller's
//! business.

use tracing::debug;

use crate::domain::{Artwork, SWIPE_THRESHOLD, SwipeDecision, SwipeState, Verdict, judge};

/// Degrees of card tilt per unit of drag offset.
const TILT_PER_UNIT: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct SwipeEngine {
    artworks: Vec<Artwork>,
    state: SwipeState,
    threshold: f64,
    /// Pointer x where the active drag began. `None` when not dragging.
    drag_start: Option<f64>,
    offset: f64,
}

impl SwipeEngine {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self::with_threshold(artworks, SWIPE_THRESHOLD)
    }

    pub fn with_threshold(artworks: Vec<Artwork>, threshold: f64) -> Self {
        let state = SwipeState::initial(artworks.len());
        Self {
            artworks,
            state,
            threshold,
            drag_start: None,
            offset: 0.0,
        }
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// The artwork on top of the stack.
    pub fn current(&self) -> Option<&Artwork> {
        match self.state {
            SwipeState::Presenting(index) => self.artworks.get(index),
            SwipeState::Exhausted => None,
        }
    }

    /// Artworks not yet decided, including the current one.
    pub fn remaining(&self) -> usize {
        match self.state {
            SwipeState::Presenting(index) => self.artworks.len() - index,
            SwipeState::Exhausted => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Card tilt while dragging; zero at rest.
    pub fn rotation_degrees(&self) -> f64 {
        if self.is_dragging() {
            self.offset * TILT_PER_UNIT
        } else {
            0.0
        }
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        if self.state.is_terminal() {
            return;
        }
        self.drag_start = Some(pointer_x);
        self.offset = 0.0;
    }

    pub fn update_drag(&mut self, pointer_x: f64) {
        if let Some(start) = self.drag_start {
            self.offset = pointer_x - start;
        }
    }

    /// Resolve the active drag. Returns the decision, if the offset crossed
    /// the threshold. The offset is back at zero afterwards either way.
    pub fn end_drag(&mut self) -> Option<SwipeDecision> {
        self.drag_start.take()?;
        let offset = std::mem::replace(&mut self.offset, 0.0);
        let verdict = judge(offset, self.threshold);
        debug!(offset, ?verdict, "drag ended");
        self.decide(verdict?)
    }

    /// Like button: no drag involved.
    pub fn like(&mut self) -> Option<SwipeDecision> {
        self.decide(Verdict::Like)
    }

    /// Pass button: no drag involved.
    pub fn pass(&mut self) -> Option<SwipeDecision> {
        self.decide(Verdict::Pass)
    }

    fn decide(&mut self, verdict: Verdict) -> Option<SwipeDecision> {
        let SwipeState::Presenting(index) = self.state else {
            return None;
        };
        let artwork = self.artworks.get(index)?.clone();

        self.drag_start = None;
        self.offset = 0.0;
        self.state = if index + 1 < self.artworks.len() {
            SwipeState::Presenting(index + 1)
        } else {
            SwipeState::Exhausted
        };
        debug!(artwork_id = %artwork.id, ?verdict, next = ?self.state, "swipe decided");

        Some(SwipeDecision::new(verdict, artwork))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtworkId, ImageRef, Price};
    use rstest::rstest;

    fn artworks(n: usize) -> Vec<Artwork> {
        (0..n)
            .map(|i| Artwork {
                id: ArtworkId::new(format!("a{i}")),
                title: format!("Artwork {i}"),
                description: String::new(),
                image: ImageRef::asset("/placeholder.svg"),
                price: Price::new(1250.0).unwrap(),
                artist: "Artist".to_string(),
            })
            .collect()
    }

    fn drag(engine: &mut SwipeEngine, offset: f64) -> Option<SwipeDecision> {
        engine.begin_drag(200.0);
        engine.update_drag(200.0 + offset);
        engine.end_drag()
    }

    #[test]
    fn drag_right_past_threshold_likes() {
        let items = artworks(2);
        let mut engine = SwipeEngine::new(items.clone());

        let decision = drag(&mut engine, 101.0);

        assert_eq!(decision, Some(SwipeDecision::Liked(items[0].clone())));
        assert_eq!(engine.state(), SwipeState::Presenting(1));
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn drag_left_past_threshold_passes() {
        let items = artworks(2);
        let mut engine = SwipeEngine::new(items.clone());

        let decision = drag(&mut engine, -101.0);

        assert_eq!(decision, Some(SwipeDecision::Passed(items[0].clone())));
        assert_eq!(engine.state(), SwipeState::Presenting(1));
    }

    #[rstest]
    #[case(50.0)]
    #[case(-50.0)]
    #[case(100.0)]
    #[case(-100.0)]
    fn short_drag_decides_nothing(#[case] offset: f64) {
        let mut engine = SwipeEngine::new(artworks(2));

        assert_eq!(drag(&mut engine, offset), None);
        assert_eq!(engine.state(), SwipeState::Presenting(0));
        assert_eq!(engine.offset(), 0.0);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn update_tracks_offset_and_tilt() {
        let mut engine = SwipeEngine::new(artworks(1));
        engine.begin_drag(10.0);
        engine.update_drag(60.0);
        assert_eq!(engine.offset(), 50.0);
        assert_eq!(engine.rotation_degrees(), 5.0);
        assert_eq!(engine.state(), SwipeState::Presenting(0));
    }

    #[test]
    fn moves_and_ends_without_a_drag_are_ignored() {
        let mut engine = SwipeEngine::new(artworks(2));
        engine.update_drag(500.0);
        assert_eq!(engine.offset(), 0.0);
        assert_eq!(engine.end_drag(), None);
        assert_eq!(engine.state(), SwipeState::Presenting(0));
    }

    #[test]
    fn one_decision_exhausts_a_single_item() {
        let mut engine = SwipeEngine::new(artworks(1));
        assert!(engine.like().is_some());
        assert_eq!(engine.state(), SwipeState::Exhausted);
        assert_eq!(engine.current(), None);

        assert_eq!(engine.like(), None);
        assert_eq!(engine.pass(), None);
        assert_eq!(drag(&mut engine, 300.0), None);
        assert_eq!(engine.state(), SwipeState::Exhausted);
    }

    #[test]
    fn empty_sequence_is_exhausted_from_the_start() {
        let mut engine = SwipeEngine::new(Vec::new());
        assert_eq!(engine.state(), SwipeState::Exhausted);
        assert_eq!(engine.pass(), None);
        assert_eq!(engine.remaining(), 0);
    }

    #[test]
    fn buttons_walk_the_whole_sequence_in_order() {
        let items = artworks(3);
        let mut engine = SwipeEngine::new(items.clone());

        let decisions = vec![engine.pass(), engine.like(), engine.pass()];

        assert_eq!(
            decisions,
            vec![
                Some(SwipeDecision::Passed(items[0].clone())),
                Some(SwipeDecision::Liked(items[1].clone())),
                Some(SwipeDecision::Passed(items[2].clone())),
            ]
        );
        assert_eq!(engine.state(), SwipeState::Exhausted);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let mut engine = SwipeEngine::with_threshold(artworks(2), 40.0);
        assert!(matches!(drag(&mut engine, 41.0), Some(SwipeDecision::Liked(_))));
    }
}
