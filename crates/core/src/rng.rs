//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomizer: each bag holds one of each piece (I, O, T, S, Z, J, L)
//! in a uniformly random order. Whole bags are appended to the queue whenever it runs low,
//! so every 7 draws aligned to a bag boundary contain each kind exactly once.
//!
//! The queue owns the game's random source. It is generic over [`RngCore`] so tests can
//! swap in a fixed generator; the default is a seeded [`ChaCha8Rng`].

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tetrissy_types::{PieceKind, NEXT_PREVIEW};

/// A freshly shuffled bag: all 7 kinds, each exactly once
pub fn shuffled_bag<R: RngCore + ?Sized>(rng: &mut R) -> [PieceKind; 7] {
    let mut bag = PieceKind::ALL;
    bag.shuffle(rng);
    debug_assert!(is_complete_bag(&bag), "bag lost a piece: {:?}", bag);
    bag
}

/// True if `bag` is a permutation of [`PieceKind::ALL`]
pub fn is_complete_bag(bag: &[PieceKind]) -> bool {
    let mut seen = [false; 7];
    for kind in bag {
        if std::mem::replace(&mut seen[kind.index()], true) {
            return false;
        }
    }
    bag.len() == 7 && seen.iter().all(|&s| s)
}

/// Upcoming pieces, fed by the 7-bag randomizer
#[derive(Debug, Clone)]
pub struct PieceQueue<R = ChaCha8Rng> {
    queue: VecDeque<PieceKind>,
    rng: R,
    /// Pieces handed out since creation (or the last reset)
    dealt: u64,
}

impl PieceQueue<ChaCha8Rng> {
    /// Create a new piece queue with the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> PieceQueue<R> {
    pub fn new(rng: R) -> Self {
        let mut queue = Self {
            queue: VecDeque::with_capacity(NEXT_PREVIEW + 7),
            rng,
            dealt: 0,
        };
        queue.top_up();
        queue
    }

    /// Append whole bags until the preview window is covered
    fn top_up(&mut self) {
        while self.queue.len() < NEXT_PREVIEW {
            self.refill_bag();
        }
    }

    /// Append one freshly shuffled bag
    pub fn refill_bag(&mut self) {
        let bag = shuffled_bag(&mut self.rng);
        self.queue.extend(bag);
    }

    /// Take the next piece from the front
    pub fn draw(&mut self) -> PieceKind {
        if self.queue.is_empty() {
            self.refill_bag();
        }
        let Some(kind) = self.queue.pop_front() else {
            unreachable!("queue refilled above");
        };
        self.dealt += 1;
        self.top_up();
        kind
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> Option<PieceKind> {
        self.queue.front().copied()
    }

    /// The next [`NEXT_PREVIEW`] pieces, soonest first
    pub fn preview(&self) -> [PieceKind; NEXT_PREVIEW] {
        let mut out = [PieceKind::I; NEXT_PREVIEW];
        for (slot, kind) in out.iter_mut().zip(self.queue.iter()) {
            *slot = *kind;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn dealt(&self) -> u64 {
        self.dealt
    }

    /// Drop every queued piece and start over from a fresh bag. The RNG keeps its state.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.dealt = 0;
        self.top_up();
    }

    /// Shared random source, also used for chaos garbage
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl Default for PieceQueue<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_seed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceQueue::from_seed(12345);
        let mut b = PieceQueue::from_seed(12345);
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_draws_all_seven() {
        let mut queue = PieceQueue::from_seed(1);
        let drawn: Vec<_> = (0..7).map(|_| queue.draw()).collect();
        assert!(is_complete_bag(&drawn), "{:?}", drawn);
    }

    #[test]
    fn test_queue_never_runs_below_preview() {
        let mut queue = PieceQueue::from_seed(7);
        for _ in 0..50 {
            queue.draw();
            assert!(queue.len() >= NEXT_PREVIEW);
        }
        assert_eq!(queue.dealt(), 50);
    }

    #[test]
    fn test_peek_matches_draw() {
        let mut queue = PieceQueue::from_seed(1);
        for _ in 0..20 {
            let peeked = queue.peek();
            assert_eq!(peeked, Some(queue.draw()));
        }
    }

    #[test]
    fn test_preview_matches_following_draws() {
        let mut queue = PieceQueue::from_seed(99);
        queue.draw();
        queue.draw();
        let preview = queue.preview();
        for expected in preview {
            assert_eq!(queue.draw(), expected);
        }
    }

    #[test]
    fn test_fixed_rng_still_deals_complete_bags() {
        let mut queue = PieceQueue::new(StepRng::new(0, 0));
        let drawn: Vec<_> = (0..14).map(|_| queue.draw()).collect();
        assert!(is_complete_bag(&drawn[..7]));
        assert!(is_complete_bag(&drawn[7..]));
    }

    #[test]
    fn test_is_complete_bag_rejects_duplicates() {
        let mut bag = PieceKind::ALL;
        bag[6] = PieceKind::I;
        assert!(!is_complete_bag(&bag));
        assert!(!is_complete_bag(&PieceKind::ALL[..6]));
    }
}
