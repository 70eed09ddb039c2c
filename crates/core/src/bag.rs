//! Bag module - 7-bag piece generation
//!
//! Each bag holds one piece of every canonical kind, already placed at a
//! random column on row 0 and clamped inside the board, in shuffled order.
//! Pieces are dealt from the front; the moment the last one is taken a
//! fresh bag is dealt, so the bag is never observed empty.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::rng::PieceRng;
use blockfall_types::{BoardSize, PieceKind, BAG_SIZE};

/// Deal a fresh shuffled bag of all seven canonical pieces.
pub fn generate_bag<R: PieceRng>(size: BoardSize, rng: &mut R) -> ArrayVec<Piece, BAG_SIZE> {
    let mut pieces: ArrayVec<Piece, BAG_SIZE> = PieceKind::ALL
        .iter()
        .map(|&kind| {
            let x = rng.next_range(size.width as u32) as i8;
            Piece::from_kind(kind, (x, 0)).adjust_offset(size)
        })
        .collect();
    rng.shuffle(pieces.as_mut_slice());
    pieces
}

/// Upcoming pieces, front first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    pieces: ArrayVec<Piece, BAG_SIZE>,
}

impl Bag {
    /// Create a full bag
    pub fn generate<R: PieceRng>(size: BoardSize, rng: &mut R) -> Self {
        Self {
            pieces: generate_bag(size, rng),
        }
    }

    /// Next piece to be dealt.
    ///
    /// # Panics
    ///
    /// Only if the non-empty invariant was broken, which `pop` never allows.
    pub fn peek(&self) -> &Piece {
        &self.pieces[0]
    }

    /// Take the front piece, dealing a new bag if that emptied this one
    pub fn pop<R: PieceRng>(&mut self, size: BoardSize, rng: &mut R) -> Piece {
        let piece = self.pieces.remove(0);
        if self.pieces.is_empty() {
            self.pieces = generate_bag(size, rng);
        }
        piece
    }

    /// Remaining pieces in deal order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false outside of construction; kept for API completeness
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use blockfall_types::Color;
    use std::collections::HashSet;

    fn colors(pieces: &[Piece]) -> HashSet<Color> {
        pieces.iter().map(|p| p.color).collect()
    }

    #[test]
    fn generated_bag_has_seven_distinct_pieces() {
        let mut rng = SimpleRng::new(12345);
        let bag = generate_bag(BoardSize::default(), &mut rng);
        assert_eq!(bag.len(), BAG_SIZE);
        assert_eq!(colors(&bag).len(), BAG_SIZE);
    }

    #[test]
    fn generated_pieces_sit_inside_the_board() {
        let size = BoardSize::new(6, 8);
        let mut rng = SimpleRng::new(3);
        for _ in 0..50 {
            for piece in generate_bag(size, &mut rng) {
                for (x, y) in piece.coordinates() {
                    assert!((0..6).contains(&x), "x out of range: {:?}", piece);
                    assert!((0..8).contains(&y), "y out of range: {:?}", piece);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_bag() {
        let a = generate_bag(BoardSize::default(), &mut SimpleRng::new(77));
        let b = generate_bag(BoardSize::default(), &mut SimpleRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn pop_refills_when_emptied() {
        let size = BoardSize::default();
        let mut rng = SimpleRng::new(1);
        let mut bag = Bag::generate(size, &mut rng);

        let mut first_round = Vec::new();
        for _ in 0..BAG_SIZE {
            first_round.push(bag.pop(size, &mut rng));
        }
        assert_eq!(colors(&first_round).len(), BAG_SIZE);

        // The last pop dealt a fresh bag.
        assert_eq!(bag.len(), BAG_SIZE);
        assert_eq!(colors(bag.pieces()).len(), BAG_SIZE);
    }

    #[test]
    fn peek_matches_next_pop() {
        let size = BoardSize::default();
        let mut rng = SimpleRng::new(5);
        let mut bag = Bag::generate(size, &mut rng);
        for _ in 0..20 {
            let peeked = *bag.peek();
            assert_eq!(bag.pop(size, &mut rng), peeked);
            assert!(!bag.is_empty());
        }
    }
}
