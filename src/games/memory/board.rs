//! Memory board: a grid of cards plus the set of face-down positions.

use super::card::Card;
use crate::games::grid::{Dimensions, MoveSet, Position};
use tracing::{debug, instrument};

/// Error laying out a deck.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DealError {
    /// No cards, or no rows to put them in.
    #[display("cannot lay out {} cards in {} rows", cards, rows)]
    Empty {
        /// Cards in the deck.
        cards: usize,
        /// Requested rows.
        rows: usize,
    },

    /// The deck does not fill a rectangle.
    #[display("{} cards do not divide evenly into {} rows", cards, rows)]
    Uneven {
        /// Cards in the deck.
        cards: usize,
        /// Requested rows.
        rows: usize,
    },
}

impl std::error::Error for DealError {}

/// Error flipping a card.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FlipError {
    /// Off the board.
    #[display("{} is not on the board", _0)]
    OffBoard(Position),

    /// Card already paired off.
    #[display("{} is already matched", _0)]
    Matched(Position),
}

impl std::error::Error for FlipError {}

/// Grid of cards in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cards: Vec<Card>,
    moves: MoveSet,
}

impl Board {
    /// Lays a deck out over `rows` rows.
    #[instrument(skip(cards), fields(cards = cards.len()))]
    pub fn new(cards: Vec<Card>, rows: usize) -> Result<Self, DealError> {
        let count = cards.len();
        if count == 0 || rows == 0 {
            return Err(DealError::Empty { cards: count, rows });
        }
        if count % rows != 0 {
            return Err(DealError::Uneven { cards: count, rows });
        }
        let dims = Dimensions::new(rows, count / rows);
        debug!(?dims, "Board laid out");
        Ok(Self {
            dims,
            cards,
            moves: MoveSet::full(dims),
        })
    }

    /// Dimensions of the board.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Card at a position, or `None` off the board.
    pub fn card(&self, pos: Position) -> Option<&Card> {
        if !self.dims.contains(pos) {
            return None;
        }
        self.cards.get(pos.index(self.dims.cols))
    }

    fn card_mut(&mut self, pos: Position) -> Option<&mut Card> {
        if !self.dims.contains(pos) {
            return None;
        }
        self.cards.get_mut(pos.index(self.dims.cols))
    }

    /// Face-down positions still in play.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Turns a card over and keeps the move set in step.
    ///
    /// Face-down to face-up leaves the move set; face-up to face-down
    /// returns to it.
    #[instrument(skip(self))]
    pub fn flip(&mut self, pos: Position) -> Result<(), FlipError> {
        let card = self.card_mut(pos).ok_or(FlipError::OffBoard(pos))?;
        if !card.flip() {
            return Err(FlipError::Matched(pos));
        }
        if card.is_visible() {
            self.moves.remove(pos);
        } else {
            self.moves.insert(pos);
        }
        Ok(())
    }

    /// Returns true if two distinct positions hold cards of the same pair.
    pub fn compare(&self, first: Position, second: Position) -> bool {
        if first == second {
            return false;
        }
        match (self.card(first), self.card(second)) {
            (Some(a), Some(b)) => a.pair_id() == b.pair_id(),
            _ => false,
        }
    }

    /// Marks both cards matched and takes them out of play.
    #[instrument(skip(self))]
    pub fn mark_matched(&mut self, first: Position, second: Position) {
        for pos in [first, second] {
            if let Some(card) = self.card_mut(pos) {
                card.set_matched();
            }
            self.moves.remove(pos);
        }
    }

    /// Returns true once every card is matched.
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Formats the board with 1-based headers; hidden cards show `_`.
    pub fn display(&self) -> String {
        let width = self
            .cards
            .iter()
            .map(|c| c.label().chars().count())
            .max()
            .unwrap_or(1)
            .max(self.dims.cols.to_string().len());

        let mut result = " ".repeat(self.dims.rows.to_string().len());
        for col in 1..=self.dims.cols {
            result.push_str(&format!(" {col:>width$}"));
        }
        for row in 0..self.dims.rows {
            result.push_str(&format!(
                "\n{:>pad$}",
                row + 1,
                pad = self.dims.rows.to_string().len()
            ));
            for col in 0..self.dims.cols {
                let card = &self.cards[Position::new(row, col).index(self.dims.cols)];
                let face = if card.is_visible() { card.label().as_str() } else { "_" };
                result.push_str(&format!(" {face:>width$}"));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        // A B
        // B A
        let cards = vec![
            Card::new(0, "A"),
            Card::new(1, "B"),
            Card::new(1, "B"),
            Card::new(0, "A"),
        ];
        Board::new(cards, 2).expect("even deck")
    }

    #[test]
    fn test_layout_errors() {
        assert_eq!(
            Board::new(Vec::new(), 2),
            Err(DealError::Empty { cards: 0, rows: 2 })
        );
        let cards = vec![Card::new(0, "A"), Card::new(0, "A")];
        assert_eq!(
            Board::new(cards, 3),
            Err(DealError::Uneven { cards: 2, rows: 3 })
        );
    }

    #[test]
    fn test_flip_updates_move_set() {
        let mut board = board();
        let pos = Position::new(0, 1);
        board.flip(pos).unwrap();
        assert!(!board.moves().contains(pos));
        board.flip(pos).unwrap();
        assert!(board.moves().contains(pos));
        assert_eq!(board.moves().len(), 4);
    }

    #[test]
    fn test_compare_by_pair_id() {
        let board = board();
        assert!(board.compare(Position::new(0, 0), Position::new(1, 1)));
        assert!(board.compare(Position::new(0, 1), Position::new(1, 0)));
        assert!(!board.compare(Position::new(0, 0), Position::new(0, 1)));
        assert!(!board.compare(Position::new(0, 0), Position::new(5, 5)));
        assert!(!board.compare(Position::new(0, 0), Position::new(0, 0)));
    }

    #[test]
    fn test_matched_cards_leave_play() {
        let mut board = board();
        let (a1, a2) = (Position::new(0, 0), Position::new(1, 1));
        board.flip(a1).unwrap();
        board.flip(a2).unwrap();
        board.mark_matched(a1, a2);
        assert_eq!(board.moves().len(), 2);
        assert_eq!(board.flip(a1), Err(FlipError::Matched(a1)));
        assert!(!board.is_cleared());
    }

    #[test]
    fn test_display_hides_face_down_cards() {
        let mut board = board();
        board.flip(Position::new(1, 0)).unwrap();
        assert_eq!(board.display(), "  1 2\n1 _ _\n2 B _");
    }
}
