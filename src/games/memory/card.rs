//! Cards and dealing.

use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Where a card stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardState {
    /// Hidden and still in play.
    FaceDown,
    /// Turned up during the current turn.
    FaceUp,
    /// Paired off; stays visible for the rest of the game.
    Matched,
}

/// A memory card.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Card {
    /// Shared by exactly two cards of a deck.
    pair_id: usize,
    /// What the card shows when visible.
    label: String,
    /// Current state.
    state: CardState,
}

impl Card {
    /// A face-down card.
    pub fn new(pair_id: usize, label: impl Into<String>) -> Self {
        Self {
            pair_id,
            label: label.into(),
            state: CardState::FaceDown,
        }
    }

    /// Returns true if the label is showing.
    pub fn is_visible(&self) -> bool {
        self.state != CardState::FaceDown
    }

    /// Returns true once paired off.
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Turns the card over. Matched cards stay put and return false.
    pub(super) fn flip(&mut self) -> bool {
        self.state = match self.state {
            CardState::FaceDown => CardState::FaceUp,
            CardState::FaceUp => CardState::FaceDown,
            CardState::Matched => return false,
        };
        true
    }

    pub(super) fn set_matched(&mut self) {
        self.state = CardState::Matched;
    }
}

/// Builds a deck holding each label twice and shuffles it.
///
/// The card at deck index `i` gets pair id `i % labels.len()`, so both
/// copies of a label share one id.
#[instrument(skip(rng))]
pub fn deal<S, R>(labels: &[S], rng: &mut R) -> Vec<Card>
where
    S: AsRef<str> + std::fmt::Debug,
    R: Rng + ?Sized,
{
    let mut deck: Vec<Card> = labels
        .iter()
        .chain(labels.iter())
        .enumerate()
        .map(|(i, label)| {
            let label: &str = label.as_ref();
            Card::new(i % labels.len(), label)
        })
        .collect();
    deck.shuffle(rng);
    debug!(cards = deck.len(), "Deck shuffled");
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_deal_makes_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = deal(&["A", "B", "C"], &mut rng);
        assert_eq!(deck.len(), 6);

        let mut by_id: HashMap<usize, Vec<&str>> = HashMap::new();
        for card in &deck {
            by_id.entry(*card.pair_id()).or_default().push(card.label());
            assert_eq!(*card.state(), CardState::FaceDown);
        }
        assert_eq!(by_id.len(), 3);
        for labels in by_id.values() {
            assert_eq!(labels.len(), 2);
            assert_eq!(labels[0], labels[1]);
        }
    }

    #[test]
    fn test_flip_toggles_until_matched() {
        let mut card = Card::new(0, "A");
        assert!(card.flip());
        assert!(card.is_visible());
        assert!(card.flip());
        assert!(!card.is_visible());

        card.set_matched();
        assert!(!card.flip());
        assert!(card.is_matched());
        assert!(card.is_visible());
    }
}
