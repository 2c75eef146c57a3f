//! Тесты карточной модели (crate::domain).
//!
//! Проверяем:
//! - размеры и уникальность колод;
//! - раздачу поровну + остаток;
//! - разбор токенов (джокеры, регистр, символы мастей, "всё или ничего");
//! - порядок рангов и форматирование рук.

use std::collections::HashSet;

use proptest::prelude::*;

use card_table_engine::domain::*;
use card_table_engine::engine::{EngineError, RandomSource};
use card_table_engine::infra::DeterministicRng;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

//
// ====================== КОЛОДЫ ======================
//

#[test]
fn landlord_deck_has_54_unique_cards() {
    let deck = Deck::landlord();
    assert_eq!(deck.len(), 54);
    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 54);
    assert!(deck.cards.contains(&Card::BLACK_JOKER));
    assert!(deck.cards.contains(&Card::RED_JOKER));
}

#[test]
fn gongzhu_deck_has_44_cards_without_twos_threes_and_jokers() {
    let deck = Deck::gongzhu();
    assert_eq!(deck.len(), 44);
    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 44);
    assert!(deck
        .cards
        .iter()
        .all(|c| !c.is_joker() && !matches!(c.rank(), Some(Rank::Two) | Some(Rank::Three))));
}

#[test]
fn bluff_deck_is_the_plain_52() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(deck.cards.iter().all(|c| !c.is_joker()));
}

#[test]
fn build_matches_named_decks() {
    assert_eq!(Deck::build(false, &GONGZHU_EXCLUDED_RANKS), Ok(Deck::gongzhu()));
    assert_eq!(Deck::build(true, &[]), Ok(Deck::landlord()));
    assert_eq!(Deck::build(false, &[]), Ok(Deck::standard_52()));
}

#[test]
fn build_rejects_an_empty_configuration() {
    let err = Deck::build(false, &Rank::ALL).unwrap_err();
    assert_eq!(err, EmptyDeckError);
    assert_eq!(
        EngineError::from(err).to_string(),
        "Invalid deck configuration: deck configuration excludes every card"
    );
    // Только джокеры тоже колода.
    assert_eq!(Deck::build(true, &Rank::ALL).unwrap().len(), 2);
}

#[test]
fn shuffle_keeps_every_card() {
    let mut deck = Deck::landlord();
    let mut rng = DeterministicRng::from_seed(42);
    rng.shuffle(&mut deck.cards);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 54);
    assert_ne!(deck, Deck::landlord(), "seed 42 должен реально перемешать колоду");
}

//
// ====================== РАЗДАЧА ======================
//

#[test]
fn deal_evenly_splits_and_keeps_remainder() {
    for (players, per, extra) in [(3, 18, 0), (4, 13, 2), (5, 10, 4)] {
        let deal = Deck::landlord().deal_evenly(players);
        assert_eq!(deal.hands.len(), players);
        assert!(deal.hands.iter().all(|h| h.len() == per));
        assert_eq!(deal.extra.len(), extra);

        let mut all: Vec<Card> = deal.hands.concat();
        all.extend(deal.extra.iter().copied());
        let unique: HashSet<Card> = all.iter().copied().collect();
        assert_eq!(all.len(), 54);
        assert_eq!(unique.len(), 54, "руки и остаток не пересекаются");
    }
}

#[test]
fn gongzhu_deal_for_three_leaves_two_extra() {
    let deal = Deck::gongzhu().deal_evenly(3);
    assert!(deal.hands.iter().all(|h| h.len() == 14));
    assert_eq!(deal.extra.len(), 2);
}

//
// ====================== РАЗБОР ТОКЕНОВ ======================
//

#[test]
fn jokers_parse_case_insensitively() {
    assert_eq!(parse_token("BJ"), Some(Card::BLACK_JOKER));
    assert_eq!(parse_token("bj"), Some(Card::BLACK_JOKER));
    assert_eq!(parse_token("Rj"), Some(Card::RED_JOKER));
    assert_eq!(parse_token("Black Joker"), Some(Card::BLACK_JOKER));
    assert_eq!(parse_token("red joker"), Some(Card::RED_JOKER));
}

#[test]
fn suited_tokens_parse_letters_and_glyphs() {
    assert_eq!(parse_token("Ad"), Some(card(Rank::Ace, Suit::Diamonds)));
    assert_eq!(parse_token("AD"), Some(card(Rank::Ace, Suit::Diamonds)));
    assert_eq!(parse_token("10c"), Some(card(Rank::Ten, Suit::Clubs)));
    assert_eq!(parse_token("2s"), Some(card(Rank::Two, Suit::Spades)));
    assert_eq!(parse_token("qh"), Some(card(Rank::Queen, Suit::Hearts)));
    assert_eq!(parse_token("A♦"), Some(card(Rank::Ace, Suit::Diamonds)));
}

#[test]
fn bad_tokens_are_rejected() {
    for bad in ["", "A", "1c", "11s", "Ax", "Td", "Joker", "3"] {
        assert_eq!(parse_token(bad), None, "токен {bad:?} должен быть отклонён");
    }
}

#[test]
fn parse_tokens_is_all_or_nothing() {
    assert_eq!(
        parse_tokens(&["Ad", "2s", "BJ"]),
        Ok(vec![card(Rank::Ace, Suit::Diamonds), card(Rank::Two, Suit::Spades), Card::BLACK_JOKER])
    );
    assert_eq!(parse_tokens(&["Ad", "zz", "2s"]), Err("zz".to_string()));
}

proptest! {
    /// Разбор левый обратный к форматированию, для любой карты из колоды.
    #[test]
    fn parse_is_left_inverse_of_token_and_label(idx in 0usize..54) {
        let c = Deck::landlord().cards[idx];
        prop_assert_eq!(parse_token(&c.token()), Some(c));
        prop_assert_eq!(parse_token(&c.to_string()), Some(c));
    }

    /// Любой seed даёт перестановку исходной колоды.
    #[test]
    fn any_shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::gongzhu();
        DeterministicRng::from_seed(seed).shuffle(&mut deck.cards);
        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        prop_assert_eq!(deck.len(), 44);
        prop_assert_eq!(unique.len(), 44);
    }
}

//
// ====================== ПОРЯДОК И ФОРМАТ ======================
//

#[test]
fn landlord_order_puts_two_and_jokers_on_top() {
    let order = RankOrder::Landlord;
    assert!(order.value(card(Rank::Ace, Suit::Spades)) < order.value(card(Rank::Two, Suit::Clubs)));
    assert!(order.value(card(Rank::Two, Suit::Clubs)) < order.value(Card::BLACK_JOKER));
    assert!(order.value(Card::BLACK_JOKER) < order.value(Card::RED_JOKER));
    assert!(order.value(card(Rank::Three, Suit::Hearts)) < order.value(card(Rank::Four, Suit::Hearts)));
}

#[test]
fn ace_high_order_puts_two_at_the_bottom() {
    let order = RankOrder::AceHigh;
    assert_eq!(order.value(card(Rank::Two, Suit::Clubs)), 2);
    assert_eq!(order.value(card(Rank::Ten, Suit::Clubs)), 10);
    assert_eq!(order.value(card(Rank::Ace, Suit::Clubs)), 14);
    // Масть не влияет.
    assert_eq!(
        order.value(card(Rank::King, Suit::Spades)),
        order.value(card(Rank::King, Suit::Diamonds))
    );
}

#[test]
fn landlord_format_sorts_by_rank_with_jokers_last() {
    let cards = vec![
        Card::RED_JOKER,
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
    ];
    assert_eq!(format_cards(&cards, HandLayout::Landlord), "3♠ A♣ 2♥ Red Joker");
}

#[test]
fn gongzhu_format_groups_by_suit_then_rank() {
    let cards = vec![
        card(Rank::Four, Suit::Clubs),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Six, Suit::Spades),
    ];
    assert_eq!(format_cards(&cards, HandLayout::Gongzhu), "6♠ A♠ 5♥ K♥ 10♦ 4♣");
}
