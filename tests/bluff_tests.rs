//! Интеграционные тесты Blind Man's Bluff.
//!
//! Проверяем:
//! - анте и стартовый банк;
//! - валидацию рейза (порядок ошибок);
//! - чек, фолд, вскрытие;
//! - сохранение фишек и вылет игрока;
//! - неполное анте и ничью при неравных ставках.

use card_table_engine::domain::{Chips, Participant, RankOrder};
use card_table_engine::engine::{ActionOutcome, BluffGame, EngineError, GameResult, SessionStatus};
use card_table_engine::infra::config::BluffStakes;
use card_table_engine::infra::DeterministicRng;

fn start(seed: u64) -> (BluffGame, DeterministicRng, ActionOutcome) {
    let mut rng = DeterministicRng::from_seed(seed);
    let (game, outcome) = BluffGame::start(
        Participant::new(1, "Alice"),
        Participant::new(2, "Bob"),
        BluffStakes::default(),
        &mut rng,
    )
    .expect("start");
    (game, rng, outcome)
}

// ====== СТАРТ ======

#[test]
fn start_posts_antes_and_shows_the_opponents_card() {
    let (game, _, outcome) = start(1);

    assert_eq!(game.stack(1), Some(Chips(95)));
    assert_eq!(game.stack(2), Some(Chips(95)));
    assert_eq!(game.pot(), Chips(10));
    assert_eq!(game.round(), 1);
    assert_eq!(game.current_participant().id, 1);
    assert_ne!(game.card_of(1), game.card_of(2));

    let alice_sees = outcome.private_for(1);
    assert_eq!(
        alice_sees,
        vec![format!("The other player is showing: {}", game.card_of(2).unwrap()).as_str()]
    );

    let text = outcome.broadcast.as_ref().unwrap();
    assert!(text.starts_with("Blind Man's Bluff started between Alice and Bob!"));
    assert!(text.contains("Each player antes 5 chip(s)."));
    assert!(text.contains("Pot: 10."));
    assert!(text.ends_with("Alice, it's your turn! Use raise, call, or fold."));
}

#[test]
fn start_rejects_playing_against_yourself() {
    let mut rng = DeterministicRng::from_seed(1);
    let err = BluffGame::start(
        Participant::new(1, "Alice"),
        Participant::new(1, "Alice"),
        BluffStakes::default(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err, EngineError::DuplicateParticipant(1));
}

#[test]
fn hand_view_shows_the_other_card_and_chip_counts() {
    let (game, _, _) = start(2);
    let view = game.hand_view(2).unwrap();
    assert_eq!(
        view,
        format!(
            "The other player is showing: {}\nChips now:\nAlice: 95\nBob: 95",
            game.card_of(1).unwrap()
        )
    );
    assert!(game.hand_view(3).is_none());
}

// ====== РЕЙЗ ======

#[test]
fn raise_errors_come_in_a_fixed_order() {
    let (mut game, _, _) = start(3);

    assert_eq!(game.raise(2, Some(Chips(10))), Err(EngineError::NotYourTurn(2)));
    assert_eq!(game.raise(1, Some(Chips(0))), Err(EngineError::InvalidRaiseAmount));
    // По умолчанию рейз 1, а уравнивать нечего: ниже анте.
    assert_eq!(
        game.raise(1, None),
        Err(EngineError::BelowAnteFloor {
            commitment: Chips(1),
            ante: Chips(5)
        })
    );
    assert_eq!(
        game.raise(1, Some(Chips(200))),
        Err(EngineError::InsufficientChips {
            needed: Chips(200),
            available: Chips(95)
        })
    );

    assert_eq!(game.stack(1), Some(Chips(95)));
    assert_eq!(game.pot(), Chips(10));
    assert_eq!(game.current_participant().id, 1);
}

#[test]
fn raise_and_reraise_update_the_price() {
    let (mut game, _, _) = start(4);

    let outcome = game.raise(1, Some(Chips(10))).unwrap();
    assert_eq!(game.stack(1), Some(Chips(85)));
    assert_eq!(game.pot(), Chips(20));
    assert_eq!(game.price_to_call(), Chips(10));
    assert_eq!(game.last_raiser(), Some(1));
    assert_eq!(game.current_participant().id, 2);
    let text = outcome.broadcast.as_ref().unwrap();
    assert!(text.contains("Alice raises 10 chips (calls 0, raises 10)."));
    assert!(text.ends_with("Bob, your move!"));

    // Рейз по умолчанию поверх колла: 10 + 1.
    game.raise(2, None).unwrap();
    assert_eq!(game.stack(2), Some(Chips(84)));
    assert_eq!(game.bet(2), Some(Chips(16)));
    assert_eq!(game.price_to_call(), Chips(1));
    assert_eq!(game.last_raiser(), Some(2));
    assert_eq!(game.current_participant().id, 1);
}

// ====== ЧЕК / ФОЛД ======

#[test]
fn call_with_nothing_to_match_is_a_check() {
    let (mut game, mut rng, _) = start(5);

    let outcome = game.call(1, &mut rng).unwrap();
    assert_eq!(outcome.broadcast.as_deref(), Some("Alice checks.\nBob, your move!"));
    assert_eq!(game.current_participant().id, 2);
    assert_eq!(game.round(), 1);
    assert_eq!(game.pot(), Chips(10));
}

#[test]
fn fold_hands_the_pot_to_the_opponent() {
    let (mut game, mut rng, _) = start(6);
    game.raise(1, Some(Chips(10))).unwrap();

    let outcome = game.fold(2, &mut rng).unwrap();

    let text = outcome.broadcast.as_ref().unwrap();
    assert!(text.contains("Bob folded. Alice wins 20 chips!"));
    assert!(text.contains("Chips now:\nAlice: 105\nBob: 95"));
    assert!(text.contains("New round begins!"));
    assert_eq!(outcome.status, SessionStatus::Ongoing);

    // Новый раунд: снова анте.
    assert_eq!(game.round(), 2);
    assert_eq!(game.stack(1), Some(Chips(100)));
    assert_eq!(game.stack(2), Some(Chips(90)));
    assert_eq!(game.pot(), Chips(10));
    assert_eq!(game.current_participant().id, 1);
    assert_eq!(outcome.private_for(1).len(), 1, "новая карта соперника");
}

// ====== ФИШКИ ======

#[test]
fn chips_are_conserved_through_a_session() {
    let (mut game, mut rng, _) = start(7);

    for step in 0..80 {
        let actor = game.current_participant().id;
        let attempt = match step % 4 {
            0 => game.raise(actor, Some(Chips(5))),
            1 => game.raise(actor, None),
            2 => game.call(actor, &mut rng),
            _ => game.fold(actor, &mut rng),
        };
        let outcome = match attempt {
            Ok(outcome) => outcome,
            Err(_) => game.call(actor, &mut rng).expect("call is always allowed"),
        };

        assert_eq!(game.total_chips(), Chips(200), "шаг {step}");
        if outcome.is_finished() {
            break;
        }
    }
}

#[test]
fn all_in_showdown_eliminates_the_loser() {
    let (mut game, mut rng, _) = start(8);

    let mut result = None;
    for _ in 0..50 {
        let all_in = game.stack(1).unwrap();
        game.raise(1, Some(all_in)).unwrap();
        let outcome = game.call(2, &mut rng).unwrap();
        if let SessionStatus::Finished(r) = outcome.status {
            assert!(outcome.broadcast.as_ref().unwrap().contains("is out of chips."));
            result = Some(r);
            break;
        }
        // Ничья: каждый забрал своё, новое анте.
        assert_eq!(game.stack(1), Some(Chips(95)));
    }

    match result {
        Some(GameResult::BlindMansBluff { winner, eliminated }) => {
            assert_ne!(winner, eliminated);
            assert_eq!(game.stack(winner), Some(Chips(200)));
            assert_eq!(game.stack(eliminated), Some(Chips::ZERO));
        }
        other => panic!("ожидали вылет, получили {other:?}"),
    }
}

// ====== НЕПОЛНОЕ АНТЕ ======

/// Стек 12 при анте 5: два фолда Bob подряд оставляют ему 2 фишки,
/// и анте третьего раунда он вносит не полностью.
fn short_ante_game(seed: u64) -> (BluffGame, DeterministicRng) {
    let mut rng = DeterministicRng::from_seed(seed);
    let stakes = BluffStakes {
        starting_stack: Chips(12),
        ante: Chips(5),
        default_raise: Chips(1),
    };
    let (mut game, _) =
        BluffGame::start(Participant::new(1, "Alice"), Participant::new(2, "Bob"), stakes, &mut rng)
            .expect("start");

    for _ in 0..2 {
        game.raise(1, Some(Chips(5))).unwrap();
        game.fold(2, &mut rng).unwrap();
    }
    (game, rng)
}

fn showdown_order(game: &BluffGame) -> std::cmp::Ordering {
    let alice = RankOrder::AceHigh.value(game.card_of(1).unwrap());
    let bob = RankOrder::AceHigh.value(game.card_of(2).unwrap());
    alice.cmp(&bob)
}

#[test]
fn ante_takes_whatever_is_left() {
    let (game, _) = short_ante_game(21);

    assert_eq!(game.round(), 3);
    assert_eq!(game.bet(1), Some(Chips(5)));
    assert_eq!(game.bet(2), Some(Chips(2)), "анте = min(стек, 5)");
    assert_eq!(game.stack(1), Some(Chips(17)));
    assert_eq!(game.stack(2), Some(Chips::ZERO));
    assert_eq!(game.pot(), Chips(7));
    assert_eq!(game.total_chips(), Chips(24));
}

#[test]
fn short_ante_round_settles_by_card() {
    let (mut game, mut rng) = short_ante_game(22);

    // Alice уравнивать нечего: это чек. Bob доплатить не может.
    game.call(1, &mut rng).unwrap();
    let order = showdown_order(&game);
    let outcome = game.call(2, &mut rng).unwrap();
    let text = outcome.broadcast.clone().unwrap();

    match order {
        std::cmp::Ordering::Greater => {
            assert!(text.contains("Alice wins the round and takes 7 chips!"));
            assert_eq!(
                outcome.status,
                SessionStatus::Finished(GameResult::BlindMansBluff { winner: 1, eliminated: 2 })
            );
            assert_eq!(game.stack(1), Some(Chips(24)));
        }
        std::cmp::Ordering::Less => {
            // Спорный слой 2 + 2 у Bob, лишние 3 возвращаются Alice.
            assert!(text.contains("Bob wins but didn't match the full raise, so they win only 4 chips."));
            assert!(text.contains("Chips now:\nAlice: 20\nBob: 4"));
        }
        std::cmp::Ordering::Equal => {
            assert!(text.contains("It's a tie. Pot is split."));
            assert!(text.contains("Chips now:\nAlice: 20\nBob: 4"));
        }
    }
    assert_eq!(game.total_chips(), Chips(24));
}

#[test]
fn tie_with_uneven_bets_splits_the_whole_pot() {
    // Ищем seed, где в третьем раунде карты равны по рангу.
    let (mut game, mut rng) = (0..2000)
        .map(short_ante_game)
        .find(|(g, _)| showdown_order(g) == std::cmp::Ordering::Equal)
        .expect("ничья по рангу встречается примерно в 6% раундов");

    game.call(1, &mut rng).unwrap();
    let outcome = game.call(2, &mut rng).unwrap();
    let text = outcome.broadcast.as_ref().unwrap();

    // Банк 7 делится целиком: 3 Alice, 4 Bob, а не 2/2 с возвратом 3.
    assert!(text.contains("It's a tie. Pot is split."));
    assert!(text.contains("Chips now:\nAlice: 20\nBob: 4"));
    assert_eq!(game.round(), 4);
    assert_eq!(game.bet(2), Some(Chips(4)));
    assert_eq!(game.stack(2), Some(Chips::ZERO));
}
