//! Whole-game behavior tests.
//!
//! These drive the public API the way the CLI does and check the
//! game-level guarantees: conservation of cards, a shrinking supply,
//! termination, reproducible outcomes and stable scores.

use automation_game::{
    choose_purchase, Card, CardSupply, CardType, ConfigError, GameConfig, GameEngine, GamePhase,
    GameResult, PlayerDeck, PlayerId, ScriptedRandomizer,
};

fn assert_conserved(engine: &GameEngine) {
    for player in PlayerId::all() {
        let deck = engine.deck(player);
        assert_eq!(
            deck.total_cards(),
            deck.acquired_count(),
            "{} lost or gained a card",
            engine.player_name(player)
        );
    }
}

/// Buying every Framework empties the pile and ends the game.
#[test]
fn test_selling_out_capstone_is_terminal() {
    let mut supply = CardSupply::new();
    assert_eq!(supply.remaining(CardType::Bitcoin), 60);
    assert_eq!(supply.remaining(CardType::Framework), 8);

    for _ in 0..8 {
        supply.acquire(CardType::Framework).unwrap();
    }

    assert!(!supply.is_available(CardType::Framework));
    assert!(supply.is_terminal());
    assert!(!supply.available_types().contains(&CardType::Framework));
}

/// One Framework and two Methods score eight points.
#[test]
fn test_progress_value_of_mixed_purchases() {
    let mut supply = CardSupply::new();
    let mut deck = PlayerDeck::new();

    deck.receive_acquired_card(supply.acquire(CardType::Framework).unwrap());
    deck.receive_acquired_card(supply.acquire(CardType::Method).unwrap());
    deck.receive_acquired_card(supply.acquire(CardType::Method).unwrap());

    assert_eq!(deck.total_progress_value(), 8);
}

/// Drawing from an empty draw pile pulls the discard pile back in.
#[test]
fn test_draw_from_discard_only() {
    let mut rng = ScriptedRandomizer::new();
    let mut deck = PlayerDeck::new();
    for card_type in [CardType::Bitcoin, CardType::Method, CardType::Dogecoin] {
        deck.receive_acquired_card(Card::new(card_type));
    }

    deck.draw(3, &mut rng);

    assert_eq!(deck.hand_size(), 3);
    assert_eq!(deck.discard_len(), 0);
    assert_eq!(deck.draw_pile_len(), 0);
}

/// Eight coins against a full supply buys the capstone.
#[test]
fn test_heuristic_prefers_capstone() {
    let supply = CardSupply::new();
    assert_eq!(
        choose_purchase(8, &supply.available_types()),
        Some(CardType::Framework)
    );
}

#[test]
fn test_game_reaches_end() {
    for seed in 0..10 {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(seed)).unwrap();
        engine.play_until_ended().unwrap();

        assert_eq!(engine.phase(), GamePhase::Ended);
        assert!(engine.supply().is_terminal());
        // At most one Framework is bought per turn.
        assert!(engine.turn_number() >= CardType::Framework.supply_count());
        assert_eq!(engine.history().len(), engine.turn_number() as usize);
    }
}

/// The smallest hand `validate` accepts still finishes every game.
#[test]
fn test_smallest_accepted_hand_reaches_end() {
    let minimum = GameConfig::min_hand_size();

    for seed in 0..5 {
        let config = GameConfig::new().with_seed(seed).with_hand_size(minimum);
        let mut engine = GameEngine::new(config).unwrap();
        engine.play_until_ended().unwrap();

        assert_eq!(engine.phase(), GamePhase::Ended);
        assert!(engine.supply().is_terminal());
        assert_conserved(&engine);
    }
}

/// Hands too small to ever pay for a Framework are refused up front.
#[test]
fn test_hands_that_cannot_finish_are_rejected() {
    let minimum = GameConfig::min_hand_size();

    for hand_size in 1..minimum {
        let config = GameConfig::new().with_seed(1).with_hand_size(hand_size);
        assert_eq!(
            GameEngine::new(config).err(),
            Some(ConfigError::HandTooSmall { hand_size, minimum })
        );
    }
}

#[test]
fn test_every_framework_is_owned_at_end() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(21)).unwrap();
    engine.play_until_ended().unwrap();

    let owned: usize = PlayerId::all()
        .map(|p| {
            engine
                .deck(p)
                .acquired()
                .iter()
                .filter(|c| c.card_type() == CardType::Framework)
                .count()
        })
        .sum();
    assert_eq!(owned, 8);

    let bought = engine
        .history()
        .iter()
        .filter(|r| r.purchased == Some(CardType::Framework))
        .count();
    assert_eq!(bought, 8);
}

#[test]
fn test_conservation_every_turn() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(77)).unwrap();
    engine.set_up().unwrap();
    assert_conserved(&engine);

    while engine.phase() == GamePhase::InProgress {
        engine.run_turn().unwrap();
        assert_conserved(&engine);
    }
}

#[test]
fn test_supply_never_grows() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(5)).unwrap();
    engine.set_up().unwrap();

    let mut previous: Vec<u32> = CardType::ALL
        .iter()
        .map(|&t| engine.supply().remaining(t))
        .collect();

    while !engine.is_over() {
        engine.run_turn().unwrap();
        let current: Vec<u32> = CardType::ALL
            .iter()
            .map(|&t| engine.supply().remaining(t))
            .collect();
        for (before, after) in previous.iter().zip(&current) {
            assert!(after <= before);
        }
        previous = current;
    }
}

#[test]
fn test_purchases_follow_heuristic() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(8)).unwrap();
    engine.set_up().unwrap();

    while !engine.is_over() {
        let available = engine.supply().available_types();
        let record = engine.run_turn().unwrap();
        assert_eq!(record.purchased, choose_purchase(record.coins, &available));
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(seed)).unwrap();
        let score = engine.play_until_ended().unwrap();
        (engine.history().clone(), score)
    };

    let (history_a, score_a) = play(2024);
    let (history_b, score_b) = play(2024);
    assert_eq!(history_a, history_b);
    assert_eq!(score_a, score_b);

    let (history_c, _) = play(2025);
    assert_ne!(history_a, history_c);
}

#[test]
fn test_scoring_is_idempotent() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(13)).unwrap();
    let score = engine.play_until_ended().unwrap();

    for _ in 0..3 {
        assert_eq!(engine.result(), Some(score.clone()));
        for player in PlayerId::all() {
            assert_eq!(engine.score(player), score.scores[player]);
            assert_eq!(
                engine.deck(player).total_progress_value(),
                score.scores[player]
            );
        }
    }
}

#[test]
fn test_result_matches_scores() {
    for seed in 30..40 {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(seed)).unwrap();
        let score = engine.play_until_ended().unwrap();

        let first = score.scores[PlayerId::FIRST];
        let second = score.scores[PlayerId::SECOND];
        match score.result {
            GameResult::Winner(PlayerId::FIRST) => assert!(first > second),
            GameResult::Winner(_) => assert!(second > first),
            GameResult::Tie => assert_eq!(first, second),
        }
    }
}
