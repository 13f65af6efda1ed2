//! The turn state machine.
//!
//! A game moves `NotStarted → InProgress → Ended`. `set_up` deals the
//! starter decks and flips for the first player; each `run_turn` plays one
//! full turn for the active player (buy phase, then cleanup phase) and hands
//! the turn to the opponent. After every turn the supply is checked: once
//! the capstone pile is empty the game ends, and the turn that emptied it
//! keeps its purchase.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardType, Category};
use crate::core::{GameConfig, GameRng, GameRngState, PlayerId, PlayerPair, Randomizer};
use crate::error::{ConfigError, EngineError, Result};
use crate::report::{NullReporter, ReportEntry, Reporter, Verbosity};
use crate::rules::{choose_purchase, FinalScore};
use crate::zones::{CardSupply, PlayerDeck};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    /// Terminal.
    Ended,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::NotStarted => write!(f, "not started"),
            GamePhase::InProgress => write!(f, "in progress"),
            GamePhase::Ended => write!(f, "ended"),
        }
    }
}

/// What happened in one completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    pub player: PlayerId,
    /// Coins produced by the Economy cards played.
    pub coins: u32,
    /// The card bought, if any.
    pub purchased: Option<CardType>,
}

/// Runs one game between two heuristic players.
///
/// Owns the supply, both decks and the game's only random source.
///
/// ## Example
///
/// ```
/// use automation_game::core::GameConfig;
/// use automation_game::game::{GameEngine, GamePhase};
///
/// let mut engine = GameEngine::new(GameConfig::new().with_seed(3)).unwrap();
/// let score = engine.play_until_ended().unwrap();
///
/// assert_eq!(engine.phase(), GamePhase::Ended);
/// assert!(engine.supply().is_terminal());
/// assert_eq!(engine.result(), Some(score));
/// ```
pub struct GameEngine<R: Randomizer = GameRng> {
    config: GameConfig,
    supply: CardSupply,
    decks: PlayerPair<PlayerDeck>,
    active_player: PlayerId,
    turn_number: u32,
    phase: GamePhase,
    rng: R,
    history: Vector<TurnRecord>,
    reporter: Box<dyn Reporter>,
}

impl GameEngine<GameRng> {
    /// Create a game whose RNG is seeded from `config.seed`.
    pub fn new(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Checkpoint of the RNG position.
    ///
    /// `GameRng::from_state` on the result continues the exact sequence of
    /// shuffles and flips this game would make next.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: Randomizer> GameEngine<R> {
    /// Create a game with an explicit random source.
    ///
    /// `config.seed` is ignored; `rng` supplies all randomness.
    pub fn with_rng(config: GameConfig, rng: R) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            supply: CardSupply::new(),
            decks: PlayerPair::with_value(PlayerDeck::new()),
            active_player: PlayerId::FIRST,
            turn_number: 0,
            phase: GamePhase::NotStarted,
            rng,
            history: Vector::new(),
            reporter: Box::new(NullReporter),
        })
    }

    /// Send reports to `reporter` instead of discarding them.
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Start from a custom supply instead of the full catalog.
    ///
    /// Only allowed before `set_up`.
    pub fn with_supply(mut self, supply: CardSupply) -> Result<Self> {
        self.expect_phase(GamePhase::NotStarted)?;
        self.supply = supply;
        Ok(self)
    }

    // === Lifecycle ===

    /// Deal starter decks, draw opening hands, and flip for first player.
    ///
    /// Each player takes the configured number of the cheapest Economy and
    /// cheapest Progress types from the supply. A starter the supply cannot
    /// provide is skipped.
    pub fn set_up(&mut self) -> Result<()> {
        self.expect_phase(GamePhase::NotStarted)?;

        let starters = [
            (
                CardType::cheapest(Category::Economy),
                self.config.starting_economy_cards,
            ),
            (
                CardType::cheapest(Category::Progress),
                self.config.starting_progress_cards,
            ),
        ];

        for player in PlayerId::all() {
            for (card_type, count) in starters {
                for _ in 0..count {
                    match self.supply.acquire(card_type) {
                        Ok(card) => self.decks[player].seed_starting_card(card),
                        Err(err) => self.emit(Verbosity::Verbose, "setup", |engine| {
                            format!("{}: starter skipped, {}", engine.player_name(player), err)
                        }),
                    }
                }
            }

            let deck = &mut self.decks[player];
            deck.shuffle_draw_pile(&mut self.rng);
            deck.draw(self.config.hand_size, &mut self.rng);
        }

        self.active_player = if self.rng.coin_flip() {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        };
        self.phase = GamePhase::InProgress;

        self.emit(Verbosity::Normal, "setup", |engine| {
            format!(
                "{} and {} are set up; {} goes first",
                engine.player_name(PlayerId::FIRST),
                engine.player_name(PlayerId::SECOND),
                engine.player_name(engine.active_player)
            )
        });
        self.emit(Verbosity::Verbose, "setup", |engine| engine.supply.to_string());

        if self.supply.is_terminal() {
            self.finish();
        }
        Ok(())
    }

    /// Play one full turn for the active player.
    pub fn run_turn(&mut self) -> Result<TurnRecord> {
        self.expect_phase(GamePhase::InProgress)?;
        let player = self.active_player;
        self.emit(Verbosity::Verbose, "hand", |engine| engine.describe_hand(player));

        // Buy phase
        let coins = self.decks[player].play_economy_cards();
        let purchased = self.buy(player, coins);

        // Cleanup phase
        let deck = &mut self.decks[player];
        deck.cleanup();
        deck.draw(self.config.hand_size, &mut self.rng);

        self.turn_number += 1;
        self.active_player = player.opponent();

        let record = TurnRecord {
            turn: self.turn_number,
            player,
            coins,
            purchased,
        };
        self.history.push_back(record);
        self.emit(Verbosity::Normal, "turn", |engine| engine.describe_turn(&record));

        if self.supply.is_terminal() {
            self.finish();
        }
        Ok(record)
    }

    /// Run turns until the game ends and return the final score.
    ///
    /// Sets the game up first if needed. On an ended game this just returns
    /// the score again.
    pub fn play_until_ended(&mut self) -> Result<FinalScore> {
        if self.phase == GamePhase::NotStarted {
            self.set_up()?;
        }
        while self.phase == GamePhase::InProgress {
            self.run_turn()?;
        }
        Ok(self.final_score())
    }

    fn buy(&mut self, player: PlayerId, coins: u32) -> Option<CardType> {
        let Some(choice) = choose_purchase(coins, &self.supply.available_types()) else {
            self.emit(Verbosity::Verbose, "turn", |engine| {
                format!("{} cannot afford anything with {} coins", engine.player_name(player), coins)
            });
            return None;
        };

        if !self.supply.is_available(choice) {
            return None;
        }

        match self.supply.acquire(choice) {
            Ok(card) => {
                self.decks[player].receive_acquired_card(card);
                Some(choice)
            }
            Err(err) => {
                self.emit(Verbosity::Verbose, "turn", |engine| {
                    format!("{}: purchase skipped, {}", engine.player_name(player), err)
                });
                None
            }
        }
    }

    fn finish(&mut self) {
        self.phase = GamePhase::Ended;
        self.emit(Verbosity::Normal, "game_over", |engine| engine.summary());
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn emit(
        &mut self,
        level: Verbosity,
        category: &'static str,
        message: impl FnOnce(&Self) -> String,
    ) {
        if self.reporter.accepts(level) {
            let message = message(&*self);
            self.reporter.report(ReportEntry {
                level,
                category,
                message,
            });
        }
    }

    // === Scoring ===

    /// A player's current score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.decks[player].total_progress_value()
    }

    /// Final scores, available once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<FinalScore> {
        (self.phase == GamePhase::Ended).then(|| self.final_score())
    }

    fn final_score(&self) -> FinalScore {
        FinalScore::new(PlayerPair::new(|player| self.score(player)))
    }

    // === Reporting ===

    fn describe_turn(&self, record: &TurnRecord) -> String {
        let bought = record
            .purchased
            .map_or_else(|| "nothing".to_owned(), |t| t.to_string());
        format!(
            "Turn {}: {} played {} coins and bought {}",
            record.turn,
            self.player_name(record.player),
            record.coins,
            bought
        )
    }

    fn describe_hand(&self, player: PlayerId) -> String {
        let cards: Vec<String> = self.decks[player]
            .snapshot_hand()
            .iter()
            .map(ToString::to_string)
            .collect();
        format!("{}'s hand: [{}]", self.player_name(player), cards.join(", "))
    }

    /// Multi-line description of both decks and, once ended, the winner.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        if self.phase == GamePhase::Ended {
            out.push_str("=== GAME OVER ===\n");
        } else {
            out.push_str(&format!("=== GAME {} ===\n", self.phase.to_string().to_uppercase()));
        }
        out.push_str(&format!("Total turns: {}\n\n", self.turn_number));

        for (player, deck) in self.decks.iter() {
            out.push_str(&format!("{}'s Deck:\n", self.player_name(player)));
            for (card_type, count) in deck.composition() {
                out.push_str(&format!("  {}: {}\n", card_type, count));
            }
            out.push_str(&format!("Total points: {}\n\n", deck.total_progress_value()));
        }

        if let Some(score) = self.result() {
            out.push_str(&score.describe(&self.config.player_names));
            out.push('\n');
        }
        out
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Completed turns.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Whose turn is next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.config.player_name(player)
    }

    #[must_use]
    pub fn supply(&self) -> &CardSupply {
        &self.supply
    }

    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &PlayerDeck {
        &self.decks[player]
    }

    /// Every completed turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
