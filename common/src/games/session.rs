use crate::error::GameError;
use crate::scores::ScoreKey;

use super::game_config::GameConfig;
use super::pi;
use super::session_rng::SessionRng;
use super::strategy::{PiDigits, RandomCells, SequenceStrategy};
use super::types::{GameMode, Outcome, Phase, PiMode};

/// How a finished round is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStyle {
    /// Score is the level reached.
    Sequence,
    /// Score is the number of digits typed correctly.
    Free,
}

/// What happens after a correct round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancePolicy {
    Auto,
    Explicit,
}

/// Result of a single submitted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStep {
    /// Element matched, more are expected.
    Accepted { progress: usize },
    /// Round is over; see [`SequenceSession::outcome`].
    Finished(Outcome),
}

/// One play-through of a sequence game: the target, the player's input, and
/// the phase machine that moves between them. Timing lives in the engine.
pub struct SequenceSession {
    config: GameConfig,
    key: ScoreKey,
    style: ScoringStyle,
    advance: AdvancePolicy,
    strategy: Box<dyn SequenceStrategy>,
    rng: SessionRng,
    level: usize,
    target: Vec<u8>,
    input: Vec<u8>,
    phase: Phase,
    outcome: Outcome,
}

impl SequenceSession {
    pub fn new(config: GameConfig, rng: SessionRng) -> Result<Self, GameError> {
        Self::at_level(config, 1, rng)
    }

    pub fn at_level(config: GameConfig, level: usize, rng: SessionRng) -> Result<Self, GameError> {
        if level == 0 {
            return Err(GameError::InvalidLevel);
        }

        let key = ScoreKey::for_config(&config)?;
        let (style, advance) = match config.mode {
            GameMode::Colors | GameMode::Numbers => (ScoringStyle::Sequence, AdvancePolicy::Auto),
            GameMode::Pi => match config.pi_mode_or_default() {
                PiMode::Sequence => (ScoringStyle::Sequence, AdvancePolicy::Auto),
                PiMode::Free => (ScoringStyle::Free, AdvancePolicy::Explicit),
                PiMode::Learn => return Err(GameError::LearnModeHasNoSession),
            },
        };
        let strategy: Box<dyn SequenceStrategy> = match config.mode {
            GameMode::Colors | GameMode::Numbers => Box::new(RandomCells::new(config.grid_size.cell_count())),
            GameMode::Pi => Box::new(PiDigits),
        };

        if style == ScoringStyle::Sequence && strategy.max_len().is_some_and(|max| level > max) {
            return Err(GameError::InvalidLevel);
        }

        let mut session = Self {
            config,
            key,
            style,
            advance,
            strategy,
            rng,
            level,
            target: Vec::new(),
            input: Vec::new(),
            phase: Phase::Showing,
            outcome: Outcome::None,
        };
        session.begin_level(level);
        Ok(session)
    }

    fn begin_level(&mut self, level: usize) {
        self.level = level;
        self.input.clear();
        self.outcome = Outcome::None;
        match self.style {
            ScoringStyle::Sequence => {
                self.target = self.strategy.generate(level, &mut self.rng);
                self.phase = Phase::Showing;
            }
            ScoringStyle::Free => {
                // free typing runs against the whole table and shows nothing
                if self.target.is_empty() {
                    self.target = self.strategy.generate(pi::digit_count(), &mut self.rng);
                }
                self.phase = Phase::Input;
            }
        }
    }

    /// Showing → Input once the replay has finished.
    pub fn finish_showing(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Showing)?;
        self.phase = Phase::Input;
        Ok(())
    }

    /// Appends one element to the player's input. A mismatch ends the round at once.
    pub fn submit(&mut self, element: u8) -> Result<InputStep, GameError> {
        self.expect_phase(Phase::Input)?;

        let range = self.strategy.element_range();
        if element >= range {
            return Err(GameError::ElementOutOfRange { element, range });
        }

        let position = self.input.len();
        self.input.push(element);

        if !self.strategy.matches(self.target[position], element) {
            self.finish(Outcome::Incorrect);
            return Ok(InputStep::Finished(Outcome::Incorrect));
        }

        if self.input.len() == self.target.len() {
            self.finish(Outcome::Correct);
            return Ok(InputStep::Finished(Outcome::Correct));
        }

        Ok(InputStep::Accepted {
            progress: self.input.len(),
        })
    }

    /// Drops the last submitted element. No-op when nothing was entered.
    pub fn backspace(&mut self) -> Result<Option<u8>, GameError> {
        self.expect_phase(Phase::Input)?;
        Ok(self.input.pop())
    }

    /// Banks a free-typing run as a correct result.
    pub fn finish_run(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Input)?;
        if self.style != ScoringStyle::Free {
            return Err(GameError::WrongPhase(Phase::Input.as_str()));
        }
        self.finish(Outcome::Correct);
        Ok(())
    }

    /// Moves past a correct result to the next level.
    ///
    /// Sequence modes keep the shown prefix and append one element; free typing
    /// starts a fresh run.
    pub fn advance(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Result)?;
        if self.outcome != Outcome::Correct {
            return Err(GameError::WrongPhase(Phase::Result.as_str()));
        }
        if !self.has_next_level() {
            return Err(GameError::InvalidLevel);
        }

        self.level += 1;
        self.input.clear();
        self.outcome = Outcome::None;

        match self.style {
            ScoringStyle::Sequence => {
                self.strategy.extend(&mut self.target, &mut self.rng);
                self.phase = Phase::Showing;
            }
            ScoringStyle::Free => {
                self.phase = Phase::Input;
            }
        }
        Ok(())
    }

    /// Back to level 1 with a freshly generated target.
    pub fn restart(&mut self) {
        self.target.clear();
        self.begin_level(1);
    }

    /// Score of the finished round; `None` until the session reaches the result phase.
    pub fn score(&self) -> Option<u32> {
        if self.phase != Phase::Result {
            return None;
        }
        let score = match (self.style, self.outcome) {
            (ScoringStyle::Sequence, _) => self.level,
            (ScoringStyle::Free, Outcome::Correct) => self.input.len(),
            (ScoringStyle::Free, _) => self.input.len().saturating_sub(1),
        };
        Some(score as u32)
    }

    /// False once a sequence covers its whole source, e.g. every digit of the π table.
    pub fn has_next_level(&self) -> bool {
        self.style == ScoringStyle::Free || self.strategy.max_len().is_none_or(|max| self.target.len() < max)
    }

    pub fn awaits_auto_advance(&self) -> bool {
        self.phase == Phase::Result
            && self.outcome == Outcome::Correct
            && self.advance == AdvancePolicy::Auto
            && self.has_next_level()
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.phase = Phase::Result;
    }

    fn expect_phase(&self, phase: Phase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase(self.phase.as_str()))
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score_key(&self) -> ScoreKey {
        self.key
    }

    pub fn style(&self) -> ScoringStyle {
        self.style
    }

    pub fn advance_policy(&self) -> AdvancePolicy {
        self.advance
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// The part of the target the player is expected to reproduce.
    pub fn expected_len(&self) -> usize {
        match self.style {
            ScoringStyle::Sequence => self.target.len(),
            ScoringStyle::Free => self.input.len(),
        }
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn element_range(&self) -> u8 {
        self.strategy.element_range()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    pub(crate) fn set_target(&mut self, target: Vec<u8>) {
        self.level = target.len();
        self.target = target;
    }
}

impl std::fmt::Debug for SequenceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceSession")
            .field("key", &self.key)
            .field("level", &self.level)
            .field("phase", &self.phase)
            .field("outcome", &self.outcome)
            .field("input", &self.input)
            .finish()
    }
}
