use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::GameError;
use crate::log;
use crate::scores::{ScoreKey, ScoreRecorder};

use super::broadcaster::{SessionBroadcaster, SessionEvent};
use super::pacing::{AUTO_ADVANCE_DELAY, Pacing};
use super::session::{InputStep, SequenceSession};
use super::types::{Outcome, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Press(u8),
    Backspace,
    /// Bank the current free-typing run.
    FinishRun,
    NextLevel,
    Restart,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub key: ScoreKey,
    pub highest_level: usize,
    pub best_score: u32,
    pub rounds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerStep {
    Show(usize),
    Hide(usize),
    EndShowing,
    AutoAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerFired {
    generation: u64,
    step: TimerStep,
}

/// Pending timers of one session. Every reset bumps the generation so that a
/// fire already queued from before the reset is recognised as stale.
struct TimerSet {
    generation: u64,
    handles: Vec<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<TimerFired>,
}

impl TimerSet {
    fn new(tx: mpsc::UnboundedSender<TimerFired>) -> Self {
        Self {
            generation: 0,
            handles: Vec::new(),
            tx,
        }
    }

    fn schedule(&mut self, step: TimerStep, delay: Duration) {
        self.handles.retain(|h| !h.is_finished());

        let tx = self.tx.clone();
        let fired = TimerFired {
            generation: self.generation,
            step,
        };
        self.handles.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(fired);
        }));
    }

    fn reset(&mut self) {
        self.abort_all();
        self.generation += 1;
    }

    fn is_current(&self, fired: &TimerFired) -> bool {
        fired.generation == self.generation
    }

    fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Drives a [`SequenceSession`] in real time: paces the replay, opens input,
/// reports results to the score recorder and auto-advances.
pub struct GameSessionEngine<B: SessionBroadcaster, R: ScoreRecorder> {
    session: SequenceSession,
    pacing: Pacing,
    broadcaster: B,
    recorder: R,
    timers: TimerSet,
    timer_rx: mpsc::UnboundedReceiver<TimerFired>,
    summary: SessionSummary,
}

/// Handle to an engine running on its own task.
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<EngineCommand>,
    task: JoinHandle<SessionSummary>,
}

impl SessionHandle {
    pub fn send(&self, command: EngineCommand) -> Result<(), GameError> {
        self.commands
            .send(command)
            .map_err(|_| GameError::EngineStopped)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn shutdown(self) -> Result<SessionSummary, GameError> {
        let _ = self.commands.send(EngineCommand::Shutdown);
        self.task.await.map_err(|_| GameError::EngineStopped)
    }
}

impl<B: SessionBroadcaster, R: ScoreRecorder> GameSessionEngine<B, R> {
    pub fn new(session: SequenceSession, broadcaster: B, recorder: R) -> Self {
        let config = *session.config();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let summary = SessionSummary {
            key: session.score_key(),
            highest_level: session.level(),
            best_score: 0,
            rounds: 0,
        };

        Self {
            pacing: Pacing::for_mode(config.mode, config.difficulty),
            session,
            broadcaster,
            recorder,
            timers: TimerSet::new(timer_tx),
            timer_rx,
            summary,
        }
    }

    pub fn spawn(self) -> SessionHandle {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(command_rx));
        SessionHandle { commands, task }
    }

    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<EngineCommand>) -> SessionSummary {
        log!(
            "Session started: {} (seed {})",
            self.session.score_key(),
            self.session.seed()
        );
        self.enter_level().await;

        loop {
            tokio::select! {
                Some(fired) = self.timer_rx.recv() => {
                    if self.timers.is_current(&fired) {
                        self.on_timer(fired.step).await;
                    }
                }
                command = commands.recv() => {
                    match command {
                        None | Some(EngineCommand::Shutdown) => break,
                        Some(command) => self.on_command(command).await,
                    }
                }
            }
        }

        self.timers.reset();
        log!(
            "Session ended: {} after {} rounds, best {}",
            self.summary.key,
            self.summary.rounds,
            self.summary.best_score
        );
        self.summary
    }

    async fn enter_level(&mut self) {
        let level = self.session.level();
        let phase = self.session.phase();
        self.summary.highest_level = self.summary.highest_level.max(level);
        self.broadcaster
            .broadcast(SessionEvent::LevelStarted { level, phase })
            .await;

        match phase {
            Phase::Showing => self.timers.schedule(TimerStep::Show(0), Duration::ZERO),
            Phase::Input => self.open_input().await,
            Phase::Result => {}
        }
    }

    async fn open_input(&mut self) {
        let expected = self.session.expected_len();
        self.broadcaster
            .broadcast(SessionEvent::InputOpened { expected })
            .await;
    }

    async fn on_timer(&mut self, step: TimerStep) {
        match step {
            TimerStep::Show(position) => {
                if self.session.phase() != Phase::Showing {
                    return;
                }
                let Some(&element) = self.session.target().get(position) else {
                    return;
                };
                self.broadcaster
                    .broadcast(SessionEvent::Highlight { position, element })
                    .await;
                self.timers.schedule(TimerStep::Hide(position), self.pacing.show);
            }
            TimerStep::Hide(position) => {
                self.broadcaster
                    .broadcast(SessionEvent::HighlightCleared { position })
                    .await;
                if position + 1 < self.session.target().len() {
                    self.timers.schedule(TimerStep::Show(position + 1), self.pacing.pause);
                } else {
                    self.timers
                        .schedule(TimerStep::EndShowing, self.pacing.pause + self.pacing.lead_out);
                }
            }
            TimerStep::EndShowing => {
                if self.session.finish_showing().is_ok() {
                    self.open_input().await;
                }
            }
            TimerStep::AutoAdvance => {
                if self.session.awaits_auto_advance() {
                    self.advance().await;
                }
            }
        }
    }

    async fn on_command(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Press(element) => match self.session.submit(element) {
                Ok(InputStep::Accepted { progress }) => {
                    self.broadcaster
                        .broadcast(SessionEvent::InputAccepted { element, progress })
                        .await;
                }
                Ok(InputStep::Finished(_)) => {
                    let progress = self.session.input().len();
                    self.broadcaster
                        .broadcast(SessionEvent::InputAccepted { element, progress })
                        .await;
                    self.finish_round().await;
                }
                // presses outside the input phase are dropped, the grid is disabled there
                Err(GameError::WrongPhase(_)) => {}
                Err(e) => self.reject(e).await,
            },
            EngineCommand::Backspace => {
                if let Ok(Some(_)) = self.session.backspace() {
                    let progress = self.session.input().len();
                    self.broadcaster
                        .broadcast(SessionEvent::InputRemoved { progress })
                        .await;
                }
            }
            EngineCommand::FinishRun => match self.session.finish_run() {
                Ok(()) => self.finish_round().await,
                Err(e) => self.reject(e).await,
            },
            EngineCommand::NextLevel => {
                if self.session.phase() == Phase::Result && self.session.outcome() == Outcome::Correct {
                    self.timers.reset();
                    self.advance().await;
                }
            }
            EngineCommand::Restart => {
                self.timers.reset();
                self.session.restart();
                log!("Session restarted: {}", self.session.score_key());
                self.enter_level().await;
            }
            EngineCommand::Shutdown => {}
        }
    }

    async fn advance(&mut self) {
        match self.session.advance() {
            Ok(()) => self.enter_level().await,
            Err(e) => self.reject(e).await,
        }
    }

    async fn finish_round(&mut self) {
        let Some(score) = self.session.score() else {
            return;
        };
        let key = self.session.score_key();
        let outcome = self.session.outcome();
        let new_record = self.recorder.record(key, score).await;
        let auto_advance = self.session.awaits_auto_advance();

        self.summary.rounds += 1;
        self.summary.best_score = self.summary.best_score.max(score);

        log!(
            "Round finished: {} level {} {:?}, score {}{}",
            key,
            self.session.level(),
            outcome,
            score,
            if new_record { " (new record)" } else { "" }
        );

        self.broadcaster
            .broadcast(SessionEvent::Finished {
                key,
                outcome,
                score,
                new_record,
                auto_advance,
            })
            .await;

        if auto_advance {
            self.timers.schedule(TimerStep::AutoAdvance, AUTO_ADVANCE_DELAY);
        } else if outcome == Outcome::Correct && !self.session.has_next_level() {
            let level = self.session.level();
            log!("Sequence completed: {} at level {}", key, level);
            self.broadcaster
                .broadcast(SessionEvent::Completed { level })
                .await;
        }
    }

    async fn reject(&mut self, error: GameError) {
        self.broadcaster
            .broadcast(SessionEvent::Rejected {
                reason: error.to_string(),
            })
            .await;
    }
}
