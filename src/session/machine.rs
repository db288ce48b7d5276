//! The session state machine.
//!
//! A `Session` owns one playthrough: the token collection, the pending
//! selection, the remaining-pairs counter, and the phase. Operations
//! mutate state synchronously and report what changed through a
//! `PresentationSink`.
//!
//! ## Phases
//!
//! ```text
//! Idle --start_game--> InProgress --last pair--> Complete
//!                          |
//!                       give_up
//!                          v
//!                        Idle
//! ```
//!
//! `Complete` and `Idle` are terminal until the next `start_game`.
//!
//! ## Failure policy
//!
//! Allocation failure is surfaced as a `Result`; everything else invalid -
//! double start, stale selection, give-up with nothing running - degrades
//! to a silent no-op. Spurious late input is expected at an event-driven
//! boundary and must not crash or error across it.

use smallvec::SmallVec;

use crate::adapter::{PresentationSink, RenderCommand, SessionEvent};
use crate::board::{self, AllocError};
use crate::core::{GameRng, SessionConfig, Token};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No game running; `start_game` accepted.
    Idle,
    /// A game is running; selections accepted.
    InProgress,
    /// All pairs found; terminal until the next `start_game`.
    Complete,
}

/// One playthrough's full mutable state.
///
/// Owned exclusively by its caller - no singleton, no interior mutability.
/// A multi-session server holds one `Session` per active game.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    rng: GameRng,
    grid_size: usize,
    tokens: Vec<Token>,
    /// Indices revealed this turn, in selection order. At most 2.
    pending: SmallVec<[usize; 2]>,
    pairs_remaining: usize,
    elapsed: f32,
    phase: SessionPhase,
}

impl Session {
    /// Create an idle session with no board dealt.
    #[must_use]
    pub fn new(config: SessionConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            grid_size: 0,
            tokens: Vec::new(),
            pending: SmallVec::new(),
            pairs_remaining: 0,
            elapsed: 0.0,
            phase: SessionPhase::Idle,
        }
    }

    /// Rebuild a session from persisted token state.
    ///
    /// The record codec has already validated the tokens; the session comes
    /// back `InProgress` with an empty pending selection and
    /// `pairs_remaining` recomputed from the unmatched count.
    pub(crate) fn from_restored(
        config: SessionConfig,
        rng: GameRng,
        grid_size: usize,
        tokens: Vec<Token>,
        elapsed: f32,
    ) -> Self {
        let unmatched = tokens.iter().filter(|t| !t.matched).count();
        Self {
            config,
            rng,
            grid_size,
            tokens,
            pending: SmallVec::new(),
            pairs_remaining: unmatched / 2,
            elapsed,
            phase: SessionPhase::InProgress,
        }
    }

    // === Accessors ===

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Is a game currently accepting selections?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::InProgress
    }

    /// Board dimension of the current game (0 while idle with no board).
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// All tokens in index order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// One token by index.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Indices revealed this turn awaiting resolution, in selection order.
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// Pairs still hidden on the board.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        self.pairs_remaining
    }

    /// Accumulated play time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the play clock.
    ///
    /// Time is a presentation concern; the adapter feeds deltas in and the
    /// engine only accumulates them, and only while a game is running.
    pub fn add_elapsed(&mut self, delta: f32) {
        if self.is_active() && delta > 0.0 {
            self.elapsed += delta;
        }
    }

    // === Operations ===

    /// Start a new game on a `grid_size` x `grid_size` board.
    ///
    /// No-op if a game is already in progress (restarting mid-game is
    /// refused) or if `grid_size < 2`. Emits `Back` for every cell of the
    /// fresh deal.
    ///
    /// # Errors
    ///
    /// `AllocError::InsufficientFaces` if the configured face pool cannot
    /// cover the board; the session stays idle.
    pub fn start_game<S: PresentationSink>(
        &mut self,
        grid_size: usize,
        sink: &mut S,
    ) -> Result<(), AllocError> {
        if self.phase == SessionPhase::InProgress {
            return Ok(());
        }
        if grid_size < 2 {
            return Ok(());
        }

        let cells = board::cell_count(grid_size);
        let faces = board::allocate(cells, self.config.face_count, &mut self.rng)?;

        self.grid_size = grid_size;
        self.tokens = faces
            .into_iter()
            .enumerate()
            .map(|(index, face)| Token::with_face(index, face))
            .collect();
        self.pending.clear();
        self.pairs_remaining = cells / 2;
        self.elapsed = 0.0;
        self.phase = SessionPhase::InProgress;

        for index in 0..cells {
            sink.render(RenderCommand::Back { index });
        }
        Ok(())
    }

    /// Select a token, revealing it and resolving a pair when this is the
    /// second selection of the turn.
    ///
    /// No-op unless a game is in progress; no-op for out-of-range, matched,
    /// already-revealed, or unassigned indices, and while two selections
    /// already await resolution.
    pub fn select_token<S: PresentationSink>(&mut self, index: usize, sink: &mut S) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        if self.pending.len() >= 2 {
            return;
        }
        let Some(token) = self.tokens.get_mut(index) else {
            return;
        };
        if !token.selectable() {
            return;
        }
        let Some(face) = token.face else {
            return;
        };

        token.revealed = true;
        self.pending.push(index);
        sink.render(RenderCommand::Face { index, face });

        if self.pending.len() == 2 {
            self.resolve_pending(sink);
        }
    }

    /// Abandon the game in progress, returning to idle.
    ///
    /// Discards all token state. No-op unless a game is running.
    pub fn give_up(&mut self) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        self.grid_size = 0;
        self.tokens.clear();
        self.pending.clear();
        self.pairs_remaining = 0;
        self.elapsed = 0.0;
        self.phase = SessionPhase::Idle;
    }

    /// Dispatch an adapter event onto the operations above.
    ///
    /// Only `RequestStart` can fail.
    ///
    /// # Errors
    ///
    /// `AllocError::InsufficientFaces` from `start_game`.
    pub fn handle_event<S: PresentationSink>(
        &mut self,
        event: SessionEvent,
        sink: &mut S,
    ) -> Result<(), AllocError> {
        match event {
            SessionEvent::Selected { index } => {
                self.select_token(index, sink);
                Ok(())
            }
            SessionEvent::RequestStart { grid_size } => self.start_game(grid_size, sink),
            SessionEvent::RequestGiveUp => {
                self.give_up();
                Ok(())
            }
        }
    }

    /// Resolve the two pending selections as a match or a mismatch.
    ///
    /// Commands preserve selection order (first-selected reported first);
    /// the evaluation itself is symmetric.
    fn resolve_pending<S: PresentationSink>(&mut self, sink: &mut S) {
        let first = self.pending[0];
        let second = self.pending[1];
        self.pending.clear();

        // Both faces are assigned: unassigned tokens never enter pending.
        let is_match = self.tokens[first].face == self.tokens[second].face;

        if is_match {
            self.tokens[first].matched = true;
            self.tokens[second].matched = true;
            self.pairs_remaining -= 1;
            sink.render(RenderCommand::FadeOut { index: first });
            sink.render(RenderCommand::FadeOut { index: second });

            if self.pairs_remaining == 0 {
                self.phase = SessionPhase::Complete;
                sink.render(RenderCommand::Win);
            }
        } else {
            // Both tokens are necessarily still unmatched - matched indices
            // can never enter pending - so the flip-back is always safe.
            self.tokens[first].revealed = false;
            self.tokens[second].revealed = false;
            sink.render(RenderCommand::Reset { index: first });
            sink.render(RenderCommand::Reset { index: second });
        }
    }
}
