//! The editor session: one board, one result slot.
//!
//! Every board change bumps a generation counter and hands out a
//! [`SimulationTicket`]. An edit that leaves the board as it was keeps the
//! current generation. Results come back tagged with the generation they
//! were computed for; only a result for the current generation is kept, so
//! a slow response for an old board can never overwrite a newer one.
//!
//! ```text
//!   place / remove / load ──→ generation += 1 ──→ ticket
//!                                                   │
//!   apply_result(gen, result) ←── backend.simulate ─┘
//!        gen == current ? keep : discard
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use qboard_hal::{HalResult, SimulationBackend, SimulationResult};
use qboard_ir::{
    Cell, CircuitGrid, EDITOR_LINES, EncodedCircuit, GateToken, IrError, PlacementCommand,
    Preset, encode, placement,
};
use qboard_state::{Dataset, DisplayMode, clamp_step};

use crate::error::{EditorError, EditorResult};

/// A request to simulate one board generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTicket {
    /// Generation of the board this circuit was encoded from.
    pub generation: u64,
    /// The encoded board.
    pub circuit: EncodedCircuit,
}

/// The most recent successful simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Board generation the result belongs to.
    pub generation: u64,
    /// Per-step states.
    pub result: SimulationResult,
}

/// What happened to a simulation result handed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Result stored as the latest snapshot.
    Applied,
    /// Result belonged to an older board and was dropped.
    Stale,
    /// Simulation failed; the previous snapshot is still shown.
    Failed,
}

/// A simulation result travelling back from a spawned task.
#[derive(Debug)]
struct Completed {
    generation: u64,
    result: HalResult<SimulationResult>,
}

/// Editor state owned by the UI thread.
pub struct EditorSession {
    backend: Arc<dyn SimulationBackend>,
    grid: CircuitGrid,
    generation: u64,
    latest: Option<Snapshot>,
    displayed_step: usize,
    mode: DisplayMode,
    last_error: Option<EditorError>,
    pending: usize,
    tx: mpsc::UnboundedSender<Completed>,
    rx: mpsc::UnboundedReceiver<Completed>,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("backend", &self.backend.name())
            .field("generation", &self.generation)
            .field("displayed_step", &self.displayed_step)
            .field("mode", &self.mode)
            .field("has_snapshot", &self.latest.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}

impl EditorSession {
    /// Start a session on the empty editor board.
    pub fn new(backend: Arc<dyn SimulationBackend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            grid: CircuitGrid::editor_default(),
            generation: 0,
            latest: None,
            displayed_step: 0,
            mode: DisplayMode::default(),
            last_error: None,
            pending: 0,
            tx,
            rx,
        }
    }

    /// Start a session on an existing board.
    pub fn with_grid(backend: Arc<dyn SimulationBackend>, grid: CircuitGrid) -> EditorResult<Self> {
        let mut session = Self::new(backend);
        session.load_preset(grid)?;
        Ok(session)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The current board.
    pub fn grid(&self) -> &CircuitGrid {
        &self.grid
    }

    /// Generation of the current board.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Step shown in the chart.
    pub fn displayed_step(&self) -> usize {
        self.displayed_step
    }

    /// Quantity shown in the chart.
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// Latest successful simulation, possibly of an older board.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    /// Error from the last simulation attempt, cleared on success.
    pub fn last_error(&self) -> Option<&EditorError> {
        self.last_error.as_ref()
    }

    /// Number of spawned simulations whose result has not been applied yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Check if the latest snapshot belongs to the current board.
    pub fn is_current(&self) -> bool {
        self.latest
            .as_ref()
            .is_some_and(|s| s.generation == self.generation)
    }

    /// The current board in wire format.
    pub fn encoded(&self) -> EncodedCircuit {
        encode(&self.grid)
    }

    /// A ticket for the current board, e.g. to run the first simulation.
    pub fn current_ticket(&self) -> SimulationTicket {
        SimulationTicket {
            generation: self.generation,
            circuit: self.encoded(),
        }
    }

    // -----------------------------------------------------------------------
    // Board edits
    // -----------------------------------------------------------------------

    /// Place a token. On rejection the board is unchanged.
    pub fn place_token(
        &mut self,
        line: usize,
        step: usize,
        token: GateToken,
    ) -> EditorResult<SimulationTicket> {
        let next = placement::place(&self.grid, Cell::new(line, step), token)?;
        Ok(self.commit(next))
    }

    /// Clear a cell.
    pub fn remove_token(&mut self, line: usize, step: usize) -> EditorResult<SimulationTicket> {
        let next = placement::remove(&self.grid, Cell::new(line, step))?;
        Ok(self.commit(next))
    }

    /// Apply one editor command.
    pub fn apply(&mut self, command: PlacementCommand) -> EditorResult<SimulationTicket> {
        let next = command.apply(&self.grid)?;
        Ok(self.commit(next))
    }

    /// Replace the board with a prepared one.
    ///
    /// The board must have the editor's line count and pass every placement
    /// rule. The displayed step is clamped to the new width.
    pub fn load_preset(&mut self, grid: CircuitGrid) -> EditorResult<SimulationTicket> {
        if grid.num_lines() != EDITOR_LINES {
            return Err(IrError::LineCountMismatch {
                expected: EDITOR_LINES,
                got: grid.num_lines(),
            }
            .into());
        }
        placement::validate(&grid)?;
        info!(steps = grid.num_steps(), gates = grid.count_gates(), "Loaded board");
        Ok(self.commit(grid))
    }

    /// Replace the board with a named preset.
    pub fn load_named_preset(&mut self, preset: Preset) -> EditorResult<SimulationTicket> {
        self.load_preset(preset.grid())
    }

    fn commit(&mut self, grid: CircuitGrid) -> SimulationTicket {
        if grid == self.grid {
            debug!(generation = self.generation, "Board unchanged");
            return self.current_ticket();
        }
        let resized = grid.num_steps() != self.grid.num_steps();
        self.grid = grid;
        self.generation += 1;
        if resized {
            let clamped = clamp_step(self.displayed_step, self.grid.num_steps());
            if clamped != self.displayed_step {
                debug!(from = self.displayed_step, to = clamped, "Clamped displayed step");
            }
            self.displayed_step = clamped;
        }
        debug!(generation = self.generation, "Board committed");
        self.current_ticket()
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    /// Choose the step shown in the chart.
    pub fn set_displayed_step(&mut self, index: usize) -> EditorResult<()> {
        let available = self.grid.num_steps();
        if index >= available {
            return Err(EditorError::StepOutOfRange {
                requested: index,
                available,
            });
        }
        self.displayed_step = index;
        Ok(())
    }

    /// Choose probability or amplitude display.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Chart data for the displayed step of the latest snapshot.
    ///
    /// `None` until a simulation has succeeded. When the snapshot belongs to
    /// an older, narrower board the step is clamped to its width.
    pub fn dataset(&self) -> EditorResult<Option<Dataset>> {
        let Some(snapshot) = &self.latest else {
            return Ok(None);
        };
        let step = clamp_step(self.displayed_step, snapshot.result.num_steps());
        let state = snapshot.result.step(step)?;
        Ok(Some(Dataset::from_state(step, state, self.mode)?))
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Hand a simulation result to the session.
    ///
    /// Results for any generation other than the current one are discarded.
    /// A result whose shape does not match the board (step count, or qubit
    /// count of any state) counts as a failure. A failure keeps the previous
    /// snapshot and records the error.
    pub fn apply_result(
        &mut self,
        generation: u64,
        result: HalResult<SimulationResult>,
    ) -> Outcome {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale simulation result"
            );
            return Outcome::Stale;
        }
        let lines = self.grid.num_lines();
        match result {
            Ok(result) if result.num_steps() != self.grid.num_steps() => {
                self.fail(
                    format!(
                        "simulator returned {} steps for a {}-step board",
                        result.num_steps(),
                        self.grid.num_steps()
                    ),
                    false,
                );
                Outcome::Failed
            }
            Ok(result)
                if result.num_qubits() != lines
                    || result.steps().iter().any(|s| s.num_qubits() != lines) =>
            {
                self.fail(
                    format!(
                        "simulator returned {}-qubit states for a {lines}-line board",
                        result.num_qubits()
                    ),
                    false,
                );
                Outcome::Failed
            }
            Ok(result) => {
                self.latest = Some(Snapshot { generation, result });
                self.last_error = None;
                Outcome::Applied
            }
            Err(e) => {
                self.fail(e.to_string(), e.is_transient());
                Outcome::Failed
            }
        }
    }

    fn fail(&mut self, message: String, transient: bool) {
        warn!(
            generation = self.generation,
            %message,
            transient,
            "Simulation failed; keeping last result"
        );
        self.last_error = Some(EditorError::SimulationUnavailable { message, transient });
    }

    /// Simulate the current board and wait for the answer.
    pub async fn refresh(&mut self) -> EditorResult<Outcome> {
        let ticket = self.current_ticket();
        let result = self.backend.simulate(&ticket.circuit).await;
        match self.apply_result(ticket.generation, result) {
            Outcome::Failed => Err(self
                .last_error
                .clone()
                .unwrap_or_else(|| EditorError::SimulationUnavailable {
                    message: "unknown".into(),
                    transient: false,
                })),
            outcome => Ok(outcome),
        }
    }

    /// Run a simulation on a background task.
    ///
    /// The result is delivered to this session and applied by
    /// [`drain_results`](Self::drain_results) or
    /// [`next_result`](Self::next_result). Must be called inside a tokio
    /// runtime.
    pub fn spawn_simulation(&mut self, ticket: SimulationTicket) -> JoinHandle<()> {
        self.pending += 1;
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = backend.simulate(&ticket.circuit).await;
            // The session may be gone; nothing left to update then.
            let _ = tx.send(Completed {
                generation: ticket.generation,
                result,
            });
        })
    }

    /// Apply every result that has already arrived, in arrival order.
    pub fn drain_results(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        while let Ok(done) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            outcomes.push(self.apply_result(done.generation, done.result));
        }
        outcomes
    }

    /// Wait for the next result from a spawned simulation and apply it.
    ///
    /// Returns `None` at once when no spawned simulation is outstanding. A
    /// task that panics never reports back, so awaiting its result blocks
    /// until another one arrives.
    pub async fn next_result(&mut self) -> Option<Outcome> {
        if self.pending == 0 {
            return None;
        }
        let done = self.rx.recv().await?;
        self.pending -= 1;
        Some(self.apply_result(done.generation, done.result))
    }
}
