// Iterative deepening search driver
//
// Runs a full depth-limited alpha-beta search at depth 1, 2, ... up to
// the requested ceiling, keeping the best move from the deepest depth
// that scored at least one root candidate. The time budget is
// cooperative: it is polled between depths, between root candidates
// and at every recursive node, so a subtree already in flight always
// runs to completion.

use std::time::Instant;

use log::debug;

use crate::ai::config::SearchConfig;
use crate::ai::evaluation::Evaluate;
use crate::game::{Board, MoveCandidate, Side, SimState};

/// Alpha-beta minimax engine. One instance serves one in-flight search
/// at a time; the node counter and time-out flag are per-instance
/// state, not shared.
#[derive(Debug)]
pub struct SearchEngine<E> {
    pub(super) evaluator: E,
    pub(super) config: SearchConfig,
    pub(super) nodes_evaluated: u64,
    pub(super) timed_out: bool,
    pub(super) started: Instant,
    root_candidates: Vec<MoveCandidate>,
}

impl<E: Evaluate> SearchEngine<E> {
    /// Build an engine from its collaborators. Nothing is read from
    /// ambient state; evaluator and configuration come in here.
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            nodes_evaluated: 0,
            timed_out: false,
            started: Instant::now(),
            root_candidates: Vec::new(),
        }
    }

    /// States visited by the recursion since the last reset.
    /// Diagnostic only.
    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes_evaluated
    }

    /// Whether the last search ran into its time ceiling.
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// The scored root candidate set of the deepest committed depth,
    /// for handing to a `MoveSelector`. Empty until a search commits
    /// a depth.
    pub fn root_candidates(&self) -> &[MoveCandidate] {
        &self.root_candidates
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Zero the node counter and the time-out flag.
    pub fn reset_counters(&mut self) {
        self.nodes_evaluated = 0;
        self.timed_out = false;
    }

    /// Find the best move for `side`, searching depth 1 up to
    /// `max_depth` within the configured time budget. A depth's
    /// result only replaces the running best when it carries a piece
    /// snapshot, so a timed-out depth never clobbers a good shallower
    /// result. Returns the sentinel if depth 1 never produced a move.
    pub fn iterative_deepening_search(
        &mut self,
        board: &Board,
        side: Side,
        max_depth: u8,
    ) -> MoveCandidate {
        self.begin();
        let mut best = MoveCandidate::sentinel();

        for depth in 1..=max_depth.max(1) {
            if self.time_exceeded() {
                debug!("time budget spent, stopping before depth {depth}");
                break;
            }
            let result = self.search_to_depth(board, side, depth);
            if result.piece.is_some() {
                debug!(
                    "depth {depth} score {:.1} nodes {} elapsed {}ms",
                    result.score,
                    self.nodes_evaluated,
                    self.started.elapsed().as_millis()
                );
                best = result;
            } else {
                debug!("depth {depth} produced no scored move");
            }
        }

        best
    }

    /// One full search at a fixed depth. Snapshots the board,
    /// enumerates root candidates and scores each by recursing into
    /// the opponent's reply tree. Empty candidate set short-circuits
    /// to the sentinel before any recursion.
    pub fn depth_limited_search(&mut self, board: &Board, side: Side, depth: u8) -> MoveCandidate {
        self.begin();
        self.search_to_depth(board, side, depth)
    }

    fn begin(&mut self) {
        self.reset_counters();
        self.root_candidates.clear();
        self.started = Instant::now();
    }

    fn search_to_depth(&mut self, board: &Board, side: Side, depth: u8) -> MoveCandidate {
        let depth = depth.max(1);
        let state = SimState::from_board(board);
        let mut candidates = state.moves_for_side(side);
        if candidates.is_empty() {
            return MoveCandidate::sentinel();
        }

        // Root siblings each get a fresh full window, never a shared
        // alpha/beta; every root score is an exact minimax value.
        let mut best = MoveCandidate::sentinel();
        let mut best_score = f64::NEG_INFINITY;
        let mut scored = 0;

        for candidate in candidates.iter_mut() {
            if self.time_exceeded() {
                break;
            }
            let mut child = state.clone();
            child.apply(candidate.from, candidate.to);
            let score = self.minimax(
                &child,
                side,
                depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
            );
            candidate.score = score;
            scored += 1;
            if score > best_score {
                best_score = score;
                best = candidate.clone();
            }
        }

        if best.piece.is_some() {
            candidates.truncate(scored);
            self.root_candidates = candidates;
        }
        best
    }

    /// Whether the wall-clock budget for the current call is spent.
    /// Advisory: callers poll this between units of work.
    pub(super) fn time_exceeded(&mut self) -> bool {
        if self.config.time_limit_ms <= 0 {
            return false;
        }
        if self.started.elapsed().as_millis() as i64 >= self.config.time_limit_ms {
            self.timed_out = true;
            return true;
        }
        false
    }
}
