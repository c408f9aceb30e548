//! Move selection for a mutating board game.
//!
//! Pieces on a rectangular board carry pluggable movement rules that
//! can be attached and detached at runtime. This crate supplies the
//! automated opponent: a time-bounded, iteratively-deepened minimax
//! search with alpha-beta pruning over cheap board snapshots, and a
//! selector that turns scored candidates into one chosen move with a
//! configurable blunder rate.
//!
//! ```
//! use mutation_chess::{
//!     Board, Difficulty, MaterialEvaluator, MoveSelector, Role, SearchEngine, Side, Square,
//! };
//!
//! let mut board = Board::new(8, 8);
//! board.place(Role::King, Side::White, Square::new(4, 0));
//! board.place(Role::Pawn, Side::White, Square::new(4, 1));
//! board.place(Role::King, Side::Black, Square::new(4, 7));
//!
//! let config = Difficulty::Easy.config();
//! let mut engine = SearchEngine::new(MaterialEvaluator::new(), config);
//! let best = engine.iterative_deepening_search(&board, Side::White, config.max_depth);
//! assert!(best.piece.is_some());
//!
//! let mut selector = MoveSelector::from_seed(config.randomness, 0);
//! let chosen = selector.select_best_move(engine.root_candidates());
//! assert!(chosen.piece.is_some());
//! ```

pub mod ai;
pub mod game;

pub use ai::{
    Difficulty, Evaluate, MaterialEvaluator, MoveSelector, SearchConfig, SearchEngine,
    SCORE_TOLERANCE,
};
pub use game::{
    Board, MoveCandidate, MoveRule, PieceSnapshot, Role, Side, SimState, Square,
};
