// Terminal self-play demo: two engines play a mutated game against
// each other. RUST_LOG=debug shows per-depth search diagnostics.

use mutation_chess::{
    Board, Difficulty, MaterialEvaluator, MoveRule, MoveSelector, Role, SearchEngine, Side, Square,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn starting_board() -> Board {
    let mut board = Board::new(8, 8);
    let back_rank = [
        Role::Rook,
        Role::Knight,
        Role::Bishop,
        Role::Queen,
        Role::King,
        Role::Bishop,
        Role::Knight,
        Role::Rook,
    ];
    for (x, role) in back_rank.iter().enumerate() {
        board.place(*role, Side::White, Square::new(x as u8, 0));
        board.place(*role, Side::Black, Square::new(x as u8, 7));
        board.place(Role::Pawn, Side::White, Square::new(x as u8, 1));
        board.place(Role::Pawn, Side::Black, Square::new(x as u8, 6));
    }
    // a blocked center column, because we can
    board.set_obstacle(Square::new(3, 3));
    board.set_obstacle(Square::new(4, 4));
    board
}

fn main() {
    env_logger::init();

    let mut board = starting_board();

    // mutations: white knights learn a short diagonal slide, black
    // pawns learn the knight jump
    for x in [1, 6] {
        board.attach_rule(
            Square::new(x, 0),
            std::sync::Arc::new(MoveRule::Diagonal { range: Some(2) }),
        );
    }
    for x in 0..8 {
        board.attach_rule(Square::new(x, 6), MoveRule::knight_jump());
    }

    let white_config = Difficulty::Medium.config();
    let black_config = Difficulty::Easy.config();
    let mut white = SearchEngine::new(MaterialEvaluator::new(), white_config);
    let mut black = SearchEngine::new(MaterialEvaluator::new(), black_config);
    let mut white_selector = MoveSelector::new(white_config.randomness, StdRng::from_entropy());
    let mut black_selector = MoveSelector::new(black_config.randomness, StdRng::from_entropy());

    println!("{board}");

    let mut side = Side::White;
    for turn in 1..=100 {
        let (engine, selector, config) = match side {
            Side::White => (&mut white, &mut white_selector, white_config),
            Side::Black => (&mut black, &mut black_selector, black_config),
        };

        let best = engine.iterative_deepening_search(&board, side, config.max_depth);
        if best.is_sentinel() {
            println!("turn {turn}: {side:?} has no legal moves, game over");
            break;
        }
        let chosen = selector.select_best_move(engine.root_candidates());

        let role = chosen.piece.as_ref().map(|p| p.role).unwrap_or(Role::Pawn);
        println!(
            "turn {turn}: {side:?} {role:?} {} -> {} (score {:.1}, {} nodes)",
            chosen.from,
            chosen.to,
            chosen.score,
            engine.nodes_evaluated()
        );
        let captured = board.apply(chosen.from, chosen.to);
        println!("{board}");

        if let Some(piece) = captured {
            if piece.role == Role::King {
                println!("{side:?} wins on turn {turn}");
                return;
            }
        }
        side = side.opposite();
    }
    println!("game halted without a decisive result");
}
