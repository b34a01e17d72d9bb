//! Tests for the game engine state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{GameEngine, GameError, InvalidMove, Outcome, Position, Square, Symbol};

fn squares(engine: &GameEngine) -> Vec<Option<Symbol>> {
    engine
        .state()
        .board()
        .squares()
        .iter()
        .map(|s| s.symbol())
        .collect()
}

#[test]
fn test_fresh_engine() {
    let engine = GameEngine::new();
    let state = engine.state();
    assert!(state.board().is_blank());
    assert_eq!(state.turn(), Symbol::O);
    assert_eq!(state.player_choice(), None);
    assert_eq!(state.cpu_symbol(), None);
    assert!(!state.cpu_enabled());
    assert!(!state.is_over());
    assert!(state.history().is_empty());
}

#[test]
fn test_select_symbol_sets_turn() {
    let mut engine = GameEngine::new();
    let state = engine.select_symbol(Symbol::X).expect("blank board");
    assert_eq!(state.player_choice(), Some(Symbol::X));
    assert_eq!(state.turn(), Symbol::X);
    assert_eq!(state.cpu_symbol(), Some(Symbol::O));
}

#[test]
fn test_column_win_scenario() {
    let engine = GameEngine::replay(Symbol::O, &[0, 1, 3, 4, 6]).expect("legal moves");
    use Symbol::{O, X};
    assert_eq!(
        squares(&engine),
        vec![Some(O), Some(X), None, Some(O), Some(X), None, Some(O), None, None]
    );
    assert_eq!(engine.state().winner(), Some(O));
    assert!(!engine.state().is_draw());
    assert_eq!(engine.state().history(), &[Outcome::Won(O)]);
    assert_eq!(engine.state().history()[0].to_string(), "O won");
}

#[test]
fn test_anti_diagonal_ends_long_sequence() {
    // X completes 2-4-6 on the eighth move; the ninth is refused.
    let mut engine = GameEngine::replay(Symbol::O, &[0, 4, 1, 3, 5, 2, 7, 6]).expect("legal moves");
    assert_eq!(engine.state().winner(), Some(Symbol::X));
    assert_eq!(engine.apply_move(8), Err(GameError::GameAlreadyOver));
    assert_eq!(engine.state().history(), &[Outcome::Won(Symbol::X)]);
}

#[test]
fn test_draw_scenario() {
    let engine = GameEngine::replay(Symbol::O, &[0, 4, 8, 1, 7, 6, 2, 5, 3]).expect("legal moves");
    let state = engine.state();
    assert!(state.is_draw());
    assert_eq!(state.winner(), None);
    assert!(state.board().is_full());
    assert_eq!(state.history(), &[Outcome::Draw]);
    assert_eq!(state.history()[0].to_string(), "draw");
}

#[test]
fn test_win_on_ninth_move_is_not_a_draw() {
    // O: 0 2 4 5 6 (6 completes 2-4-6 and fills the board); X: 1 3 7 8
    let engine = GameEngine::replay(Symbol::O, &[0, 1, 2, 3, 4, 7, 5, 8, 6]).expect("legal moves");
    assert!(engine.state().board().is_full());
    assert_eq!(engine.state().winner(), Some(Symbol::O));
    assert!(!engine.state().is_draw());
}

#[test]
fn test_occupied_square_rejected() {
    let mut engine = GameEngine::replay(Symbol::O, &[4]).expect("legal move");
    assert_eq!(
        engine.apply_move(4),
        Err(GameError::InvalidMove(InvalidMove::Occupied(Position::Center)))
    );
    assert_eq!(engine.state().board().get(Position::Center), Square::Occupied(Symbol::O));
    assert_eq!(engine.state().turn(), Symbol::X);
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.apply_move(9),
        Err(GameError::InvalidMove(InvalidMove::OutOfRange(9)))
    );
    assert!(engine.state().board().is_blank());
}

#[test]
fn test_moves_without_symbol_choice_start_with_o() {
    let mut engine = GameEngine::new();
    engine.apply_move(0).expect("legal move");
    assert_eq!(engine.state().board().get(Position::TopLeft), Square::Occupied(Symbol::O));
}

#[test]
fn test_reset_preserves_history_and_choice() {
    let mut engine = GameEngine::replay(Symbol::X, &[0, 3, 1, 4, 2]).expect("legal moves");
    assert_eq!(engine.state().winner(), Some(Symbol::X));

    let state = engine.reset().expect("game over").clone();
    assert!(state.board().is_blank());
    assert_eq!(state.turn(), Symbol::X);
    assert_eq!(state.player_choice(), Some(Symbol::X));
    assert_eq!(state.outcome(), None);
    assert_eq!(state.history(), &[Outcome::Won(Symbol::X)]);

    // Second game ends in a draw; history accumulates.
    for index in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
        engine.apply_move(index).expect("legal move");
    }
    assert_eq!(
        engine.state().history(),
        &[Outcome::Won(Symbol::X), Outcome::Draw]
    );
}

#[test]
fn test_reset_before_end_rejected() {
    let mut engine = GameEngine::replay(Symbol::O, &[0]).expect("legal move");
    let before = engine.state().clone();
    assert_eq!(engine.reset(), Err(GameError::NotTerminal));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_symbol_can_change_between_games() {
    let mut engine = GameEngine::replay(Symbol::O, &[0, 3, 1, 4, 2]).expect("legal moves");
    engine.select_symbol(Symbol::X).expect("game over");
    let state = engine.reset().expect("game over");
    assert_eq!(state.turn(), Symbol::X);
}

#[test]
fn test_cpu_replies_with_other_symbol() {
    let mut engine = GameEngine::new();
    engine.set_cpu_enabled(true).unwrap();
    engine.select_symbol(Symbol::O).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    engine.apply_move(0).unwrap();
    let ticket = engine.begin_cpu_move(&mut rng).unwrap();
    assert_eq!(ticket.action().symbol, Symbol::X);
    assert_ne!(ticket.index(), 0);

    let state = engine.commit_cpu_move(ticket).unwrap();
    assert_eq!(state.board().count(Symbol::X), 1);
    assert_eq!(state.turn(), Symbol::O);
}

#[test]
fn test_cpu_disabled() {
    let mut engine = GameEngine::replay(Symbol::O, &[0]).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(engine.cpu_move(&mut rng), Err(GameError::CpuDisabled));
}

#[test]
fn test_cpu_after_game_over() {
    let mut engine = GameEngine::new();
    engine.set_cpu_enabled(true).unwrap();
    engine.select_symbol(Symbol::O).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    while !engine.state().is_over() {
        if engine.is_cpu_turn() {
            engine.cpu_move(&mut rng).unwrap();
        } else {
            let index = engine.state().board().empty_cells()[0];
            engine.apply_move(index).unwrap();
        }
    }
    assert_eq!(engine.cpu_move(&mut rng), Err(GameError::GameAlreadyOver));
    assert_eq!(engine.state().history().len(), 1);
}

#[test]
fn test_cpu_picks_uniformly_among_empty_cells() {
    let mut engine = GameEngine::new();
    engine.set_cpu_enabled(true).unwrap();
    engine.select_symbol(Symbol::O).unwrap();
    engine.apply_move(0).unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts = [0usize; 9];
    let draws = 8000;
    for _ in 0..draws {
        let ticket = engine.clone().begin_cpu_move(&mut rng).unwrap();
        counts[ticket.index()] += 1;
    }

    // Eight free cells, about 1000 picks each.
    assert_eq!(counts[0], 0);
    for (index, &count) in counts.iter().enumerate().skip(1) {
        assert!(
            (850..=1150).contains(&count),
            "cell {} picked {} times out of {}: {:?}",
            index,
            count,
            draws,
            counts
        );
    }
}
