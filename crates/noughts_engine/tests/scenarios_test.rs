//! End-to-end engine scenarios, driven the way a UI would drive them.

use noughts_engine::{
    Board, ComputerPlayer, Engine, GameMode, InvalidMove, Outcome, Player, Reason,
};

#[test]
fn test_human_takes_center() {
    let mut engine = Engine::new(GameMode::PlayerVsComputer);
    engine.apply_move(4, Player::X).expect("empty board accepts center");
    assert_eq!(engine.evaluate(), Outcome::Continue);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_computer_blocks_top_row() {
    let mut engine = Engine::new(GameMode::PlayerVsComputer);
    let mut computer = ComputerPlayer::seeded(Player::O, 1);

    // X: 0, O: 4 (computer takes center), X: 1 threatens 2.
    engine.play(0).unwrap();
    let reply = computer.select_move(engine.board()).unwrap();
    assert_eq!(reply.reason, Reason::Center);
    engine.play(reply.index).unwrap();
    engine.play(1).unwrap();

    let reply = computer.select_move(engine.board()).unwrap();
    assert_eq!((reply.index, reply.reason), (2, Reason::Block));
    assert_eq!(engine.play(reply.index), Ok(Outcome::Continue));
}

#[test]
fn test_computer_finishes_own_line() {
    let mut engine = Engine::new(GameMode::PlayerVsComputer);
    let mut computer = ComputerPlayer::seeded(Player::O, 3);
    // X 0, O 4, X 8, O ?, ...
    engine.play(0).unwrap();
    engine.play(4).unwrap();
    engine.play(8).unwrap();
    engine.play(1).unwrap();
    engine.play(2).unwrap();
    // O holds 1 and 4; 7 completes the middle column, X threatens 5.
    let reply = computer.select_move(engine.board()).unwrap();
    assert_eq!((reply.index, reply.reason), (7, Reason::Win));
    assert_eq!(engine.play(reply.index), Ok(Outcome::Won(Player::O)));
    assert!(!engine.is_active());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = Engine::new(GameMode::PlayerVsPlayer);
    // Final board: X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert_eq!(engine.play(index), Ok(Outcome::Continue));
    }
    assert_eq!(engine.play(8), Ok(Outcome::Draw));
    assert!(!engine.is_active());
    assert_eq!(engine.play(8), Err(InvalidMove::GameOver));
}

#[test]
fn test_reset_during_won_state() {
    let mut engine = Engine::new(GameMode::PlayerVsPlayer);
    for index in [0, 3, 1, 4] {
        engine.play(index).unwrap();
    }
    assert_eq!(engine.play(2), Ok(Outcome::Won(Player::X)));

    engine.reset(GameMode::PlayerVsPlayer);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Player::X);
    assert!(engine.is_active());
}

#[test]
fn test_invalid_move_keeps_turn() {
    let mut engine = Engine::new(GameMode::PlayerVsPlayer);
    engine.play(4).unwrap();
    assert_eq!(engine.play(4), Err(InvalidMove::SquareOccupied { index: 4 }));
    assert_eq!(engine.play(42), Err(InvalidMove::OutOfRange { index: 42 }));
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.history().len(), 1);
}
