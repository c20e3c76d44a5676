//! Terminal events through the input handler into a running game loop.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use brick_buster::engine::{GameLoop, LoopConfig};
use brick_buster::input::{DirectionCell, InputHandler};
use brick_buster::types::{Direction, DirectionEvent, GameAction};

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

fn press(code: KeyCode) -> Event {
    key(code, KeyEventKind::Press)
}

#[test]
fn test_held_key_moves_paddle_until_release() {
    let mut input = InputHandler::new();
    let mut game = GameLoop::new(LoopConfig::default());

    let action = input.handle_event(&press(KeyCode::Right)).unwrap();
    let _ = game.apply(action);
    for _ in 0..4 {
        game.step();
    }
    assert_eq!(game.session().paddle().x(), 270);

    let action = input
        .handle_event(&key(KeyCode::Right, KeyEventKind::Release))
        .unwrap();
    assert_eq!(action, GameAction::Steer(DirectionEvent::Released));
    let _ = game.apply(action);
    game.step();
    assert_eq!(game.session().paddle().x(), 270);
}

#[test]
fn test_control_keys_reach_the_loop() {
    let mut input = InputHandler::new();
    let mut game = GameLoop::new(LoopConfig::default());

    let pause = input.handle_event(&press(KeyCode::Char(' '))).unwrap();
    assert!(game.apply(pause).is_continue());
    assert!(game.paused());

    let restart = input.handle_event(&press(KeyCode::Char('r'))).unwrap();
    assert!(game.apply(restart).is_continue());
    assert!(!game.paused());

    let quit = input.handle_event(&press(KeyCode::Esc)).unwrap();
    assert!(game.apply(quit).is_break());
}

#[test]
fn test_non_key_events_are_ignored() {
    let mut input = InputHandler::new();
    assert_eq!(input.handle_event(&Event::Resize(80, 24)), None);
    assert_eq!(input.handle_event(&Event::FocusLost), None);
}

#[test]
fn test_direction_cell_latest_write_wins() {
    let cell = DirectionCell::new();
    let writer = cell.clone();

    writer.apply(DirectionEvent::LeftPressed);
    writer.apply(DirectionEvent::RightPressed);
    assert_eq!(cell.load(), Direction::Right);

    writer.apply(DirectionEvent::Released);
    assert_eq!(cell.load(), Direction::None);
}

#[test]
fn test_held_key_steers_again_after_restart() {
    let mut input = InputHandler::new();
    let mut game = GameLoop::new(LoopConfig::default());

    let _ = game.apply(input.handle_event(&press(KeyCode::Left)).unwrap());
    game.step();
    assert_eq!(game.session().paddle().x(), 245);

    let restart = input.handle_event(&press(KeyCode::Char('r'))).unwrap();
    assert_eq!(restart, GameAction::Restart);
    let _ = game.apply(restart);

    // Terminals without release events deliver the held key as more presses.
    let action = input.handle_event(&press(KeyCode::Left));
    assert_eq!(action, Some(GameAction::Steer(DirectionEvent::LeftPressed)));
    let _ = game.apply(action.unwrap());
    game.step();
    game.step();
    assert_eq!(game.session().paddle().x(), 240);
}
