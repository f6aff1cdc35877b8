use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use apple_catcher::input::{handle_key_event, should_quit, HeldKeys};
use apple_catcher::shell::Shell;
use apple_catcher::types::{Command, FrameInput, TICK_MS};

/// What the main loop does with one key press.
fn press(shell: &mut Shell, keys: &mut HeldKeys, code: KeyCode) {
    if !keys.handle_key_press(code) {
        if let Some(command) = handle_key_event(KeyEvent::from(code)) {
            shell.command(command);
        }
    }
}

fn frames(shell: &mut Shell, keys: &mut HeldKeys, n: usize) {
    for _ in 0..n {
        keys.update(TICK_MS);
        shell.frame(TICK_MS, keys.frame_input());
    }
}

#[test]
fn held_key_moves_the_plate_until_released() {
    let mut shell = Shell::new(1);
    let mut keys = HeldKeys::new().with_release_events(true);
    press(&mut shell, &mut keys, KeyCode::Enter);
    let start_x = shell.scene().plate.x;

    press(&mut shell, &mut keys, KeyCode::Left);
    frames(&mut shell, &mut keys, 10);
    let moved_x = shell.scene().plate.x;
    assert!(moved_x < start_x);

    keys.handle_key_release(KeyCode::Left);
    frames(&mut shell, &mut keys, 10);
    assert_eq!(shell.scene().plate.x, moved_x);
}

#[test]
fn without_release_events_keys_time_out() {
    let mut shell = Shell::new(1);
    let mut keys = HeldKeys::new().with_key_release_timeout_ms(100);
    press(&mut shell, &mut keys, KeyCode::Char(' '));

    press(&mut shell, &mut keys, KeyCode::Char('d'));
    assert_eq!(keys.frame_input(), FrameInput::RIGHT);

    // 100 ms of frames, then the key is considered released.
    frames(&mut shell, &mut keys, 7);
    assert_eq!(keys.frame_input(), FrameInput::IDLE);
    let x = shell.scene().plate.x;
    frames(&mut shell, &mut keys, 5);
    assert_eq!(shell.scene().plate.x, x);
}

#[test]
fn vim_and_wasd_keys_steer() {
    let mut keys = HeldKeys::new();
    assert!(keys.handle_key_press(KeyCode::Char('h')));
    assert_eq!(keys.frame_input(), FrameInput::LEFT);
    assert!(keys.handle_key_press(KeyCode::Char('l')));
    assert_eq!(keys.frame_input(), FrameInput::RIGHT);
    assert!(keys.handle_key_press(KeyCode::Char('a')));
    assert_eq!(keys.frame_input(), FrameInput::LEFT);
    assert!(!keys.handle_key_press(KeyCode::Char('r')));
}

#[test]
fn both_directions_held_cancel_out() {
    let mut keys = HeldKeys::new().with_release_events(true);
    keys.handle_key_press(KeyCode::Left);
    keys.handle_key_press(KeyCode::Right);
    assert_eq!(keys.frame_input().direction(), 0.0);
}

#[test]
fn command_keys_map_to_commands() {
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Enter)),
        Some(Command::Start)
    );
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
        Some(Command::Restart)
    );
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
}

#[test]
fn quit_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}
