use apple_catcher::core::autopilot::steer_towards;
use apple_catcher::core::Snapshot;
use apple_catcher::shell::{Overlay, Shell};
use apple_catcher::types::{Command, FrameInput, Phase, TICK_MS};

fn autopilot(shell: &Shell) -> FrameInput {
    let scene = shell.scene();
    steer_towards(&scene.plate, &scene.apples)
}

fn dodge(shell: &Shell) -> FrameInput {
    let scene = shell.scene();
    match scene.apples.iter().max_by(|a, b| a.y.total_cmp(&b.y)) {
        Some(apple) if apple.x < scene.width / 2.0 => FrameInput::RIGHT,
        Some(_) => FrameInput::LEFT,
        None => FrameInput::IDLE,
    }
}

fn play_until_over(shell: &mut Shell, pilot: fn(&Shell) -> FrameInput) {
    for _ in 0..(60 * 120) {
        if shell.snapshot().is_over {
            return;
        }
        let input = pilot(shell);
        shell.frame(TICK_MS, input);
    }
    panic!("game did not end");
}

#[test]
fn full_session_walks_through_every_overlay() {
    let mut shell = Shell::new(8);
    assert_eq!(shell.view().overlay, Overlay::Start);
    assert!(!shell.view().show_hud());

    assert!(shell.command(Command::Start));
    assert_eq!(shell.view().overlay, Overlay::None);
    assert!(shell.view().show_hud());

    play_until_over(&mut shell, dodge);
    let view = shell.view();
    assert_eq!(view.overlay, Overlay::GameOver);
    assert!(view.show_hud());
    assert_eq!(shell.snapshot(), Snapshot { score: 0, is_over: true });
    assert_eq!(shell.scene().phase, Phase::GameOver);

    assert!(shell.command(Command::Restart));
    assert_eq!(shell.view().overlay, Overlay::None);
    assert_eq!(shell.snapshot(), Snapshot::default());
    assert!(shell.scene().apples.is_empty());
}

#[test]
fn mirror_matches_the_game_after_every_frame() {
    let mut shell = Shell::new(2024);
    shell.command(Command::Start);

    let mut best = 0;
    for _ in 0..(60 * 30) {
        let input = autopilot(&shell);
        shell.frame(TICK_MS, input);
        let mirror = shell.snapshot();
        assert_eq!(mirror, shell.scene().summary());
        assert_eq!(shell.view().score, mirror.score);
        best = best.max(mirror.score);
        if mirror.is_over {
            break;
        }
    }
    assert!(best > 0, "autopilot never caught anything");
}

#[test]
fn catch_flash_appears_and_fades() {
    let mut shell = Shell::new(2024);
    shell.command(Command::Start);

    while shell.snapshot().score == 0 {
        let input = autopilot(&shell);
        shell.frame(TICK_MS, input);
    }
    assert!(shell.view().catch_flash);

    // Half a second later the flash is gone (unless another catch happened).
    let score = shell.snapshot().score;
    for _ in 0..32 {
        shell.frame(TICK_MS, FrameInput::IDLE);
    }
    if shell.snapshot().score == score {
        assert!(!shell.view().catch_flash);
    }
}

#[test]
fn restart_is_ignored_while_playing() {
    let mut shell = Shell::new(1);
    shell.command(Command::Start);
    for _ in 0..200 {
        shell.frame(TICK_MS, FrameInput::RIGHT);
    }
    let scene = shell.scene().clone();
    assert!(!shell.command(Command::Restart));
    assert_eq!(shell.scene(), &scene);
}

#[test]
fn dismount_releases_the_game() {
    let mut shell = Shell::new(1);
    shell.command(Command::Start);
    shell.frame(TICK_MS, FrameInput::LEFT);

    shell.dismount();
    assert!(shell.is_dismounted());
    assert!(!shell.has_game());
    assert_eq!(shell.snapshot(), Snapshot::default());

    assert!(!shell.command(Command::Start));
    assert!(!shell.frame(TICK_MS, FrameInput::LEFT));
    assert!(!shell.has_game());

    // Idempotent.
    shell.dismount();
    assert!(shell.is_dismounted());
}
