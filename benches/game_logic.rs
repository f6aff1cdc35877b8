use criterion::{black_box, criterion_group, criterion_main, Criterion};
use apple_catcher::core::autopilot::{steer, steer_towards};
use apple_catcher::core::{GameState, SceneSnapshot};
use apple_catcher::shell::{Overlay, Shell, ShellView};
use apple_catcher::term::{FrameBuffer, GameView, Viewport};
use apple_catcher::types::{Command, TICK_MS};

/// A running game with a few apples in the air.
fn busy_state() -> GameState {
    let mut state = GameState::new(12345);
    state.start();
    for _ in 0..300 {
        let input = steer(&state);
        state.tick(TICK_MS, input);
    }
    state
}

fn bench_tick(c: &mut Criterion) {
    let template = busy_state();
    let mut state = template.clone();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.is_over() {
                state = template.clone();
            }
            let input = steer(&state);
            state.tick(black_box(TICK_MS), input);
            black_box(state.take_events());
        })
    });
}

fn bench_scene_snapshot(c: &mut Criterion) {
    let state = busy_state();
    let mut scene = SceneSnapshot::default();

    c.bench_function("scene_snapshot_into", |b| {
        b.iter(|| {
            state.scene_snapshot_into(&mut scene);
            black_box(scene.fingerprint());
        })
    });
}

fn bench_shell_frame(c: &mut Criterion) {
    let mut shell = Shell::new(12345);
    shell.command(Command::Start);

    c.bench_function("shell_frame", |b| {
        b.iter(|| {
            if shell.snapshot().is_over {
                shell.command(Command::Restart);
            }
            let input = {
                let scene = shell.scene();
                steer_towards(&scene.plate, &scene.apples)
            };
            black_box(shell.frame(TICK_MS, input));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let scene = busy_state().scene_snapshot();
    let view = GameView::default();
    let shell_view = ShellView {
        overlay: Overlay::None,
        score: scene.score,
        catch_flash: false,
    };
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_into_82x33", |b| {
        b.iter(|| {
            view.render_into(&scene, &shell_view, Viewport::new(82, 33), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_scene_snapshot,
    bench_shell_frame,
    bench_render
);
criterion_main!(benches);
