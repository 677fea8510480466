//! Full game driven against the terminal framebuffer.

use std::path::Path;

use space_garbage::core::{FrameLibrary, Game, GameConfig, ScriptedInput, TaskKind};
use space_garbage::term::{encode_diff_into, encode_full_into, FrameBuffer};

fn library() -> FrameLibrary {
    FrameLibrary::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/frames")).unwrap()
}

#[test]
fn shipped_frames_run_on_a_framebuffer() {
    let mut fb = FrameBuffer::new(80, 24);
    let mut input = ScriptedInput::idle();
    // No garbage: the status row is only ever written by the ticker.
    let config = GameConfig {
        ticks_per_year: 1_000,
        ..GameConfig::default()
    };
    let mut game = Game::new(config, &library(), &mut fb, 4);
    assert_eq!(fb.get(79, 23).map(|c| c.ch), Some('┘'));

    for _ in 0..120 {
        game.tick(&mut fb, &mut input);
    }
    // Nothing may ever write over the bottom-right corner.
    assert_eq!(fb.get(79, 23).map(|c| c.ch), Some('┘'));
    assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
    assert!(fb.row_text(22).contains("Year 1957 "));
}

#[test]
fn diff_after_a_tick_is_smaller_than_a_full_redraw() {
    let mut fb = FrameBuffer::new(80, 24);
    let mut input = ScriptedInput::idle();
    let mut game = Game::new(GameConfig::default(), &library(), &mut fb, 4);
    game.tick(&mut fb, &mut input);
    let before = fb.clone();
    game.tick(&mut fb, &mut input);

    let mut full = Vec::new();
    encode_full_into(&fb, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &fb, &mut diff).unwrap();
    assert!(diff.len() < full.len());
}

#[test]
fn craft_hit_raises_a_single_banner() {
    let mut fb = FrameBuffer::new(80, 24);
    let mut input = ScriptedInput::idle();
    let config = GameConfig {
        start_year: 2030,
        ..GameConfig::default()
    };
    let mut game = Game::new(config, &library(), &mut fb, 2);

    let mut ticks = 0;
    while game.craft_alive() {
        game.tick(&mut fb, &mut input);
        ticks += 1;
        assert!(ticks < 2_000, "craft never hit");
    }
    assert!(game.is_game_over());

    for _ in 0..50 {
        game.tick(&mut fb, &mut input);
        assert_eq!(game.count(TaskKind::GameOverBanner), 1);
    }
}
