//! Year-gated behaviour: weapon unlock, spawn pacing and variant obstacles.

use std::iter;
use std::rc::Rc;

use space_garbage::core::entities::{Craft, GarbageSpawner};
use space_garbage::core::{Frame, Game, GameConfig, MemoryCanvas, ScriptedInput, TaskKind};
use space_garbage::types::{Controls, START_YEAR};

fn frames(texts: &[&str]) -> Rc<[Rc<Frame>]> {
    texts.iter().map(|t| Rc::new(Frame::new(*t))).collect()
}

#[test]
fn firing_before_the_unlock_year_does_nothing() {
    let config = GameConfig {
        ticks_per_year: 3,
        weapon_unlock_year: START_YEAR + 1,
        ..GameConfig::default()
    };
    let mut game = Game::empty(config, 1);
    let craft_frames: Rc<[Frame]> = vec![Frame::new("A")].into();
    game.spawn(Craft::new(craft_frames, 1, 10, 10));

    let mut canvas = MemoryCanvas::new(20, 20);
    let mut input = ScriptedInput::new(iter::repeat(Controls::new(0, 0, true)).take(20));

    for _ in 0..3 {
        game.tick(&mut canvas, &mut input);
        assert_eq!(game.count(TaskKind::Projectile), 0);
    }
    assert_eq!(game.world().year(), START_YEAR + 1);
    assert_eq!(input.polls(), 2);

    game.tick(&mut canvas, &mut input);
    assert_eq!(game.count(TaskKind::Projectile), 1);
}

#[test]
fn nothing_spawns_while_the_delay_is_undefined() {
    let config = GameConfig {
        ticks_per_year: 10_000,
        ..GameConfig::default()
    };
    let mut game = Game::empty(config, 5);
    game.spawn(GarbageSpawner::new(frames(&["o"]), frames(&["V"])));
    let mut canvas = MemoryCanvas::new(20, 20);
    let mut input = ScriptedInput::idle();

    for _ in 0..100 {
        game.tick(&mut canvas, &mut input);
    }
    assert_eq!(game.world().year(), START_YEAR);
    assert_eq!(game.task_count(), 1);
    assert_eq!(game.world().collisions.insertions(), 0);
}

#[test]
fn spawn_pace_follows_the_delay_table() {
    let config = GameConfig {
        start_year: 1965,
        ticks_per_year: 10_000,
        ..GameConfig::default()
    };
    let delay = config.scenario.spawn_delay_for(1965).unwrap();
    let mut game = Game::empty(config, 5);
    game.spawn(GarbageSpawner::new(frames(&["o"]), frames(&[])));
    let mut canvas = MemoryCanvas::new(20, 20);
    let mut input = ScriptedInput::idle();

    // The first obstacle is spawned on tick 0, then one every `delay` ticks.
    let ticks = delay * 3;
    for _ in 0..ticks {
        game.tick(&mut canvas, &mut input);
    }
    assert_eq!(game.world_mut().next_obstacle_id().0, 4);
}

#[test]
fn variant_obstacles_wait_for_their_year() {
    let config = GameConfig {
        start_year: 1990,
        variant_obstacle_year: 2000,
        ticks_per_year: 10_000,
        ..GameConfig::default()
    };
    let mut game = Game::empty(config, 11);
    game.spawn(GarbageSpawner::new(frames(&["o"]), frames(&["VVV"])));
    let mut canvas = MemoryCanvas::new(40, 40);
    let mut input = ScriptedInput::idle();

    for _ in 0..150 {
        game.tick(&mut canvas, &mut input);
        assert!(!canvas.contents().contains('V'));
    }
    assert!(canvas.contents().contains('o'));

    game.world_mut().set_year(2030);
    let mut seen = false;
    for _ in 0..200 {
        game.tick(&mut canvas, &mut input);
        seen |= canvas.contents().contains('V');
    }
    assert!(seen);
}
