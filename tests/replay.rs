use grid_snake::{Direction, Game, GameConfig, Point, TickRecord};

fn run_autopilot(seed: u64, limit: usize) -> Vec<TickRecord> {
    let mut game = Game::with_seed(&GameConfig::autopilot(), seed).unwrap();
    let mut trace = vec![game.record()];
    for _ in 0..limit {
        let outcome = game.step(None);
        trace.push(game.record());
        if outcome.game_over {
            break;
        }
    }
    trace
}

#[test]
fn same_seed_same_run() {
    for seed in [0, 1, 42, 2024] {
        let first = run_autopilot(seed, 5_000);
        let second = run_autopilot(seed, 5_000);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn autopilot_run_ends_in_collision_or_keeps_invariants() {
    let mut game = Game::with_seed(&GameConfig::autopilot(), 8).unwrap();
    let field = *game.field();
    for _ in 0..5_000 {
        let outcome = game.step(None);
        if outcome.game_over {
            assert!(game.is_collision() || game.snake().len() == field.cell_count());
            return;
        }
        assert!(field.is_inside(game.snake().head()));
        assert!(!game.snake().contains(game.food()));
        assert!(field.is_inside(game.food()));
    }
}

#[test]
fn first_manual_tick_moves_right() {
    let config = GameConfig::manual();
    let mut game = (0..)
        .map(|seed| Game::with_seed(&config, seed).unwrap())
        .find(|g| g.food() != Point::new(340, 240))
        .unwrap();
    let tail = *game.snake().body().back().unwrap();

    let outcome = game.step(None);

    assert!(!outcome.game_over);
    assert_eq!(outcome.score, 0);
    assert_eq!(game.snake().head(), Point::new(340, 240));
    assert_eq!(game.snake().len(), 3);
    assert!(!game.snake().contains(tail));
    assert_eq!(game.direction(), Direction::Right);
}

#[test]
fn manual_run_into_right_wall() {
    let config = GameConfig::manual();
    let mut game = Game::with_seed(&config, 3).unwrap();
    let mut last = None;
    // head starts at x = 320; the wall is 16 blocks away
    for _ in 0..20 {
        let outcome = game.step(Some(Direction::Left));
        last = Some(outcome);
        if outcome.game_over {
            break;
        }
    }
    let outcome = last.unwrap();
    assert!(outcome.game_over);
    assert_eq!(game.snake().head().x, 640);
    assert_eq!(game.steps(), 16);
}
