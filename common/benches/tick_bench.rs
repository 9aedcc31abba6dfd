use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use std::hint::black_box;
use snake_duel_common::games::snake::{BotController, Direction, GridSize, Point, Snake};
use snake_duel_common::{SessionRng, SimulationSettings, SimulationState};

fn create_state(width: u32, height: u32, food: u32) -> SimulationState {
    let settings = SimulationSettings {
        grid_width: width,
        grid_height: height,
        target_food_count: food,
        ..SimulationSettings::default()
    };
    SimulationState::new(&settings, SessionRng::new(42)).expect("bench settings are valid")
}

fn bench_ticks_100x100(c: &mut Criterion) {
    let mut state = create_state(100, 100, 3);
    c.bench_function("tick 100x100", |b| {
        b.iter(|| black_box(state.tick()))
    });
}

fn bench_frame_catch_up(c: &mut Criterion) {
    let mut state = create_state(100, 100, 3);
    c.bench_function("update 50 overdue ticks 100x100", |b| {
        b.iter(|| black_box(state.update(10.0)))
    });
}

fn bench_bot_choice_long_body(c: &mut Criterion) {
    let grid = GridSize::new(100, 100);
    let bot_cells: Vec<Point> = (0..90).map(|x| Point::new(95 - x, 50)).collect();
    let bot = Snake::from_cells(bot_cells, Direction::Right);
    let player_cells: Vec<Point> = (0..90).map(|x| Point::new(5 + x, 52)).collect();
    let player = Snake::from_cells(player_cells, Direction::Left);
    let food: HashSet<Point> = (0..20).map(|i| Point::new(i * 5, (i * 7) % 100)).collect();

    c.bench_function("bot choice with long bodies", |b| {
        b.iter(|| {
            black_box(BotController::choose_direction(
                &bot,
                Some(&player),
                &food,
                Direction::Right,
                grid,
            ))
        })
    });
}

criterion_group!(benches, bench_ticks_100x100, bench_frame_catch_up, bench_bot_choice_long_body);
criterion_main!(benches);
