use dungeon_core::{Direction, Game, SessionState, SimConfig};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn run_fuzz_simulation(run_seed: u64, input_seed: u64, max_ticks: u32) -> Result<(), String> {
    let mut game = Game::new(SimConfig::default(), run_seed).map_err(|e| e.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);
    let mut last_score = 0;
    let mut collected_before: Vec<bool> = Vec::new();

    for _ in 0..max_ticks {
        let state_before = game.state();
        match rng.next_u64() % 8 {
            0 => {
                game.request_start();
            }
            1 => {
                game.request_acknowledge();
            }
            roll => {
                game.request_move(Direction::ALL[(roll % 4) as usize]);
            }
        }
        if state_before == SessionState::Menu && game.state() == SessionState::Playing {
            last_score = 0;
            collected_before.clear();
        }

        let dt = (rng.next_u64() % 100) as f32 / 1_000.0;
        game.tick(dt);

        let snapshot = game.snapshot();
        if snapshot.walls.contains(&snapshot.hero.cell) {
            return Err(format!("hero inside wall at {:?} (seed {run_seed})", snapshot.hero.cell));
        }
        if game.state() == SessionState::Menu {
            continue;
        }
        if snapshot.hero.score < last_score {
            return Err(format!("score decreased (seed {run_seed})"));
        }
        last_score = snapshot.hero.score;

        let collected: Vec<bool> = snapshot.treasures.iter().map(|t| t.collected).collect();
        if collected_before.len() == collected.len()
            && collected_before.iter().zip(&collected).any(|(before, now)| *before && !*now)
        {
            return Err(format!("treasure un-collected (seed {run_seed})"));
        }
        collected_before = collected;

        if game.state() == SessionState::GameOver && snapshot.hero.health != 0 {
            return Err(format!("game over with health left (seed {run_seed})"));
        }
        if !snapshot.hero.moving && snapshot.hero.pixel != snapshot.hero.cell.to_pixel(32.0) {
            return Err(format!("resting hero off its cell (seed {run_seed})"));
        }
    }
    Ok(())
}

#[test]
fn semantic_fuzz_holds_invariants_across_seeds() {
    let mut runner = TestRunner::new(ProptestConfig { cases: 48, ..ProptestConfig::default() });
    runner
        .run(&(any::<u64>(), any::<u64>()), |(run_seed, input_seed)| {
            run_fuzz_simulation(run_seed, input_seed, 1_500).map_err(TestCaseError::fail)
        })
        .expect("fuzz invariants should hold");
}
