use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use stepwise_pathfinding::prelude::*;

const SIZE: usize = 100;
const RUNS: u64 = 10;

/// Manhattan moves without a Heuristic, which turns the search into Dijkstra
#[derive(Clone, Copy, Debug)]
struct Dijkstra(ManhattanNeighborhood);

impl Neighborhood for Dijkstra {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        self.0.get_all_neighbors(point, target)
    }
    fn heuristic(&self, _: Point, _: Point) -> Cost {
        0
    }
}

fn main() {
    let grids: Vec<Grid> = (0..RUNS)
        .into_par_iter()
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let cells = (0..SIZE * SIZE).map(|_| rng.gen_range(1..=9)).collect();
            Grid::new(SIZE, SIZE, cells)
                .expect("generated cells are in range")
                .tile_parallel(DEFAULT_REPEAT)
        })
        .collect();

    println!("finished Grid gen");

    let mut results: HashMap<&str, Vec<(u128, usize, Option<Cost>)>> = HashMap::new();

    for grid in &grids {
        let (width, height) = grid.size();
        let neighborhood = ManhattanNeighborhood::new(width, height);

        let start_time = Instant::now();
        let mut search = PathSearch::new(grid);
        let path = search.run_to_completion();
        let dt = duration_as_nanos(Instant::now() - start_time);
        results
            .entry("a_star")
            .or_default()
            .push((dt, search.steps(), path.map(|p| p.cost())));

        let start_time = Instant::now();
        let mut search =
            PathSearch::with_config(grid, Dijkstra(neighborhood), SearchConfig::default())
                .expect("corners are always inside the grid");
        let path = search.run_to_completion();
        let dt = duration_as_nanos(Instant::now() - start_time);
        results
            .entry("dijkstra")
            .or_default()
            .push((dt, search.steps(), path.map(|p| p.cost())));
    }

    let best = results["dijkstra"]
        .iter()
        .map(|(_, _, cost)| *cost)
        .collect::<Vec<_>>();

    let mut names = results.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();

    for name in names {
        let results = &results[name];
        let times = results.iter().map(|r| r.0);
        let min_time = times.clone().min().unwrap_or(0) as f64 / 1_000_000.0;
        let max_time = times.clone().max().unwrap_or(0) as f64 / 1_000_000.0;
        let avg_time = times.sum::<u128>() as f64 / results.len() as f64 / 1_000_000.0;

        let avg_steps =
            results.iter().map(|r| r.1).sum::<usize>() as f64 / results.len() as f64;

        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.2 == *b));

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | {:.0} steps",
            name, min_time, max_time, avg_time, avg_steps,
        );
    }
}

fn duration_as_nanos(d: Duration) -> u128 {
    d.as_secs() as u128 * 1_000_000_000 + d.subsec_nanos() as u128
}
