//! Local-search benchmarks.
//!
//! Run with: cargo bench -p glider-walksat

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glider_base::XorShift64;
use glider_format::Formula;
use glider_walksat::{WalkSat, WalkSatConfig};

/// Generate a planted-satisfiable 3-SAT instance as DIMACS text.
fn generate_instance(num_vars: usize, num_clauses: usize, seed: u64) -> String {
    let mut rng = XorShift64::new(seed);
    let planted: Vec<bool> = (0..num_vars).map(|_| rng.next_bool()).collect();

    let mut text = format!("p cnf {num_vars} {num_clauses}\n");
    for _ in 0..num_clauses {
        for _ in 0..2 {
            let var = rng.next_below(num_vars) + 1;
            let lit = if rng.next_bool() { var as i64 } else { -(var as i64) };
            text.push_str(&format!("{lit} "));
        }
        let var = rng.next_below(num_vars);
        let lit = if planted[var] { var as i64 + 1 } else { -(var as i64 + 1) };
        text.push_str(&format!("{lit} 0\n"));
    }
    text
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("walksat");

    for &num_vars in &[20usize, 50, 100] {
        let num_clauses = num_vars * 3;
        let text = generate_instance(num_vars, num_clauses, 0x5eed);
        let formula = Formula::parse(&text).unwrap();

        group.bench_with_input(
            BenchmarkId::new("planted_3sat", num_vars),
            &formula,
            |b, formula| {
                b.iter(|| {
                    let mut search = WalkSat::new(
                        black_box(formula),
                        WalkSatConfig {
                            max_flips: 50_000,
                            noise: 0.5,
                        },
                    );
                    let mut rng = XorShift64::new(7);
                    black_box(search.solve(&mut rng, None))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
