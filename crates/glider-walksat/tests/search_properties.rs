//! Property-style tests for the local-search core.

use glider_base::XorShift64;
use glider_format::Formula;
use glider_walksat::{SearchOutcome, WalkSat, WalkSatConfig};

/// Builds a random planted-satisfiable 3-SAT instance: every clause is
/// made true under a hidden assignment, so a model always exists.
fn planted_instance(num_vars: usize, num_clauses: usize, seed: u64) -> (Formula, Vec<bool>) {
    let mut rng = XorShift64::new(seed);
    let planted: Vec<bool> = (0..num_vars).map(|_| rng.next_bool()).collect();

    let mut text = format!("p cnf {num_vars} {num_clauses}\n");
    for _ in 0..num_clauses {
        let mut lits = Vec::with_capacity(3);
        for _ in 0..2 {
            let var = rng.next_below(num_vars) + 1;
            let positive = rng.next_bool();
            lits.push(if positive { var as i32 } else { -(var as i32) });
        }
        // Third literal agrees with the planted assignment, keeping the
        // clause satisfiable by construction.
        let var = rng.next_below(num_vars);
        let lit = if planted[var] {
            (var + 1) as i32
        } else {
            -((var + 1) as i32)
        };
        lits.push(lit);

        for lit in &lits {
            text.push_str(&format!("{lit} "));
        }
        text.push_str("0\n");
    }

    (Formula::parse(&text).unwrap(), planted)
}

#[test]
fn test_planted_instances_are_solved_and_verified() {
    for seed in 1..=5 {
        let (formula, planted) = planted_instance(20, 60, seed * 7919);
        assert!(formula.is_satisfied_by(&planted));

        let mut search = WalkSat::new(
            &formula,
            WalkSatConfig {
                max_flips: 200_000,
                noise: 0.5,
            },
        );
        match search.solve(&mut XorShift64::new(seed), None) {
            SearchOutcome::Satisfied(model) => {
                // Re-verify independently of the solver's bookkeeping.
                assert!(formula.is_satisfied_by(&model), "seed {seed}: bad model");
                assert_eq!(model.len(), formula.num_vars);
            }
            other => panic!("seed {seed}: expected a model, got {other:?}"),
        }
    }
}

#[test]
fn test_model_length_matches_variable_count() {
    let formula = Formula::parse("p cnf 6 2\n1 2 0\n-3 4 0\n").unwrap();
    let mut search = WalkSat::new(&formula, WalkSatConfig::default());
    if let SearchOutcome::Satisfied(model) = search.solve(&mut XorShift64::new(1), None) {
        assert_eq!(model.len(), 6);
    } else {
        panic!("two loose clauses over six variables must be satisfiable");
    }
}

#[test]
fn test_flips_never_exceed_budget() {
    let formula = Formula::parse("p cnf 1 2\n1 0\n-1 0\n").unwrap();
    for budget in [0u64, 1, 10, 137] {
        let mut search = WalkSat::new(
            &formula,
            WalkSatConfig {
                max_flips: budget,
                noise: 0.5,
            },
        );
        let outcome = search.solve(&mut XorShift64::new(budget + 1), None);
        assert_eq!(outcome, SearchOutcome::FlipsExhausted);
        assert!(search.stats().flips <= budget);
    }
}

#[test]
fn test_pure_noise_and_pure_greedy_both_solve_easy_instances() {
    let (formula, _) = planted_instance(10, 25, 1234);
    for noise in [0.0, 1.0] {
        let mut search = WalkSat::new(
            &formula,
            WalkSatConfig {
                max_flips: 500_000,
                noise,
            },
        );
        match search.solve(&mut XorShift64::new(5), None) {
            SearchOutcome::Satisfied(model) => assert!(formula.is_satisfied_by(&model)),
            other => panic!("noise {noise}: expected a model, got {other:?}"),
        }
    }
}
