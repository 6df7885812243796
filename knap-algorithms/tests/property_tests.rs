use knap_algorithms::{
    solve_dynamic, solve_exact, solve_greedy, solve_greedy_skipping, solve_naive,
    solve_naive_skipping, Deadline, Strategy as Solver,
};
use knap_challenges::{Item, Solution};
use proptest::prelude::*;

fn items_strategy(max_len: usize) -> impl proptest::strategy::Strategy<Value = Vec<Item>> {
    prop::collection::vec((0i64..30, 0i64..100), 0..max_len).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(weight, value)| Item::new("loot", weight, value))
            .collect()
    })
}

fn assert_consistent(capacity: i64, items: &[Item], solution: &Solution) {
    assert!(solution.total_weight <= capacity);
    assert_eq!(
        solution.total_weight,
        solution.items.iter().map(|&i| items[i].weight).sum::<i64>()
    );
    assert_eq!(
        solution.total_value,
        solution.items.iter().map(|&i| items[i].value).sum::<i64>()
    );
}

proptest! {
    #[test]
    fn prop_exact_fits_and_dominates_heuristics(
        capacity in 0i64..80,
        items in items_strategy(12)
    ) {
        let exact = solve_exact(capacity, &items).unwrap();
        assert_consistent(capacity, &items, &exact);

        for heuristic in [
            Solver::Naive,
            Solver::NaiveSkipping,
            Solver::Greedy,
            Solver::GreedySkipping,
        ] {
            let solution = heuristic.solve(capacity, &items, &Deadline::none()).unwrap();
            assert_consistent(capacity, &items, &solution);
            prop_assert!(solution.total_value <= exact.total_value);
        }
    }

    #[test]
    fn prop_dynamic_matches_brute_force_value(
        capacity in 0i64..80,
        items in items_strategy(12)
    ) {
        let exact = solve_exact(capacity, &items).unwrap();
        let dynamic = solve_dynamic(capacity, &items).unwrap();
        assert_consistent(capacity, &items, &dynamic);
        prop_assert_eq!(dynamic.total_value, exact.total_value);
    }

    #[test]
    fn prop_skipping_never_worse_than_stopping(
        capacity in 0i64..80,
        items in items_strategy(20)
    ) {
        let naive = solve_naive(capacity, &items).unwrap();
        let naive_skipping = solve_naive_skipping(capacity, &items).unwrap();
        prop_assert!(naive_skipping.items.starts_with(&naive.items));
        prop_assert!(naive_skipping.total_value >= naive.total_value);

        let greedy = solve_greedy(capacity, &items).unwrap();
        let greedy_skipping = solve_greedy_skipping(capacity, &items).unwrap();
        prop_assert!(greedy_skipping.items.starts_with(&greedy.items));
        prop_assert!(greedy_skipping.total_value >= greedy.total_value);
    }

    #[test]
    fn prop_single_item_taken_exactly_when_it_fits(
        capacity in 0i64..60,
        weight in 0i64..50,
        value in 0i64..100
    ) {
        let items = vec![Item::new("loot", weight, value)];
        for strategy in Solver::ALL {
            let solution = strategy.solve(capacity, &items, &Deadline::none()).unwrap();
            if weight <= capacity {
                prop_assert_eq!(&solution.items, &vec![0], "{}", strategy);
                prop_assert_eq!(solution.total_value, value);
            } else {
                prop_assert_eq!(solution, Solution::new(), "{}", strategy);
            }
        }
    }

    #[test]
    fn prop_strategies_are_idempotent(
        capacity in 0i64..80,
        items in items_strategy(10)
    ) {
        for strategy in Solver::ALL {
            let first = strategy.solve(capacity, &items, &Deadline::none()).unwrap();
            let second = strategy.solve(capacity, &items, &Deadline::none()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
