use knap_challenges::*;
use rand::{rngs::SmallRng, SeedableRng};

fn sample_challenge() -> Challenge {
    Challenge {
        seed: [0; 32],
        difficulty: Difficulty {
            num_items: 3,
            max_weight: 10,
        },
        items: vec![
            Item::new("coin", 5, 10),
            Item::new("jewel", 4, 40),
            Item::new("statue", 6, 30),
        ],
        max_weight: 10,
    }
}

#[test]
fn test_generate_instance_is_deterministic() {
    let seed = [7u8; 32];
    let difficulty = CaveSize::Medium.difficulty(DEFAULT_MAX_WEIGHT);
    let a = Challenge::generate_instance(&seed, &difficulty).unwrap();
    let b = Challenge::generate_instance(&seed, &difficulty).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.items.len(), 15);
    assert_eq!(a.max_weight, 50);
    for item in &a.items {
        assert!((MIN_ITEM_WEIGHT..=MAX_ITEM_WEIGHT).contains(&item.weight));
        assert!((MIN_ITEM_VALUE..=MAX_ITEM_VALUE).contains(&item.value));
        assert!(DEFAULT_NAME_POOL.contains(&item.name.as_str()));
    }
}

#[test]
fn test_generate_instance_rejects_negative_max_weight() {
    let difficulty = Difficulty {
        num_items: 5,
        max_weight: -1,
    };
    assert!(Challenge::generate_instance(&[0; 32], &difficulty).is_err());
}

#[test]
fn test_cave_sizes() {
    assert_eq!(CaveSize::Small.num_items(), 5);
    assert_eq!(CaveSize::Medium.num_items(), 15);
    assert_eq!(CaveSize::Large.num_items(), 25);
    assert_eq!("LARGE".parse::<CaveSize>().unwrap(), CaveSize::Large);
    assert!("enormous".parse::<CaveSize>().is_err());
    assert_eq!(CaveSize::Small.to_string(), "small");
}

#[test]
fn test_difficulty_vec_conversion() {
    let difficulty: Difficulty = vec![15, 50].into();
    assert_eq!(
        difficulty,
        Difficulty {
            num_items: 15,
            max_weight: 50
        }
    );
    let arr: Vec<i32> = difficulty.into();
    assert_eq!(arr, vec![15, 50]);
}

#[test]
fn test_verify_solution() {
    let challenge = sample_challenge();
    let solution = Solution::from_indices(&challenge.items, vec![1, 2]);
    assert_eq!(solution.total_weight, 10);
    assert_eq!(solution.total_value, 70);
    assert_eq!(challenge.verify_solution(&solution).unwrap(), 70);
    assert_eq!(challenge.verify_solution(&Solution::new()).unwrap(), 0);
}

#[test]
fn test_verify_solution_rejects_bad_solutions() {
    let challenge = sample_challenge();

    let over_weight = Solution::from_indices(&challenge.items, vec![0, 2]);
    assert!(challenge.verify_solution(&over_weight).is_err());

    let duplicate = Solution {
        items: vec![1, 1],
        total_weight: 8,
        total_value: 80,
    };
    assert!(challenge.verify_solution(&duplicate).is_err());

    let out_of_bounds = Solution {
        items: vec![3],
        total_weight: 0,
        total_value: 0,
    };
    assert!(challenge.verify_solution(&out_of_bounds).is_err());

    let wrong_total = Solution {
        items: vec![1],
        total_weight: 4,
        total_value: 41,
    };
    assert!(challenge.verify_solution(&wrong_total).is_err());
}

#[test]
fn test_solution_from_json_map() {
    let value = serde_json::json!({"items": [0, 2], "total_weight": 11, "total_value": 40});
    let map = value.as_object().unwrap().clone();
    let solution = Solution::try_from(map).unwrap();
    assert_eq!(solution.items, vec![0, 2]);
    assert_eq!(solution.total_weight, 11);
}

#[test]
fn test_generate_items_uses_pool_and_ranges() {
    let mut rng = SmallRng::seed_from_u64(42);
    let items = generate_items(&mut rng, 50, 3..=3, 0..=1, &["hat"]);
    assert_eq!(items.len(), 50);
    assert!(items
        .iter()
        .all(|i| i.name == "hat" && i.weight == 3 && i.value <= 1));

    let unnamed = generate_items(&mut rng, 2, 1..=2, 1..=2, &[]);
    assert!(unnamed.iter().all(|i| i.name == "item"));
}

#[test]
fn test_validate_input() {
    let items = vec![Item::new("coin", 1, 1), Item::new("gold", 0, 0)];
    assert!(validate_input(0, &items).is_ok());
    assert_eq!(
        validate_input(-1, &items),
        Err(KnapsackError::InvalidCapacity { capacity: -1 })
    );
    let bad = vec![Item::new("coin", 1, 1), Item::new("cursed", -2, 5)];
    assert_eq!(
        validate_input(10, &bad),
        Err(KnapsackError::InvalidItem {
            index: 1,
            weight: -2,
            value: 5
        })
    );
}

#[test]
fn test_validate_input_rejects_overflowing_totals() {
    let heavy = vec![Item::new("anvil", i64::MAX, 1), Item::new("coin", 1, 1)];
    assert_eq!(
        validate_input(i64::MAX, &heavy),
        Err(KnapsackError::TotalOverflow { field: "weight" })
    );
    let precious = vec![Item::new("crown", 1, i64::MAX), Item::new("coin", 1, 1)];
    assert_eq!(
        validate_input(2, &precious),
        Err(KnapsackError::TotalOverflow { field: "value" })
    );
    assert!(validate_input(i64::MAX, &heavy[..1]).is_ok());

    assert_eq!(checked_total([i64::MAX, 0]), Some(i64::MAX));
    assert_eq!(checked_total([i64::MAX, 1]), None);
    assert_eq!(checked_total(Vec::new()), Some(0));
}

#[test]
fn test_verify_solution_with_overflowing_totals() {
    let challenge = Challenge {
        seed: [0; 32],
        difficulty: Difficulty {
            num_items: 2,
            max_weight: i64::MAX,
        },
        items: vec![
            Item::new("anvil", i64::MAX, 1),
            Item::new("crown", 1, i64::MAX),
        ],
        max_weight: i64::MAX,
    };
    let both = Solution {
        items: vec![0, 1],
        total_weight: i64::MAX,
        total_value: i64::MAX,
    };
    assert!(challenge.verify_solution(&both).is_err());
    assert_eq!(calculate_total_value(&[0, 1], &challenge.items), None);
    assert_eq!(calculate_total_value(&[1], &challenge.items), Some(i64::MAX));

    let anvil = Solution {
        items: vec![0],
        total_weight: i64::MAX,
        total_value: 1,
    };
    assert_eq!(challenge.verify_solution(&anvil).unwrap(), 1);
}

#[test]
fn test_partition_valid_items() {
    let items = vec![
        Item::new("coin", 1, 1),
        Item::new("debt", 2, -3),
        Item::new("hat", 4, 2),
    ];
    let (valid, errors) = partition_valid_items(items);
    assert_eq!(valid.len(), 2);
    assert_eq!(valid[1].name, "hat");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_item_display() {
    assert_eq!(
        Item::new("treasure chest", 25, 100).to_string(),
        "treasure chest, 25 lbs, $100"
    );
}
