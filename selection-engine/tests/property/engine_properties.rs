//! Property tests: batcher partition identity, sort invariants, and the
//! query→parse content round trip.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use selection_core::models::{BatchOption, CreateSelectionRequest, ParseSelectionRequest, QuerySelectionRequest};
use selection_core::selection::{SelectionKey, SelectionOption, SortMethod};
use selection_core::traits::ISelectionService;
use selection_engine::{batcher, sorter, SelectionService};
use selection_storage::StorageEngine;

fn make_options(count: u32) -> Vec<BatchOption> {
    (1..=count)
        .map(|number| BatchOption {
            number,
            option: SelectionOption::new(format!("opt-{number}"), format!("Option {number}")),
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_batch_concatenation_reproduces_input(
        count in 0u32..60,
        batch_size in 1i32..20,
    ) {
        let options = make_options(count);

        let batches = batcher::create_batches(&options, batch_size);

        let concatenated: Vec<BatchOption> = batches
            .into_iter()
            .flat_map(|batch| batch.options)
            .collect();
        prop_assert_eq!(concatenated, options);
    }

    #[test]
    fn prop_non_positive_batch_size_yields_nothing(
        count in 0u32..30,
        batch_size in -10i32..=0,
    ) {
        let options = make_options(count);
        prop_assert!(batcher::create_batches(&options, batch_size).is_empty());
    }

    #[test]
    fn prop_number_sort_is_idempotent(
        count in 0u32..40,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        // Start from a random permutation so the first sort does real work.
        let shuffled = sorter::sort(make_options(count), &SortMethod::Random, &mut rng);

        let once = sorter::sort(shuffled, &SortMethod::Number, &mut rng);
        let twice = sorter::sort(once.clone(), &SortMethod::Number, &mut rng);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_random_sort_is_a_permutation(
        count in 0u32..40,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = make_options(count);

        let shuffled = sorter::sort(options.clone(), &SortMethod::Random, &mut rng);

        prop_assert_eq!(shuffled.len(), options.len());
        let mut numbers: Vec<u32> = shuffled.iter().map(|o| o.number).collect();
        numbers.sort_unstable();
        prop_assert_eq!(numbers, (1..=count).collect::<Vec<u32>>());
    }

    #[test]
    fn prop_metadata_sort_is_total_and_stable_under_missing_keys(
        count in 1u32..30,
        with_key in prop::collection::vec(any::<bool>(), 30),
    ) {
        let mut rng = StdRng::seed_from_u64(0);
        let options: Vec<BatchOption> = (1..=count)
            .map(|number| {
                let option = SelectionOption::new(format!("opt-{number}"), format!("Option {number}"));
                let option = if with_key[(number - 1) as usize] {
                    option.with_metadata("group", format!("{:03}", number % 5))
                } else {
                    option
                };
                BatchOption { number, option }
            })
            .collect();

        let sorted = sorter::sort(options, &SortMethod::Metadata("group".to_string()), &mut rng);

        // Present-key entries first, then missing-key entries by number.
        let split = sorted
            .iter()
            .position(|o| !o.option.metadata.contains_key("group"))
            .unwrap_or(sorted.len());
        for o in &sorted[..split] {
            prop_assert!(o.option.metadata.contains_key("group"));
        }
        let mut last_number = 0;
        for o in &sorted[split..] {
            prop_assert!(!o.option.metadata.contains_key("group"));
            prop_assert!(o.number > last_number);
            last_number = o.number;
        }
    }

    #[test]
    fn prop_query_content_round_trips_through_parse(
        count in 1u32..15,
        seed in any::<u64>(),
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let service = SelectionService::new(&engine);

        let key = SelectionKey::new("app", "instance", "user", "server");
        let options: Vec<SelectionOption> = (1..=count)
            .map(|n| SelectionOption::new(format!("opt-{n}"), format!("Option {n}")))
            .collect();
        service
            .create(CreateSelectionRequest {
                key: key.clone(),
                options,
                randomize: false,
                batch_size: 5,
                sort_method: SortMethod::Number,
            })
            .unwrap();

        // Rank every option with a seeded arbitrary ordering.
        let mut rng = StdRng::seed_from_u64(seed);
        let ranked_ids = sorter::sort(make_options(count), &SortMethod::Random, &mut rng);
        let ranks = ranked_ids
            .iter()
            .enumerate()
            .map(|(rank, o)| (o.option.option_id.clone(), rank as i64))
            .collect();

        let reply = service
            .query(QuerySelectionRequest { key: key.clone(), ranks })
            .unwrap();
        let parsed = service
            .parse(ParseSelectionRequest { key, content: reply.content })
            .unwrap();

        prop_assert_eq!(parsed.len(), reply.options.len());
        for (i, (parsed, queried)) in parsed.iter().zip(reply.options.iter()).enumerate() {
            prop_assert_eq!(parsed.rank, i as i64);
            prop_assert_eq!(parsed.number, queried.number);
            prop_assert_eq!(&parsed.option, &queried.option);
        }
    }
}
