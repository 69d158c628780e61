//! Orders numbered options for display. The stored numbers never change
//! here; only the sequence the batcher will partition.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use selection_core::models::BatchOption;
use selection_core::selection::SortMethod;

/// Sort numbered options by the requested method.
///
/// Every method except `Random` uses a stable sort, so equal elements keep
/// their input order. `Random` consumes the provided rng; threading it as a
/// parameter keeps shuffles reproducible under test harnesses.
pub fn sort<R: Rng + ?Sized>(
    mut options: Vec<BatchOption>,
    method: &SortMethod,
    rng: &mut R,
) -> Vec<BatchOption> {
    debug!(?method, count = options.len(), "sorting options");

    match method {
        SortMethod::Number => options.sort_by_key(|o| o.number),
        SortMethod::Random => options.shuffle(rng),
        SortMethod::Alphabetical => {
            options.sort_by(|a, b| a.option.content.cmp(&b.option.content))
        }
        SortMethod::Metadata(key) => options.sort_by(|a, b| compare_metadata(a, b, key)),
    }

    options
}

/// Total order for the metadata strategy.
///
/// Entries carrying the key sort ascending by value; entries missing the key
/// sort after all present entries and among themselves by number. Returning
/// `Equal` for equal present values lets the stable sort keep input order.
fn compare_metadata(a: &BatchOption, b: &BatchOption, key: &str) -> Ordering {
    match (a.option.metadata.get(key), b.option.metadata.get(key)) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.number.cmp(&b.number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use selection_core::selection::SelectionOption;

    fn numbered(number: u32, content: &str) -> BatchOption {
        BatchOption {
            number,
            option: SelectionOption::new(format!("opt-{number}"), content),
        }
    }

    #[test]
    fn number_sort_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = vec![numbered(3, "c"), numbered(1, "a"), numbered(2, "b")];

        let once = sort(options, &SortMethod::Number, &mut rng);
        let twice = sort(once.clone(), &SortMethod::Number, &mut rng);

        assert_eq!(once, twice);
        let numbers: Vec<u32> = once.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn alphabetical_sort_is_case_sensitive() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = vec![numbered(1, "b"), numbered(2, "A")];

        let sorted = sort(options, &SortMethod::Alphabetical, &mut rng);

        let contents: Vec<&str> = sorted.iter().map(|o| o.option.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "b"]);
    }

    #[test]
    fn alphabetical_sort_keeps_input_order_on_ties() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = vec![numbered(2, "same"), numbered(1, "same")];

        let sorted = sort(options, &SortMethod::Alphabetical, &mut rng);

        let numbers: Vec<u32> = sorted.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn metadata_sort_orders_by_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = vec![
            BatchOption {
                number: 1,
                option: SelectionOption::new("a", "a").with_metadata("weight", "2"),
            },
            BatchOption {
                number: 2,
                option: SelectionOption::new("b", "b").with_metadata("weight", "1"),
            },
        ];

        let sorted = sort(options, &SortMethod::Metadata("weight".to_string()), &mut rng);

        let numbers: Vec<u32> = sorted.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn metadata_sort_places_missing_keys_last_by_number() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = vec![
            numbered(4, "no key"),
            BatchOption {
                number: 2,
                option: SelectionOption::new("b", "b").with_metadata("weight", "9"),
            },
            numbered(3, "no key either"),
            BatchOption {
                number: 1,
                option: SelectionOption::new("a", "a").with_metadata("weight", "5"),
            },
        ];

        let sorted = sort(options, &SortMethod::Metadata("weight".to_string()), &mut rng);

        let numbers: Vec<u32> = sorted.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn random_sort_returns_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let options: Vec<BatchOption> =
            (1..=20).map(|n| numbered(n, &format!("option {n}"))).collect();

        let shuffled = sort(options.clone(), &SortMethod::Random, &mut rng);

        assert_eq!(shuffled.len(), options.len());
        let mut numbers: Vec<u32> = shuffled.iter().map(|o| o.number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=20).collect::<Vec<u32>>());
    }
}
