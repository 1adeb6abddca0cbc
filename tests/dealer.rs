//! Dealer generation tests.

use deckrs::{Dealer, DealerError, DealerNames};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn generated_names_come_from_the_lists() {
    let names = DealerNames::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..50 {
        let dealer = Dealer::generate(&names, &mut rng).expect("default lists are not empty");
        assert!(names.first_names.iter().any(|n| n == dealer.first_name()));
        assert!(names.last_names.iter().any(|n| n == dealer.last_name()));
    }
}

#[test]
fn single_entry_lists_are_deterministic() {
    let names = DealerNames::default()
        .with_first_names(["Ada"])
        .with_last_names(["Lovelace"]);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let dealer = Dealer::generate(&names, &mut rng).expect("lists are not empty");
    assert_eq!(dealer.first_name(), "Ada");
    assert_eq!(dealer.last_name(), "Lovelace");
    assert_eq!(dealer.to_string(), "Ada Lovelace");
}

#[test]
fn empty_lists_are_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let no_first = DealerNames::default().with_first_names(Vec::<String>::new());
    assert_eq!(
        Dealer::generate(&no_first, &mut rng),
        Err(DealerError::NoFirstNames)
    );

    let no_last = DealerNames::default().with_last_names(Vec::<&str>::new());
    assert_eq!(
        Dealer::generate(&no_last, &mut rng),
        Err(DealerError::NoLastNames)
    );
}
