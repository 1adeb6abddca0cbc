//! Card integration tests.

use core::cmp::Ordering;

use deckrs::{Card, FaceValue, Suit};

const fn card(suit: Suit, face_value: FaceValue) -> Card {
    Card::new(suit, face_value)
}

#[test]
fn face_values_rank_two_through_ace() {
    let values: Vec<u8> = FaceValue::ALL.iter().map(|fv| fv.value()).collect();
    assert_eq!(values, (2..=14).collect::<Vec<u8>>());
    assert_eq!(FaceValue::Ace.name(), "Ace");
    assert_eq!(FaceValue::Ten.to_string(), "Ten");
}

#[test]
fn suits_have_names_and_symbols() {
    let names: Vec<&str> = Suit::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["Clubs", "Diamonds", "Hearts", "Spades"]);
    let symbols: Vec<&str> = Suit::ALL.iter().map(|s| s.symbol()).collect();
    assert_eq!(symbols, ["♣", "♦", "♥", "♠"]);
    assert_eq!(Suit::Hearts.to_string(), "Hearts");
}

#[test]
fn comparison_ignores_suit() {
    let ace = card(Suit::Clubs, FaceValue::Ace);
    let two = card(Suit::Spades, FaceValue::Two);

    assert!(ace.greater_than(&two));
    assert!(!ace.less_than(&two));
    assert!(!ace.equal(&two));
    assert!(two.less_than(&ace));
    assert!(!two.greater_than(&ace));
    assert_eq!(ace.cmp_rank(&two), Ordering::Greater);
    assert_eq!(two.cmp_rank(&ace), Ordering::Less);

    let king_hearts = card(Suit::Hearts, FaceValue::King);
    let king_diamonds = card(Suit::Diamonds, FaceValue::King);
    assert!(king_hearts.equal(&king_diamonds));
    assert!(!king_hearts.greater_than(&king_diamonds));
    assert!(!king_hearts.less_than(&king_diamonds));
    assert_eq!(king_hearts.cmp_rank(&king_diamonds), Ordering::Equal);
    assert_ne!(king_hearts, king_diamonds);
}

#[test]
fn face_card_predicate() {
    for face_value in FaceValue::ALL {
        let expected = matches!(
            face_value,
            FaceValue::Jack | FaceValue::Queen | FaceValue::King | FaceValue::Ace
        );
        for suit in Suit::ALL {
            assert_eq!(card(suit, face_value).is_face_card(), expected);
        }
    }
}

#[test]
fn display_tokens() {
    assert_eq!(card(Suit::Spades, FaceValue::Ace).to_token(), " A♠");
    assert_eq!(card(Suit::Hearts, FaceValue::Jack).to_token(), " J♥");
    assert_eq!(card(Suit::Diamonds, FaceValue::Ten).to_token(), "10♦");
    assert_eq!(card(Suit::Clubs, FaceValue::Seven).to_token(), " 7♣");
    assert_eq!(card(Suit::Clubs, FaceValue::Two).to_string(), " 2♣");
}

#[test]
fn rank_comparisons_work_in_const_context() {
    const QUEEN: Card = card(Suit::Hearts, FaceValue::Queen);
    const FIVE: Card = card(Suit::Clubs, FaceValue::Five);
    const ORDER: Ordering = QUEEN.cmp_rank(&FIVE);

    assert_eq!(ORDER, Ordering::Greater);
    assert!(matches!(FIVE.cmp_rank(&QUEEN), Ordering::Less));
}
