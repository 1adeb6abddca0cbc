//! Deals a hand from a freshly shuffled deck and checks it for a pair.
//!
//! Usage: `cargo run --example draw_hand -- [hand size] [extra shuffles]`

use std::env;
use std::error::Error;

use deckrs::{Card, Dealer, DealerNames, Deck, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_HAND_SIZE: usize = 5;
const DEFAULT_EXTRA_SHUFFLES: usize = 5;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let hand_size = parse_arg(args.next(), DEFAULT_HAND_SIZE)?;
    let extra_shuffles = parse_arg(args.next(), DEFAULT_EXTRA_SHUFFLES)?;

    print_intro();

    let mut name_rng = ChaCha8Rng::try_from_os_rng()?;
    let dealer = Dealer::generate(&DealerNames::default(), &mut name_rng)?;
    println!("Your dealer tonight is {}.", colorize(&dealer.to_string(), "33"));
    println!();

    let mut deck = Deck::new();
    deck.initialize()?;

    for _ in 0..extra_shuffles {
        if let Some(top) = deck.cards().first() {
            println!("Top card: {top}");
        }
        println!("Cards in deck: {}", deck.cards_left());
        println!("Shuffling...");
        deck.shuffle()?;
    }

    let hand = deck.draw(hand_size)?;

    println!();
    println!("Drawn hand: {}", format_hand(&hand));
    println!();
    println!("Cards in deck: {}", deck.cards_left());

    if has_pair(&hand) {
        println!("You have a pair!");
    } else {
        println!("You don't have a pair.");
    }

    Ok(())
}

fn parse_arg(arg: Option<String>, default: usize) -> Result<usize, Box<dyn Error>> {
    match arg {
        Some(value) => Ok(value.trim().parse()?),
        None => Ok(default),
    }
}

fn print_intro() {
    println!("{}", colorize("21 Blackjack!", "36"));
    println!("{}", colorize("A standard deck, shuffled with the OS random source.", "36"));
    println!();
}

fn has_pair(hand: &[Card]) -> bool {
    hand.iter()
        .enumerate()
        .any(|(i, card)| hand[i + 1..].iter().any(|other| card.equal(other)))
}

fn format_hand(hand: &[Card]) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    let rank = if card.is_face_card() {
        format!("{:>2}", &card.face_value.name()[..1])
    } else {
        format!("{:>2}", card.value())
    };

    let colored_rank = if card.is_face_card() {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(card.suit.symbol(), color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
