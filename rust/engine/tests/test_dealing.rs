use std::collections::HashSet;

use fairdeal_engine::cards::Card;
use fairdeal_engine::deal::{deal_flop, deal_hand, deal_preflop, deal_river, deal_turn};
use fairdeal_engine::deck::shuffled_deck;
use fairdeal_engine::seat::{seats, Seat};
use fairdeal_engine::EngineError;

#[test]
fn nine_seat_hand_consumes_26_cards() {
    let hand = deal_hand("nine-handed", seats(9)).unwrap();
    assert_eq!(hand.deck.remaining(), 52 - 26);

    let mut seen = HashSet::new();
    for seat in &hand.seats {
        for c in seat.hole_pair().expect("every seat dealt") {
            assert!(seen.insert(c), "{} dealt twice", c);
        }
    }
    for c in hand.board.iter().chain(&hand.burns) {
        assert!(seen.insert(*c), "{} dealt twice", c);
    }
    for c in hand.deck.cards() {
        assert!(seen.insert(*c), "{} still in deck after dealing", c);
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn burn_cards_and_board_follow_deck_order() {
    let deck = shuffled_deck("positions");
    let order: Vec<Card> = deck.cards().to_vec();
    let hand = deal_hand("positions", seats(2)).unwrap();

    // 4 hole cards, then burn, flop x3, burn, turn, burn, river
    assert_eq!(hand.burns, [order[4], order[8], order[10]]);
    assert_eq!(
        hand.board,
        [order[5], order[6], order[7], order[9], order[11]]
    );
    assert_eq!(hand.deck.remaining(), 40);
}

#[test]
fn streets_chain_like_deal_hand() {
    let deck = shuffled_deck("chain");
    let (table, deck) = deal_preflop(seats(3), deck).unwrap();
    let (flop, deck) = deal_flop(deck).unwrap();
    let (turn, deck) = deal_turn(deck).unwrap();
    let (river, deck) = deal_river(deck).unwrap();

    let whole = deal_hand("chain", seats(3)).unwrap();
    assert_eq!(table, whole.seats);
    assert_eq!([flop[0], flop[1], flop[2], turn, river], whole.board);
    assert_eq!(deck, whole.deck);
}

#[test]
fn same_seed_same_deal() {
    let a = deal_hand("replay", seats(6)).unwrap();
    let b = deal_hand("replay", seats(6)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn too_many_seats_exhausts_deck() {
    let table: Vec<Seat> = (0..27).map(Seat::new).collect();
    assert_eq!(
        deal_preflop(table, shuffled_deck("crowded")),
        Err(EngineError::DeckExhausted {
            requested: 54,
            remaining: 52
        })
    );
}

#[test]
fn river_past_the_end_fails() {
    // 23 seats take 46 cards; flop needs 4 more, leaving 2; turn leaves 0.
    let err = deal_hand("tight", seats(23)).unwrap_err();
    assert_eq!(
        err,
        EngineError::DeckExhausted {
            requested: 2,
            remaining: 0
        }
    );
}
