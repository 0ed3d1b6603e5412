use holdem::cards::*;
use holdem::equity::Calculator;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_five_cards,
        searching_best_of_seven,
        dealing_shuffled_deck,
        estimating_preflop_equity,
        estimating_flop_equity,
}

fn evaluating_five_cards(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let cards: [Card; 5] = Deck::shuffled(rng)
        .deal(5)
        .try_into()
        .expect("five cards");
    c.bench_function("evaluate a 5-card hand", |b| b.iter(|| evaluate_hand(&cards)));
}

fn searching_best_of_seven(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let mut deck = Deck::shuffled(rng);
    let hole = deck.hole();
    let board = deck.deal(5);
    c.bench_function("find the best 5 of 7 cards", |b| {
        b.iter(|| find_best_hand(&hole, &board))
    });
}

fn dealing_shuffled_deck(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(2);
    c.bench_function("shuffle a deck and deal a river", |b| {
        b.iter(|| Deck::shuffled(rng).deal(9))
    });
}

fn estimating_preflop_equity(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(3);
    let hole = Card::parse("As Kd").expect("valid cards");
    let calculator = Calculator::new(holdem::BOT_SIMULATIONS);
    c.bench_function("estimate Pre-Flop equity vs 2 (1000 trials)", |b| {
        b.iter(|| calculator.calculate_win_probability(&hole, &[], 2, rng))
    });
}

fn estimating_flop_equity(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(4);
    let hole = Card::parse("8h 8d").expect("valid cards");
    let flop = Card::parse("8c 2s Kd").expect("valid cards");
    let calculator = Calculator::new(holdem::NUM_SIMULATIONS_ANALYSIS);
    c.bench_function("estimate Flop equity vs 1 (10000 trials)", |b| {
        b.iter(|| calculator.calculate_win_probability(&hole, &flop, 1, rng))
    });
}
