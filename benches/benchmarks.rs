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
        sampling_river_evaluation,
        simulating_flop_equity,
        simulating_river_equity,
        selecting_river_action,
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    let ref mut rng = rand::rng();
    let hand = Deck::new().deal(7, rng).unwrap_or_default();
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| Strength::from(hand))
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    let request = EquityRequest::try_from("As Kd ~ Qs 7h 2c").unwrap().simulations(1000);
    c.bench_function("simulate 1000 Flop runouts heads up", |b| {
        b.iter(|| Engine.simulate(&request))
    });
}

fn simulating_river_equity(c: &mut criterion::Criterion) {
    let request = EquityRequest::try_from("9s 9h ~ Ts 7h 2c Kd 3s")
        .unwrap()
        .simulations(1000)
        .opponents(3);
    c.bench_function("simulate 1000 River runouts against 3", |b| {
        b.iter(|| Engine.simulate(&request))
    });
}

fn selecting_river_action(c: &mut criterion::Criterion) {
    let ctx = Context::new(Street::Rive)
        .profile(Profile::Tight)
        .position(Position::Btn)
        .opponents(1)
        .pot(240., 760.)
        .observed(9);
    c.bench_function("select a River action", |b| {
        b.iter(|| select(0.63, 0.02, &ctx))
    });
}

use robobrain::cards::*;
use robobrain::equity::*;
use robobrain::threshold::*;
