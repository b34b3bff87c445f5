use rand::rngs::SmallRng;
use rand::SeedableRng;

use peloton::race::{simulate_race, stream_seed, Rider, RiderTraits, Route, Segment};

fn traits(base_power_w: f64, variance_coeff: f64) -> RiderTraits {
    RiderTraits {
        base_power_w,
        weight_kg: 78.0,
        cda_m2: 0.3,
        crr: 0.004,
        endurance_decay: 0.1,
        variance_coeff,
    }
}

fn field_of(names: &[&str]) -> Vec<Rider> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Rider::new(*name, traits(280.0 + 10.0 * index as f64, 0.08)).expect("valid rider")
        })
        .collect()
}

#[test]
fn trial_preserves_the_rider_set() {
    let field = field_of(&["Anna", "Bram", "Cleo", "Dana", "Egon"]);
    let route = Route::default_demo();
    let result =
        simulate_race(&field, &route, &mut SmallRng::seed_from_u64(17)).expect("trial");

    assert_eq!(result.finishers.len(), field.len());
    let mut names: Vec<&str> = result.finishers.iter().map(|f| f.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Anna", "Bram", "Cleo", "Dana", "Egon"]);
}

#[test]
fn finish_times_are_non_decreasing() {
    let field = field_of(&["Anna", "Bram", "Cleo", "Dana"]);
    let route = Route::default_demo();
    let result =
        simulate_race(&field, &route, &mut SmallRng::seed_from_u64(23)).expect("trial");

    for pair in result.finishers.windows(2) {
        assert!(pair[0].finish_time_s <= pair[1].finish_time_s);
    }
}

#[test]
fn identical_seeds_give_bit_identical_trials() {
    let field = field_of(&["Anna", "Bram", "Cleo"]);
    let route = Route::default_demo();
    let a = simulate_race(&field, &route, &mut SmallRng::seed_from_u64(99)).expect("trial a");
    let b = simulate_race(&field, &route, &mut SmallRng::seed_from_u64(99)).expect("trial b");
    assert_eq!(a, b);
}

#[test]
fn steeper_segment_never_lowers_the_finish_time() {
    // Same seed stream on both routes pairs the form draws one-for-one, so
    // only the middle gradient differs between the two runs.
    let field = vec![Rider::new("Anna", traits(300.0, 0.15)).expect("valid rider")];
    let flat = Route::new(vec![
        Segment::new(2000.0, 0.0),
        Segment::new(2000.0, 0.01),
        Segment::new(2000.0, 0.0),
    ])
    .expect("flat route");
    let steep = Route::new(vec![
        Segment::new(2000.0, 0.0),
        Segment::new(2000.0, 0.07),
        Segment::new(2000.0, 0.0),
    ])
    .expect("steep route");

    for seed in 0..50u64 {
        let rng_seed = stream_seed(4242, seed);
        let on_flat = simulate_race(&field, &flat, &mut SmallRng::seed_from_u64(rng_seed))
            .expect("flat trial");
        let on_steep = simulate_race(&field, &steep, &mut SmallRng::seed_from_u64(rng_seed))
            .expect("steep trial");
        assert!(
            on_steep.finishers[0].finish_time_s >= on_flat.finishers[0].finish_time_s,
            "seed {seed}: steep faster than flat"
        );
    }
}

#[test]
fn winner_is_the_first_finisher() {
    let field = field_of(&["Anna", "Bram"]);
    let route = Route::default_demo();
    let result =
        simulate_race(&field, &route, &mut SmallRng::seed_from_u64(5)).expect("trial");
    let winner = result.winner().expect("winner");
    assert_eq!(winner.name, result.finishers[0].name);
}
