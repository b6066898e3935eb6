use activity_model::{predict, sigmoid, Tier};
use proptest::prelude::*;

#[test]
fn older_age_lowers_probability() {
    for gender in [false, true] {
        for health in [false, true] {
            let younger = predict(false, gender, health).probability;
            let older = predict(true, gender, health).probability;
            assert!(older < younger);
        }
    }
}

#[test]
fn female_lowers_probability() {
    for age in [false, true] {
        for health in [false, true] {
            let male = predict(age, false, health).probability;
            let female = predict(age, true, health).probability;
            assert!(female < male);
        }
    }
}

#[test]
fn good_health_raises_probability() {
    for age in [false, true] {
        for gender in [false, true] {
            let not_good = predict(age, gender, false).probability;
            let good = predict(age, gender, true).probability;
            assert!(good > not_good);
        }
    }
}

proptest! {
    #[test]
    fn sigmoid_is_strictly_increasing(x in -5.0f64..5.0, dx in 1e-6f64..1.0) {
        prop_assert!(sigmoid(x + dx) > sigmoid(x));
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval(x in -5.0f64..5.2) {
        let p = sigmoid(x);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn tier_never_drops_as_probability_rises(p in 0.0f64..1.0, dp in 0.0f64..1.0) {
        let q = (p + dp).min(1.0);
        prop_assert!(Tier::from_probability(q) >= Tier::from_probability(p));
    }
}
