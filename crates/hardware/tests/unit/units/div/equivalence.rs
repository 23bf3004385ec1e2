//! Cross-algorithm equivalence: restoring, non-restoring, and long
//! division must agree bit for bit on every input.

use arithsim_core::units::div::{DivRequest, LongDivider, MulticycleDiv, Sign};
use arithsim_core::{Algorithm, DivConfig};
use proptest::prelude::*;

use crate::common::harness::run_one;
use crate::common::model::divide;

fn sign_strategy() -> impl Strategy<Value = Sign> {
    prop_oneof![Just(Sign::Unsigned), Just(Sign::Signed)]
}

proptest! {
    #[test]
    fn all_engines_agree(
        width in 1..=64u32,
        n in any::<u64>(),
        d in any::<u64>(),
        sign in sign_strategy(),
    ) {
        let expected = divide(n, d, sign, width);
        let request = DivRequest { n, d, sign };

        let mut restoring = MulticycleDiv::new(
            &DivConfig::new(width).with_algorithm(Algorithm::Restoring),
        ).expect("width is in range");
        let (got, _) = run_one(&mut restoring, request);
        prop_assert_eq!((got.q, got.r), expected, "restoring, width {}", width);

        let mut non_restoring = MulticycleDiv::new(
            &DivConfig::new(width).with_algorithm(Algorithm::NonRestoring),
        ).expect("width is in range");
        let (got, _) = run_one(&mut non_restoring, request);
        prop_assert_eq!((got.q, got.r), expected, "non-restoring, width {}", width);

        let mut long = LongDivider::new(&DivConfig::new(width)).expect("width is in range");
        let (got, _) = run_one(&mut long, request);
        prop_assert_eq!((got.q, got.r), expected, "long division, width {}", width);
    }

    #[test]
    fn small_divisors_stress_the_recurrence(
        width in 2..=64u32,
        n in any::<u64>(),
        d in 1..=3u64,
        sign in sign_strategy(),
    ) {
        let expected = divide(n, d, sign, width);
        let mut core = MulticycleDiv::new(
            &DivConfig::new(width).with_algorithm(Algorithm::NonRestoring),
        ).expect("width is in range");
        let (got, _) = run_one(&mut core, DivRequest { n, d, sign });
        prop_assert_eq!((got.q, got.r), expected);
    }
}
