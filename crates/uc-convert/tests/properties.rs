//! Property tests over every unit table.

use proptest::prelude::*;
use uc_convert::{
    CanonicalQuantity, Domain, TABLES, TempScale, UnitTable, convert, convert_temperature,
};
use uc_core::{Tolerances, nearly_equal};

/// A table plus three unit indices into it.
fn table_and_units() -> impl Strategy<Value = (&'static UnitTable, usize, usize, usize)> {
    (0..TABLES.len()).prop_flat_map(|i| {
        let table = TABLES[i];
        let n = table.len();
        (Just(table), 0..n, 0..n, 0..n)
    })
}

fn code(table: &UnitTable, i: usize) -> &'static str {
    table.entries()[i].0
}

proptest! {
    #[test]
    fn same_unit_is_identity(
        (table, a, _, _) in table_and_units(),
        v in -1.0e9_f64..1.0e9,
    ) {
        let u = code(table, a);
        let out = convert(table.domain(), v, u, u).unwrap();
        prop_assert!(nearly_equal(out, v, Tolerances::ROUND_TRIP), "{u}: {v} -> {out}");
    }

    #[test]
    fn round_trip_returns_original(
        (table, a, b, _) in table_and_units(),
        v in -1.0e9_f64..1.0e9,
    ) {
        let (ua, ub) = (code(table, a), code(table, b));
        let there = convert(table.domain(), v, ua, ub).unwrap();
        let back = convert(table.domain(), there, ub, ua).unwrap();
        prop_assert!(nearly_equal(back, v, Tolerances::ROUND_TRIP), "{ua}->{ub}->{ua}: {v} -> {back}");
    }

    #[test]
    fn conversion_composes_through_any_unit(
        (table, a, b, c) in table_and_units(),
        v in -1.0e6_f64..1.0e6,
    ) {
        let (ua, ub, uc) = (code(table, a), code(table, b), code(table, c));
        let domain = table.domain();
        let direct = convert(domain, v, ua, uc).unwrap();
        let via = convert(domain, convert(domain, v, ua, ub).unwrap(), ub, uc).unwrap();
        prop_assert!(nearly_equal(direct, via, Tolerances::ROUND_TRIP), "{direct} vs {via}");
    }

    #[test]
    fn unknown_unit_always_fails(
        (table, a, _, _) in table_and_units(),
        bogus in "[a-z]{1,6}[0-9]?",
        v in any::<f64>(),
    ) {
        prop_assume!(!table.contains(&bogus));
        let known = code(table, a);
        let domain = table.domain();

        let err = convert(domain, v, known, &bogus).unwrap_err();
        prop_assert_eq!(err.unknown_units(), [bogus.clone()]);
        let err = convert(domain, v, &bogus, known).unwrap_err();
        prop_assert_eq!(err.unknown_units(), [bogus.clone()]);
    }

    #[test]
    fn uppercase_codes_match_lowercase(
        (table, a, b, _) in table_and_units(),
        v in -1.0e6_f64..1.0e6,
    ) {
        let (ua, ub) = (code(table, a), code(table, b));
        let domain = table.domain();
        prop_assert_eq!(
            convert(domain, v, &ua.to_uppercase(), &ub.to_uppercase()).unwrap(),
            convert(domain, v, ua, ub).unwrap()
        );
    }

    #[test]
    fn canonical_quantity_matches_table(
        (table, a, _, _) in table_and_units(),
        v in -1.0e6_f64..1.0e6,
    ) {
        let u = code(table, a);
        let q = CanonicalQuantity::from_value(table.domain(), v, u).unwrap();
        prop_assert_eq!(q.domain(), table.domain());
        let canonical = table.to_canonical(v, u).unwrap();
        // uom stores mass in kilograms; the mass table is in grams.
        let expected_si = if table.domain() == Domain::Mass { canonical / 1000.0 } else { canonical };
        prop_assert!(nearly_equal(q.si_value(), expected_si, Tolerances::ROUND_TRIP));
    }

    #[test]
    fn temperature_round_trips(v in -500.0_f64..5000.0, from in 0usize..3, to in 0usize..3) {
        prop_assume!(from != to);
        let (a, b) = (TempScale::ALL[from].code(), TempScale::ALL[to].code());
        let there = convert_temperature(v, a, b).unwrap();
        let back = convert_temperature(there, b, a).unwrap();
        prop_assert!(nearly_equal(back, v, Tolerances::ROUND_TRIP), "{a}->{b}->{a}: {v} -> {back}");
    }

    #[test]
    fn temperature_paths_agree(v in -500.0_f64..5000.0) {
        let direct = convert_temperature(v, "C", "F").unwrap();
        let via_kelvin = convert_temperature(convert_temperature(v, "C", "K").unwrap(), "K", "F").unwrap();
        prop_assert!(nearly_equal(direct, via_kelvin, Tolerances::ROUND_TRIP));
    }
}
