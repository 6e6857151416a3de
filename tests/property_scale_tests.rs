use bar_chart_rs::core::{BandScale, Datum, LinearScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (1024.0, 0.0));

        let px = scale.apply(value);
        let recovered = scale.invert(px);

        prop_assert!((recovered - value).abs() <= 1e-6);
    }

    #[test]
    fn linear_ticks_are_sorted_and_inside_domain(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        count in 2usize..20
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (500.0, 0.0));
        let ticks = scale.ticks(count);
        let tolerance = 1e-9 * (domain_start.abs().max(domain_end.abs()) + 1.0);

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(ticks.iter().all(|tick|
            *tick >= domain_start - tolerance && *tick <= domain_end + tolerance
        ));
    }

    #[test]
    fn tiny_domains_produce_bounded_finite_ticks(
        exponent in -323i32..-3,
        mantissa in 1.0f64..10.0,
        count in 1usize..20
    ) {
        let domain_end = mantissa * 10f64.powi(exponent);
        let scale = LinearScale::new((0.0, domain_end), (375.0, 10.0));
        let ticks = scale.ticks(count);

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.len() <= 1_001);
        prop_assert!(ticks.iter().all(|tick| tick.is_finite()));
        prop_assert!(ticks.iter().all(|tick| *tick >= 0.0 && *tick <= domain_end * 1.5));
        prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn band_scale_bands_fit_inside_range(
        count in 1usize..60,
        width in 50.0f64..2_000.0
    ) {
        let keys = (0..count).map(|i| Datum::from(format!("label-{i}")).key());
        let scale = BandScale::new(keys, (0.0, width));

        prop_assert_eq!(scale.domain().len(), count);
        prop_assert!(scale.band_width() <= scale.step());

        let positions: Vec<f64> = scale
            .domain()
            .iter()
            .map(|label| scale.position(label).unwrap_or(f64::NAN))
            .collect();
        prop_assert!(positions.iter().all(|x| *x >= 0.0));
        prop_assert!(positions.windows(2).all(|pair| pair[0] <= pair[1]));

        let last_end = positions[count - 1] + scale.band_width();
        prop_assert!(last_end <= width + 1.0);
    }
}
