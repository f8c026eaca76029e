use gaussian_grid::{gaussian, Gaussian};
use proptest::prelude::*;
use std::f64::consts::PI;

proptest! {
    #[test]
    fn density_is_positive(x in -4.0f64..4.0, y in -4.0f64..4.0, sigma in 0.5f64..10.0) {
        prop_assert!(gaussian(x, y, sigma).unwrap() > 0.0);
    }

    #[test]
    fn density_is_radially_symmetric(x in -5.0f64..5.0, y in -5.0f64..5.0, sigma in 0.1f64..10.0) {
        let d = gaussian(x, y, sigma).unwrap();
        prop_assert_eq!(d, gaussian(-x, -y, sigma).unwrap());
        prop_assert_eq!(d, gaussian(y, x, sigma).unwrap());
    }

    #[test]
    fn origin_is_the_peak(x in -5.0f64..5.0, y in -5.0f64..5.0, sigma in 0.1f64..10.0) {
        let g = Gaussian::new(sigma).unwrap();
        let peak = 1.0 / (2.0 * PI * sigma * sigma);
        prop_assert!((g.peak() - peak).abs() <= peak * 1e-12);
        prop_assert!(g.density(x, y) <= g.peak());
        prop_assert!(g.relative(x, y) <= 1.0);
    }

    #[test]
    fn non_positive_sigma_is_rejected(sigma in -10.0f64..=0.0) {
        prop_assert!(gaussian(0.0, 0.0, sigma).is_err());
    }
}
