use std::f64::consts::PI;
use crate::error::{Error, Result};

/// Isotropic two-dimensional normal density with zero mean.
///
/// `sigma` is the standard deviation along each axis, so the variance
/// is `sigma²` in both x and y.
pub fn gaussian(x: f64, y: f64, sigma: f64) -> Result<f64> {
    Ok(Gaussian::new(sigma)?.density(x, y))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    sigma: f64,
}

impl Gaussian {
    /// Sigma must be finite and strictly positive.
    pub fn new(sigma: f64) -> Result<Gaussian> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidSigma(sigma));
        }
        Ok(Gaussian { sigma })
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn density(&self, x: f64, y: f64) -> f64 {
        let ss: f64 = self.sigma.powi(2);
        let normalizer: f64 = 2.0 * PI * ss;
        let exponent: f64 = (x.powi(2) + y.powi(2)) / (2.0 * ss);

        (-exponent).exp() / normalizer
    }

    /// Value at the origin, 1 / (2·π·sigma²).
    pub fn peak(&self) -> f64 {
        self.density(0.0, 0.0)
    }

    /// Density scaled so the peak is 1.0
    pub fn relative(&self, x: f64, y: f64) -> f64 {
        self.density(x, y) / self.peak()
    }
}
