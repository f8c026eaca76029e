
use std::fmt;
use crate::error::{Error, Result};

#[inline] fn default_sigma() -> f64 { 1.0 }
#[inline] fn default_begin() -> i32 { -1 }
#[inline] fn default_end() -> i32 { 1 }

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// First coordinate on each axis
    #[serde(default = "default_begin")]
    pub begin: i32,
    /// Last coordinate on each axis (inclusive)
    #[serde(default = "default_end")]
    pub end: i32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sigma: default_sigma(),
            begin: default_begin(),
            end: default_end(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(Error::InvalidSigma(self.sigma));
        }
        if self.begin > self.end {
            return Err(Error::EmptyRange { begin: self.begin, end: self.end });
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    sigma: {}", self.sigma)?;
        writeln!(f, "    range: {} ..= {}", self.begin, self.end)?;
        Ok(())
    }
}
