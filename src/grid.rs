use std::io::Write;
use crate::config::Config;
use crate::error::Result;
use crate::gaussian::Gaussian;

/// Densities sampled at every integer point of a square `begin..=end` grid.
#[derive(Debug, Clone)]
pub struct Grid {
    begin: i32,
    end: i32,
    gaussian: Gaussian,
    // rows[i][j] is the density at (begin + i, begin + j)
    rows: Vec<Vec<f64>>,
}

impl Grid {
    pub fn evaluate(config: &Config) -> Result<Grid> {
        config.validate()?;
        let gaussian = Gaussian::new(config.sigma)?;

        let mut rows = Vec::with_capacity((config.end - config.begin + 1) as usize);
        for x in config.begin..=config.end {
            let row: Vec<f64> = (config.begin..=config.end)
                .map(|y| gaussian.density(x as f64, y as f64))
                .collect();
            trace!("row x={}: {:?}", x, row);
            rows.push(row);
        }

        debug!("Evaluated {}x{} grid with sigma {}", rows.len(), rows.len(), config.sigma);

        Ok(Grid {
            begin: config.begin,
            end: config.end,
            gaussian,
            rows,
        })
    }

    /// Number of points along each axis.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn sigma(&self) -> f64 {
        self.gaussian.sigma()
    }

    pub fn value_at(&self, x: i32, y: i32) -> Option<f64> {
        if x < self.begin || x > self.end || y < self.begin || y > self.end {
            return None;
        }
        let i = (x - self.begin) as usize;
        let j = (y - self.begin) as usize;
        Some(self.rows[i][j])
    }

    /// One value per line; each row is followed by a blank line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for row in &self.rows {
            for value in row {
                writeln!(out, "{}", value)?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Evaluate the grid described by `config` and write it to `out`.
pub fn run<W: Write>(config: &Config, mut out: W) -> Result<()> {
    let grid = Grid::evaluate(config)?;
    grid.write_to(&mut out)
}
