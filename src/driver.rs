//! # Randomized exercising of a sparse vector
//!
//! Applies a long sequence of random operations to a single vector of floating point numbers and
//! writes a line for each of them: the operation, its arguments and result, and the state of the
//! vector afterwards. The output is meant for inspection, not for automated checking.
use std::io::{self, Write};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::data::linear_algebra::vector::SparseVector;
use crate::error::VectorError;

/// Settings of a `RandomDriver`.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Dimension of all vectors that are created.
    pub dimension: usize,
    /// Fraction of the components that are set when a random vector is created.
    pub density: f64,
    /// Number of operations to perform.
    pub calls: usize,
    /// Distance between consecutive values that can be drawn.
    pub step: f64,
    /// Seed of the random number generator, drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            dimension: 100,
            density: 0.1,
            calls: 10_101,
            step: 2.5,
            seed: None,
        }
    }
}

impl DriverConfig {
    /// Check that a driver can be run with these settings.
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.dimension < 2 {
            return Err(DriverError::Dimension(self.dimension));
        }
        if !(self.density > 0_f64 && self.density <= 1_f64) {
            return Err(DriverError::Density(self.density));
        }
        if !(self.step > 0_f64 && self.step.is_finite()) {
            return Err(DriverError::Step(self.step));
        }

        Ok(())
    }

    /// Number of `set` calls used to create a random vector.
    fn sets_per_vector(&self) -> usize {
        (self.dimension as f64 * self.density) as usize
    }

    /// Size of the table of values to draw from.
    fn value_count(&self) -> usize {
        ((self.dimension as f64 * self.density * 2_f64) as usize).max(1)
    }
}

/// Anything that can go wrong while driving.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The vectors need room for at least one index that can be drawn.
    #[error("the dimension should be at least 2, got {0}")]
    Dimension(usize),
    /// The density is not a fraction.
    #[error("the density should be larger than 0 and at most 1, got {0}")]
    Density(f64),
    /// The value step is not a positive number.
    #[error("the value step should be positive, got {0}")]
    Step(f64),
    /// An operation on the vector was rejected.
    #[error(transparent)]
    Vector(#[from] VectorError),
    /// Writing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Operation {
    Set,
    Dim,
    Get,
    Sum,
    ScalarProd,
    DotProd,
    Els,
    Sym,
}

const OPERATIONS: [Operation; 8] = [
    Operation::Set,
    Operation::Dim,
    Operation::Get,
    Operation::Sum,
    Operation::ScalarProd,
    Operation::DotProd,
    Operation::Els,
    Operation::Sym,
];

/// Performs random operations on a vector.
pub struct RandomDriver {
    config: DriverConfig,
    rng: StdRng,
    values: Vec<f64>,
    vector: SparseVector<f64>,
}

impl RandomDriver {
    /// Create a driver and the random vector it starts with.
    ///
    /// # Errors
    ///
    /// If the configuration doesn't validate.
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        info!("Using seed {}", seed);

        let values = (0..config.value_count())
            .map(|k| k as f64 * config.step)
            .collect();

        let mut driver = Self {
            rng: StdRng::seed_from_u64(seed),
            values,
            vector: SparseVector::zeros(config.dimension),
            config,
        };
        driver.vector = driver.random_vector();

        Ok(driver)
    }

    /// The vector that is operated on.
    pub fn vector(&self) -> &SparseVector<f64> {
        &self.vector
    }

    /// Perform all configured calls, writing one line per call.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), DriverError> {
        info!(
            "Performing {} calls on a vector of dimension {}",
            self.config.calls, self.config.dimension,
        );

        for _ in 0..self.config.calls {
            self.step(out)?;
        }

        debug!("Finished with {} stored values", self.vector.els());
        Ok(())
    }

    /// Perform a single random operation, writing one line.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<(), DriverError> {
        let operation = OPERATIONS[self.rng.gen_range(0..OPERATIONS.len())];

        let description = match operation {
            Operation::Set => {
                let i = self.random_index();
                let value = self.random_value();
                self.vector.set(i, value);
                format!("set({},{})", i, value)
            },
            Operation::Dim => format!("dim {}", self.vector.dim()),
            Operation::Get => {
                let i = self.random_index();
                format!("get({}) = {}", i, self.vector.get(i))
            },
            Operation::Sum => {
                let other = self.random_vector();
                self.vector.sum(&other)?;
                format!("sum({})", other)
            },
            Operation::ScalarProd => {
                // Small factors, to keep the values where the field properties still hold
                let factor = self.rng.gen_range(0..4) as f64;
                self.vector.scalar_prod(&factor);
                format!("scalarProd({})", factor)
            },
            Operation::DotProd => {
                let other = self.random_vector();
                let result = self.vector.dot_prod(&other)?;
                format!("dotProd({}) = {}", other, result)
            },
            Operation::Els => format!("els {}", self.vector.els()),
            Operation::Sym => {
                self.vector.sym();
                "sym".to_string()
            },
        };

        writeln!(out, "{} {}", description, self.vector)?;
        Ok(())
    }

    /// An index in `1..dimension`.
    fn random_index(&mut self) -> usize {
        self.rng.gen_range(1..self.config.dimension)
    }

    fn random_value(&mut self) -> f64 {
        self.values[self.rng.gen_range(0..self.values.len())]
    }

    fn random_vector(&mut self) -> SparseVector<f64> {
        let mut vector = SparseVector::zeros(self.config.dimension);
        for _ in 0..self.config.sets_per_vector() {
            let value = self.random_value();
            let i = self.random_index();
            vector.set(i, value);
        }

        vector
    }
}
