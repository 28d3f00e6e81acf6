// src/network.rs

use crate::common::ConfigError;
use crate::stages::{self, ButterflyUnit};
use crate::twiddle;
use crate::types::TwiddleCoefficient;
use alloc::vec::Vec;

/// The materialized units of one stage, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagePlan {
    pub stage: usize,
    pub units: Vec<ButterflyUnit>,
}

/// Complete structural description of a size-`n` network: the coefficient
/// table plus every stage's units, ordered 1..=log2(n).
///
/// Stage boundary `s - 1` feeds stage `s`; boundary 0 carries the untouched
/// input and boundary log2(n) is the transform output (real and imaginary
/// planes separately). The plan is immutable once assembled and
/// self-contained: an emitter only substitutes identifiers and widths.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkPlan {
    size: usize,
    twiddles: Vec<TwiddleCoefficient>,
    stages: Vec<StagePlan>,
}

impl NetworkPlan {
    /// Assembles the full plan for a size-`n` network.
    ///
    /// Validation happens in the two planning passes; assembly itself cannot
    /// fail on well-formed inputs.
    pub fn assemble(n: usize) -> Result<Self, ConfigError> {
        let twiddles = twiddle::table(n)?;
        let stages = stages::plan(n)?
            .map(|units| StagePlan {
                stage: units.stage(),
                units: units.collect(),
            })
            .collect();

        Ok(Self {
            size: n,
            twiddles,
            stages,
        })
    }

    /// Transform size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The N/2 rotation coefficients, indexed by twiddle index.
    pub fn twiddles(&self) -> &[TwiddleCoefficient] {
        &self.twiddles
    }

    /// The stages in pipeline order.
    pub fn stages(&self) -> &[StagePlan] {
        &self.stages
    }

    /// log2(N), which is also the index of the output boundary.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Total number of butterfly units: (N/2) * log2(N).
    pub fn unit_count(&self) -> usize {
        self.size / 2 * self.stages.len()
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
