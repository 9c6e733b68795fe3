//! Simulation engine composition for tick advancement and collision resolution.
//! This file wires focused engine submodules together.

use super::*;

mod advance;
mod collisions;

#[cfg(test)]
mod tests;
