//! # IC10 Runtime
//!
//! Executes IC10 instructions on resolved register values.
//!
//! ## Features
//!
//! - **Bitwise engine**: shifts, logic and `ext`/`ins` bit fields over the
//!   53-bit long model
//! - **Elementary instructions**: arithmetic, trigonometry, rounding and
//!   set-on-condition
//! - **Deterministic `rand`**: a seedable generator that replays the game's
//!   random stream
//!
//! ## Example
//!
//! ```rust
//! use ic10_runtime::{Runtime, RuntimeConfig};
//! use ic10_spec::{Instruction, Opcode};
//!
//! let mut runtime = Runtime::new(RuntimeConfig::seeded(42.0));
//! let sll = Instruction::new(Opcode::Sll, &[1.0, 4.0]).unwrap();
//! assert_eq!(runtime.step(&sll), Some(16.0));
//! ```

pub mod bitwise;
pub mod math;
pub mod comparison;
pub mod random;
pub mod execute;
pub mod runtime;

pub use execute::execute;
pub use random::{Random, SeedContext, SnapshotError, MBIG};
pub use runtime::{Runtime, RuntimeConfig, StepRecord};

use ic10_spec::Instruction;

/// Simple execution helper
///
/// Runs a program with the given configuration and returns every step's
/// result.
pub fn run(program: &[Instruction], config: RuntimeConfig) -> Vec<Option<f64>> {
    Runtime::new(config).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic10_spec::Opcode;

    #[test]
    fn test_public_exports() {
        let _ = RuntimeConfig::default();
        let _ = SeedContext::new();
        let _ = Random::new(0.0);
        assert_eq!(MBIG, i32::MAX);
    }

    #[test]
    fn test_run_helper() {
        let program = vec![
            Instruction::new(Opcode::Or, &[12.0, 3.0]).unwrap(),
            Instruction::new(Opcode::Rand, &[]).unwrap(),
            Instruction::new(Opcode::Sra, &[-16.0, 2.0]).unwrap(),
        ];
        let results = run(&program, RuntimeConfig::seeded(0.0));
        assert_eq!(
            results,
            vec![Some(15.0), Some(1559595546.0 / 2147483647.0), Some(-4.0)]
        );
    }
}
