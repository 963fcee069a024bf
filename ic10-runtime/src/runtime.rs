//! Runtime for IC10 instruction streams

use crate::execute::execute;
use crate::random::{Random, SeedContext};
use ic10_spec::Instruction;
use tracing::debug;

/// Runtime configuration
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Seed of the `rand` stream
    ///
    /// `None` seeds the generator from the runtime's [`SeedContext`].
    pub seed: Option<f64>,

    /// Record every step in the step log
    pub trace: bool,
}

impl RuntimeConfig {
    /// Configuration with a reproducible `rand` stream
    pub fn seeded(seed: f64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// One executed instruction and its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub instruction: Instruction,

    /// Value written to the destination, `None` if the instruction was
    /// rejected
    pub result: Option<f64>,
}

/// Executes instructions one at a time against its own random generator.
///
/// Rejected instructions are silent no-ops: they yield no value and leave
/// the destination untouched.
pub struct Runtime {
    config: RuntimeConfig,

    generator: Random,

    /// Instructions executed, rejected ones included
    executed: u64,

    /// Instructions rejected with an operand fault
    faults: u64,

    /// Step log (if tracing enabled)
    steps: Vec<StepRecord>,
}

impl Runtime {
    /// Create a runtime with a private seed context
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_context(config, &mut SeedContext::new())
    }

    /// Create a runtime, drawing its generator seed from `context` unless the
    /// configuration fixes one
    pub fn with_context(config: RuntimeConfig, context: &mut SeedContext) -> Self {
        let generator = match config.seed {
            Some(seed) => Random::new(seed),
            None => Random::from_context(context),
        };

        Self {
            config,
            generator,
            executed: 0,
            faults: 0,
            steps: Vec::new(),
        }
    }

    /// Execute one instruction
    pub fn step(&mut self, instr: &Instruction) -> Option<f64> {
        self.executed += 1;

        let result = match execute(instr, Some(&mut self.generator)) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(opcode = %instr.opcode(), error = %err, "instruction rejected");
                self.faults += 1;
                None
            }
        };

        if self.config.trace {
            self.steps.push(StepRecord {
                instruction: *instr,
                result,
            });
        }

        result
    }

    /// Execute every instruction in order
    pub fn run(&mut self, program: &[Instruction]) -> Vec<Option<f64>> {
        program.iter().map(|instr| self.step(instr)).collect()
    }

    pub fn executed(&self) -> u64 {
        self.executed
    }

    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// Step log; empty unless tracing is enabled
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Generator behind `rand`
    pub fn generator(&self) -> &Random {
        &self.generator
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic10_spec::Opcode;

    fn instr(opcode: Opcode, operands: &[f64]) -> Instruction {
        Instruction::new(opcode, operands).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = RuntimeConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.trace);
    }

    #[test]
    fn test_step() {
        let mut runtime = Runtime::new(RuntimeConfig::default());
        assert_eq!(runtime.step(&instr(Opcode::Add, &[1.0, 2.0])), Some(3.0));
        assert_eq!(runtime.executed(), 1);
        assert_eq!(runtime.faults(), 0);
        assert!(runtime.steps().is_empty());
    }

    #[test]
    fn test_rejected_step_is_noop() {
        let mut runtime = Runtime::new(RuntimeConfig::default());
        assert_eq!(runtime.step(&instr(Opcode::Not, &[f64::INFINITY])), None);
        assert_eq!(runtime.step(&instr(Opcode::Ext, &[1.0, 0.0, 54.0])), None);
        assert_eq!(runtime.executed(), 2);
        assert_eq!(runtime.faults(), 2);
    }

    #[test]
    fn test_seeded_rand() {
        let mut runtime = Runtime::new(RuntimeConfig::seeded(42.0));
        let rand = instr(Opcode::Rand, &[]);
        assert_eq!(runtime.step(&rand), Some(1434747710.0 / 2147483647.0));
        assert_eq!(runtime.step(&rand), Some(302596119.0 / 2147483647.0));
        assert_eq!(runtime.generator().seed(), 42);
        assert_eq!(runtime.generator().times_sampled(), 2);
    }

    #[test]
    fn test_context_seeds_generator() {
        let mut context = SeedContext::seeded(42.0);
        let runtime = Runtime::with_context(RuntimeConfig::default(), &mut context);
        assert_eq!(runtime.generator().seed(), 1434747710);

        // A configured seed wins over the context
        let runtime = Runtime::with_context(RuntimeConfig::seeded(7.0), &mut context);
        assert_eq!(runtime.generator().seed(), 7);
    }

    #[test]
    fn test_trace_records_steps() {
        let config = RuntimeConfig {
            trace: true,
            ..RuntimeConfig::default()
        };
        let mut runtime = Runtime::new(config);
        let program = [
            instr(Opcode::Sll, &[1.0, 8.0]),
            instr(Opcode::And, &[f64::NEG_INFINITY, 1.0]),
        ];

        assert_eq!(runtime.run(&program), vec![Some(256.0), None]);
        assert_eq!(
            runtime.steps(),
            &[
                StepRecord {
                    instruction: program[0],
                    result: Some(256.0),
                },
                StepRecord {
                    instruction: program[1],
                    result: None,
                },
            ]
        );
    }
}
