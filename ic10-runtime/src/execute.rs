//! Instruction execution
//!
//! Maps each opcode to its implementing function. Operand order follows the
//! in-game syntax with the destination register dropped; `ins` carries the
//! destination's current value as its first operand.

use crate::random::Random;
use crate::{bitwise, comparison, math};
use ic10_spec::{Instruction, Opcode, Result};

/// Execute a single instruction and return the value for its destination
/// register.
///
/// `rand` draws from `generator` when one is given and falls back to the
/// thread RNG otherwise. Only bitwise instructions can fail.
pub fn execute(instr: &Instruction, generator: Option<&mut Random>) -> Result<f64> {
    let a = instr.operand(0);
    let b = instr.operand(1);
    let c = instr.operand(2);
    let d = instr.operand(3);

    let value = match instr.opcode() {
        // ========== Bitwise ==========
        Opcode::Sll => bitwise::sll(a, b)?,
        Opcode::Sla => bitwise::sla(a, b)?,
        Opcode::Srl => bitwise::srl(a, b)?,
        Opcode::Sra => bitwise::sra(a, b)?,
        Opcode::And => bitwise::and(a, b)?,
        Opcode::Or => bitwise::or(a, b)?,
        Opcode::Xor => bitwise::xor(a, b)?,
        Opcode::Nor => bitwise::nor(a, b)?,
        Opcode::Not => bitwise::not(a)?,
        Opcode::Ext => bitwise::ext(a, b, c)?,
        Opcode::Ins => bitwise::ins(a, b, c, d)?,

        // ========== Math ==========
        Opcode::Abs => math::abs(a),
        Opcode::Add => math::add(a, b),
        Opcode::Sub => math::sub(a, b),
        Opcode::Mul => math::mul(a, b),
        Opcode::Div => math::div(a, b),
        Opcode::Mod => math::r#mod(a, b),
        Opcode::Pow => math::pow(a, b),
        Opcode::Sqrt => math::sqrt(a),
        Opcode::Log => math::log(a),
        Opcode::Exp => math::exp(a),
        Opcode::Min => math::min(a, b),
        Opcode::Max => math::max(a, b),
        Opcode::Lerp => math::lerp(a, b, c),
        Opcode::Move => math::r#move(a),

        // ========== Trigonometry ==========
        Opcode::Sin => math::sin(a),
        Opcode::Cos => math::cos(a),
        Opcode::Tan => math::tan(a),
        Opcode::Asin => math::asin(a),
        Opcode::Acos => math::acos(a),
        Opcode::Atan => math::atan(a),
        Opcode::Atan2 => math::atan2(a, b),

        // ========== Rounding ==========
        Opcode::Ceil => math::ceil(a),
        Opcode::Floor => math::floor(a),
        Opcode::Round => math::round(a),
        Opcode::Trunc => math::trunc(a),

        // ========== Comparison ==========
        Opcode::Seq => comparison::seq(a, b),
        Opcode::Sne => comparison::sne(a, b),
        Opcode::Slt => comparison::slt(a, b),
        Opcode::Sle => comparison::sle(a, b),
        Opcode::Sgt => comparison::sgt(a, b),
        Opcode::Sge => comparison::sge(a, b),
        Opcode::Seqz => comparison::seqz(a),
        Opcode::Snez => comparison::snez(a),
        Opcode::Sltz => comparison::sltz(a),
        Opcode::Slez => comparison::slez(a),
        Opcode::Sgtz => comparison::sgtz(a),
        Opcode::Sgez => comparison::sgez(a),
        Opcode::Sap => comparison::sap(a, b, c),
        Opcode::Sapz => comparison::sapz(a, b),
        Opcode::Sna => comparison::sna(a, b, c),
        Opcode::Snaz => comparison::snaz(a, b),
        Opcode::Snan => comparison::snan(a),
        Opcode::Snanz => comparison::snanz(a),
        Opcode::Select => comparison::select(a, b, c),

        // ========== Random ==========
        Opcode::Rand => match generator {
            Some(random) => random.next_fraction(),
            None => rand::random::<f64>(),
        },
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic10_spec::Ic10Error;

    fn exec(opcode: Opcode, operands: &[f64]) -> Result<f64> {
        execute(&Instruction::new(opcode, operands).unwrap(), None)
    }

    #[test]
    fn test_bitwise_dispatch() {
        assert_eq!(exec(Opcode::Sll, &[1.0, 4.0]), Ok(16.0));
        assert_eq!(exec(Opcode::Srl, &[-1.0, 53.0]), Ok(1.0));
        assert_eq!(exec(Opcode::Nor, &[0.0, 0.0]), Ok(-1.0));
        assert_eq!(exec(Opcode::Not, &[5.0]), Ok(-6.0));
        assert_eq!(exec(Opcode::Ext, &[65280.0, 8.0, 8.0]), Ok(255.0));
        assert_eq!(exec(Opcode::Ins, &[0.0, 8.0, 8.0, 255.0]), Ok(65280.0));
    }

    #[test]
    fn test_bitwise_faults_propagate() {
        assert_eq!(
            exec(Opcode::And, &[f64::INFINITY, 1.0]),
            Err(Ic10Error::NotFinite(f64::INFINITY))
        );
        assert_eq!(
            exec(Opcode::Ext, &[1.0, 50.0, 4.0]),
            Err(Ic10Error::InvalidField { start: 50, len: 4 })
        );
    }

    #[test]
    fn test_math_dispatch() {
        assert_eq!(exec(Opcode::Add, &[2.0, 3.0]), Ok(5.0));
        assert_eq!(exec(Opcode::Mod, &[-7.0, 3.0]), Ok(2.0));
        assert_eq!(exec(Opcode::Lerp, &[0.0, 10.0, 0.5]), Ok(5.0));
        assert_eq!(exec(Opcode::Round, &[2.5]), Ok(2.0));
        assert_eq!(exec(Opcode::Atan2, &[0.0, 1.0]), Ok(0.0));
        assert_eq!(exec(Opcode::Move, &[f64::INFINITY]), Ok(f64::INFINITY));
    }

    #[test]
    fn test_comparison_dispatch() {
        assert_eq!(exec(Opcode::Slt, &[1.0, 2.0]), Ok(1.0));
        assert_eq!(exec(Opcode::Sap, &[100.0, 101.0, 0.01]), Ok(1.0));
        assert_eq!(exec(Opcode::Snan, &[f64::NAN]), Ok(1.0));
        assert_eq!(exec(Opcode::Select, &[0.0, 1.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn test_rand_with_generator() {
        let instr = Instruction::new(Opcode::Rand, &[]).unwrap();
        let mut random = Random::new(0.0);
        assert_eq!(
            execute(&instr, Some(&mut random)),
            Ok(1559595546.0 / 2147483647.0)
        );
        assert_eq!(random.times_sampled(), 1);
    }

    #[test]
    fn test_rand_without_generator() {
        let x = exec(Opcode::Rand, &[]).unwrap();
        assert!((0.0..1.0).contains(&x));
    }

    #[test]
    fn test_every_opcode_dispatches() {
        for opcode in Opcode::ALL {
            let operands = vec![1.0; opcode.arity()];
            assert!(exec(opcode, &operands).is_ok(), "{} failed", opcode);
        }
    }
}
