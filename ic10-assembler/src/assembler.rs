//! Main assembler logic

use crate::error::Result;
use crate::parser::parse_line;
use ic10_spec::Instruction;
use tracing::{debug, trace};

/// Assemble source code into a list of instructions
///
/// Blank lines and `#` comments are skipped. The first error stops assembly.
pub fn assemble(source: &str) -> Result<Vec<Instruction>> {
    let mut instructions = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        match parse_line(text, line) {
            Ok(Some(instr)) => {
                trace!(line, %instr, "assembled");
                instructions.push(instr);
            }
            Ok(None) => {}
            Err(e) => {
                debug!(line, error = %e, "assembly failed");
                return Err(e);
            }
        }
    }

    Ok(instructions)
}
