//! Assembler errors

use ic10_spec::Ic10Error;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Unknown mnemonic, operand count mismatch or unencodable constant
    #[error("Error at line {line}: {source}")]
    Instruction {
        line: usize,
        #[source]
        source: Ic10Error,
    },
}

impl AssemblerError {
    /// 1-based source line of the error
    pub fn line(&self) -> usize {
        match self {
            AssemblerError::Syntax { line, .. } | AssemblerError::Instruction { line, .. } => *line,
        }
    }

    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        AssemblerError::Syntax {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
