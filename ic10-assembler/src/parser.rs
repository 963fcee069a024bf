//! Instruction line parser

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;
use ic10_spec::{hash_string, pack_ascii6, Instruction, Opcode, MAX_OPERANDS};
use logos::Logos;

/// Parse a single instruction from assembly text
///
/// Errors report line 1.
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    parse_line(text, 1)?.ok_or_else(|| AssemblerError::syntax(1, "Empty instruction"))
}

/// Parse one source line; `None` for blank and comment-only lines
pub(crate) fn parse_line(text: &str, line: usize) -> Result<Option<Instruction>> {
    let mut lexer = Token::lexer(text);

    let mnemonic = match lexer.next() {
        None => return Ok(None),
        Some(Ok(Token::Identifier(name))) => name,
        Some(Ok(token)) => {
            return Err(AssemblerError::syntax(
                line,
                format!("Expected mnemonic, found {:?}", token),
            ))
        }
        Some(Err(())) => {
            return Err(AssemblerError::syntax(
                line,
                format!("Unexpected input: {}", lexer.slice()),
            ))
        }
    };

    let opcode: Opcode = mnemonic
        .parse()
        .map_err(|source| AssemblerError::Instruction { line, source })?;

    let mut operands = Vec::with_capacity(MAX_OPERANDS);
    while let Some(token) = lexer.next() {
        let token = token.map_err(|()| {
            AssemblerError::syntax(line, format!("Unexpected input: {}", lexer.slice()))
        })?;
        operands.push(operand_value(token, line)?);
    }

    Instruction::new(opcode, &operands)
        .map(Some)
        .map_err(|source| AssemblerError::Instruction { line, source })
}

/// Resolve an operand token to its register value
fn operand_value(token: Token, line: usize) -> Result<f64> {
    match token {
        Token::Number(value) | Token::Infinity(value) => Ok(value),
        Token::Hex(value) | Token::Binary(value) => Ok(value as f64),
        Token::Nan => Ok(f64::NAN),
        Token::Hash(text) => Ok(hash_string(&text) as f64),
        Token::Str(text) => {
            pack_ascii6(&text).map_err(|source| AssemblerError::Instruction { line, source })
        }
        Token::Identifier(name) => Err(AssemblerError::syntax(
            line,
            format!("Expected constant operand, found '{}'", name),
        )),
    }
}
