//! IC10 Assembler
//!
//! Assemble IC10 instruction lines into [`Instruction`](ic10_spec::Instruction)
//! values. Operands are constants: numbers, `$hex`, `%binary`, `NaN`,
//! `inf`, and the `HASH("…")` / `STR("…")` macros.
//!
//! ## Example
//!
//! ```rust
//! use ic10_assembler::assemble;
//!
//! let source = r#"
//!     sll 1 4     # 16
//!     ext $FF00 8 8
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.len(), 2);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::assemble;
pub use parser::parse_instruction;
