//! # Lexer for IC10 instruction lines

use logos::Logos;

/// Tokens of a single instruction line
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (instruction mnemonics)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Decimal or floating-point number
    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    /// Hexadecimal number (`$FF`)
    #[regex(r"\$[0-9a-fA-F_]+", |lex| parse_radix(&lex.slice()[1..], 16))]
    Hex(u64),

    /// Binary number (`%1010`)
    #[regex(r"%[01_]+", |lex| parse_radix(&lex.slice()[1..], 2))]
    Binary(u64),

    /// Not-a-number literal
    #[token("NaN")]
    #[token("nan")]
    Nan,

    /// Infinity literal
    #[token("inf", |_| f64::INFINITY)]
    #[token("-inf", |_| f64::NEG_INFINITY)]
    Infinity(f64),

    /// `HASH("…")` constant macro
    #[regex(r#"HASH\("[^"\n]*"\)"#, |lex| macro_argument(lex.slice(), "HASH"))]
    Hash(String),

    /// `STR("…")` constant macro
    #[regex(r#"STR\("[^"\n]*"\)"#, |lex| macro_argument(lex.slice(), "STR"))]
    Str(String),
}

fn parse_radix(digits: &str, radix: u32) -> Option<u64> {
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    u64::from_str_radix(&digits, radix).ok()
}

/// Text between `NAME("` and `")`
fn macro_argument(slice: &str, name: &str) -> String {
    slice[name.len() + 2..slice.len() - 2].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_numbers() {
        let mut lex = Token::lexer("42 -10 1.5 -2.5e3 $1A %1010");
        assert_eq!(lex.next(), Some(Ok(Token::Number(42.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(-10.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(1.5))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(-2500.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Hex(0x1A))));
        assert_eq!(lex.next(), Some(Ok(Token::Binary(0b1010))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_digit_separators() {
        let mut lex = Token::lexer("$FF_FF %1111_0000");
        assert_eq!(lex.next(), Some(Ok(Token::Hex(0xFFFF))));
        assert_eq!(lex.next(), Some(Ok(Token::Binary(0xF0))));
    }

    #[test]
    fn test_lexer_special_values() {
        let mut lex = Token::lexer("NaN nan inf -inf info");
        assert_eq!(lex.next(), Some(Ok(Token::Nan)));
        assert_eq!(lex.next(), Some(Ok(Token::Nan)));
        assert_eq!(lex.next(), Some(Ok(Token::Infinity(f64::INFINITY))));
        assert_eq!(lex.next(), Some(Ok(Token::Infinity(f64::NEG_INFINITY))));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("info".to_string()))));
    }

    #[test]
    fn test_lexer_macros() {
        let mut lex = Token::lexer(r#"HASH("StructureBattery") STR("Hello")"#);
        assert_eq!(
            lex.next(),
            Some(Ok(Token::Hash("StructureBattery".to_string())))
        );
        assert_eq!(lex.next(), Some(Ok(Token::Str("Hello".to_string()))));
    }

    #[test]
    fn test_lexer_instruction() {
        let mut lex = Token::lexer("ext 65280 8 8 # middle byte");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("ext".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(65280.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(8.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(8.0))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_rejects_stray_characters() {
        let mut lex = Token::lexer("add 1 @");
        lex.next();
        lex.next();
        assert_eq!(lex.next(), Some(Err(())));
    }
}
