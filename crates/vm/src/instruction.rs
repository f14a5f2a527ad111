//! The standard instruction table.
//!
//! Each [`Instruction`] carries its argument [`Shape`] and its effect. An
//! effect returns a [`Flow`]: fall through to the next line, or jump.
//!
//! Binary instructions pop `b` (top) and then `a`, and compute `a op b`.

use crate::machine::{Flow, Machine};
use sala_common::{Position, SalaError, Token, TokenKind, Value};
use sala_shape::Shape;

/// Longest text, in bytes, that `add` or `mul` may produce.
pub const MAX_TEXT_LEN: usize = 16 * 1024 * 1024;

/// Every instruction the interpreter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Push,
    Print,
    Clear,
    Dup,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Jump,
    JumpEq,
    JumpNe,
    JumpLt,
    JumpGt,
}

/// All instructions, in definition order.
pub const ALL_INSTRUCTIONS: [Instruction; 14] = [
    Instruction::Push,
    Instruction::Print,
    Instruction::Clear,
    Instruction::Dup,
    Instruction::Add,
    Instruction::Sub,
    Instruction::Mul,
    Instruction::Div,
    Instruction::Mod,
    Instruction::Jump,
    Instruction::JumpEq,
    Instruction::JumpNe,
    Instruction::JumpLt,
    Instruction::JumpGt,
];

/// Jump targets are label names, written bare (`j loop`) or with the
/// label sigil (`j :loop`).
const JUMP_TARGET: [TokenKind; 2] = [TokenKind::Word, TokenKind::Label];

impl Instruction {
    /// The source name of the instruction.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Push => "push",
            Instruction::Print => "print",
            Instruction::Clear => "clear",
            Instruction::Dup => "dup",
            Instruction::Add => "add",
            Instruction::Sub => "sub",
            Instruction::Mul => "mul",
            Instruction::Div => "div",
            Instruction::Mod => "mod",
            Instruction::Jump => "j",
            Instruction::JumpEq => "jeq",
            Instruction::JumpNe => "jne",
            Instruction::JumpLt => "jlt",
            Instruction::JumpGt => "jgt",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        ALL_INSTRUCTIONS
            .iter()
            .find(|i| i.mnemonic() == name)
            .copied()
    }

    pub fn shape(self) -> Shape {
        match self {
            Instruction::Push => Shape::new().expect_any(&[TokenKind::Number, TokenKind::String]),
            Instruction::Print
            | Instruction::Clear
            | Instruction::Dup
            | Instruction::Add
            | Instruction::Sub
            | Instruction::Mul
            | Instruction::Div
            | Instruction::Mod => Shape::new(),
            Instruction::Jump
            | Instruction::JumpEq
            | Instruction::JumpNe
            | Instruction::JumpLt
            | Instruction::JumpGt => Shape::new().expect_any(&JUMP_TARGET),
        }
    }

    /// Run the instruction. Arguments have already been checked against
    /// [`Instruction::shape`].
    pub(crate) fn execute(
        self,
        machine: &mut Machine<'_>,
        head: &Token,
        args: &[Token],
    ) -> Result<Flow, SalaError> {
        let at = head.position();

        match self {
            Instruction::Push => {
                let value = parse_operand(&args[0])?;
                machine.stack.push(value);
            }
            Instruction::Print => {
                let value = machine.stack.pop(at)?;
                machine
                    .output
                    .accept(&value)
                    .map_err(|e| SalaError::Output {
                        at,
                        reason: e.to_string(),
                    })?;
            }
            Instruction::Clear => machine.stack.clear(),
            Instruction::Dup => {
                let value = machine.stack.pop(at)?;
                machine.stack.push(value.clone());
                machine.stack.push(value);
            }
            Instruction::Add => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let result = match (a, b) {
                    (Value::Text(x), Value::Text(y)) => {
                        check_text_len(x.len().checked_add(y.len()), at)?;
                        Value::Text(x + &y)
                    }
                    (a, b) => numeric(a, b, at, "addition", i64::wrapping_add, |x, y| x + y)?,
                };
                machine.stack.push(result);
            }
            Instruction::Sub => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let result = numeric(a, b, at, "subtraction", i64::wrapping_sub, |x, y| x - y)?;
                machine.stack.push(result);
            }
            Instruction::Mul => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let result = match (a, b) {
                    (Value::Text(s), Value::Int(n)) => {
                        let count =
                            usize::try_from(n).map_err(|_| SalaError::NegativeRepeat { at })?;
                        check_text_len(s.len().checked_mul(count), at)?;
                        Value::Text(s.repeat(count))
                    }
                    (a, b) => numeric(a, b, at, "multiplication", i64::wrapping_mul, |x, y| x * y)?,
                };
                machine.stack.push(result);
            }
            Instruction::Div => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let result = divide(a, b, at, "division", i64::wrapping_div, |x, y| x / y)?;
                machine.stack.push(result);
            }
            Instruction::Mod => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let result = divide(a, b, at, "modulus", i64::wrapping_rem, |x, y| x % y)?;
                machine.stack.push(result);
            }
            Instruction::Jump => {
                // Operands are consumed but never inspected.
                machine.stack.pop_pair(at)?;
                return Ok(Flow::Jump(machine.label(&args[0])?));
            }
            Instruction::JumpEq | Instruction::JumpNe => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let target = machine.label(&args[0])?;
                let equal = a == b;
                if equal == (self == Instruction::JumpEq) {
                    return Ok(Flow::Jump(target));
                }
            }
            Instruction::JumpLt => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let target = machine.label(&args[0])?;
                if compare(&a, &b, at, "less than", |x, y| x < y, |x, y| x < y)? {
                    return Ok(Flow::Jump(target));
                }
            }
            Instruction::JumpGt => {
                let (a, b) = machine.stack.pop_pair(at)?;
                let target = machine.label(&args[0])?;
                if compare(&a, &b, at, "greater than", |x, y| x > y, |x, y| x > y)? {
                    return Ok(Flow::Jump(target));
                }
            }
        }

        Ok(Flow::Next)
    }
}

/// Turn a `push` operand into a value.
fn parse_operand(token: &Token) -> Result<Value, SalaError> {
    match token.kind() {
        TokenKind::Number => token
            .literal()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| SalaError::IntegerOutOfRange {
                at: token.position(),
                literal: token.literal().to_string(),
            }),
        _ => Ok(Value::Text(token.literal().to_string())),
    }
}

/// Reject a text result longer than [`MAX_TEXT_LEN`]; `None` means the
/// length overflowed `usize`.
fn check_text_len(len: Option<usize>, at: Position) -> Result<(), SalaError> {
    match len {
        Some(len) if len <= MAX_TEXT_LEN => Ok(()),
        _ => Err(SalaError::TextTooLong {
            at,
            limit: MAX_TEXT_LEN,
        }),
    }
}

fn invalid_types(at: Position, operation: &'static str, a: &Value, b: &Value) -> SalaError {
    SalaError::InvalidTypes {
        at,
        operation,
        left: a.type_name(),
        right: b.type_name(),
    }
}

/// Numeric binary operation. Mixed int/float operands promote to float.
fn numeric(
    a: Value,
    b: Value,
    at: Position,
    operation: &'static str,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, SalaError> {
    match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(int_op(*x, *y))),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(float_op(*x as f64, *y))),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(float_op(*x, *y as f64))),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(float_op(*x, *y))),
        _ => Err(invalid_types(at, operation, &a, &b)),
    }
}

/// Like [`numeric`], but a zero divisor of either numeric type is an error.
fn divide(
    a: Value,
    b: Value,
    at: Position,
    operation: &'static str,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, SalaError> {
    if a.as_f64().is_some() && b.as_f64() == Some(0.0) {
        return Err(SalaError::DivisionByZero { at });
    }
    numeric(a, b, at, operation, int_op, float_op)
}

/// Numeric comparison. Ints compare exactly; mixed pairs compare as floats.
fn compare(
    a: &Value,
    b: &Value,
    at: Position,
    operation: &'static str,
    int_op: fn(i64, i64) -> bool,
    float_op: fn(f64, f64) -> bool,
) -> Result<bool, SalaError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(int_op(*x, *y)),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => Ok(float_op(x, y)),
            _ => Err(invalid_types(at, operation, a, b)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> Position {
        Position::new(0, 0)
    }

    #[test]
    fn lookup_by_mnemonic() {
        for instr in ALL_INSTRUCTIONS {
            assert_eq!(Instruction::lookup(instr.mnemonic()), Some(instr));
        }
        assert_eq!(Instruction::lookup("jmp"), None);
        assert_eq!(Instruction::lookup("PUSH"), None);
    }

    #[test]
    fn parse_operand_number_and_string() {
        let n = Token::new(TokenKind::Number, "120", at());
        let s = Token::new(TokenKind::String, "hi", at());
        assert_eq!(parse_operand(&n), Ok(Value::Int(120)));
        assert_eq!(parse_operand(&s), Ok(Value::from("hi")));
    }

    #[test]
    fn parse_operand_out_of_range() {
        let n = Token::new(TokenKind::Number, "9223372036854775808", Position::new(1, 5));
        assert_eq!(
            parse_operand(&n),
            Err(SalaError::IntegerOutOfRange {
                at: Position::new(1, 5),
                literal: "9223372036854775808".to_string(),
            })
        );
    }

    #[test]
    fn numeric_promotion() {
        let add = |a, b| numeric(a, b, at(), "addition", i64::wrapping_add, |x, y| x + y);
        assert_eq!(add(Value::Int(2), Value::Int(3)), Ok(Value::Int(5)));
        assert_eq!(add(Value::Int(2), Value::Float(0.5)), Ok(Value::Float(2.5)));
        assert_eq!(add(Value::Float(0.5), Value::Int(2)), Ok(Value::Float(2.5)));
        assert_eq!(add(Value::Float(0.5), Value::Float(0.25)), Ok(Value::Float(0.75)));
    }

    #[test]
    fn numeric_rejects_text() {
        let sub = numeric(
            Value::from("a"),
            Value::Int(1),
            at(),
            "subtraction",
            i64::wrapping_sub,
            |x, y| x - y,
        );
        assert_eq!(
            sub,
            Err(SalaError::InvalidTypes {
                at: at(),
                operation: "subtraction",
                left: "string",
                right: "int",
            })
        );
    }

    #[test]
    fn integer_arithmetic_wraps() {
        let add = numeric(
            Value::Int(i64::MAX),
            Value::Int(1),
            at(),
            "addition",
            i64::wrapping_add,
            |x, y| x + y,
        );
        assert_eq!(add, Ok(Value::Int(i64::MIN)));
        let div = divide(
            Value::Int(i64::MIN),
            Value::Int(-1),
            at(),
            "division",
            i64::wrapping_div,
            |x, y| x / y,
        );
        assert_eq!(div, Ok(Value::Int(i64::MIN)));
    }

    #[test]
    fn zero_divisors() {
        let div = |a, b| divide(a, b, at(), "division", i64::wrapping_div, |x, y| x / y);
        assert_eq!(
            div(Value::Int(2), Value::Int(0)),
            Err(SalaError::DivisionByZero { at: at() })
        );
        assert_eq!(
            div(Value::Int(2), Value::Float(-0.0)),
            Err(SalaError::DivisionByZero { at: at() })
        );
        // A type error still wins over a zero divisor.
        assert!(matches!(
            div(Value::from("x"), Value::Int(0)),
            Err(SalaError::InvalidTypes { .. })
        ));
    }

    #[test]
    fn integer_division_truncates() {
        let div = divide(
            Value::Int(7),
            Value::Int(2),
            at(),
            "division",
            i64::wrapping_div,
            |x, y| x / y,
        );
        assert_eq!(div, Ok(Value::Int(3)));
        let rem = divide(
            Value::Int(-7),
            Value::Int(2),
            at(),
            "modulus",
            i64::wrapping_rem,
            |x, y| x % y,
        );
        assert_eq!(rem, Ok(Value::Int(-1)));
    }

    #[test]
    fn mixed_comparison() {
        let lt = |a: &Value, b: &Value| compare(a, b, at(), "less than", |x, y| x < y, |x, y| x < y);
        assert_eq!(lt(&Value::Int(1), &Value::Int(2)), Ok(true));
        assert_eq!(lt(&Value::Int(2), &Value::Float(1.5)), Ok(false));
        assert_eq!(lt(&Value::Float(1.5), &Value::Int(2)), Ok(true));
        assert!(lt(&Value::from("a"), &Value::from("b")).is_err());
    }

    #[test]
    fn text_length_limit() {
        assert_eq!(check_text_len(Some(MAX_TEXT_LEN), at()), Ok(()));
        assert_eq!(
            check_text_len(Some(MAX_TEXT_LEN + 1), at()),
            Err(SalaError::TextTooLong {
                at: at(),
                limit: MAX_TEXT_LEN
            })
        );
        assert!(check_text_len(2usize.checked_mul(usize::MAX), at()).is_err());
    }
}
