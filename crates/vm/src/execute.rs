//! Main execution loop and line dispatch.

use crate::directive::Directive;
use crate::instruction::Instruction;
use crate::machine::{Flow, Machine};
use crate::resolve::ALIAS_KEYWORD;
use sala_common::{SalaError, Token, TokenKind};
use tracing::{debug, trace};

impl Machine<'_> {
    /// Execute lines until the instruction pointer runs past the end.
    pub(crate) fn execute(&mut self, lines: &[Vec<Token>]) -> Result<(), SalaError> {
        while let Some(line) = lines.get(self.pc) {
            self.pc = match self.step(line)? {
                Flow::Next => self.pc + 1,
                Flow::Jump(target) => target,
            };
        }

        debug!(steps = self.steps, stack = %self.stack, "program finished");
        Ok(())
    }

    /// Dispatch one line on its first token.
    fn step(&mut self, line: &[Token]) -> Result<Flow, SalaError> {
        let Some((head, args)) = line.split_first() else {
            return Ok(Flow::Next);
        };

        match head.kind() {
            TokenKind::Label => {
                self.after_content = true;
                Ok(Flow::Next)
            }
            TokenKind::Directive => {
                if self.after_content {
                    return Err(SalaError::DirectiveAfterCode {
                        at: head.position(),
                    });
                }
                let directive =
                    Directive::lookup(head.literal()).ok_or_else(|| SalaError::UnknownDirective {
                        at: head.position(),
                        name: head.literal().to_string(),
                    })?;
                directive.shape().check(head, args)?;
                directive.apply(&mut self.metadata, args)
            }
            // Declarations were consumed by the resolution pass.
            TokenKind::Word if head.literal() == ALIAS_KEYWORD => Ok(Flow::Next),
            TokenKind::Word => {
                self.after_content = true;
                let instr = Instruction::lookup(head.literal()).ok_or_else(|| {
                    SalaError::UnknownInstruction {
                        at: head.position(),
                        name: head.literal().to_string(),
                    }
                })?;
                instr.shape().check(head, args)?;

                self.steps += 1;
                let flow = instr.execute(self, head, args)?;
                trace!(
                    line = self.pc + 1,
                    instruction = instr.mnemonic(),
                    stack = %self.stack,
                    "executed"
                );
                Ok(flow)
            }
            other => Err(SalaError::UnexpectedToken {
                at: head.position(),
                found: other,
            }),
        }
    }
}
