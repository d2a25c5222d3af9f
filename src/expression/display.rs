//! Display formatting for expressions

use super::Expr;
use std::fmt;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level or inside parentheses
    And,  // Operand of a conjunction
    Or,   // Operand of a disjunction
    Not,  // Operand of a negation
}

impl Expr {
    /// Format with operator precedence context to minimize parentheses
    ///
    /// A nested operator of the same kind keeps its parentheses so that the
    /// printed text parses back to the same tree.
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            Expr::Literal(name) => write!(f, "{}", name),

            Expr::Negation(operand) => {
                write!(f, "!")?;
                operand.fmt_with_context(f, OpContext::Not)
            }

            Expr::Conjunction(operands) => {
                let needs_parens = matches!(ctx, OpContext::And | OpContext::Not);
                write_joined(f, operands, " & ", OpContext::And, needs_parens)
            }

            Expr::Disjunction(operands) => {
                let needs_parens = ctx != OpContext::None;
                write_joined(f, operands, " v ", OpContext::Or, needs_parens)
            }
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    operands: &[Expr],
    separator: &str,
    ctx: OpContext,
    needs_parens: bool,
) -> fmt::Result {
    if needs_parens {
        write!(f, "(")?;
    }
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        operand.fmt_with_context(f, ctx)?;
    }
    if needs_parens {
        write!(f, ")")?;
    }
    Ok(())
}

/// Formats in the input notation: `!` for NOT, `&` for AND, `v` for OR
///
/// ```
/// use dnf_simplifier::Expr;
///
/// let expr = Expr::Conjunction(vec![
///     Expr::literal("a"),
///     Expr::Disjunction(vec![Expr::literal("b"), Expr::literal("c")]),
/// ]);
/// assert_eq!(expr.to_string(), "a & (b v c)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}
