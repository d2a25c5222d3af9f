//! Evaluation and variable collection for expressions

use super::Expr;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

impl Expr {
    /// Evaluate the expression under a variable assignment
    ///
    /// Variables missing from `assignment` read as `false`. Unlike DNF
    /// expansion, evaluation accepts negation of compound operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use dnf_simplifier::Expr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = Expr::parse("a & !b").unwrap();
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assert!(expr.evaluate(&assignment));
    ///
    /// assignment.insert(Arc::from("b"), true);
    /// assert!(!expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        match self {
            Expr::Literal(name) => assignment.get(name).copied().unwrap_or(false),
            Expr::Negation(operand) => !operand.evaluate(assignment),
            Expr::Conjunction(operands) => operands.iter().all(|e| e.evaluate(assignment)),
            Expr::Disjunction(operands) => operands.iter().any(|e| e.evaluate(assignment)),
        }
    }

    /// Collect every variable name referenced by the expression, sorted
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_into(&mut vars);
        vars
    }

    fn collect_into(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self {
            Expr::Literal(name) => {
                vars.insert(Arc::clone(name));
            }
            Expr::Negation(operand) => operand.collect_into(vars),
            Expr::Conjunction(operands) | Expr::Disjunction(operands) => {
                for operand in operands {
                    operand.collect_into(vars);
                }
            }
        }
    }
}
