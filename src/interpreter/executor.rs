use std::fmt;

use crate::{
    ast::{Expr, Func, SimpleExpr, Statement, Variable},
    error::RuntimeError,
};

/// Result type used by the executor.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The final state of one execution path.
///
/// A path is one sequence of branch decisions through the conditionals
/// reached during execution. Each path exclusively owns its memory and
/// condition; forking clones them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// One binding per declared parameter, in declaration order, holding the
    /// parameter's symbolic value at the end of the path.
    pub memory: Vec<Variable>,
    /// The conjunction, as text, of every branch predicate taken or negated
    /// along the path. Starts as the literal text `true`.
    pub condition: String,
    /// The return expression rendered against the final memory.
    pub output: String,
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for binding in &self.memory {
            writeln!(f, "{} = {}", binding.name, binding.value)?;
        }
        writeln!(f, "output: {}", self.output)?;
        writeln!(f, "condition: {}", self.condition)?;
        writeln!(f, "}}")
    }
}

/// Walks a parsed function symbolically, forking the active path set at
/// every conditional.
///
/// ## Usage
///
/// Construction validates that the function reaches a return expression;
/// [`Executor::run`] then explores every control-flow path and produces one
/// [`PathResult`] per path, in discovery order.
pub struct Executor {
    func: Func,
}

impl Executor {
    /// Creates an executor for a parsed function.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingReturnExpression` if no `return` was
    /// parsed anywhere in the function body.
    pub fn new(func: Func) -> EvalResult<Self> {
        if func.body.return_expression.is_none() {
            return Err(RuntimeError::MissingReturnExpression { function: func.name });
        }

        Ok(Self { func })
    }

    /// Explores every control-flow path of the function.
    ///
    /// One initial path binds each parameter to a quoted placeholder built
    /// from its own name, under the condition `true`. Every conditional
    /// reached doubles the paths that reach it. After the last statement the
    /// return expression is rendered against each path's final memory.
    ///
    /// # Returns
    /// One [`PathResult`] per discovered path: true-branch descendants
    /// first, then false-branch descendants, recursively.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an assignment target or variable
    /// reference has no binding in a path's memory.
    pub fn run(&self) -> EvalResult<Vec<PathResult>> {
        let memory = self.func
                         .input
                         .iter()
                         .map(|param| Variable { name:     param.name.clone(),
                                                 var_type: param.var_type,
                                                 value:    format!("'{}'", param.name), })
                         .collect();

        let mut results = vec![PathResult { memory,
                                            condition: "true".to_string(),
                                            output: String::new() }];

        for statement in &self.func.body.statements {
            self.run_statement(&mut results, statement)?;
        }

        let Some(return_expression) = &self.func.body.return_expression else {
            return Err(RuntimeError::MissingReturnExpression { function: self.func.name.clone() });
        };

        for path in &mut results {
            path.output = render_expr(return_expression, &path.memory)?;
        }

        Ok(results)
    }

    /// Executes one statement against the whole set of active paths.
    ///
    /// An assignment rewrites one binding per path. A conditional clones the
    /// set: the originals take the branch with ` && (<predicate>)` appended
    /// to their conditions, the clones skip it with ` && !(<predicate>)`,
    /// each predicate rendered against that path's pre-branch memory. The
    /// clones are appended after the originals, so true-branch descendants
    /// stay ahead of false-branch descendants. Paths are never merged or
    /// pruned.
    fn run_statement(&self, current: &mut Vec<PathResult>, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { target, value } => {
                for path in current.iter_mut() {
                    let rendered = render_expr(value, &path.memory)?;
                    let Some(binding) = path.memory.iter_mut().find(|var| var.name == *target) else {
                        return Err(RuntimeError::UnknownVariable { name: target.clone() });
                    };
                    binding.value = rendered;
                }
            },

            Statement::Conditional { condition,
                                     true_branch,
                                     false_branch, } => {
                let mut negated = current.clone();

                for path in current.iter_mut() {
                    let predicate = render_expr(condition, &path.memory)?;
                    path.condition.push_str(&format!(" && ({predicate})"));
                }
                for path in negated.iter_mut() {
                    let predicate = render_expr(condition, &path.memory)?;
                    path.condition.push_str(&format!(" && !({predicate})"));
                }

                for nested in true_branch {
                    self.run_statement(current, nested)?;
                }
                for nested in false_branch {
                    self.run_statement(&mut negated, nested)?;
                }

                current.append(&mut negated);
            },
        }

        Ok(())
    }
}

/// Renders an expression against one path's memory.
///
/// The chain is flattened left to right: for an internal node the left child
/// is rendered first, followed by a space and the operator symbol. A literal
/// payload is appended after a space; a variable payload is replaced by its
/// current value from the path's memory, with no separator. No parentheses
/// are ever inserted.
///
/// # Errors
/// Returns `RuntimeError::UnknownVariable` if a referenced variable has no
/// binding in the memory.
pub fn render_expr(expr: &Expr, memory: &[Variable]) -> EvalResult<String> {
    let mut output = String::new();

    if let (Some(lhs), Some(op)) = (&expr.lhs, expr.op) {
        output.push_str(&render_expr(lhs, memory)?);
        output.push(' ');
        output.push_str(op.symbol());
    }

    match &expr.simple {
        SimpleExpr::Literal(text) => {
            output.push(' ');
            output.push_str(text);
        },
        SimpleExpr::Variable(name) => {
            let Some(binding) = memory.iter().find(|var| var.name == *name) else {
                return Err(RuntimeError::UnknownVariable { name: name.clone() });
            };
            output.push_str(&binding.value);
        },
    }

    Ok(output)
}
