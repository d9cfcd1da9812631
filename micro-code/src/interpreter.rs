use std::collections::HashMap;

use crate::error::InterpretError;
use crate::ir::ast;

/// Обходчик дерева: исполняет программу и возвращает напечатанные числа
pub struct Interpreter {
    variables: HashMap<String, i64>,
    inputs: Vec<i64>,
    cursor: usize,
}

impl Interpreter {
    pub fn new(inputs: Vec<i64>) -> Self {
        Self {
            variables: HashMap::new(),
            inputs,
            cursor: 0,
        }
    }

    pub fn run(&mut self, program: &ast::Program) -> Result<Vec<i64>, InterpretError> {
        let mut output = Vec::new();

        for statement in &program.statements {
            self.execute(statement, &mut output)?;
        }

        Ok(output)
    }

    fn execute(
        &mut self,
        statement: &ast::Statement,
        output: &mut Vec<i64>,
    ) -> Result<(), InterpretError> {
        match statement {
            ast::Statement::Assign { target, value } => {
                let value = self.evaluate(value)?;
                self.variables.insert(target.clone(), value);
            }
            ast::Statement::Print { value } => {
                let value = self.evaluate(value)?;
                output.push(value);
            }
            ast::Statement::Input { target } => {
                let value = self.inputs.get(self.cursor).copied().ok_or_else(|| {
                    InterpretError::InputExhausted {
                        name: target.clone(),
                    }
                })?;
                self.cursor += 1;
                self.variables.insert(target.clone(), value);
            }
            ast::Statement::If { condition, body } => {
                // Отдельной области видимости у тела нет, язык знает
                // только одну глобальную
                if self.evaluate(condition)? != 0 {
                    for statement in body {
                        self.execute(statement, output)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn evaluate(&self, expression: &ast::Expression) -> Result<i64, InterpretError> {
        match expression {
            ast::Expression::Number(text) => number_value(text),
            ast::Expression::Variable(name) => {
                self.variables
                    .get(name)
                    .copied()
                    .ok_or_else(|| InterpretError::UndefinedVariable { name: name.clone() })
            }
            ast::Expression::BinaryOp { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                match op.as_str() {
                    "+" => Ok(left + right),
                    "-" => Ok(left - right),
                    "*" => Ok(left * right),
                    ">" => Ok((left > right) as i64),
                    "<" => Ok((left < right) as i64),
                    "==" => Ok((left == right) as i64),
                    "!=" => Ok((left != right) as i64),
                    ">=" => Ok((left >= right) as i64),
                    "<=" => Ok((left <= right) as i64),
                    _ => Err(InterpretError::UnknownOperator { op: op.clone() }),
                }
            }
        }
    }
}

/// Числа в языке только целые: у "3.14" читается начальная цифровая
/// часть, дробная отбрасывается
fn number_value(text: &str) -> Result<i64, InterpretError> {
    let integral = text.split('.').next().unwrap_or("");
    integral
        .parse()
        .map_err(|_| InterpretError::NumberFormat {
            text: text.to_string(),
        })
}
