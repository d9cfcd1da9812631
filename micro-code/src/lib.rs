pub mod error;
pub mod interpreter;
pub mod ir;
pub mod parser;
pub mod span;

pub use error::InterpretError;
pub use interpreter::Interpreter;

/// Весь конвейер одним вызовом: исходник плюс входные значения,
/// на выходе — напечатанные числа
pub fn execute(source: &str, inputs: Vec<i64>) -> Result<Vec<i64>, InterpretError> {
    let program = parser::parse(source)?;
    let mut interpreter = Interpreter::new(inputs);
    interpreter.run(&program)
}
