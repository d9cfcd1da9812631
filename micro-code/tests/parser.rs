use micro_code::error::InterpretError;
use micro_code::ir::ast::{Expression, Program, Statement};
use micro_code::parser::parse;

fn parse_ok(source: &str) -> Program {
    parse(source).expect("source should parse")
}

fn num(text: &str) -> Expression {
    Expression::Number(text.to_string())
}

fn var(name: &str) -> Expression {
    Expression::Variable(name.to_string())
}

fn binop(left: Expression, op: &str, right: Expression) -> Expression {
    Expression::BinaryOp {
        left: Box::new(left),
        op: op.to_string(),
        right: Box::new(right),
    }
}

#[test]
fn empty_source_is_an_empty_program() {
    assert_eq!(parse_ok("").statements, vec![]);
}

#[test]
fn assignment_statement() {
    assert_eq!(
        parse_ok("x = 5;").statements,
        vec![Statement::Assign {
            target: "x".to_string(),
            value: num("5"),
        }]
    );
}

#[test]
fn print_and_input_statements() {
    assert_eq!(
        parse_ok("input(a); print(a + 1);").statements,
        vec![
            Statement::Input {
                target: "a".to_string(),
            },
            Statement::Print {
                value: binop(var("a"), "+", num("1")),
            },
        ]
    );
}

#[test]
fn if_statement_keeps_body_order() {
    assert_eq!(
        parse_ok("if x > 0 then print(1); print(2); endif;").statements,
        vec![Statement::If {
            condition: binop(var("x"), ">", num("0")),
            body: vec![
                Statement::Print { value: num("1") },
                Statement::Print { value: num("2") },
            ],
        }]
    );
}

#[test]
fn if_statements_nest() {
    assert_eq!(
        parse_ok("if x then if y then z = 1; endif; endif;").statements,
        vec![Statement::If {
            condition: var("x"),
            body: vec![Statement::If {
                condition: var("y"),
                body: vec![Statement::Assign {
                    target: "z".to_string(),
                    value: num("1"),
                }],
            }],
        }]
    );
}

// У операторов нет приоритетов: цепочка сворачивается строго слева
// направо, "a + b == c * d" это "((a + b) == c) * d"
#[test]
fn expression_chain_is_flat_and_left_associative() {
    assert_eq!(
        parse_ok("x = 1 + 2 == 3;").statements,
        vec![Statement::Assign {
            target: "x".to_string(),
            value: binop(binop(num("1"), "+", num("2")), "==", num("3")),
        }]
    );

    assert_eq!(
        parse_ok("x = a + b == c * d;").statements,
        vec![Statement::Assign {
            target: "x".to_string(),
            value: binop(
                binop(binop(var("a"), "+", var("b")), "==", var("c")),
                "*",
                var("d"),
            ),
        }]
    );
}

#[test]
fn parentheses_override_the_flat_chain() {
    assert_eq!(
        parse_ok("x = 1 + (2 == 3);").statements,
        vec![Statement::Assign {
            target: "x".to_string(),
            value: binop(num("1"), "+", binop(num("2"), "==", num("3"))),
        }]
    );
}

#[test]
fn missing_semicolon_is_an_unexpected_token() {
    let err = parse("x = 1 print(x);").unwrap_err();
    assert!(matches!(err, InterpretError::UnexpectedToken { .. }));
}

#[test]
fn stray_token_instead_of_statement() {
    let err = parse("; x = 1;").unwrap_err();
    assert!(matches!(err, InterpretError::UnexpectedToken { .. }));
}

#[test]
fn truncated_constructs_report_end_of_input() {
    let err = parse("x =").unwrap_err();
    assert!(matches!(err, InterpretError::UnexpectedEndOfInput { .. }));

    let err = parse("print(1);  if x then print(x);").unwrap_err();
    assert!(matches!(err, InterpretError::UnexpectedEndOfInput { .. }));

    let err = parse("x = (1 + 2").unwrap_err();
    assert!(matches!(err, InterpretError::UnexpectedEndOfInput { .. }));
}

#[test]
fn input_takes_a_single_identifier() {
    let err = parse("input(3);").unwrap_err();
    assert!(matches!(err, InterpretError::UnexpectedToken { .. }));
}
