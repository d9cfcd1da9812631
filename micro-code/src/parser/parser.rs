use super::lexer::Token;
use crate::error::InterpretError;
use crate::ir::ast;

pub fn parse_tokens(tokens: Vec<Token>) -> Result<ast::Program, InterpretError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}

struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    fn parse_program(&mut self) -> Result<ast::Program, InterpretError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(ast::Program { statements })
    }

    fn parse_statement(&mut self) -> Result<ast::Statement, InterpretError> {
        match self.peek() {
            Some(Token::If) => self.parse_if(),
            _ => {
                let statement = self.parse_simple_statement()?;
                self.expect(Token::Semicolon)?;
                Ok(statement)
            }
        }
    }

    fn parse_if(&mut self) -> Result<ast::Statement, InterpretError> {
        self.expect(Token::If)?;
        let condition = self.parse_expression()?;
        self.expect(Token::Then)?;

        let mut body = Vec::new();
        while !matches!(self.peek(), Some(Token::Endif)) {
            if self.is_at_end() {
                return Err(InterpretError::UnexpectedEndOfInput {
                    expected: "Endif".to_string(),
                });
            }
            body.push(self.parse_statement()?);
        }

        self.expect(Token::Endif)?;
        self.expect(Token::Semicolon)?;
        Ok(ast::Statement::If { condition, body })
    }

    fn parse_simple_statement(&mut self) -> Result<ast::Statement, InterpretError> {
        match self.peek() {
            Some(Token::Identifier(_)) => self.parse_assignment(),
            Some(Token::Print) => self.parse_print(),
            Some(Token::Input) => self.parse_input(),
            Some(Token::Eof) | None => Err(InterpretError::UnexpectedEndOfInput {
                expected: "statement".to_string(),
            }),
            Some(token) => Err(InterpretError::UnexpectedToken {
                expected: "statement".to_string(),
                found: format!("{:?}", token),
            }),
        }
    }

    fn parse_assignment(&mut self) -> Result<ast::Statement, InterpretError> {
        let target = self.expect_identifier()?;
        self.expect(Token::Assign)?;
        let value = self.parse_expression()?;
        Ok(ast::Statement::Assign { target, value })
    }

    fn parse_print(&mut self) -> Result<ast::Statement, InterpretError> {
        self.expect(Token::Print)?;
        self.expect(Token::LParen)?;
        let value = self.parse_expression()?;
        self.expect(Token::RParen)?;
        Ok(ast::Statement::Print { value })
    }

    fn parse_input(&mut self) -> Result<ast::Statement, InterpretError> {
        self.expect(Token::Input)?;
        self.expect(Token::LParen)?;
        let target = self.expect_identifier()?;
        self.expect(Token::RParen)?;
        Ok(ast::Statement::Input { target })
    }

    /// Выражение — плоская левоассоциативная цепочка: у операторов
    /// сравнения и арифметики нет приоритетов, "a + b == c * d"
    /// разбирается как "((a + b) == c) * d". Это причуда языка,
    /// а не ошибка разбора.
    fn parse_expression(&mut self) -> Result<ast::Expression, InterpretError> {
        let mut left = self.parse_primary()?;

        while let Some(token) = self.peek() {
            let op = match token {
                Token::CompareOp(op) | Token::CalcOp(op) => op.clone(),
                _ => break,
            };
            self.advance();
            let right = self.parse_primary()?;
            left = ast::Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<ast::Expression, InterpretError> {
        match self.advance() {
            Some(Token::Identifier(name)) => Ok(ast::Expression::Variable(name.clone())),
            Some(Token::Number(text)) => Ok(ast::Expression::Number(text.clone())),
            Some(Token::LParen) => {
                let expression = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(expression)
            }
            Some(Token::Eof) | None => Err(InterpretError::UnexpectedEndOfInput {
                expected: "expression".to_string(),
            }),
            Some(token) => Err(InterpretError::UnexpectedToken {
                expected: "expression".to_string(),
                found: format!("{:?}", token),
            }),
        }
    }

    // Вспомогательные методы
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), InterpretError> {
        match self.advance() {
            Some(token) if *token == expected => Ok(()),
            Some(Token::Eof) | None => Err(InterpretError::UnexpectedEndOfInput {
                expected: format!("{:?}", expected),
            }),
            Some(token) => Err(InterpretError::UnexpectedToken {
                expected: format!("{:?}", expected),
                found: format!("{:?}", token),
            }),
        }
    }

    fn expect_identifier(&mut self) -> Result<String, InterpretError> {
        match self.advance() {
            Some(Token::Identifier(name)) => Ok(name.clone()),
            Some(Token::Eof) | None => Err(InterpretError::UnexpectedEndOfInput {
                expected: "identifier".to_string(),
            }),
            Some(token) => Err(InterpretError::UnexpectedToken {
                expected: "identifier".to_string(),
                found: format!("{:?}", token),
            }),
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek(), Some(Token::Eof) | None)
    }
}
