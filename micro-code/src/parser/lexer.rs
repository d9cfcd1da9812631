use crate::error::InterpretError;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Ключевые слова
    Print,
    Input,
    If,
    Then,
    Endif,
    // Операторы
    Assign,            // =
    CompareOp(String), // == != > < >= <=
    CalcOp(String),    // + - *
    // Пунктуация
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    // Идентификаторы и литералы
    Identifier(String),
    /// Текст литерала хранится как есть, точка не завершает число: "3.14"
    Number(String),
    // Специальные
    Eof,
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, InterpretError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;
    let mut column = 1;

    while let Some(&ch) = chars.peek() {
        match ch {
            '\n' => {
                chars.next();
                line += 1;
                column = 1;
            }
            c if c.is_whitespace() => {
                chars.next();
                column += 1;
            }
            'a'..='z' | 'A'..='Z' => {
                let word = read_identifier(&mut chars);
                column += word.chars().count();
                let token = match word.as_str() {
                    "print" => Token::Print,
                    "input" => Token::Input,
                    "if" => Token::If,
                    "then" => Token::Then,
                    "endif" => Token::Endif,
                    _ => Token::Identifier(word),
                };
                tokens.push(token);
            }
            '0'..='9' => {
                let text = read_number(&mut chars);
                column += text.chars().count();
                tokens.push(Token::Number(text));
            }
            '=' => {
                chars.next();
                column += 1;
                if let Some('=') = chars.peek() {
                    chars.next();
                    column += 1;
                    tokens.push(Token::CompareOp("==".to_string()));
                } else {
                    tokens.push(Token::Assign);
                }
            }
            '>' | '<' => {
                chars.next();
                column += 1;
                if let Some('=') = chars.peek() {
                    chars.next();
                    column += 1;
                    tokens.push(Token::CompareOp(format!("{}=", ch)));
                } else {
                    tokens.push(Token::CompareOp(ch.to_string()));
                }
            }
            '!' => {
                chars.next();
                if let Some('=') = chars.peek() {
                    chars.next();
                    column += 2;
                    tokens.push(Token::CompareOp("!=".to_string()));
                } else {
                    // одиночный '!' в языке оператором не является
                    return Err(InterpretError::MalformedComparison {
                        span: Span { line, column },
                    });
                }
            }
            '+' | '-' | '*' => {
                chars.next();
                column += 1;
                tokens.push(Token::CalcOp(ch.to_string()));
            }
            '(' => {
                chars.next();
                column += 1;
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                column += 1;
                tokens.push(Token::RParen);
            }
            ';' => {
                chars.next();
                column += 1;
                tokens.push(Token::Semicolon);
            }
            _ => {
                return Err(InterpretError::UnrecognizedCharacter {
                    ch,
                    span: Span { line, column },
                });
            }
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

fn read_identifier<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) -> String {
    let mut ident = String::new();

    while let Some(&ch) = chars.peek() {
        match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' => {
                ident.push(ch);
                chars.next();
            }
            _ => break,
        }
    }

    ident
}

fn read_number<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) -> String {
    let mut text = String::new();

    while let Some(&ch) = chars.peek() {
        match ch {
            '0'..='9' | '.' => {
                text.push(ch);
                chars.next();
            }
            _ => break,
        }
    }

    text
}
