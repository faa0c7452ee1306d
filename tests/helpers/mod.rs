//! Test helpers for checking generated member bodies.
//!
//! The generator cannot run its own output, so the integration tests pull
//! expression bodies out of the emitted text and evaluate them here. The
//! evaluator understands exactly the subset the plans emit: dotted
//! identifiers, numeric literals, arithmetic, comparison and logical
//! operators, the conditional operator, `new(...)`, the `Mathf`/`Toolbox`
//! helpers and zero-argument calls to other members of the same struct.

#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};

use numgen_core::COMPONENT_NAMES;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Vector(Vec<Value>),
}

impl Value {
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            other => bail!("expected int, got {other:?}"),
        }
    }

    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Int(i) => Ok(*i as f64),
            Value::Float(f) => Ok(*f),
            other => bail!("expected number, got {other:?}"),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => bail!("expected bool, got {other:?}"),
        }
    }

    pub fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    pub fn bools(values: &[bool]) -> Vec<Value> {
        values.iter().copied().map(Value::Bool).collect()
    }
}

/// Integer square root rounded down.
pub fn isqrt(n: i64) -> i64 {
    let mut root = (n as f64).sqrt() as i64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(String),
    Ident(String),
    Op(&'static str),
    LParen,
    RParen,
    Comma,
    Question,
    Colon,
}

const OPERATORS: [&str; 14] = [
    "==", "!=", ">=", "<=", "&&", "||", "+", "-", "*", "/", "%", ">", "<", "!",
];

fn tokenize(src: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let bytes = src.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() {
            i += 1;
        } else if c.is_ascii_digit() {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            let text = &src[start..i];
            if i < bytes.len() && bytes[i] == b'f' {
                i += 1;
            }
            tokens.push(Token::Number(text.to_string()));
        } else if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < bytes.len()
                && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_' || bytes[i] == b'.')
            {
                i += 1;
            }
            tokens.push(Token::Ident(src[start..i].to_string()));
        } else {
            let token = match c {
                '(' => Some(Token::LParen),
                ')' => Some(Token::RParen),
                ',' => Some(Token::Comma),
                '?' => Some(Token::Question),
                ':' => Some(Token::Colon),
                _ => None,
            };
            if let Some(token) = token {
                tokens.push(token);
                i += 1;
                continue;
            }
            let op = OPERATORS
                .iter()
                .find(|op| src[i..].starts_with(*op))
                .ok_or_else(|| anyhow!("unexpected character {c:?} in {src:?}"))?;
            tokens.push(Token::Op(*op));
            i += op.len();
        }
    }
    Ok(tokens)
}

/// Evaluates member bodies against bound component values.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    vars: HashMap<String, Value>,
    methods: HashMap<String, String>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: &str, value: Value) -> &mut Self {
        self.vars.insert(name.to_string(), value);
        self
    }

    /// Bind components as `x`, `y`, ... or `prefix.x`, `prefix.y`, ...
    pub fn bind_vector(&mut self, prefix: Option<&str>, values: &[Value]) -> &mut Self {
        for (name, value) in COMPONENT_NAMES.iter().zip(values) {
            let key = match prefix {
                Some(prefix) => format!("{prefix}.{name}"),
                None => name.to_string(),
            };
            self.vars.insert(key, value.clone());
        }
        self
    }

    /// Make a zero-argument member callable from other bodies.
    pub fn method(&mut self, name: &str, body: &str) -> &mut Self {
        self.methods.insert(name.to_string(), body.to_string());
        self
    }

    pub fn eval(&self, src: &str) -> Result<Value> {
        let tokens = tokenize(src)?;
        let mut parser = Parser {
            tokens: &tokens,
            pos: 0,
            eval: self,
        };
        let value = parser.conditional()?;
        if parser.pos != tokens.len() {
            bail!("trailing tokens in {src:?}: {:?}", &tokens[parser.pos..]);
        }
        Ok(value)
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eval: &'a Evaluator,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<Token> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| anyhow!("unexpected end of expression"))?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        let token = self.next()?;
        if token != expected {
            bail!("expected {expected:?}, found {token:?}");
        }
        Ok(())
    }

    fn eat_op(&mut self, ops: &[&str]) -> Option<&'static str> {
        match self.peek() {
            Some(Token::Op(op)) if ops.contains(op) => {
                let op = *op;
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn conditional(&mut self) -> Result<Value> {
        let cond = self.binary(0)?;
        if self.peek() == Some(&Token::Question) {
            self.pos += 1;
            let then = self.conditional()?;
            self.expect(Token::Colon)?;
            let otherwise = self.conditional()?;
            return Ok(if cond.as_bool()? { then } else { otherwise });
        }
        Ok(cond)
    }

    fn binary(&mut self, level: usize) -> Result<Value> {
        const LEVELS: [&[&str]; 6] = [
            &["||"],
            &["&&"],
            &["==", "!="],
            &["<", ">", "<=", ">="],
            &["+", "-"],
            &["*", "/", "%"],
        ];
        if level == LEVELS.len() {
            return self.unary();
        }
        let mut lhs = self.binary(level + 1)?;
        while let Some(op) = self.eat_op(LEVELS[level]) {
            let rhs = self.binary(level + 1)?;
            lhs = apply(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Value> {
        if self.eat_op(&["-"]).is_some() {
            return match self.unary()? {
                Value::Int(i) => Ok(Value::Int(-i)),
                Value::Float(f) => Ok(Value::Float(-f)),
                other => bail!("cannot negate {other:?}"),
            };
        }
        if self.eat_op(&["!"]).is_some() {
            return Ok(Value::Bool(!self.unary()?.as_bool()?));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Value> {
        match self.next()? {
            Token::Number(text) if text.contains('.') => Ok(Value::Float(text.parse()?)),
            Token::Number(text) => Ok(Value::Int(text.parse()?)),
            Token::LParen => {
                let value = self.conditional()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            Token::Ident(name) if self.peek() == Some(&Token::LParen) => {
                self.pos += 1;
                let args = self.arguments()?;
                self.call(&name, args)
            }
            Token::Ident(name) => match name.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => self
                    .eval
                    .vars
                    .get(&name)
                    .cloned()
                    .ok_or_else(|| anyhow!("unbound identifier {name}")),
            },
            other => bail!("unexpected token {other:?}"),
        }
    }

    /// Arguments after an opening parenthesis, through the closing one.
    fn arguments(&mut self) -> Result<Vec<Value>> {
        let mut args = Vec::new();
        if self.peek() == Some(&Token::RParen) {
            self.pos += 1;
            return Ok(args);
        }
        loop {
            args.push(self.conditional()?);
            match self.next()? {
                Token::Comma => continue,
                Token::RParen => return Ok(args),
                other => bail!("expected `,` or `)`, found {other:?}"),
            }
        }
    }

    fn call(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        match (name, args.as_slice()) {
            ("new", _) => Ok(Value::Vector(args)),
            ("Mathf.Min", [a, b]) => pick(a, b, |x, y| x <= y),
            ("Mathf.Max", [a, b]) => pick(a, b, |x, y| x >= y),
            ("Mathf.Clamp", [v, lo, hi]) => {
                let raised = pick(v, lo, |x, y| x >= y)?;
                pick(&raised, hi, |x, y| x <= y)
            }
            ("Mathf.Abs", [Value::Int(i)]) => Ok(Value::Int(i.abs())),
            ("Mathf.Abs", [v]) => Ok(Value::Float(v.as_float()?.abs())),
            ("Mathf.Sqrt", [v]) => Ok(Value::Float(v.as_float()?.sqrt())),
            ("Toolbox.ISqrt", [v]) => Ok(Value::Int(isqrt(v.as_int()?))),
            (method, []) => {
                let body = self
                    .eval
                    .methods
                    .get(method)
                    .ok_or_else(|| anyhow!("unknown member {method}()"))?;
                self.eval.eval(body)
            }
            _ => bail!("unsupported call {name} with {} argument(s)", args.len()),
        }
    }
}

fn pick(a: &Value, b: &Value, keep_a: fn(f64, f64) -> bool) -> Result<Value> {
    Ok(if keep_a(a.as_float()?, b.as_float()?) {
        a.clone()
    } else {
        b.clone()
    })
}

fn apply(op: &str, lhs: Value, rhs: Value) -> Result<Value> {
    use Value::*;
    Ok(match (op, lhs, rhs) {
        ("&&", a, b) => Bool(a.as_bool()? && b.as_bool()?),
        ("||", a, b) => Bool(a.as_bool()? || b.as_bool()?),
        ("==", Bool(a), Bool(b)) => Bool(a == b),
        ("!=", Bool(a), Bool(b)) => Bool(a != b),
        (op, Int(a), Int(b)) => match op {
            "+" => Int(a + b),
            "-" => Int(a - b),
            "*" => Int(a * b),
            "/" if b == 0 => bail!("integer division by zero"),
            "/" => Int(a / b),
            "%" if b == 0 => bail!("integer division by zero"),
            "%" => Int(a % b),
            _ => Bool(compare(op, a as f64, b as f64)?),
        },
        (op, a, b) => {
            let (a, b) = (a.as_float()?, b.as_float()?);
            match op {
                "+" => Float(a + b),
                "-" => Float(a - b),
                "*" => Float(a * b),
                "/" => Float(a / b),
                "%" => Float(a % b),
                _ => Bool(compare(op, a, b)?),
            }
        }
    })
}

fn compare(op: &str, a: f64, b: f64) -> Result<bool> {
    Ok(match op {
        "==" => a == b,
        "!=" => a != b,
        "<" => a < b,
        ">" => a > b,
        "<=" => a <= b,
        ">=" => a >= b,
        other => bail!("unknown operator {other}"),
    })
}

/// Body of the member whose declaration starts with `prefix`.
///
/// Multi-line bodies (`=> new(` followed by one item per line) are joined
/// back into one expression. The trailing `;` is dropped.
pub fn member_body(text: &str, prefix: &str) -> Result<String> {
    let mut lines = text.lines().map(str::trim);
    let first = lines
        .find(|line| line.starts_with(prefix))
        .ok_or_else(|| anyhow!("no member starting with {prefix:?}"))?;
    let (_, body) = first
        .split_once(" => ")
        .ok_or_else(|| anyhow!("member {prefix:?} is not expression-bodied"))?;

    let mut body = body.to_string();
    while !body.ends_with(';') {
        let next = lines
            .next()
            .ok_or_else(|| anyhow!("unterminated body for {prefix:?}"))?;
        body.push_str(next);
    }
    body.pop();
    Ok(body)
}

/// Parameter names of every declaration starting with `prefix`, in order.
pub fn parameter_lists(text: &str, prefix: &str) -> Result<Vec<Vec<String>>> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(prefix))
        .map(parameter_names)
        .collect()
}

fn parameter_names(line: &str) -> Result<Vec<String>> {
    let open = line.find('(').ok_or_else(|| anyhow!("no parameter list in {line:?}"))?;
    let close = line[open..]
        .find(')')
        .map(|i| open + i)
        .ok_or_else(|| anyhow!("unterminated parameter list in {line:?}"))?;
    line[open + 1..close]
        .split(',')
        .map(|param| {
            let declaration = param.split('=').next().unwrap_or(param).trim();
            declaration
                .split_whitespace()
                .last()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("empty parameter in {line:?}"))
        })
        .collect()
}
