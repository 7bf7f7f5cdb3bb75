use crate::error::{Error, Result};
use crate::header::Header;
use crate::parser::{normalize, Formula, Token};
use crate::symbols::{Operator, ESCAPE_MARKER, PRECEDENCE};
use log::trace;

/// Evaluates formulas against one (possibly partially assigned) table row.
///
/// `row[i]` holds the value of header column `i`, or `None` while that column has not
/// been computed yet. Any token range spelling a header entry with a known value
/// evaluates to that value, so formulas can refer to earlier compound columns too.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    header: &'a Header,
    row: &'a [Option<bool>],
}

impl<'a> Evaluator<'a> {
    pub const fn new(header: &'a Header, row: &'a [Option<bool>]) -> Self {
        Self { header, row }
    }

    pub fn eval(&self, formula: &Formula) -> Result<bool> {
        self.eval_range(formula, 0, formula.tokens().len())
    }

    fn lookup(&self, tokens: &[Token]) -> Option<bool> {
        self.header
            .position(tokens)
            .and_then(|position| self.row.get(position).copied().flatten())
    }

    fn eval_range(&self, formula: &Formula, start: usize, end: usize) -> Result<bool> {
        let source = formula.source();
        let tokens = &formula.tokens()[start..end];

        if tokens.is_empty() {
            return Err(Error::malformed(source, "missing operand"));
        }

        if let Some(value) = self.lookup(tokens) {
            return Ok(value);
        }

        if let [token] = tokens {
            return Err(match token {
                Token::Name(name) if name.contains(ESCAPE_MARKER) => {
                    Error::malformed(source, format!("unknown operator '{name}'"))
                }
                Token::Name(name) => Error::unresolved(source, name),
                other => Error::malformed(source, format!("unexpected '{other}'")),
            });
        }

        if encloses(tokens) {
            return self.eval_range(formula, start + 1, end - 1);
        }

        for op in PRECEDENCE {
            let Some(split) = find_top_level(tokens, op) else {
                continue;
            };

            trace!("split '{}' at {op}", normalize(tokens));

            let at = start + split;
            let left = if op.is_unary() {
                if split > 0 {
                    return Err(Error::malformed(
                        source,
                        format!("'{op}' does not take a left operand"),
                    ));
                }
                false
            } else {
                self.eval_range(formula, start, at)?
            };
            let right = self.eval_range(formula, at + 1, end)?;

            return Ok(op.apply(left, right));
        }

        Err(Error::malformed(
            source,
            format!("no operator joins '{}'", normalize(tokens)),
        ))
    }
}

/// True if the first and last token are a matching pair of parentheses.
fn encloses(tokens: &[Token]) -> bool {
    let [Token::OpenParen, inner @ .., Token::CloseParen] = tokens else {
        return false;
    };

    let mut depth = 1usize;
    for token in inner {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return false;
                }
            }
            _ => {}
        }
    }

    true
}

fn find_top_level(tokens: &[Token], op: Operator) -> Option<usize> {
    let mut depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth = depth.saturating_sub(1),
            Token::Operator(found) if *found == op && depth == 0 => return Some(i),
            _ => {}
        }
    }

    None
}

/// Evaluates `formula` under a fully assigned row of `header`.
///
/// ```
/// use truthtab::evaluate;
///
/// assert_eq!(evaluate("p \\Rightarrow q", &["p", "q"], &[true, false]), Ok(false));
/// assert_eq!(evaluate("( p )", &["p"], &[true]), evaluate("p", &["p"], &[true]));
/// ```
pub fn evaluate<S: AsRef<str>>(formula: &str, header: &[S], row: &[bool]) -> Result<bool> {
    let header = Header::new(header)?;
    let formula = Formula::parse(formula)?;
    let row: Vec<Option<bool>> = row.iter().copied().map(Some).collect();

    Evaluator::new(&header, &row).eval(&formula)
}
