use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

/// Numeric token found inside a color function's argument list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Bare number: `128`, `0.5`, `-12`, `1e2`. Non-angle units such as `px` are skipped.
    Number(f32),
    /// Number immediately followed by `%`.
    Percentage(f32),
    /// Number with an angle unit, converted to degrees (`0.5turn` → 180).
    Angle(f32),
}

impl Token {
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Token::Number(v) | Token::Percentage(v) | Token::Angle(v) => v,
        }
    }
}

/// Degrees for `value` in an angle `unit` (`deg`, `turn`, `rad`, `grad`,
/// any case). `None` for anything else, including no unit.
pub fn angle_degrees(value: f32, unit: &str) -> Option<f32> {
    match unit.to_ascii_lowercase().as_str() {
        "deg" => Some(value),
        "turn" => Some(value * 360.0),
        "rad" => Some(value.to_degrees()),
        "grad" => Some(value * 9.0 / 10.0),
        _ => None,
    }
}

/// A comma-separated piece of a function body, split at parenthesis depth 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'s> {
    /// Segment text with surrounding whitespace trimmed.
    pub text: &'s str,
    /// Byte offset of the untrimmed segment start within the scanned source.
    pub start: usize,
}

/// `name(body)` split out of a CSS function call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionCall<'s> {
    pub name: &'s str,
    pub body: &'s str,
    /// Byte offset of `body` within the scanned source.
    pub body_start: usize,
}

// ── Scanner ───────────────────────────────────────────────────────────────

/// Character scanner with an explicit parenthesis-depth counter.
///
/// Depth is incremented on `(` and decremented on `)`; a stray `)` at depth 0
/// leaves depth at 0. Separators only split at depth 0, which keeps the commas
/// inside `rgba(1, 2, 3, 0.5)` attached to their stop.
pub struct Scanner<'s> {
    src: &'s str,
    pos: usize,
    depth: usize,
}

impl<'s> Scanner<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        match ch {
            '(' => self.depth += 1,
            ')' => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        Some(ch)
    }

    /// Splits `name(body)` at the first `(` and its matching `)`.
    ///
    /// Anything after the matching `)` is ignored.
    pub fn function_call(mut self) -> Result<FunctionCall<'s>, ParseError> {
        let open = match self.src.find('(') {
            Some(i) => i,
            None => return Err(ParseError::new("expected '(' after function name", self.src.len())),
        };
        let name = self.src[..open].trim();
        if name.is_empty() {
            return Err(ParseError::new("missing function name", 0));
        }

        self.pos = open;
        self.advance(); // consume `(`
        let body_start = self.pos;
        while let Some(ch) = self.advance() {
            if ch == ')' && self.depth == 0 {
                let close = self.pos - 1;
                return Ok(FunctionCall { name, body: &self.src[body_start..close], body_start });
            }
        }
        Err(ParseError::new("unbalanced parentheses: missing ')'", open))
    }

    /// Splits the source on `sep` at depth 0. Empty segments are dropped.
    pub fn split_top_level(mut self, sep: char) -> Vec<Segment<'s>> {
        let mut segments = Vec::new();
        let mut start = self.pos;
        loop {
            let at = self.pos;
            match self.advance() {
                None => {
                    push_segment(&mut segments, self.src, start, at);
                    break;
                }
                Some(ch) if ch == sep && self.depth == 0 => {
                    push_segment(&mut segments, self.src, start, at);
                    start = self.pos;
                }
                Some(_) => {}
            }
        }
        segments
    }

    /// Collects every numeric literal in the source, in order.
    ///
    /// Letters and punctuation between numbers are skipped, so the legacy
    /// comma form `rgb(1, 2, 3)`, the space form `rgb(1 2 3 / 50%)` and unit
    /// suffixes like `120deg` all reduce to the same token stream.
    pub fn numbers(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(ch) = self.peek() {
            if starts_number(ch, self.src[self.pos + ch.len_utf8()..].chars().next()) {
                tokens.push(self.lex_number()?);
            } else {
                self.advance();
            }
        }
        Ok(tokens)
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        if self.at_exponent() {
            self.advance();
            if matches!(self.peek(), Some('-' | '+')) {
                self.advance();
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        let value = s
            .parse::<f32>()
            .map_err(|_| ParseError::new(format!("invalid number {s:?}"), start))?;
        if self.peek() == Some('%') {
            self.advance();
            return Ok(Token::Percentage(value));
        }

        let unit_start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.advance();
        }
        Ok(match angle_degrees(value, &self.src[unit_start..self.pos]) {
            Some(degrees) => Token::Angle(degrees),
            None => Token::Number(value),
        })
    }

    /// `e` / `E` followed by an optionally signed digit. `1em` is not an exponent.
    fn at_exponent(&self) -> bool {
        let mut rest = self.src[self.pos..].chars();
        match (rest.next(), rest.next(), rest.next()) {
            (Some('e' | 'E'), Some(d), _) if d.is_ascii_digit() => true,
            (Some('e' | 'E'), Some('-' | '+'), Some(d)) => d.is_ascii_digit(),
            _ => false,
        }
    }
}

fn push_segment<'s>(segments: &mut Vec<Segment<'s>>, src: &'s str, start: usize, end: usize) {
    let text = src[start..end].trim();
    if !text.is_empty() {
        segments.push(Segment { text, start });
    }
}

fn starts_number(ch: char, next: Option<char>) -> bool {
    match ch {
        '0'..='9' => true,
        '.' | '-' | '+' => matches!(next, Some(c) if c.is_ascii_digit()),
        _ => false,
    }
}

/// Separates a raw stop into its color and trailing position text.
///
/// Functional colors keep everything up to their last `)`; the position is
/// whatever trails it. Hex and named colors take the last whitespace-delimited
/// word as the position, but only when it contains `%`.
pub fn split_stop(stop: &str) -> (&str, Option<&str>) {
    let stop = stop.trim();
    if let Some(close) = stop.rfind(')') {
        let position = stop[close + 1..].trim();
        let position = (!position.is_empty()).then_some(position);
        return (stop[..=close].trim(), position);
    }
    match stop.rsplit_once(char::is_whitespace) {
        Some((color, last)) if last.contains('%') => (color.trim(), Some(last)),
        _ => (stop, None),
    }
}

/// First percentage in a stop's position text (`"25%"` → 25, `"10% 40%"` → 10).
pub fn first_percentage(position: &str) -> Option<f32> {
    Scanner::new(position).numbers().ok()?.into_iter().find_map(|t| match t {
        Token::Percentage(v) => Some(v),
        Token::Number(_) | Token::Angle(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'s>(segments: &[Segment<'s>]) -> Vec<&'s str> {
        segments.iter().map(|s| s.text).collect()
    }

    // ── function_call ─────────────────────────────────────────────────────

    #[test]
    fn function_call_splits_name_and_body() {
        let call = Scanner::new("linear-gradient(45deg, red, blue)").function_call().unwrap();
        assert_eq!(call.name, "linear-gradient");
        assert_eq!(call.body, "45deg, red, blue");
        assert_eq!(call.body_start, 16);
    }

    #[test]
    fn function_call_matches_outermost_paren() {
        let call = Scanner::new("radial-gradient(circle, rgba(1,2,3,0.5) 10%) trailing")
            .function_call()
            .unwrap();
        assert_eq!(call.body, "circle, rgba(1,2,3,0.5) 10%");
    }

    #[test]
    fn function_call_rejects_unclosed() {
        let err = Scanner::new("linear-gradient(red, rgb(1,2,3)").function_call().unwrap_err();
        assert_eq!(err.pos, 15);
    }

    #[test]
    fn function_call_rejects_missing_paren() {
        Scanner::new("linear-gradient").function_call().unwrap_err();
    }

    // ── split_top_level ───────────────────────────────────────────────────

    #[test]
    fn split_ignores_nested_commas() {
        let segs = Scanner::new("45deg, rgba(1,2,3,0.5) 0%, rgba(4,5,6,1) 100%").split_top_level(',');
        assert_eq!(texts(&segs), ["45deg", "rgba(1,2,3,0.5) 0%", "rgba(4,5,6,1) 100%"]);
    }

    #[test]
    fn split_drops_empty_segments() {
        let segs = Scanner::new("red, , blue,").split_top_level(',');
        assert_eq!(texts(&segs), ["red", "blue"]);
    }

    #[test]
    fn split_records_segment_starts() {
        let segs = Scanner::new("a,bb, c").split_top_level(',');
        let starts: Vec<usize> = segs.iter().map(|s| s.start).collect();
        assert_eq!(starts, [0, 2, 5]);
    }

    #[test]
    fn stray_close_paren_does_not_underflow() {
        let mut scanner = Scanner::new("))(");
        while scanner.advance().is_some() {}
        assert_eq!(scanner.depth(), 1);
    }

    // ── numbers ───────────────────────────────────────────────────────────

    #[test]
    fn numbers_in_legacy_and_space_syntax() {
        let legacy = Scanner::new("rgba(10, 20, 30, .5)").numbers().unwrap();
        let modern = Scanner::new("rgb(10 20 30 / 50%)").numbers().unwrap();
        assert_eq!(
            legacy,
            [Token::Number(10.0), Token::Number(20.0), Token::Number(30.0), Token::Number(0.5)]
        );
        assert_eq!(modern[3], Token::Percentage(50.0));
    }

    #[test]
    fn numbers_convert_angle_units_and_keep_sign() {
        let toks = Scanner::new("hsl(-120deg, 50%, 25%)").numbers().unwrap();
        assert_eq!(
            toks,
            [Token::Angle(-120.0), Token::Percentage(50.0), Token::Percentage(25.0)]
        );
        let turn = Scanner::new("hsl(0.5turn 100% 50%)").numbers().unwrap();
        assert_eq!(turn[0], Token::Angle(180.0));
        let grad = Scanner::new("200GRAD").numbers().unwrap();
        assert_eq!(grad, [Token::Angle(180.0)]);
    }

    #[test]
    fn numbers_skip_other_units() {
        let toks = Scanner::new("10px 2em").numbers().unwrap();
        assert_eq!(toks, [Token::Number(10.0), Token::Number(2.0)]);
    }

    #[test]
    fn numbers_read_exponents() {
        let toks = Scanner::new("1e1% 2.5E-1 3e+2").numbers().unwrap();
        assert_eq!(toks, [Token::Percentage(10.0), Token::Number(0.25), Token::Number(300.0)]);
    }

    #[test]
    fn numbers_reject_malformed_literal() {
        Scanner::new("rgb(1.2.3, 4, 5)").numbers().unwrap_err();
    }

    // ── split_stop ────────────────────────────────────────────────────────

    #[test]
    fn split_stop_functional_color() {
        assert_eq!(split_stop("rgba(1, 2, 3, 0.5) 10%"), ("rgba(1, 2, 3, 0.5)", Some("10%")));
        assert_eq!(split_stop("hsl(0, 100%, 50%)"), ("hsl(0, 100%, 50%)", None));
    }

    #[test]
    fn split_stop_hex_and_named() {
        assert_eq!(split_stop("#ff0000 25%"), ("#ff0000", Some("25%")));
        assert_eq!(split_stop("red"), ("red", None));
        assert_eq!(split_stop("red 10px"), ("red 10px", None));
    }

    #[test]
    fn first_percentage_takes_leading_position() {
        assert_eq!(first_percentage("10% 40%"), Some(10.0));
        assert_eq!(first_percentage("33.5%"), Some(33.5));
        assert_eq!(first_percentage("10px"), None);
    }
}
