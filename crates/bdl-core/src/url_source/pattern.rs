//! printf-style number pattern used inside a template placeholder.

use super::TemplateError;

/// Widest padding accepted in a directive, same bound printf-style formatters use.
pub const MAX_WIDTH: usize = 1_000_000;

/// Output base of the single formatting directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
}

impl Verb {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Verb::Decimal),
            'x' => Some(Verb::LowerHex),
            'X' => Some(Verb::UpperHex),
            'o' => Some(Verb::Octal),
            'b' => Some(Verb::Binary),
            _ => None,
        }
    }

    fn render(self, n: u64) -> String {
        match self {
            Verb::Decimal => n.to_string(),
            Verb::LowerHex => format!("{:x}", n),
            Verb::UpperHex => format!("{:X}", n),
            Verb::Octal => format!("{:o}", n),
            Verb::Binary => format!("{:b}", n),
        }
    }
}

/// A pattern such as `%03d`, `page-%d` or `%-4x`: literal text around exactly one directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    head: String,
    tail: String,
    zero_pad: bool,
    left_align: bool,
    width: usize,
    verb: Verb,
}

impl NumberPattern {
    /// Parses the text between `{` and `}`. An empty pattern is the same as `%d`.
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        if pattern.is_empty() {
            return Self::parse("%d");
        }

        let mut head = String::new();
        let mut tail = String::new();
        let mut directive: Option<(bool, bool, usize, Verb)> = None;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                if directive.is_some() {
                    tail.push(c);
                } else {
                    head.push(c);
                }
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                if directive.is_some() {
                    tail.push('%');
                } else {
                    head.push('%');
                }
                continue;
            }
            if directive.is_some() {
                return Err(TemplateError::MultipleDirectives(pattern.to_string()));
            }

            let mut zero_pad = false;
            let mut left_align = false;
            while let Some(&flag) = chars.peek() {
                match flag {
                    '0' => zero_pad = true,
                    '-' => left_align = true,
                    _ => break,
                }
                chars.next();
            }

            let mut width = 0usize;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = width
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(digit as usize))
                    .ok_or_else(|| TemplateError::InvalidPattern(pattern.to_string()))?;
                chars.next();
            }
            if width > MAX_WIDTH {
                return Err(TemplateError::InvalidPattern(pattern.to_string()));
            }

            let verb_char = chars
                .next()
                .ok_or_else(|| TemplateError::InvalidPattern(pattern.to_string()))?;
            let verb = Verb::from_char(verb_char).ok_or(TemplateError::UnknownVerb(verb_char))?;
            directive = Some((zero_pad, left_align, width, verb));
        }

        let (zero_pad, left_align, width, verb) =
            directive.ok_or_else(|| TemplateError::NoDirective(pattern.to_string()))?;
        Ok(Self {
            head,
            tail,
            zero_pad,
            left_align,
            width,
            verb,
        })
    }

    /// Formats `n`. Left alignment pads with spaces on the right and wins over zero padding.
    pub fn format(&self, n: u64) -> String {
        let digits = self.verb.render(n);
        let padded = if digits.len() >= self.width {
            digits
        } else if self.left_align {
            format!("{:<width$}", digits, width = self.width)
        } else if self.zero_pad {
            format!("{:0>width$}", digits, width = self.width)
        } else {
            format!("{:>width$}", digits, width = self.width)
        };
        format!("{}{}{}", self.head, padded, self.tail)
    }
}
