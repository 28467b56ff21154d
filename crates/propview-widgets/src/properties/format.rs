#![forbid(unsafe_code)]

//! Display templates for linked values.
//!
//! A template holds literal text around exactly one placeholder:
//!
//! ```text
//! "pos: {:06.2} px"
//!        ^ ^ ^
//!        | | precision
//!        | width
//!        zero flag
//! ```
//!
//! The placeholder grammar is `{` [`:` [`0`] [width] [`.` precision] [type]] `}`
//! where type is one of `x X o b e E ?`. Literal braces are written `{{` and
//! `}}`. Templates are parsed once when the value is added; rendering only
//! writes into a caller-provided buffer.

use std::fmt::{
    self, Binary, Debug, Display, LowerExp, LowerHex, Octal, UpperExp, UpperHex, Write as _,
};
use std::str::FromStr;

use super::entry::ValueKind;

/// Widest field a template may request.
pub const MAX_WIDTH: usize = 256;

/// How the placeholder's argument is converted to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conversion {
    #[default]
    Display,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
    LowerExp,
    UpperExp,
    Debug,
}

impl Conversion {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'x' => Self::LowerHex,
            'X' => Self::UpperHex,
            'o' => Self::Octal,
            'b' => Self::Binary,
            'e' => Self::LowerExp,
            'E' => Self::UpperExp,
            '?' => Self::Debug,
            _ => return None,
        })
    }

    /// Type character, empty for plain display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Display => "",
            Self::LowerHex => "x",
            Self::UpperHex => "X",
            Self::Octal => "o",
            Self::Binary => "b",
            Self::LowerExp => "e",
            Self::UpperExp => "E",
            Self::Debug => "?",
        }
    }

    /// Whether values of `kind` can be written with this conversion.
    pub const fn supports(self, kind: ValueKind) -> bool {
        match self {
            Self::Display | Self::Debug => true,
            Self::LowerHex | Self::UpperHex | Self::Octal | Self::Binary => {
                matches!(kind, ValueKind::Byte | ValueKind::Int)
            }
            Self::LowerExp | Self::UpperExp => {
                matches!(kind, ValueKind::Byte | ValueKind::Int | ValueKind::Float)
            }
        }
    }
}

/// Reason a template was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No `{}` in the template.
    MissingPlaceholder,
    /// A second placeholder starts at `offset`.
    ExtraPlaceholder { offset: usize },
    /// The `{` at `offset` is never closed.
    UnclosedBrace { offset: usize },
    /// Lone `}` at `offset`; write `}}` for a literal brace.
    UnmatchedBrace { offset: usize },
    /// Unrecognised character inside the placeholder.
    UnknownConversion { found: char },
    /// Width or precision at `offset` is malformed or larger than [`MAX_WIDTH`].
    BadNumber { offset: usize },
    /// The conversion does not apply to the linked value's type.
    UnsupportedConversion { conversion: Conversion, kind: ValueKind },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPlaceholder => f.write_str("template has no `{}` placeholder"),
            Self::ExtraPlaceholder { offset } => {
                write!(f, "second placeholder at byte {offset}; only one is allowed")
            }
            Self::UnclosedBrace { offset } => write!(f, "unclosed `{{` at byte {offset}"),
            Self::UnmatchedBrace { offset } => write!(f, "unmatched `}}` at byte {offset}"),
            Self::UnknownConversion { found } => write!(f, "unknown conversion `{found}`"),
            Self::BadNumber { offset } => write!(f, "bad width or precision at byte {offset}"),
            Self::UnsupportedConversion { conversion, kind } => write!(
                f,
                "conversion `{}` cannot format {} values",
                conversion.as_str(),
                kind.as_str()
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// A parsed display template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSpec {
    prefix: String,
    suffix: String,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

impl FormatSpec {
    /// Parse `template`.
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut spec = Self::default();
        let mut seen_placeholder = false;
        let mut chars = template.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            let literal = match c {
                '{' if chars.peek().is_some_and(|&(_, n)| n == '{') => {
                    chars.next();
                    '{'
                }
                '}' if chars.peek().is_some_and(|&(_, n)| n == '}') => {
                    chars.next();
                    '}'
                }
                '}' => return Err(FormatError::UnmatchedBrace { offset }),
                '{' => {
                    if seen_placeholder {
                        return Err(FormatError::ExtraPlaceholder { offset });
                    }
                    let inner_start = offset + 1;
                    let close = template[inner_start..]
                        .find('}')
                        .ok_or(FormatError::UnclosedBrace { offset })?;
                    let inner = &template[inner_start..inner_start + close];
                    if let Some(nested) = inner.find('{') {
                        return Err(FormatError::UnclosedBrace {
                            offset: inner_start + nested,
                        });
                    }
                    spec.parse_placeholder(inner, inner_start)?;
                    seen_placeholder = true;
                    while chars.next_if(|&(i, _)| i <= inner_start + close).is_some() {}
                    continue;
                }
                c => c,
            };
            if seen_placeholder {
                spec.suffix.push(literal);
            } else {
                spec.prefix.push(literal);
            }
        }

        if !seen_placeholder {
            return Err(FormatError::MissingPlaceholder);
        }
        Ok(spec)
    }

    fn parse_placeholder(&mut self, inner: &str, base: usize) -> Result<(), FormatError> {
        if inner.is_empty() {
            return Ok(());
        }
        let Some(body) = inner.strip_prefix(':') else {
            let found = inner.chars().next().unwrap_or('{');
            return Err(FormatError::UnknownConversion { found });
        };
        let mut pos = 0;
        let base = base + 1;

        if body.starts_with('0') {
            self.zero_pad = true;
            pos = 1;
        }

        let digits = leading_digits(&body[pos..]);
        if digits > 0 {
            self.width = Some(parse_bounded(&body[pos..pos + digits], base + pos)?);
            pos += digits;
        }

        if body[pos..].starts_with('.') {
            let dot = pos;
            pos += 1;
            let digits = leading_digits(&body[pos..]);
            if digits == 0 {
                return Err(FormatError::BadNumber { offset: base + dot });
            }
            self.precision = Some(parse_bounded(&body[pos..pos + digits], base + pos)?);
            pos += digits;
        }

        let mut rest = body[pos..].chars();
        if let Some(c) = rest.next() {
            self.conversion =
                Conversion::from_char(c).ok_or(FormatError::UnknownConversion { found: c })?;
        }
        if let Some(c) = rest.next() {
            return Err(FormatError::UnknownConversion { found: c });
        }
        Ok(())
    }

    /// Reject the template if its conversion cannot format `kind`.
    pub fn validate_for(&self, kind: ValueKind) -> Result<(), FormatError> {
        if self.conversion.supports(kind) {
            Ok(())
        } else {
            Err(FormatError::UnsupportedConversion {
                conversion: self.conversion,
                kind,
            })
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    pub fn zero_pad(&self) -> bool {
        self.zero_pad
    }

    /// Append the rendered template to `out`.
    ///
    /// Numbers are right-aligned in the field and strings left-aligned. The
    /// zero flag pads numbers after their sign. A conversion the argument
    /// does not support falls back to plain display.
    pub fn write_value(&self, out: &mut String, arg: FormatArg<'_>) {
        out.push_str(&self.prefix);
        let start = out.len();
        // Writing into a String cannot fail.
        let _ = arg.write_converted(out, self.conversion, self.precision);
        if let Some(width) = self.width {
            pad_field(out, start, width, arg.is_numeric(), self.zero_pad);
        }
        out.push_str(&self.suffix);
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, &self.prefix)?;
        f.write_char('{')?;
        let flagged = self.zero_pad
            || self.width.is_some()
            || self.precision.is_some()
            || self.conversion != Conversion::Display;
        if flagged {
            f.write_char(':')?;
            if self.zero_pad {
                f.write_char('0')?;
            }
            if let Some(width) = self.width {
                write!(f, "{width}")?;
            }
            if let Some(precision) = self.precision {
                write!(f, ".{precision}")?;
            }
            f.write_str(self.conversion.as_str())?;
        }
        f.write_char('}')?;
        write_escaped(f, &self.suffix)
    }
}

/// A value handed to [`FormatSpec::write_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'v> {
    Bool(bool),
    Byte(u8),
    Int(i32),
    Float(f32),
    Str(&'v str),
}

impl FormatArg<'_> {
    const fn is_numeric(&self) -> bool {
        matches!(self, Self::Byte(_) | Self::Int(_) | Self::Float(_))
    }

    fn write_converted(
        &self,
        out: &mut String,
        conversion: Conversion,
        precision: Option<usize>,
    ) -> fmt::Result {
        match *self {
            Self::Bool(v) => match conversion {
                Conversion::Debug => write!(out, "{v:?}"),
                _ => write!(out, "{v}"),
            },
            Self::Byte(v) => write_integer(out, v, conversion),
            Self::Int(v) => write_integer(out, v, conversion),
            Self::Float(v) => match (conversion, precision) {
                (Conversion::LowerExp, Some(p)) => write!(out, "{v:.p$e}"),
                (Conversion::LowerExp, None) => write!(out, "{v:e}"),
                (Conversion::UpperExp, Some(p)) => write!(out, "{v:.p$E}"),
                (Conversion::UpperExp, None) => write!(out, "{v:E}"),
                (Conversion::Debug, _) => write!(out, "{v:?}"),
                (_, Some(p)) => write!(out, "{v:.p$}"),
                (_, None) => write!(out, "{v}"),
            },
            Self::Str(v) => match (conversion, precision) {
                (Conversion::Debug, _) => write!(out, "{v:?}"),
                (_, Some(p)) => write!(out, "{v:.p$}"),
                (_, None) => {
                    out.push_str(v);
                    Ok(())
                }
            },
        }
    }
}

fn write_integer<T>(out: &mut String, v: T, conversion: Conversion) -> fmt::Result
where
    T: Display + Debug + LowerHex + UpperHex + Octal + Binary + LowerExp + UpperExp,
{
    match conversion {
        Conversion::Display => write!(out, "{v}"),
        Conversion::LowerHex => write!(out, "{v:x}"),
        Conversion::UpperHex => write!(out, "{v:X}"),
        Conversion::Octal => write!(out, "{v:o}"),
        Conversion::Binary => write!(out, "{v:b}"),
        Conversion::LowerExp => write!(out, "{v:e}"),
        Conversion::UpperExp => write!(out, "{v:E}"),
        Conversion::Debug => write!(out, "{v:?}"),
    }
}

fn pad_field(out: &mut String, start: usize, width: usize, numeric: bool, zero_pad: bool) {
    let len = out[start..].chars().count();
    let Some(fill) = width.checked_sub(len).filter(|&n| n > 0) else {
        return;
    };
    if !numeric {
        out.extend(std::iter::repeat_n(' ', fill));
        return;
    }
    let (at, pad) = if zero_pad {
        let signed = out[start..].starts_with(['-', '+']);
        (start + usize::from(signed), '0')
    } else {
        (start, ' ')
    };
    for _ in 0..fill {
        out.insert(at, pad);
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn parse_bounded(digits: &str, offset: usize) -> Result<usize, FormatError> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|&n| n <= MAX_WIDTH)
        .ok_or(FormatError::BadNumber { offset })
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '{' => f.write_str("{{")?,
            '}' => f.write_str("}}")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
