//! Symbol and type name synthesis.
//!
//! Both emitters build fully qualified names of the form
//! `Sleef_<prefix><name><d|f><width>[_uNN]<isa>`. The prototype emitter and
//! the alias emitter differ only in when an underscore separates the ISA
//! label from a name without an accuracy code, so that choice is a field of
//! [`SymbolName`] rather than two formatting routines.

use std::fmt;

use crate::funcproto::FunctionDescriptor;

/// Floating-point precision of a generated symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Double,
    Single,
}

impl Precision {
    /// Letter that follows the base name in symbol names.
    pub fn letter(self) -> char {
        match self {
            Precision::Double => 'd',
            Precision::Single => 'f',
        }
    }

    /// Suffix of short alias tokens (`xsin` vs `xsinf`).
    pub fn token_suffix(self) -> &'static str {
        match self {
            Precision::Double => "",
            Precision::Single => "f",
        }
    }
}

/// Name of the structure wrapping a pair of SIMD vectors of `type_name`.
///
/// Vector types such as VSX's `vector float` contain spaces; they become
/// underscores so the result is a single identifier.
pub fn pair_type_name(type_name: &str) -> String {
    let mut name = String::with_capacity(type_name.len() + 8);
    name.push_str("Sleef_");
    name.extend(type_name.chars().map(|c| if c == ' ' { '_' } else { c }));
    name.push_str("_2");
    name
}

/// Attribute prefix given on the command line, where `-` stands for none.
pub fn attribute_prefix(raw: &str) -> &str {
    if raw == "-" {
        ""
    } else {
        raw
    }
}

/// A fully qualified library symbol, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct SymbolName<'a> {
    pub prefix: &'a str,
    pub name: &'a str,
    pub precision: Precision,
    pub width: &'a str,
    pub accuracy: Option<u32>,
    /// Underscore placed before `isa` when there is no accuracy code.
    pub isa_separator: bool,
    pub isa: &'a str,
}

impl<'a> SymbolName<'a> {
    pub fn new(
        descriptor: &'a FunctionDescriptor,
        prefix: &'a str,
        precision: Precision,
        width: &'a str,
        isa: &'a str,
    ) -> Self {
        Self {
            prefix,
            name: descriptor.name,
            precision,
            width,
            accuracy: descriptor.accuracy(),
            isa_separator: !isa.is_empty(),
            isa,
        }
    }

    pub fn with_isa_separator(mut self, isa_separator: bool) -> Self {
        self.isa_separator = isa_separator;
        self
    }
}

impl fmt::Display for SymbolName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sleef_{}{}{}{}",
            self.prefix,
            self.name,
            self.precision.letter(),
            self.width
        )?;
        match self.accuracy {
            Some(ulp) => write!(f, "_u{ulp:02}")?,
            None if self.isa_separator => f.write_str("_")?,
            None => {}
        }
        f.write_str(self.isa)
    }
}
