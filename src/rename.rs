// This module writes the renaming header used when the library is compiled per ISA.
// Each function in the table gets short call-site macros (`xsin`, `ysin_u1`, ...)
// mapped to the fully qualified symbol for a given width and ISA. The output has two
// branches selected by the DETERMINISTIC macro: the regular build aliases the `x`
// family to the unprefixed symbol and the `y` family to the prefixed one, while the
// deterministic build aliases only the `x` family, straight to the prefixed symbol.
// Lines follow table order exactly and are never deduplicated; two descriptors that
// render the same token show up as a redefinition when the C compiler reads the file.

//! Alias table emission for rename mode.

use std::io::Write;

use log::debug;

use crate::error::GenResult;
use crate::funcproto::FunctionDescriptor;
use crate::naming::{Precision, SymbolName};

/// Build variant a table is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    /// Symbols bound through dispatch; both `x` and `y` families.
    Dispatch,
    /// Symbols fixed per ISA; `x` family only, bound to the prefixed name.
    Deterministic,
}

/// Writes the `#define` alias tables for one width/ISA combination.
#[derive(Debug, Clone, Copy)]
pub struct AliasTableEmitter<'a> {
    pub prefix: &'a str,
    pub dp_width: &'a str,
    pub sp_width: &'a str,
    /// ISA label, `None` when the parameter was not given.
    pub isa: Option<&'a str>,
}

impl<'a> AliasTableEmitter<'a> {
    pub fn width(&self, precision: Precision) -> &'a str {
        match precision {
            Precision::Double => self.dp_width,
            Precision::Single => self.sp_width,
        }
    }

    /// Short call-site token, e.g. `xsinf_u1`.
    pub fn token(family: char, descriptor: &FunctionDescriptor, precision: Precision) -> String {
        let suffix = if descriptor.accuracy().is_some() {
            descriptor.ulp_suffix.as_str()
        } else {
            ""
        };
        format!("{family}{}{}{suffix}", descriptor.name, precision.token_suffix())
    }

    /// Fully qualified symbol a token is aliased to.
    pub fn symbol(
        &self,
        descriptor: &FunctionDescriptor,
        precision: Precision,
        prefix: &str,
    ) -> String {
        let isa = self.isa.unwrap_or("");
        SymbolName::new(descriptor, prefix, precision, self.width(precision), isa)
            .with_isa_separator(self.isa.is_some())
            .to_string()
    }

    /// Macro lines for one descriptor at one precision.
    pub fn alias_lines(
        &self,
        descriptor: &FunctionDescriptor,
        precision: Precision,
        variant: BuildVariant,
    ) -> Vec<String> {
        let x = Self::token('x', descriptor, precision);
        match variant {
            BuildVariant::Dispatch => vec![
                format!("#define {x} {}", self.symbol(descriptor, precision, "")),
                format!(
                    "#define {} {}",
                    Self::token('y', descriptor, precision),
                    self.symbol(descriptor, precision, self.prefix)
                ),
            ],
            BuildVariant::Deterministic => vec![format!(
                "#define {x} {}",
                self.symbol(descriptor, precision, self.prefix)
            )],
        }
    }

    fn write_block<W: Write>(
        &self,
        out: &mut W,
        funcs: &[FunctionDescriptor],
        variant: BuildVariant,
    ) -> GenResult<()> {
        for (i, precision) in [Precision::Double, Precision::Single].into_iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            for descriptor in funcs {
                for line in self.alias_lines(descriptor, precision, variant) {
                    writeln!(out, "{line}")?;
                }
            }
        }
        Ok(())
    }

    /// Write both build variants for every descriptor in `funcs`.
    pub fn write<W: Write>(&self, out: &mut W, funcs: &[FunctionDescriptor]) -> GenResult<()> {
        debug!(
            "alias tables: {} functions, widths {}/{}, isa {:?}",
            funcs.len(),
            self.dp_width,
            self.sp_width,
            self.isa
        );

        writeln!(out, "#ifndef DETERMINISTIC")?;
        writeln!(out)?;
        self.write_block(out, funcs, BuildVariant::Dispatch)?;
        writeln!(out)?;
        writeln!(out, "#else //#ifndef DETERMINISTIC")?;
        writeln!(out)?;
        self.write_block(out, funcs, BuildVariant::Deterministic)?;
        writeln!(out)?;
        writeln!(out, "#endif // #ifndef DETERMINISTIC")?;
        Ok(())
    }
}
