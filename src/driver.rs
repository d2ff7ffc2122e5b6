// This module turns the positional command line into an explicit operation and runs
// it. Three or four parameters select rename mode, which writes the alias tables for
// one width/ISA combination. Eight or more parameters select declaration mode, which
// writes, inside one architecture guard, an include-guarded pair typedef and the full
// set of prototypes for each precision. The ISA label is read only when exactly nine
// parameters are given; longer lists are accepted and their tail ignored. Fewer than
// three, or five to seven, is a usage error. Declaration mode also applies the target
// quirks: the sve ISA has no fixed width and uses the compiler's native tuple types
// for pairs, and the AArch64 vector procedure call standard attribute is added for
// advsimd when GeneratorConfig asks.

//! Mode selection and orchestration.

use std::io::Write;

use log::{debug, info};

use crate::error::{GenError, GenResult};
use crate::funcproto::FunctionDescriptor;
use crate::naming::{attribute_prefix, pair_type_name, Precision};
use crate::prototype::{PrototypeFormatter, VectorTypes};
use crate::rename::AliasTableEmitter;

/// ISA label of the scalable vector extension.
pub const SCALABLE_ISA: &str = "sve";
/// Width label used when the vector length is not a compile-time constant.
pub const SCALABLE_WIDTH: &str = "x";
/// ISA label that can take the vector procedure call standard.
pub const VECTOR_PCS_ISA: &str = "advsimd";
/// Attribute text selecting the AArch64 vector procedure call standard.
pub const VECTOR_PCS_ATTR: &str = " __attribute__((aarch64_vector_pcs))";

/// Parameters of rename mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameParams {
    pub prefix: String,
    pub dp_width: String,
    pub sp_width: String,
    pub isa: Option<String>,
}

/// Parameters of declaration mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationParams {
    pub prefix: String,
    pub dp_width: String,
    pub sp_width: String,
    /// Vector double type; `-` suppresses everything inside the guard.
    pub vdouble: String,
    pub vfloat: String,
    pub vint: String,
    /// Accepted for command line compatibility; no category uses it.
    pub vint2: String,
    /// Macro that must be defined for the block to be compiled.
    pub architecture: String,
    pub isa: String,
}

impl DeclarationParams {
    /// Scalable targets are recognized by ISA label alone.
    pub fn is_scalable(&self) -> bool {
        self.isa == SCALABLE_ISA
    }

    /// Width labels for double and single precision.
    pub fn widths(&self) -> (&str, &str) {
        if self.is_scalable() {
            (SCALABLE_WIDTH, SCALABLE_WIDTH)
        } else {
            (self.dp_width.as_str(), self.sp_width.as_str())
        }
    }

    pub fn call_conv(&self, config: &GeneratorConfig) -> &'static str {
        if config.vector_pcs && self.isa == VECTOR_PCS_ISA {
            VECTOR_PCS_ATTR
        } else {
            ""
        }
    }
}

/// Operation selected by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Rename(RenameParams),
    Declaration(DeclarationParams),
}

impl Invocation {
    /// Select the mode from positional parameters, program name excluded.
    pub fn from_params<S: AsRef<str>>(program: &str, params: &[S]) -> GenResult<Self> {
        let p: Vec<&str> = params.iter().map(|s| s.as_ref()).collect();
        let invocation = match p.len() {
            3 | 4 => Invocation::Rename(RenameParams {
                prefix: p[0].to_string(),
                dp_width: p[1].to_string(),
                sp_width: p[2].to_string(),
                isa: p.get(3).map(|s| s.to_string()),
            }),
            n if n >= 8 => Invocation::Declaration(DeclarationParams {
                prefix: p[0].to_string(),
                dp_width: p[1].to_string(),
                sp_width: p[2].to_string(),
                vdouble: p[3].to_string(),
                vfloat: p[4].to_string(),
                vint: p[5].to_string(),
                vint2: p[6].to_string(),
                architecture: p[7].to_string(),
                // The ISA is only read from an exact nine-parameter call.
                isa: if n == 9 { p[8].to_string() } else { String::new() },
            }),
            n => {
                debug!("{n} parameters select no mode");
                return Err(GenError::Usage {
                    program: program.to_string(),
                });
            }
        };
        debug!("selected {invocation:?}");
        Ok(invocation)
    }
}

/// Build-time switches of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Emit the AArch64 vector PCS attribute for advsimd prototypes.
    pub vector_pcs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vector_pcs: cfg!(feature = "aavpcs"),
        }
    }
}

/// Runs an [`Invocation`] against a function table.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'t> {
    funcs: &'t [FunctionDescriptor],
    config: GeneratorConfig,
}

impl<'t> Generator<'t> {
    pub fn new(funcs: &'t [FunctionDescriptor]) -> Self {
        Self {
            funcs,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn run<W: Write>(&self, invocation: &Invocation, out: &mut W) -> GenResult<()> {
        match invocation {
            Invocation::Rename(params) => self.rename(params, out),
            Invocation::Declaration(params) => self.declare(params, out),
        }
    }

    /// Rename mode: alias tables for both precisions and build variants.
    pub fn rename<W: Write>(&self, params: &RenameParams, out: &mut W) -> GenResult<()> {
        let emitter = AliasTableEmitter {
            prefix: attribute_prefix(&params.prefix),
            dp_width: &params.dp_width,
            sp_width: &params.sp_width,
            isa: params.isa.as_deref(),
        };
        emitter.write(out, self.funcs)?;
        info!("wrote alias tables for {} functions", self.funcs.len());
        Ok(())
    }

    /// Declaration mode: typedefs and prototypes inside the architecture guard.
    pub fn declare<W: Write>(&self, params: &DeclarationParams, out: &mut W) -> GenResult<()> {
        writeln!(out, "#ifdef {}", params.architecture)?;

        if params.vdouble != "-" {
            let vdouble2 = pair_type_name(&params.vdouble);
            let vfloat2 = pair_type_name(&params.vfloat);
            let (dp_width, sp_width) = params.widths();
            let call_conv = params.call_conv(&self.config);
            debug!(
                "declarations: pair types {vdouble2}/{vfloat2}, widths {dp_width}/{sp_width}, \
                 scalable {}",
                params.is_scalable()
            );

            let double = PrototypeFormatter {
                precision: Precision::Double,
                width: dp_width,
                types: VectorTypes {
                    fp: &params.vdouble,
                    fp_pair: &vdouble2,
                    vint: &params.vint,
                },
                isa: &params.isa,
                call_conv,
            };
            let single = PrototypeFormatter {
                precision: Precision::Single,
                width: sp_width,
                types: VectorTypes {
                    fp: &params.vfloat,
                    fp_pair: &vfloat2,
                    vint: &params.vint,
                },
                ..double
            };

            writeln!(out)?;
            self.write_pair_typedef(out, params, Precision::Double, &params.vdouble, &vdouble2)?;
            writeln!(out)?;
            self.write_prototypes(out, &double, &params.prefix)?;

            writeln!(out)?;
            self.write_pair_typedef(out, params, Precision::Single, &params.vfloat, &vfloat2)?;
            writeln!(out)?;
            self.write_prototypes(out, &single, &params.prefix)?;
        }

        writeln!(out, "#endif")?;
        info!(
            "wrote declarations for {} functions under {}",
            self.funcs.len(),
            params.architecture
        );
        Ok(())
    }

    fn write_pair_typedef<W: Write>(
        &self,
        out: &mut W,
        params: &DeclarationParams,
        precision: Precision,
        scalar: &str,
        pair: &str,
    ) -> GenResult<()> {
        writeln!(out, "#ifndef {pair}_DEFINED")?;
        if params.is_scalable() {
            let native = match precision {
                Precision::Double => "svfloat64x2_t",
                Precision::Single => "svfloat32x2_t",
            };
            writeln!(out, "typedef {native} {pair};")?;
        } else {
            writeln!(out, "typedef struct {{")?;
            writeln!(out, "  {scalar} x, y;")?;
            writeln!(out, "}} {pair};")?;
        }
        writeln!(out, "#define {pair}_DEFINED")?;
        writeln!(out, "#endif")?;
        Ok(())
    }

    fn write_prototypes<W: Write>(
        &self,
        out: &mut W,
        formatter: &PrototypeFormatter<'_>,
        prefix: &str,
    ) -> GenResult<()> {
        let prefix = attribute_prefix(prefix);
        for descriptor in self.funcs {
            formatter.write_declaration(out, descriptor, "")?;
            formatter.write_declaration(out, descriptor, prefix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(list: &[&str]) -> GenResult<Invocation> {
        Invocation::from_params("mkrename", list)
    }

    #[test]
    fn too_few_parameters_is_usage_error() {
        for n in 0..3 {
            let list = vec!["a"; n];
            assert!(matches!(params(&list), Err(GenError::Usage { .. })), "{n}");
        }
    }

    #[test]
    fn counts_between_modes_are_usage_errors() {
        for n in [5, 6, 7] {
            let list = vec!["a"; n];
            assert!(matches!(params(&list), Err(GenError::Usage { .. })), "{n}");
        }
    }

    #[test]
    fn rename_mode_selection() {
        let inv = params(&["-", "2", "4"]).unwrap();
        assert_eq!(
            inv,
            Invocation::Rename(RenameParams {
                prefix: "-".into(),
                dp_width: "2".into(),
                sp_width: "4".into(),
                isa: None,
            })
        );
        let Invocation::Rename(p) = params(&["cinz_", "2", "4", "sse2"]).unwrap() else {
            panic!("expected rename mode");
        };
        assert_eq!(p.isa.as_deref(), Some("sse2"));
    }

    #[test]
    fn declaration_mode_selection() {
        let list = ["-", "2", "4", "__m128d", "__m128", "__m128i", "__m128i", "__SSE2__"];
        let Invocation::Declaration(p) = params(&list).unwrap() else {
            panic!("expected declaration mode");
        };
        assert_eq!(p.architecture, "__SSE2__");
        assert_eq!(p.isa, "");
        assert_eq!(p.widths(), ("2", "4"));
    }

    #[test]
    fn ten_or_more_parameters_drop_the_isa() {
        for n in [10, 12] {
            let mut list = vec!["a"; n];
            list[7] = "__AVX__";
            list[8] = "avx";
            let Invocation::Declaration(p) = params(&list).unwrap() else {
                panic!("expected declaration mode for {n}");
            };
            assert_eq!(p.architecture, "__AVX__");
            assert_eq!(p.isa, "", "{n}");
        }
    }

    #[test]
    fn scalable_only_by_isa_label() {
        let list = [
            "-", "2", "4", "svfloat64_t", "svfloat32_t", "svint32_t", "svint32_t",
            "__ARM_FEATURE_SVE",
        ];
        let Invocation::Declaration(p) = params(&list).unwrap() else {
            panic!("expected declaration mode");
        };
        assert!(!p.is_scalable());
        assert_eq!(p.widths(), ("2", "4"));

        let mut sve = p.clone();
        sve.architecture = "__SVE_ANYWHERE__".into();
        sve.isa = "sve".into();
        assert!(sve.is_scalable());
        assert_eq!(sve.widths(), ("x", "x"));
    }

    #[test]
    fn scalable_target_widths() {
        let list = [
            "-", "2", "4", "svfloat64_t", "svfloat32_t", "svint32_t", "svint32_t",
            "__ARM_FEATURE_SVE", "sve",
        ];
        let Invocation::Declaration(p) = params(&list).unwrap() else {
            panic!("expected declaration mode");
        };
        assert!(p.is_scalable());
        assert_eq!(p.widths(), ("x", "x"));
    }

    #[test]
    fn vector_pcs_needs_config_and_isa() {
        let list = [
            "-", "2", "4", "float64x2_t", "float32x4_t", "int32x2_t", "int32x4_t",
            "__ARM_NEON", "advsimd",
        ];
        let Invocation::Declaration(p) = params(&list).unwrap() else {
            panic!("expected declaration mode");
        };
        assert_eq!(p.call_conv(&GeneratorConfig { vector_pcs: true }), VECTOR_PCS_ATTR);
        assert_eq!(p.call_conv(&GeneratorConfig { vector_pcs: false }), "");

        let mut other = p.clone();
        other.isa = "sve".into();
        assert_eq!(other.call_conv(&GeneratorConfig { vector_pcs: true }), "");
    }
}
