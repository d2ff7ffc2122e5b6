// This module renders the C prototypes that declaration mode writes for every entry
// of the function table. Each function category maps to a fixed shape (return type,
// ordered parameter types, whether the vector calling convention applies and whether
// a single precision variant exists) through a static lookup table, so the mapping is
// exhaustive and can be checked one category at a time. PrototypeFormatter binds one
// precision, vector width, ISA label and set of vector type names, then turns any
// descriptor into a single `IMPORT CONST ...;` line, or nothing when the category has
// no variant at that precision.

//! Prototype rendering for declaration mode.

use std::io::Write;

use log::trace;

use crate::error::GenResult;
use crate::funcproto::{FuncType, FunctionDescriptor};
use crate::naming::{Precision, SymbolName};

use TypeKind::{Fp, FpPair, Int, VInt, VoidPtr};

/// Abstract type appearing in a prototype, resolved per precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Vector of floating-point values.
    Fp,
    /// Structure wrapping two `Fp` vectors.
    FpPair,
    /// Vector of integers.
    VInt,
    /// Plain C `int`.
    Int,
    /// Plain C `void*`.
    VoidPtr,
}

/// Return and parameter layout of one function category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub ret: TypeKind,
    pub params: &'static [TypeKind],
    /// No single precision variant exists.
    pub double_only: bool,
    /// Takes the vector calling convention attribute.
    pub vector_cc: bool,
}

/// Shapes indexed by category code.
pub static SHAPES: [Shape; 9] = [
    Shape {
        ret: Fp,
        params: &[Fp],
        double_only: false,
        vector_cc: true,
    },
    Shape {
        ret: Fp,
        params: &[Fp, Fp],
        double_only: false,
        vector_cc: true,
    },
    Shape {
        ret: FpPair,
        params: &[Fp],
        double_only: false,
        vector_cc: true,
    },
    Shape {
        ret: Fp,
        params: &[Fp, VInt],
        double_only: true,
        vector_cc: true,
    },
    Shape {
        ret: VInt,
        params: &[Fp],
        double_only: true,
        vector_cc: true,
    },
    Shape {
        ret: Fp,
        params: &[Fp, Fp, Fp],
        double_only: false,
        vector_cc: true,
    },
    Shape {
        ret: FpPair,
        params: &[Fp],
        double_only: false,
        vector_cc: true,
    },
    // getInt and getPtr take no vectors and are defined without the attribute.
    Shape {
        ret: Int,
        params: &[Int],
        double_only: false,
        vector_cc: false,
    },
    Shape {
        ret: VoidPtr,
        params: &[Int],
        double_only: false,
        vector_cc: false,
    },
];

impl FuncType {
    pub fn shape(self) -> &'static Shape {
        &SHAPES[usize::from(self.code())]
    }
}

/// C spellings of the vector types for one precision.
#[derive(Debug, Clone, Copy)]
pub struct VectorTypes<'a> {
    pub fp: &'a str,
    pub fp_pair: &'a str,
    pub vint: &'a str,
}

impl<'a> VectorTypes<'a> {
    pub fn resolve(&self, kind: TypeKind) -> &'a str {
        match kind {
            Fp => self.fp,
            FpPair => self.fp_pair,
            VInt => self.vint,
            Int => "int",
            VoidPtr => "void*",
        }
    }
}

/// Renders declarations for one precision, width and ISA.
#[derive(Debug, Clone, Copy)]
pub struct PrototypeFormatter<'a> {
    pub precision: Precision,
    pub width: &'a str,
    pub types: VectorTypes<'a>,
    pub isa: &'a str,
    /// Attribute text placed after the parameter list, possibly empty.
    pub call_conv: &'a str,
}

impl<'a> PrototypeFormatter<'a> {
    /// Declaration line for `descriptor`, or `None` if it has no variant at
    /// this precision.
    pub fn declaration(&self, descriptor: &FunctionDescriptor, prefix: &str) -> Option<String> {
        let shape = descriptor.func_type.shape();
        if self.precision == Precision::Single && shape.double_only {
            return None;
        }

        let symbol = SymbolName::new(descriptor, prefix, self.precision, self.width, self.isa);
        let params: Vec<&str> = shape.params.iter().map(|&p| self.types.resolve(p)).collect();
        let call_conv = if shape.vector_cc { self.call_conv } else { "" };

        Some(format!(
            "IMPORT CONST {} {}({}){};",
            self.types.resolve(shape.ret),
            symbol,
            params.join(", "),
            call_conv
        ))
    }

    /// Write the declaration line for `descriptor`, if any.
    pub fn write_declaration<W: Write>(
        &self,
        out: &mut W,
        descriptor: &FunctionDescriptor,
        prefix: &str,
    ) -> GenResult<()> {
        match self.declaration(descriptor, prefix) {
            Some(line) => writeln!(out, "{line}")?,
            None => trace!(
                "skipping {} {:?}: double precision only",
                descriptor.name,
                self.precision
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funcproto::UlpSuffix;

    fn formatter(precision: Precision, call_conv: &'static str) -> PrototypeFormatter<'static> {
        let (fp, fp_pair, width) = match precision {
            Precision::Double => ("__m256d", "Sleef___m256d_2", "4"),
            Precision::Single => ("__m256", "Sleef___m256_2", "8"),
        };
        PrototypeFormatter {
            precision,
            width,
            types: VectorTypes { fp, fp_pair, vint: "__m128i" },
            isa: "avx2",
            call_conv,
        }
    }

    fn desc(name: &'static str, ulp: i32, code: u8) -> FunctionDescriptor {
        let func_type = FuncType::from_code(code).expect("valid category");
        FunctionDescriptor::new(name, ulp, UlpSuffix::None, func_type)
    }

    #[test]
    fn shape_table_per_category() {
        let expected: [(TypeKind, &[TypeKind]); 9] = [
            (Fp, &[Fp]),
            (Fp, &[Fp, Fp]),
            (FpPair, &[Fp]),
            (Fp, &[Fp, VInt]),
            (VInt, &[Fp]),
            (Fp, &[Fp, Fp, Fp]),
            (FpPair, &[Fp]),
            (Int, &[Int]),
            (VoidPtr, &[Int]),
        ];
        for (ty, (ret, params)) in FuncType::ALL.iter().zip(expected) {
            let shape = ty.shape();
            assert_eq!(shape.ret, ret, "{ty:?}");
            assert_eq!(shape.params, params, "{ty:?}");
            assert_eq!(shape.double_only, matches!(ty, FuncType::Ldexp | FuncType::Ilogb));
            assert_eq!(shape.vector_cc, !matches!(ty, FuncType::GetInt | FuncType::GetPtr));
        }
    }

    #[test]
    fn unary_with_accuracy() {
        let line = formatter(Precision::Double, "").declaration(&desc("sin", 10, 0), "");
        assert_eq!(
            line.as_deref(),
            Some("IMPORT CONST __m256d Sleef_sind4_u10avx2(__m256d);")
        );
    }

    #[test]
    fn prefixed_binary_single() {
        let line = formatter(Precision::Single, "").declaration(&desc("atan2", 35, 1), "finz_");
        assert_eq!(
            line.as_deref(),
            Some("IMPORT CONST __m256 Sleef_finz_atan2f8_u35avx2(__m256, __m256);")
        );
    }

    #[test]
    fn pair_and_int_types() {
        let fmt = formatter(Precision::Double, "");
        assert_eq!(
            fmt.declaration(&desc("sincos", 10, 2), "").as_deref(),
            Some("IMPORT CONST Sleef___m256d_2 Sleef_sincosd4_u10avx2(__m256d);")
        );
        assert_eq!(
            fmt.declaration(&desc("ldexp", -1, 3), "").as_deref(),
            Some("IMPORT CONST __m256d Sleef_ldexpd4_avx2(__m256d, __m128i);")
        );
        assert_eq!(
            fmt.declaration(&desc("ilogb", -1, 4), "").as_deref(),
            Some("IMPORT CONST __m128i Sleef_ilogbd4_avx2(__m256d);")
        );
        assert_eq!(
            fmt.declaration(&desc("fma", -1, 5), "").as_deref(),
            Some("IMPORT CONST __m256d Sleef_fmad4_avx2(__m256d, __m256d, __m256d);")
        );
        assert_eq!(
            fmt.declaration(&desc("modf", -1, 6), "").as_deref(),
            Some("IMPORT CONST Sleef___m256d_2 Sleef_modfd4_avx2(__m256d);")
        );
    }

    #[test]
    fn double_only_categories_skip_single() {
        let single = formatter(Precision::Single, "");
        assert_eq!(single.declaration(&desc("ldexp", -1, 3), ""), None);
        assert_eq!(single.declaration(&desc("ilogb", -1, 4), ""), None);
        for code in [0, 1, 2, 5, 6, 7, 8] {
            assert!(single.declaration(&desc("x", -1, code), "").is_some(), "{code}");
        }
    }

    #[test]
    fn call_conv_only_on_vector_categories() {
        let cc = " __attribute__((aarch64_vector_pcs))";
        let fmt = formatter(Precision::Double, cc);
        let sin = fmt.declaration(&desc("sin", 35, 0), "").unwrap_or_default();
        assert!(sin.ends_with("(__m256d) __attribute__((aarch64_vector_pcs));"));
        assert_eq!(
            fmt.declaration(&desc("getInt", -1, 7), "").as_deref(),
            Some("IMPORT CONST int Sleef_getIntd4_avx2(int);")
        );
        assert_eq!(
            fmt.declaration(&desc("getPtr", -1, 8), "").as_deref(),
            Some("IMPORT CONST void* Sleef_getPtrd4_avx2(int);")
        );
    }

    #[test]
    fn no_isa_no_separator() {
        let mut fmt = formatter(Precision::Double, "");
        fmt.isa = "";
        assert_eq!(
            fmt.declaration(&desc("fabs", -1, 0), "").as_deref(),
            Some("IMPORT CONST __m256d Sleef_fabsd4(__m256d);")
        );
    }

    #[test]
    fn write_declaration_appends_newline() {
        let mut out = Vec::new();
        let fmt = formatter(Precision::Single, "");
        fmt.write_declaration(&mut out, &desc("sin", 1, 0), "").unwrap();
        fmt.write_declaration(&mut out, &desc("ilogb", -1, 4), "").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "IMPORT CONST __m256 Sleef_sinf8_u01avx2(__m256);\n"
        );
    }
}
