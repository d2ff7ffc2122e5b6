// This module holds the compiled-in function table that drives both generator modes.
// Every entry names one logical SLEEF function together with its accuracy tier (ulp),
// the suffix class used when building short call-site tokens, and its category. The
// category is a closed enum whose numeric codes match the table the C library was
// originally described with, so a code of 3 or 4 always means a double-only helper.
// The table is an explicit slice of known length; consumers iterate it in order and
// never rely on a terminating entry.

//! Function descriptor table.

use FuncType::*;
use UlpSuffix::{None as NoSuffix, U05, U1, U15, U35, U3500};

/// Shape category of a function, fixing its return and parameter types.
///
/// The discriminants are the category codes used by the C build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FuncType {
    /// `vf f(vf)`
    Unary = 0,
    /// `vf f(vf, vf)`
    Binary = 1,
    /// `vf2 f(vf)`, e.g. sincos.
    SinCos = 2,
    /// `vf f(vf, vi)`, double precision only.
    Ldexp = 3,
    /// `vi f(vf)`, double precision only.
    Ilogb = 4,
    /// `vf f(vf, vf, vf)`
    Ternary = 5,
    /// `vf2 f(vf)`, e.g. modf.
    Modf = 6,
    /// `int f(int)`
    GetInt = 7,
    /// `void* f(int)`
    GetPtr = 8,
}

impl FuncType {
    pub const ALL: [FuncType; 9] = [
        FuncType::Unary,
        FuncType::Binary,
        FuncType::SinCos,
        FuncType::Ldexp,
        FuncType::Ilogb,
        FuncType::Ternary,
        FuncType::Modf,
        FuncType::GetInt,
        FuncType::GetPtr,
    ];

    /// Map a numeric category code to its variant.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Suffix appended to short alias tokens for functions with an accuracy tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UlpSuffix {
    None = 0,
    U1 = 1,
    U05 = 2,
    U35 = 3,
    U15 = 4,
    U3500 = 5,
}

/// Suffix strings indexed by [`UlpSuffix`] discriminant.
pub const ULP_SUFFIX_STR: [&str; 6] = ["", "_u1", "_u05", "_u35", "_u15", "_u3500"];

impl UlpSuffix {
    pub const ALL: [UlpSuffix; 6] = [
        UlpSuffix::None,
        UlpSuffix::U1,
        UlpSuffix::U05,
        UlpSuffix::U35,
        UlpSuffix::U15,
        UlpSuffix::U3500,
    ];

    pub fn as_str(self) -> &'static str {
        ULP_SUFFIX_STR[self as usize]
    }
}

/// One logical function of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    /// Accuracy tier; negative means the symbol carries no `_uNN` code.
    pub ulp: i32,
    pub ulp_suffix: UlpSuffix,
    pub func_type: FuncType,
}

impl FunctionDescriptor {
    pub const fn new(
        name: &'static str,
        ulp: i32,
        ulp_suffix: UlpSuffix,
        func_type: FuncType,
    ) -> Self {
        Self {
            name,
            ulp,
            ulp_suffix,
            func_type,
        }
    }

    /// Accuracy tier when the function has one.
    pub fn accuracy(&self) -> Option<u32> {
        u32::try_from(self.ulp).ok()
    }
}

const fn f(
    name: &'static str,
    ulp: i32,
    ulp_suffix: UlpSuffix,
    func_type: FuncType,
) -> FunctionDescriptor {
    FunctionDescriptor::new(name, ulp, ulp_suffix, func_type)
}

/// Every function the vector libraries export, in emission order.
pub static FUNC_LIST: &[FunctionDescriptor] = &[
    f("sin", 35, NoSuffix, Unary),
    f("cos", 35, NoSuffix, Unary),
    f("sincos", 35, NoSuffix, SinCos),
    f("tan", 35, NoSuffix, Unary),
    f("asin", 35, NoSuffix, Unary),
    f("acos", 35, NoSuffix, Unary),
    f("atan", 35, NoSuffix, Unary),
    f("atan2", 35, NoSuffix, Binary),
    f("log", 35, NoSuffix, Unary),
    f("cbrt", 35, NoSuffix, Unary),
    f("sin", 10, U1, Unary),
    f("cos", 10, U1, Unary),
    f("sincos", 10, U1, SinCos),
    f("tan", 10, U1, Unary),
    f("asin", 10, U1, Unary),
    f("acos", 10, U1, Unary),
    f("atan", 10, U1, Unary),
    f("atan2", 10, U1, Binary),
    f("log", 10, U1, Unary),
    f("cbrt", 10, U1, Unary),
    f("exp", 10, NoSuffix, Unary),
    f("pow", 10, NoSuffix, Binary),
    f("sinh", 10, NoSuffix, Unary),
    f("cosh", 10, NoSuffix, Unary),
    f("tanh", 10, NoSuffix, Unary),
    f("sinh", 35, U35, Unary),
    f("cosh", 35, U35, Unary),
    f("tanh", 35, U35, Unary),
    f("fastsin", 3500, U3500, Unary),
    f("fastcos", 3500, U3500, Unary),
    f("fastpow", 3500, U3500, Binary),
    f("asinh", 10, NoSuffix, Unary),
    f("acosh", 10, NoSuffix, Unary),
    f("atanh", 10, NoSuffix, Unary),
    f("exp2", 10, NoSuffix, Unary),
    f("exp2", 35, U35, Unary),
    f("exp10", 10, NoSuffix, Unary),
    f("exp10", 35, U35, Unary),
    f("expm1", 10, NoSuffix, Unary),
    f("log10", 10, NoSuffix, Unary),
    f("log2", 10, NoSuffix, Unary),
    f("log2", 35, U35, Unary),
    f("log1p", 10, NoSuffix, Unary),
    f("sincospi", 5, U05, SinCos),
    f("sincospi", 35, U35, SinCos),
    f("sinpi", 5, U05, Unary),
    f("cospi", 5, U05, Unary),
    f("ldexp", -1, NoSuffix, Ldexp),
    f("ilogb", -1, NoSuffix, Ilogb),
    f("fma", -1, NoSuffix, Ternary),
    f("sqrt", -1, NoSuffix, Unary),
    f("sqrt", 5, U05, Unary),
    f("sqrt", 35, U35, Unary),
    f("hypot", 5, U05, Binary),
    f("hypot", 35, U35, Binary),
    f("fabs", -1, NoSuffix, Unary),
    f("copysign", -1, NoSuffix, Binary),
    f("fmax", -1, NoSuffix, Binary),
    f("fmin", -1, NoSuffix, Binary),
    f("fdim", -1, NoSuffix, Binary),
    f("trunc", -1, NoSuffix, Unary),
    f("floor", -1, NoSuffix, Unary),
    f("ceil", -1, NoSuffix, Unary),
    f("round", -1, NoSuffix, Unary),
    f("rint", -1, NoSuffix, Unary),
    f("nextafter", -1, NoSuffix, Binary),
    f("frfrexp", -1, NoSuffix, Unary),
    f("expfrexp", -1, NoSuffix, Ilogb),
    f("fmod", -1, NoSuffix, Binary),
    f("remainder", -1, NoSuffix, Binary),
    f("modf", -1, NoSuffix, Modf),
    f("lgamma", 10, U1, Unary),
    f("tgamma", 10, U1, Unary),
    f("erf", 10, U1, Unary),
    f("erfc", 15, U15, Unary),
    f("getInt", -1, NoSuffix, GetInt),
    f("getPtr", -1, NoSuffix, GetPtr),
];
