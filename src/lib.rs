//! mkrename - symbol renaming and prototype header generator for SLEEF.
//!
//! The C build runs the `mkrename` binary once per vector extension to
//! produce two kinds of headers: alias tables mapping short call-site
//! tokens such as `xsin_u1` to fully qualified symbols like
//! `Sleef_sind4_u10avx2`, and prototype blocks declaring every such symbol
//! along with the pair structures returned by functions like `sincos`.
//!
//! # Primary Usage
//!
//! ```
//! use mkrename::{Generator, Invocation, FUNC_LIST};
//!
//! let invocation = Invocation::from_params("mkrename", &["-", "2", "4", "sse2"])?;
//! let mut out = Vec::new();
//! Generator::new(FUNC_LIST).run(&invocation, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("#define xsin Sleef_sind2_u35sse2"));
//! # Ok::<(), mkrename::GenError>(())
//! ```
//!
//! # Architecture
//!
//! - [`funcproto`] - the function table and its category codes
//! - [`naming`] - pair type names and fully qualified symbol names
//! - [`prototype`] - category shapes and declaration lines
//! - [`rename`] - alias tables for dispatch and deterministic builds
//! - [`driver`] - mode selection and orchestration

pub mod driver;
pub mod error;
pub mod funcproto;
pub mod naming;
pub mod prototype;
pub mod rename;

pub use driver::{DeclarationParams, Generator, GeneratorConfig, Invocation, RenameParams};
pub use error::{GenError, GenResult};
pub use funcproto::{FuncType, FunctionDescriptor, UlpSuffix, FUNC_LIST};
pub use naming::{pair_type_name, Precision, SymbolName};
pub use prototype::{PrototypeFormatter, Shape, TypeKind, VectorTypes};
pub use rename::{AliasTableEmitter, BuildVariant};
