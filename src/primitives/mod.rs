//! Primitive building blocks
//!
//! This module defines the low-level constant-time arithmetic used by the
//! encoders.
//!
//! Primitives are small, dependency-light building blocks with well-defined
//! semantics and predictable, data-independent execution. They are
//! intentionally minimal and do not attempt to be a general big-integer
//! library.
//!
//! Current primitives include:
//! - `ConstantTimeGeq`: branchless `>=` on 32- and 64-bit words
//! - `Barrett`: division by a fixed single-word constant without a
//!   hardware divide instruction

mod barrett;
mod ct;

pub use barrett::Barrett;
pub use ct::{ConstantTimeGeq, ct_geq_u64, ct_select_u8};
