//! Parameter codec for hashlink.
//!
//! This crate converts between structured parameter sets and the compact text
//! form stored in a URL fragment. Every other hashlink crate builds on it.
//!
//! # Wire format
//!
//! ```text
//! hash  := "" | entry (";" entry)*
//! entry := name ":" blob
//! blob  := "" | token ("," token)*
//! token := value | key "=" value
//! ```
//!
//! No escaping is performed. The separators `;`, `:`, `,` and `=` are
//! reserved and must not appear inside names, keys or values.
//!
//! # Key Types
//!
//! - [`ParamValue`] -- A text or numeric parameter value
//! - [`ParamMapping`] -- An insertion-ordered parameter set
//! - [`encode_params`] / [`decode_params`] -- The blob codec

pub mod codec;
pub mod mapping;
pub mod value;

pub use codec::{
    decode_params, encode_params, is_numeric, object_params, ENTRY_SEP, NAME_SEP, PAIR_SEP,
    RESERVED_CHARS, TOKEN_SEP,
};
pub use mapping::ParamMapping;
pub use value::ParamValue;
