//! # Tunables
//!
//! Named, typed, runtime-overridable configuration values.
//!
//! - `value` - typed values and duration formatting
//! - `decoder` - type-name keyed decoders for raw JSON values
//! - `map` - the `TunableCollection` trait and in-memory `TunableMap`
//! - `registry` - id to collection lookup

pub mod decoder;
pub mod errors;
pub mod map;
pub mod registry;
pub mod value;

pub use decoder::{DecoderRegistry, ValueDecoder};
pub use errors::{TunableError, TunableResult};
pub use map::{Tunable, TunableCollection, TunableMap};
pub use registry::{CollectionRegistry, FnRegistry, TunableRegistry};
pub use value::TunableValue;
