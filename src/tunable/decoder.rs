//! # Typed Value Decoders
//!
//! Maps a declared type name to a decoder for the raw JSON `value` of a
//! tunable descriptor. New types are added by registering another decoder;
//! the dispatch itself never changes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::errors::{TunableError, TunableResult};
use super::value::{parse_duration, TunableValue};

pub const STRING_TYPE: &str = "java.lang.String";
pub const BOOLEAN_TYPE: &str = "java.lang.Boolean";
pub const INTEGER_TYPE: &str = "java.lang.Integer";
pub const LONG_TYPE: &str = "java.lang.Long";
pub const FLOAT_TYPE: &str = "java.lang.Float";
pub const DOUBLE_TYPE: &str = "java.lang.Double";
pub const DURATION_TYPE: &str = "com.twitter.util.Duration";

/// Decodes one raw JSON value into a typed tunable value
pub trait ValueDecoder: Send + Sync {
    fn decode(&self, raw: &Value) -> Result<TunableValue, String>;
}

impl<F> ValueDecoder for F
where
    F: Fn(&Value) -> Result<TunableValue, String> + Send + Sync,
{
    fn decode(&self, raw: &Value) -> Result<TunableValue, String> {
        self(raw)
    }
}

/// Registry of decoders keyed by declared type name
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: HashMap<String, Arc<dyn ValueDecoder>>,
}

impl DecoderRegistry {
    /// Registry with no decoders at all
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registry with the built-in scalar and duration types
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_aliased(&[STRING_TYPE, "string"], decode_string);
        registry.register_aliased(&[BOOLEAN_TYPE, "boolean"], decode_bool);
        registry.register_aliased(&[INTEGER_TYPE, "int"], decode_int);
        registry.register_aliased(&[LONG_TYPE, "long"], decode_long);
        registry.register_aliased(&[FLOAT_TYPE, "float"], decode_float);
        registry.register_aliased(&[DOUBLE_TYPE, "double"], decode_double);
        registry.register_aliased(&[DURATION_TYPE, "duration"], decode_duration);
        registry
    }

    /// Register a decoder, replacing any previous one for the same name
    pub fn register<D>(&mut self, type_name: impl Into<String>, decoder: D)
    where
        D: ValueDecoder + 'static,
    {
        self.decoders.insert(type_name.into(), Arc::new(decoder));
    }

    /// Register one decoder under several names
    pub fn register_aliased<D>(&mut self, type_names: &[&str], decoder: D)
    where
        D: ValueDecoder + 'static,
    {
        let decoder: Arc<dyn ValueDecoder> = Arc::new(decoder);
        for name in type_names {
            self.decoders.insert((*name).to_string(), Arc::clone(&decoder));
        }
    }

    pub fn supports(&self, type_name: &str) -> bool {
        self.decoders.contains_key(type_name)
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Decode `raw` as `type_name`
    pub fn decode(&self, type_name: &str, raw: &Value) -> TunableResult<TunableValue> {
        let decoder = self
            .decoders
            .get(type_name)
            .ok_or_else(|| TunableError::UnknownType(type_name.to_string()))?;

        decoder
            .decode(raw)
            .map_err(|reason| TunableError::invalid(type_name, reason))
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

fn expected(what: &str, raw: &Value) -> String {
    format!("expected {}, got {}", what, raw)
}

fn decode_string(raw: &Value) -> Result<TunableValue, String> {
    raw.as_str()
        .map(|s| TunableValue::String(s.to_string()))
        .ok_or_else(|| expected("string", raw))
}

fn decode_bool(raw: &Value) -> Result<TunableValue, String> {
    raw.as_bool()
        .map(TunableValue::Bool)
        .ok_or_else(|| expected("boolean", raw))
}

fn decode_int(raw: &Value) -> Result<TunableValue, String> {
    let wide = raw.as_i64().ok_or_else(|| expected("integer", raw))?;
    i32::try_from(wide)
        .map(TunableValue::Int)
        .map_err(|_| format!("{} is out of range for a 32-bit integer", wide))
}

fn decode_long(raw: &Value) -> Result<TunableValue, String> {
    raw.as_i64()
        .map(TunableValue::Long)
        .ok_or_else(|| expected("integer", raw))
}

fn decode_float(raw: &Value) -> Result<TunableValue, String> {
    let wide = raw.as_f64().ok_or_else(|| expected("number", raw))?;
    let narrow = wide as f32;
    if narrow.is_finite() {
        Ok(TunableValue::Float(narrow))
    } else {
        Err(format!("{} is out of range for a 32-bit float", wide))
    }
}

fn decode_double(raw: &Value) -> Result<TunableValue, String> {
    raw.as_f64()
        .map(TunableValue::Double)
        .ok_or_else(|| expected("number", raw))
}

/// Accepts `"<n>.<unit>"` strings or a non-negative integer of milliseconds.
fn decode_duration(raw: &Value) -> Result<TunableValue, String> {
    match raw {
        Value::String(s) => parse_duration(s).map(TunableValue::Duration),
        Value::Number(n) => n
            .as_u64()
            .map(|ms| TunableValue::Duration(std::time::Duration::from_millis(ms)))
            .ok_or_else(|| expected("non-negative milliseconds", raw)),
        _ => Err(expected("duration string or milliseconds", raw)),
    }
}
