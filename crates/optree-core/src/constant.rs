//! Compile-time constant values.
//!
//! A [`ConstantValue`] keeps the representation the binder folded the value
//! in: an `Int16` and an `Int64` holding the same number are different
//! constants, and decimals keep their exact mantissa and scale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A constant produced by the binder.
///
/// `Null` is a real constant (the literal `Nothing`/`null`). "No constant at
/// all" is expressed by the absence of a `ConstantValue`, never by `Null`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstantValue {
    Null,
    Boolean(bool),
    Char(char),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(F32Bits),
    Double(F64Bits),
    Decimal(Decimal),
    String(String),
}

impl ConstantValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConstantValue::Null)
    }

    /// The value as a signed 64-bit integer, if it is integral and fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            ConstantValue::SByte(v) => Some(v.into()),
            ConstantValue::Byte(v) => Some(v.into()),
            ConstantValue::Int16(v) => Some(v.into()),
            ConstantValue::UInt16(v) => Some(v.into()),
            ConstantValue::Int32(v) => Some(v.into()),
            ConstantValue::UInt32(v) => Some(v.into()),
            ConstantValue::Int64(v) => Some(v),
            ConstantValue::UInt64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Int64(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Int32(value)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Boolean(value)
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Double(F64Bits::new(value))
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_owned())
    }
}

impl From<Decimal> for ConstantValue {
    fn from(value: Decimal) -> Self {
        ConstantValue::Decimal(value)
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Null => write!(f, "null"),
            ConstantValue::Boolean(v) => write!(f, "{v}"),
            ConstantValue::Char(v) => write!(f, "{v:?}"),
            ConstantValue::SByte(v) => write!(f, "{v}"),
            ConstantValue::Byte(v) => write!(f, "{v}"),
            ConstantValue::Int16(v) => write!(f, "{v}"),
            ConstantValue::UInt16(v) => write!(f, "{v}"),
            ConstantValue::Int32(v) => write!(f, "{v}"),
            ConstantValue::UInt32(v) => write!(f, "{v}"),
            ConstantValue::Int64(v) => write!(f, "{v}"),
            ConstantValue::UInt64(v) => write!(f, "{v}"),
            ConstantValue::Single(v) => write!(f, "{:?}", v.value()),
            ConstantValue::Double(v) => write!(f, "{:?}", v.value()),
            ConstantValue::Decimal(v) => write!(f, "{v}"),
            ConstantValue::String(v) => write!(f, "{v:?}"),
        }
    }
}

/// Wrapper for f64 that implements Eq and Hash by bit pattern.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct F64Bits(f64);

impl F64Bits {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for F64Bits {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for F64Bits {}

impl std::hash::Hash for F64Bits {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// Wrapper for f32 that implements Eq and Hash by bit pattern.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct F32Bits(f32);

impl F32Bits {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl PartialEq for F32Bits {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for F32Bits {}

impl std::hash::Hash for F32Bits {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// An exact decimal: `mantissa * 10^-scale`.
///
/// The scale is kept as written, so `1.50` and `1.5` are distinct constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

impl Decimal {
    /// Largest scale a decimal literal can carry.
    pub const MAX_SCALE: u8 = 28;

    /// Returns `None` when `scale` exceeds [`Decimal::MAX_SCALE`].
    pub fn new(mantissa: i128, scale: u8) -> Option<Self> {
        (scale <= Self::MAX_SCALE).then_some(Self { mantissa, scale })
    }

    pub fn mantissa(self) -> i128 {
        self.mantissa
    }

    pub fn scale(self) -> u8 {
        self.scale
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = usize::from(self.scale);
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let digits = format!("{digits:0>width$}", width = scale + 1);
        let (int, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{int}.{frac}")
    }
}
