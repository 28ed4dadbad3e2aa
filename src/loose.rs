use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive, Zero};

/// Primitive value compared with the host language's abstract (`==`) equality.
#[derive(Debug, Clone, PartialEq)]
pub enum LooseValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
}

impl LooseValue {
    /// Numeric coercion used by loose comparisons.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(value) => {
                if *value {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Number(value) => *value,
            Self::BigInt(value) => value.to_f64().unwrap_or(if value.sign() == Sign::Minus {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Self::String(value) => parse_number_from_string(value),
        }
    }

    fn strict_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Number(l), Self::Number(r)) => l == r,
            (Self::BigInt(l), Self::BigInt(r)) => l == r,
            (Self::String(l), Self::String(r)) => l == r,
            _ => false,
        }
    }
}

/// Abstract equality between two primitives.
///
/// - `null` and `undefined` equal each other and nothing else.
/// - Number vs string compares numerically after string-to-number conversion.
/// - Booleans become 0/1 and are compared again.
/// - BigInt vs string parses the string as a BigInt; BigInt vs number
///   matches only integral numbers.
/// - NaN equals nothing.
pub fn loose_equal(left: &LooseValue, right: &LooseValue) -> bool {
    if left.strict_equal(right) {
        return true;
    }

    match (left, right) {
        (LooseValue::Null, LooseValue::Undefined) | (LooseValue::Undefined, LooseValue::Null) => {
            true
        }
        (LooseValue::Null | LooseValue::Undefined, _)
        | (_, LooseValue::Null | LooseValue::Undefined) => false,
        (LooseValue::Number(_), LooseValue::String(_))
        | (LooseValue::String(_), LooseValue::Number(_)) => left.to_number() == right.to_number(),
        (LooseValue::BigInt(l), LooseValue::String(r))
        | (LooseValue::String(r), LooseValue::BigInt(l)) => {
            parse_bigint_from_string(r).is_some_and(|parsed| parsed == *l)
        }
        (LooseValue::BigInt(l), LooseValue::Number(r))
        | (LooseValue::Number(r), LooseValue::BigInt(l)) => {
            f64_to_bigint_if_integral(*r).is_some_and(|parsed| parsed == *l)
        }
        (LooseValue::Bool(_), _) => loose_equal(&LooseValue::Number(left.to_number()), right),
        (_, LooseValue::Bool(_)) => loose_equal(left, &LooseValue::Number(right.to_number())),
        _ => false,
    }
}

/// Linear membership scan with [`loose_equal`], so `"2"` is found in `[1, 2, 3]`.
pub fn in_array(values: &[LooseValue], value: &LooseValue) -> bool {
    in_array_by(values, value, loose_equal)
}

/// Linear membership scan with a caller-supplied comparison.
pub fn in_array_by<T, U, F>(values: &[T], value: &U, mut eq: F) -> bool
where
    F: FnMut(&T, &U) -> bool,
{
    values.iter().any(|candidate| eq(candidate, value))
}

fn parse_number_from_string(src: &str) -> f64 {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_prefixed_radix_to_f64(digits, radix);
        }
    }

    // Rust accepts spellings such as "inf" or "NaN" that the host rejects.
    if trimmed
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_prefixed_radix_to_f64(src: &str, radix: u32) -> f64 {
    if src.is_empty() {
        return f64::NAN;
    }
    let mut out = 0.0f64;
    for ch in src.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        out = out * f64::from(radix) + f64::from(digit);
    }
    out
}

fn parse_bigint_from_string(src: &str) -> Option<BigInt> {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return Some(BigInt::zero());
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.is_empty() {
                return None;
            }
            return BigInt::parse_bytes(digits.as_bytes(), radix);
        }
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative { -value } else { value })
}

fn f64_to_bigint_if_integral(value: f64) -> Option<BigInt> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    BigInt::from_f64(value)
}

impl From<bool> for LooseValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LooseValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LooseValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BigInt> for LooseValue {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl<T: Into<LooseValue>> From<Option<T>> for LooseValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Into<LooseValue>>(items: impl IntoIterator<Item = T>) -> Vec<LooseValue> {
        items.into_iter().map(Into::into).collect()
    }

    #[test]
    fn in_array_coerces_strings_to_numbers() {
        let numbers = values([1, 2, 3]);
        assert!(in_array(&numbers, &"2".into()));
        assert!(in_array(&numbers, &" 3 ".into()));
        assert!(in_array(&numbers, &"0x1".into()));
        assert!(!in_array(&numbers, &5.into()));
        assert!(!in_array(&numbers, &"two".into()));
    }

    #[test]
    fn null_and_undefined_only_equal_each_other() {
        assert!(loose_equal(&LooseValue::Null, &LooseValue::Undefined));
        assert!(!loose_equal(&LooseValue::Null, &0.into()));
        assert!(!loose_equal(&LooseValue::Undefined, &"".into()));
        assert!(in_array(&[LooseValue::Undefined], &None::<i32>.into()));
    }

    #[test]
    fn booleans_compare_as_zero_or_one() {
        assert!(loose_equal(&true.into(), &1.into()));
        assert!(loose_equal(&false.into(), &"0".into()));
        assert!(loose_equal(&"1".into(), &true.into()));
        assert!(!loose_equal(&true.into(), &"true".into()));
    }

    #[test]
    fn empty_string_is_zero_but_nan_is_never_equal() {
        assert!(loose_equal(&"".into(), &0.into()));
        assert!(!loose_equal(&f64::NAN.into(), &f64::NAN.into()));
        assert!(!loose_equal(&"NaN".into(), &f64::NAN.into()));
        assert!(!loose_equal(&"inf".into(), &f64::INFINITY.into()));
        assert!(loose_equal(&"-Infinity".into(), &f64::NEG_INFINITY.into()));
    }

    #[test]
    fn bigint_matches_integral_numbers_and_decimal_strings() {
        let big = LooseValue::from(BigInt::from(42));
        assert!(loose_equal(&big, &42.into()));
        assert!(!loose_equal(&big, &42.5.into()));
        assert!(loose_equal(&big, &"42".into()));
        assert!(loose_equal(&"0x2a".into(), &big));
        assert!(!loose_equal(&big, &"42.0".into()));
    }

    #[test]
    fn strings_compare_exactly_with_each_other() {
        assert!(!loose_equal(&"1".into(), &"1.0".into()));
        assert!(loose_equal(&"a".into(), &"a".into()));
    }

    #[test]
    fn in_array_by_uses_the_supplied_comparison() {
        let words = ["Alpha", "beta"];
        let case_insensitive = |left: &&str, right: &&str| left.eq_ignore_ascii_case(right);
        assert!(in_array_by(&words, &"ALPHA", case_insensitive));
        assert!(!in_array_by(&words, &"gamma", |left, right| left == right));
    }
}
