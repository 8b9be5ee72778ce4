//! Arbitrary-precision decimal scalar.
//!
//! Value = `coeff × 10^exp`. Literals are stored exactly; every arithmetic result
//! is rounded half-even to the working precision `P`. Equality, ordering and
//! hashing use a cached key: the value rounded to `P − 1` digits with trailing
//! zeros stripped.
//!
//! Literal exponents are bounded by `Decimal::MAX_EXPONENT`. Sums never expand
//! an operand that lies entirely below the rounding position; it is replaced by
//! a one-digit sticky term instead.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{Pow, Signed, Zero};

use super::Precision;
use crate::error::{Result, SymmetryError};

#[derive(Clone)]
pub struct Decimal {
    coeff: BigInt,
    exp: i64,
    prec: Precision,
    key: Normal,
}

/// Canonical comparison form. Zero is always `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Normal {
    coeff: BigInt,
    exp: i64,
}

#[inline]
fn pow10(n: u64) -> BigUint {
    Pow::pow(BigUint::from(10u32), n)
}

/// Exponent of the leading digit of `coeff × 10^exp` (`d.ddd × 10^adjusted`).
#[inline]
fn adjusted(coeff: &BigInt, exp: i64) -> i64 {
    exp + digit_count(coeff.magnitude()) as i64 - 1
}

#[inline]
fn digit_count(m: &BigUint) -> u64 {
    m.to_str_radix(10).len() as u64
}

/// Round `coeff × 10^exp` to at most `digits` significant digits, ties to even.
fn round_half_even(coeff: &BigInt, exp: i64, digits: u32) -> (BigInt, i64) {
    let mag = coeff.magnitude();
    let len = digit_count(mag);
    if len <= u64::from(digits) {
        return (coeff.clone(), exp);
    }
    let drop = len - u64::from(digits);
    let unit = pow10(drop);
    let (mut q, r) = mag.div_rem(&unit);
    match (r * 2u32).cmp(&unit) {
        Ordering::Greater => q += 1u32,
        Ordering::Equal if q.is_odd() => q += 1u32,
        _ => {}
    }
    let mut exp = exp + drop as i64;
    // carry out of the top digit: 99.9 -> 100 keeps `digits` digits as 10 × 10^1
    if digit_count(&q) > u64::from(digits) {
        q /= 10u32;
        exp += 1;
    }
    (BigInt::from_biguint(coeff.sign(), q), exp)
}

fn normal_form(coeff: &BigInt, exp: i64, digits: u32) -> Normal {
    if coeff.is_zero() {
        return Normal {
            coeff: BigInt::zero(),
            exp: 0,
        };
    }
    let (mut c, mut e) = round_half_even(coeff, exp, digits);
    let ten = BigInt::from(10);
    loop {
        let (q, r) = c.div_rem(&ten);
        if !r.is_zero() {
            break;
        }
        c = q;
        e += 1;
    }
    Normal { coeff: c, exp: e }
}

impl Normal {
    /// Exponent of the leading digit (`d.ddd × 10^adjusted`).
    #[inline]
    fn adjusted(&self) -> i64 {
        adjusted(&self.coeff, self.exp)
    }

    fn value_cmp(&self, other: &Normal) -> Ordering {
        let (sa, sb) = (self.coeff.sign(), other.coeff.sign());
        if sa != sb || sa == Sign::NoSign {
            return sa.cmp(&sb);
        }
        let by_magnitude = match self.adjusted().cmp(&other.adjusted()) {
            Ordering::Equal => {
                // same leading exponent, so the alignment shift is bounded by the digit count
                let exp = self.exp.min(other.exp);
                let a = self.coeff.magnitude() * pow10(self.exp.abs_diff(exp));
                let b = other.coeff.magnitude() * pow10(other.exp.abs_diff(exp));
                a.cmp(&b)
            }
            o => o,
        };
        if sa == Sign::Minus {
            by_magnitude.reverse()
        } else {
            by_magnitude
        }
    }
}

impl Decimal {
    /// Largest accepted magnitude of a literal's adjusted exponent.
    pub const MAX_EXPONENT: i64 = 999_999;

    fn from_parts(coeff: BigInt, exp: i64, prec: Precision) -> Self {
        let key = normal_form(&coeff, exp, prec.compare_digits());
        Self {
            coeff,
            exp,
            prec,
            key,
        }
    }

    /// Arithmetic result: rounded to the working precision first.
    fn rounded(coeff: BigInt, exp: i64, prec: Precision) -> Self {
        let (coeff, exp) = round_half_even(&coeff, exp, prec.digits());
        Self::from_parts(coeff, exp, prec)
    }

    pub fn zero(prec: Precision) -> Self {
        Self::from_parts(BigInt::zero(), 0, prec)
    }

    pub fn from_int(v: i64, prec: Precision) -> Self {
        Self::from_parts(BigInt::from(v), 0, prec)
    }

    /// Parse a decimal literal exactly (no rounding at construction).
    ///
    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`, including `.5` and `5.`.
    /// Nonzero values whose leading digit lies beyond `10^±MAX_EXPONENT` are
    /// rejected.
    pub fn parse(literal: &str, prec: Precision) -> Result<Self> {
        let bad = || SymmetryError::invalid_number(literal);
        let text = literal.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (mantissa, exp_part) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => (&body[..i], Some(&body[i + 1..])),
            None => (body, None),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(bad());
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(bad());
        }
        let exp_shift: i64 = match exp_part {
            Some(e) => e.parse().map_err(|_| bad())?,
            None => 0,
        };
        let all_digits = format!("{int_part}{frac_part}");
        let mag = BigUint::parse_bytes(all_digits.as_bytes(), 10).ok_or_else(bad)?;
        if mag.is_zero() {
            return Ok(Self::zero(prec));
        }
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let coeff = BigInt::from_biguint(sign, mag);
        let exp = i64::try_from(frac_part.len())
            .ok()
            .and_then(|frac| exp_shift.checked_sub(frac))
            .ok_or_else(bad)?;
        let adj = i64::try_from(digit_count(coeff.magnitude()))
            .ok()
            .and_then(|len| exp.checked_add(len - 1))
            .ok_or_else(bad)?;
        if !(-Self::MAX_EXPONENT..=Self::MAX_EXPONENT).contains(&adj) {
            return Err(bad());
        }
        Ok(Self::from_parts(coeff, exp, prec))
    }

    /// Build from a binary float via its shortest round-trip decimal text.
    ///
    /// The result is only as exact as that text; a warning is emitted every time.
    pub fn from_f64(v: f64, prec: Precision) -> Result<Self> {
        if !v.is_finite() {
            return Err(SymmetryError::invalid_number(v.to_string()));
        }
        let literal = format!("{v:e}");
        tracing::warn!(
            value = v,
            literal = %literal,
            "decimal built from a binary float; exactness limited to its shortest decimal form"
        );
        Self::parse(&literal, prec)
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.prec
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.key.coeff.is_negative()
    }

    /// Lossy conversion for plotting and bounds.
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.key.coeff, self.key.exp)
            .parse()
            .unwrap_or(f64::NAN)
    }

    #[inline]
    fn check_prec(&self, rhs: &Decimal) {
        debug_assert_eq!(
            self.prec, rhs.prec,
            "decimals from different precisions combined"
        );
    }

    fn aligned_sum(&self, rhs: &Decimal, negate_rhs: bool) -> Decimal {
        self.check_prec(rhs);
        let rhs_coeff = if negate_rhs {
            -&rhs.coeff
        } else {
            rhs.coeff.clone()
        };
        if rhs.is_zero() {
            return Self::rounded(self.coeff.clone(), self.exp, self.prec);
        }
        if self.is_zero() {
            return Self::rounded(rhs_coeff, rhs.exp, self.prec);
        }
        let lhs = (self.coeff.clone(), self.exp);
        let rhs = (rhs_coeff, rhs.exp);
        let (big, small) = if adjusted(&lhs.0, lhs.1) >= adjusted(&rhs.0, rhs.1) {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        };
        // Below `floor` the small operand touches neither the digits of `big`
        // nor the rounding position, so only its sign matters.
        let floor = big
            .1
            .min(adjusted(&big.0, big.1) - i64::from(self.prec.digits()) - 1);
        let small = if adjusted(&small.0, small.1) < floor {
            (small.0.signum(), floor - 1)
        } else {
            small
        };
        let exp = big.1.min(small.1);
        let a = big.0 * BigInt::from(pow10(big.1.abs_diff(exp)));
        let b = small.0 * BigInt::from(pow10(small.1.abs_diff(exp)));
        Self::rounded(a + b, exp, self.prec)
    }

    fn product(&self, rhs: &Decimal) -> Decimal {
        self.check_prec(rhs);
        Self::rounded(&self.coeff * &rhs.coeff, self.exp + rhs.exp, self.prec)
    }

    /// Correctly rounded quotient; `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Decimal) -> Result<Decimal> {
        self.check_prec(rhs);
        if rhs.is_zero() {
            return Err(SymmetryError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero(self.prec));
        }
        let num = self.coeff.magnitude();
        let den = rhs.coeff.magnitude();
        // scale so the integer quotient has at least P + 1 digits
        let shift = (i64::from(self.prec.digits()) + 1 + digit_count(den) as i64
            - digit_count(num) as i64)
            .max(0) as u64;
        let (q, r) = (num * pow10(shift)).div_rem(den);
        // sticky digit: an inexact quotient must never look like an exact tie
        let q = q * 10u32 + u32::from(!r.is_zero());
        let sign = if self.coeff.sign() == rhs.coeff.sign() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let exp = self.exp - rhs.exp - shift as i64 - 1;
        Ok(Self::rounded(BigInt::from_biguint(sign, q), exp, self.prec))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.value_cmp(&other.key)
    }
}

impl fmt::Display for Decimal {
    /// Plain notation of the normalized value (`751`, `-0.05`, `0`); scientific
    /// (`1e999999`, `-2.5e-200`) once the leading digit is beyond `10^±PLAIN_LIMIT`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PLAIN_LIMIT: i64 = 100;
        let digits = self.key.coeff.magnitude().to_string();
        let sign = if self.is_negative() { "-" } else { "" };
        let exp = self.key.exp;
        let adj = self.key.adjusted();
        if adj.abs() > PLAIN_LIMIT {
            let (lead, rest) = digits.split_at(1);
            let dot = if rest.is_empty() { "" } else { "." };
            return write!(f, "{sign}{lead}{dot}{rest}e{adj}");
        }
        // |adj| <= PLAIN_LIMIT bounds every padding below
        if exp >= 0 {
            return write!(f, "{sign}{digits}{}", "0".repeat(exp.unsigned_abs() as usize));
        }
        let point = digits.len() as i64 + exp;
        if point > 0 {
            let (int, frac) = digits.split_at(point.unsigned_abs() as usize);
            write!(f, "{sign}{int}.{frac}")
        } else {
            write!(f, "{sign}0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal::from_parts(-&self.coeff, self.exp, self.prec)
    }
}

impl Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        -&self
    }
}

impl Add for &Decimal {
    type Output = Decimal;
    fn add(self, rhs: &Decimal) -> Decimal {
        self.aligned_sum(rhs, false)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;
    fn sub(self, rhs: &Decimal) -> Decimal {
        self.aligned_sum(rhs, true)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;
    fn mul(self, rhs: &Decimal) -> Decimal {
        self.product(rhs)
    }
}

impl std::ops::Div for &Decimal {
    type Output = Decimal;
    /// Panics on a zero divisor, like integer division. Use `checked_div` when
    /// the divisor may be zero.
    fn div(self, rhs: &Decimal) -> Decimal {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("attempt to divide a Decimal by zero"),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),*) => {$(
        impl std::ops::$trait for Decimal {
            type Output = Decimal;
            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                std::ops::$trait::$method(&self, &rhs)
            }
        }
        impl std::ops::$trait<&Decimal> for Decimal {
            type Output = Decimal;
            #[inline]
            fn $method(self, rhs: &Decimal) -> Decimal {
                std::ops::$trait::$method(&self, rhs)
            }
        }
        impl std::ops::$trait<Decimal> for &Decimal {
            type Output = Decimal;
            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                std::ops::$trait::$method(self, &rhs)
            }
        }
    )*};
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div);
