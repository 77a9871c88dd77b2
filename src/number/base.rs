use std::{collections::HashMap, fmt};

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::error::{Error, ParseError};

/// Canonical digit order for the built-in radices: `0-9`, then `A-Z`, then
/// `a-z`.
const CANONICAL_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Smallest radix accepted by [`BaseSystem::from_base`].
pub const MIN_BASE: u32 = 2;
/// Largest radix accepted by [`BaseSystem::from_base`].
pub const MAX_BASE: u32 = 62;
/// Longest alphabet accepted by [`BaseSystem::new`]; digits are rendered
/// through byte-sized radix digits.
pub const MAX_ALPHABET_LEN: usize = 256;

/// How input letters of the "wrong" case are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseFold {
    /// The alphabet only has uppercase letters; lowercase input is folded up.
    Upper,
    /// The alphabet only has lowercase letters; uppercase input is folded down.
    Lower,
    /// Mixed-case or letter-free alphabet; input must match exactly.
    Exact,
}

/// An immutable radix specification mapping characters to digit values.
///
/// A `BaseSystem` is built once, from [`BaseSystem::from_base`], one of the
/// named presets, or a custom alphabet via [`BaseSystem::new`], and is never
/// mutated afterwards.
///
/// # Example
/// ```
/// use exacta::number::base::BaseSystem;
/// use num_bigint::BigInt;
///
/// let hex = BaseSystem::hexadecimal();
/// assert_eq!(hex.to_decimal("ff").unwrap(), BigInt::from(255));
/// assert_eq!(hex.from_decimal(&BigInt::from(255)), "FF");
/// ```
#[derive(Debug, Clone)]
pub struct BaseSystem {
    base:       u32,
    characters: Vec<char>,
    digits:     HashMap<char, u32>,
    name:       String,
    fold:       CaseFold,
}

impl BaseSystem {
    /// Builds a radix from an explicit, ordered character sequence.
    ///
    /// The character at index `i` has digit value `i`; the radix is the
    /// number of characters.
    ///
    /// # Errors
    /// - `ParseError::Format` if fewer than two characters are given or a
    ///   character repeats.
    /// - `ParseError::Range` if more than [`MAX_ALPHABET_LEN`] characters are
    ///   given.
    pub fn new(characters: &str, name: impl Into<String>) -> Result<Self, Error> {
        let characters: Vec<char> = characters.chars().collect();

        if characters.len() < 2 {
            return Err(ParseError::format(format!("a base needs at least 2 digit characters, found {}",
                                                  characters.len())).into());
        }

        if characters.len() > MAX_ALPHABET_LEN {
            return Err(ParseError::Range { message: format!("a base alphabet has at most {MAX_ALPHABET_LEN} characters, found {}",
                                                            characters.len()) }.into());
        }

        let mut digits = HashMap::with_capacity(characters.len());
        for (&c, value) in characters.iter().zip(0u32..) {
            if digits.insert(c, value).is_some() {
                return Err(ParseError::format(format!("duplicate digit character '{c}' in base alphabet")).into());
            }
        }

        let fold = case_fold_for(&characters);

        let base = u32::try_from(characters.len()).map_err(|_| {
                                                      ParseError::Range { message: "alphabet is too long".to_string() }
                                                  })?;

        Ok(Self { base,
                  characters,
                  digits,
                  name: name.into(),
                  fold })
    }

    /// Builds the canonical alphabet for radix `base`.
    ///
    /// # Errors
    /// - `ParseError::Range` if `base` is outside `2..=62`.
    ///
    /// # Example
    /// ```
    /// use exacta::number::base::BaseSystem;
    ///
    /// assert_eq!(BaseSystem::from_base(16).unwrap().characters(), "0123456789ABCDEF");
    /// assert!(BaseSystem::from_base(63).is_err());
    /// ```
    pub fn from_base(base: u32) -> Result<Self, Error> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(ParseError::Range { message: format!("base must be between {MIN_BASE} and {MAX_BASE}, found {base}") }.into());
        }

        Ok(Self::canonical(base))
    }

    /// Base 2.
    #[must_use]
    pub fn binary() -> Self {
        Self::canonical(2)
    }

    /// Base 8.
    #[must_use]
    pub fn octal() -> Self {
        Self::canonical(8)
    }

    /// Base 10, the default input radix.
    #[must_use]
    pub fn decimal() -> Self {
        Self::canonical(10)
    }

    /// Base 12.
    #[must_use]
    pub fn duodecimal() -> Self {
        Self::canonical(12)
    }

    /// Base 16 with uppercase digits (lowercase input is accepted).
    #[must_use]
    pub fn hexadecimal() -> Self {
        Self::canonical(16)
    }

    /// Base 36: digits and uppercase letters.
    #[must_use]
    pub fn base36() -> Self {
        Self::canonical(36)
    }

    /// Base 62: digits, uppercase and lowercase letters (case-sensitive).
    #[must_use]
    pub fn base62() -> Self {
        Self::canonical(62)
    }

    /// Builds a canonical radix that is known to be in range.
    fn canonical(base: u32) -> Self {
        let characters: Vec<char> = CANONICAL_DIGITS.chars().take(base as usize).collect();
        let digits = characters.iter().copied().zip(0u32..).collect();
        let fold = case_fold_for(&characters);
        let name = match base {
            2 => "Binary".to_string(),
            8 => "Octal".to_string(),
            10 => "Decimal".to_string(),
            12 => "Duodecimal".to_string(),
            16 => "Hexadecimal".to_string(),
            n => format!("Base {n}"),
        };

        Self { base,
               characters,
               digits,
               name,
               fold }
    }

    /// The radix.
    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// The display name, e.g. `"Hexadecimal"` or `"Base 7"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered digit alphabet as a string.
    #[must_use]
    pub fn characters(&self) -> String {
        self.characters.iter().collect()
    }

    /// Returns the value of a single digit character, applying case folding
    /// when the alphabet is single-case.
    #[must_use]
    pub fn digit_value(&self, c: char) -> Option<u32> {
        if let Some(&value) = self.digits.get(&c) {
            return Some(value);
        }

        let folded = match self.fold {
            CaseFold::Upper => c.to_ascii_uppercase(),
            CaseFold::Lower => c.to_ascii_lowercase(),
            CaseFold::Exact => return None,
        };

        self.digits.get(&folded).copied()
    }

    /// Returns `true` if the string is non-empty and every character is a
    /// digit of this base.
    #[must_use]
    pub fn is_valid_string(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| self.digit_value(c).is_some())
    }

    /// Returns `true` if `'E'` or `'e'` is a digit of this base, in which case
    /// scientific notation must use the `_^` marker.
    #[must_use]
    pub fn uses_alternate_exponent(&self) -> bool {
        self.digit_value('E').is_some() || self.digit_value('e').is_some()
    }

    /// The scientific-notation marker consumers must use with this base.
    #[must_use]
    pub fn exponent_marker(&self) -> &'static str {
        if self.uses_alternate_exponent() { "_^" } else { "E" }
    }

    /// Returns `true` if this is the plain `0-9` decimal alphabet.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        self.base == 10 && self.characters.iter().copied().eq("0123456789".chars())
    }

    /// Converts a digit string to its integer value, accumulating
    /// `acc = acc * base + digit` from left to right. A single leading `-` is
    /// read as a sign so that [`BaseSystem::from_decimal`] round-trips, unless
    /// `-` is itself a digit of the alphabet.
    ///
    /// # Errors
    /// - `ParseError::Format` for an empty digit string.
    /// - `ParseError::InvalidDigit` for the first character outside the
    ///   alphabet.
    pub fn to_decimal(&self, text: &str) -> Result<BigInt, Error> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) if self.has_sign() => (true, rest),
            _ => (false, text),
        };

        if digits.is_empty() {
            return Err(ParseError::format(format!("empty digit string for {}", self.name)).into());
        }

        let mut acc = BigInt::zero();
        for c in digits.chars() {
            let value = self.digit_value(c)
                            .ok_or(ParseError::InvalidDigit { digit: c,
                                                              base:  self.base, })?;
            acc = acc * self.base + value;
        }

        Ok(if negative { -acc } else { acc })
    }

    /// Renders an integer in this base, most significant digit first, with a
    /// leading `-` for negative values.
    ///
    /// When `-` is a digit of the alphabet the leading `-` of a negative
    /// value reads back as a digit, so only non-negative values round-trip
    /// through [`BaseSystem::to_decimal`].
    #[must_use]
    pub fn from_decimal(&self, value: &BigInt) -> String {
        let sign = if value.sign() == Sign::Minus { "-" } else { "" };
        let digits: String = value.magnitude()
                                  .to_radix_be(self.base)
                                  .into_iter()
                                  .map(|digit| self.characters[usize::from(digit)])
                                  .collect();

        format!("{sign}{digits}")
    }

    /// Returns `true` if a leading `-` can be read as a sign rather than a
    /// digit.
    fn has_sign(&self) -> bool {
        self.digit_value('-').is_none()
    }
}

/// Picks the case-folding rule for an alphabet: single-case alphabets accept
/// the opposite case, everything else must match exactly.
fn case_fold_for(characters: &[char]) -> CaseFold {
    let has_upper = characters.iter().any(char::is_ascii_uppercase);
    let has_lower = characters.iter().any(char::is_ascii_lowercase);

    match (has_upper, has_lower) {
        (true, false) => CaseFold::Upper,
        (false, true) => CaseFold::Lower,
        _ => CaseFold::Exact,
    }
}

impl PartialEq for BaseSystem {
    fn eq(&self, other: &Self) -> bool {
        self.characters == other.characters
    }
}

impl Eq for BaseSystem {}

impl Default for BaseSystem {
    fn default() -> Self {
        Self::decimal()
    }
}

impl fmt::Display for BaseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (base {})", self.name, self.base)
    }
}

/// Renders `value` in the canonical alphabet of radix `base`.
///
/// # Errors
/// - `ParseError::Range` if `base` is outside `2..=62`.
///
/// # Example
/// ```
/// use exacta::number::base::to_base_string;
/// use num_bigint::BigInt;
///
/// assert_eq!(to_base_string(&BigInt::from(10), 2).unwrap(), "1010");
/// ```
pub fn to_base_string(value: &BigInt, base: u32) -> Result<String, Error> {
    Ok(BaseSystem::from_base(base)?.from_decimal(value))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn canonical_alphabets_follow_digit_upper_lower_order() {
        assert_eq!(BaseSystem::from_base(2).unwrap().characters(), "01");
        assert_eq!(BaseSystem::from_base(36).unwrap().characters(),
                   "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(BaseSystem::from_base(62).unwrap().characters(), CANONICAL_DIGITS);
    }

    #[test]
    fn presets_match_from_base() {
        assert_eq!(BaseSystem::binary(), BaseSystem::from_base(2).unwrap());
        assert_eq!(BaseSystem::hexadecimal(), BaseSystem::from_base(16).unwrap());
        assert_eq!(BaseSystem::base62(), BaseSystem::from_base(62).unwrap());
        assert_eq!(BaseSystem::hexadecimal().name(), "Hexadecimal");
    }

    #[test]
    fn out_of_range_bases_are_rejected() {
        for base in [0, 1, 63, 1000] {
            let err = BaseSystem::from_base(base).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
        }
    }

    #[test]
    fn custom_alphabet_rejects_duplicates() {
        let err = BaseSystem::new("0120", "broken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(BaseSystem::new("x", "too small").is_err());
    }

    #[test]
    fn custom_alphabet_length_is_capped() {
        let alphabet: String = (0..300u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let err = BaseSystem::new(&alphabet, "wide").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let widest: String = alphabet.chars().take(MAX_ALPHABET_LEN).collect();
        let base = BaseSystem::new(&widest, "widest").unwrap();
        let value = BigInt::from(255 * 256 + 1);
        assert_eq!(base.to_decimal(&base.from_decimal(&value)).unwrap(), value);
    }

    #[test]
    fn custom_alphabet_converts_digits() {
        let base = BaseSystem::new("ab", "letters").unwrap();
        assert_eq!(base.to_decimal("bab").unwrap(), BigInt::from(5));
        assert_eq!(base.from_decimal(&BigInt::from(5)), "bab");
        // Single-case alphabet accepts the opposite case.
        assert_eq!(base.to_decimal("BAB").unwrap(), BigInt::from(5));
    }

    #[test]
    fn dash_in_alphabet_is_a_digit_not_a_sign() {
        let base = BaseSystem::new("-+", "signs").unwrap();
        assert_eq!(base.to_decimal("-+").unwrap(), BigInt::from(1));
        assert_eq!(base.to_decimal("+-").unwrap(), BigInt::from(2));
        assert_eq!(base.to_decimal("-").unwrap(), BigInt::zero());
        for n in 0..20 {
            let n = BigInt::from(n);
            assert_eq!(base.to_decimal(&base.from_decimal(&n)).unwrap(), n);
        }
    }

    #[test]
    fn zero_renders_as_first_digit() {
        assert_eq!(BaseSystem::binary().from_decimal(&BigInt::zero()), "0");
        assert_eq!(BaseSystem::new("ab", "letters").unwrap().from_decimal(&BigInt::zero()), "a");
        assert_eq!(BaseSystem::base62().from_decimal(&BigInt::from(61 * 62 + 36)), "za");
    }

    #[test]
    fn single_case_alphabets_fold_input_case() {
        let hex = BaseSystem::hexadecimal();
        assert_eq!(hex.to_decimal("aBc").unwrap(), BigInt::from(0xABC));
        let b62 = BaseSystem::base62();
        assert_eq!(b62.to_decimal("a").unwrap(), BigInt::from(36));
        assert_eq!(b62.to_decimal("A").unwrap(), BigInt::from(10));
    }

    #[test]
    fn invalid_digit_reports_character() {
        let err = BaseSystem::binary().to_decimal("1021").unwrap_err();
        assert_eq!(err,
                   Error::Parse(ParseError::InvalidDigit { digit: '2',
                                                           base:  2, }));
        assert!(!BaseSystem::binary().is_valid_string("102"));
        assert!(BaseSystem::binary().is_valid_string("1011"));
        assert!(!BaseSystem::binary().is_valid_string(""));
    }

    #[test]
    fn exponent_marker_switches_when_e_is_a_digit() {
        assert_eq!(BaseSystem::decimal().exponent_marker(), "E");
        assert_eq!(BaseSystem::from_base(14).unwrap().exponent_marker(), "E");
        assert_eq!(BaseSystem::from_base(15).unwrap().exponent_marker(), "_^");
        assert_eq!(BaseSystem::hexadecimal().exponent_marker(), "_^");
        assert_eq!(BaseSystem::new("0123456789e", "odd").unwrap().exponent_marker(), "_^");
    }

    #[test]
    fn negative_values_round_trip() {
        let hex = BaseSystem::hexadecimal();
        let rendered = hex.from_decimal(&BigInt::from(-255));
        assert_eq!(rendered, "-FF");
        assert_eq!(hex.to_decimal(&rendered).unwrap(), BigInt::from(-255));
    }

    proptest! {
        /// Property: every base round-trips every value below base^4.
        #[test]
        fn base_round_trip(base in 2u32..=62, seed in 0u64..u64::MAX) {
            let limit = u64::from(base).pow(4);
            let k = BigInt::from(seed % limit);
            let rendered = to_base_string(&k, base).unwrap();
            let system = BaseSystem::from_base(base).unwrap();
            prop_assert_eq!(system.to_decimal(&rendered).unwrap(), k);
        }
    }
}
