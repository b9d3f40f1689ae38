//! Splitting formatted numbers into dimmed and emphasized runs.

/// Whether a run of characters carries information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// Leading `0` / `.` characters, rendered dimmed
    Insignificant,
    /// Everything from the first meaningful character on
    Significant,
}

/// One run of a split numeric string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericPart {
    pub value: String,
    pub kind: PartKind,
}

impl NumericPart {
    pub fn insignificant(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: PartKind::Insignificant,
        }
    }

    pub fn significant(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: PartKind::Significant,
        }
    }
}

/// Split `value` into a leading insignificant run of `0`/`.` characters
/// and the significant remainder.
///
/// The last character is always significant, so `"0.00"` keeps its final
/// zero. A string with no leading run is returned whole as significant.
///
/// ```
/// use shade_curve::{separate_numeric_string_into_parts, NumericPart};
///
/// assert_eq!(
///     separate_numeric_string_into_parts("0.21"),
///     vec![NumericPart::insignificant("0."), NumericPart::significant("21")]
/// );
/// ```
pub fn separate_numeric_string_into_parts(value: &str) -> Vec<NumericPart> {
    let mut parts = Vec::with_capacity(2);
    let last = value.chars().count().saturating_sub(1);

    for (n, (i, ch)) in value.char_indices().enumerate() {
        if matches!(ch, '.' | '0') && n < last {
            continue;
        }
        if i > 0 {
            parts.push(NumericPart::insignificant(&value[..i]));
        }
        parts.push(NumericPart::significant(&value[i..]));
        break;
    }

    parts
}

/// A formatted channel value ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    pub value: String,
    pub unit: &'static str,
    pub parts: Vec<NumericPart>,
}

impl DisplayValue {
    pub fn new(value: String, unit: &'static str) -> Self {
        let parts = separate_numeric_string_into_parts(&value);
        Self { value, unit, parts }
    }
}
