use core::fmt;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Marker used for mines when no other marker is configured.
pub const MINE_MARKER: char = 'X';

/// Marker used for empty cells when no other marker is configured.
pub const EMPTY_MARKER: char = '.';

/// Highest possible adjacency count, a cell has at most eight neighbors.
pub const MAX_COUNT: u8 = 8;

/// Classification of a cell handed to the scanner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellInput {
    #[serde(rename = "X")]
    Mine,
    #[default]
    #[serde(rename = ".")]
    Empty,
}

impl CellInput {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl fmt::Display for CellInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mine => write!(f, "{}", MINE_MARKER),
            Self::Empty => write!(f, "{}", EMPTY_MARKER),
        }
    }
}

/// Scanned cell: either the echoed mine or the number of adjacent mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellOutput {
    Mine,
    Count(u8),
}

impl CellOutput {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl fmt::Display for CellOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mine => write!(f, "{}", MINE_MARKER),
            Self::Count(count) => write!(f, "{}", count),
        }
    }
}

/// Mines serialize as the `"X"` string, counts as bare integers.
impl Serialize for CellOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match *self {
            Self::Mine => serializer.serialize_char(MINE_MARKER),
            Self::Count(count) => serializer.serialize_u8(count),
        }
    }
}

struct CellOutputVisitor;

impl<'de> Visitor<'de> for CellOutputVisitor {
    type Value = CellOutput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the mine marker {:?} or a count from 0 to {}", MINE_MARKER, MAX_COUNT)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> core::result::Result<CellOutput, E> {
        match u8::try_from(value) {
            Ok(count) if count <= MAX_COUNT => Ok(CellOutput::Count(count)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(value), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> core::result::Result<CellOutput, E> {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(value), &self)),
        }
    }

    fn visit_char<E: de::Error>(self, value: char) -> core::result::Result<CellOutput, E> {
        if value == MINE_MARKER {
            Ok(CellOutput::Mine)
        } else {
            Err(E::invalid_value(Unexpected::Char(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> core::result::Result<CellOutput, E> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => self.visit_char(marker),
            _ => Err(E::invalid_value(Unexpected::Str(value), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for CellOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CellOutputVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_uses_marker_strings() {
        assert_eq!(serde_json::to_string(&CellInput::Mine).unwrap(), r#""X""#);
        assert_eq!(serde_json::to_string(&CellInput::Empty).unwrap(), r#"".""#);
        assert_eq!(serde_json::from_str::<CellInput>(r#""X""#).unwrap(), CellInput::Mine);
        assert!(serde_json::from_str::<CellInput>(r#""O""#).is_err());
    }

    #[test]
    fn output_mixes_marker_and_counts() {
        let row = [CellOutput::Mine, CellOutput::Count(2), CellOutput::Count(0)];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["X",2,0]"#);

        let parsed: [CellOutput; 3] = serde_json::from_str(r#"["X",2,0]"#).unwrap();
        assert_eq!(parsed, row);
    }

    #[test]
    fn output_rejects_out_of_range_counts() {
        assert!(serde_json::from_str::<CellOutput>("9").is_err());
        assert!(serde_json::from_str::<CellOutput>("-1").is_err());
        assert!(serde_json::from_str::<CellOutput>(r#""XX""#).is_err());
        assert!(serde_json::from_str::<CellOutput>(r#"".""#).is_err());
    }

    #[test]
    fn input_defaults_to_empty() {
        assert_eq!(CellInput::default(), CellInput::Empty);
    }

    #[test]
    fn output_accessors() {
        assert!(CellOutput::Mine.is_mine());
        assert_eq!(CellOutput::Mine.count(), None);
        assert_eq!(CellOutput::Count(3).count(), Some(3));
    }
}
