use serde::{Deserialize, Serialize};

/// Declares a closed set of wire keys with an Arabic display label each.
///
/// Generates `ALL`, `as_str()` (wire key), `label()` and `parse()`. Serde uses
/// the wire key, so unknown keys are rejected on deserialization.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire key used in JSON and form values.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Arabic display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse a wire key. Unknown keys yield `None`.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use labeled_enum;

/// A lightweight reference to another record, carrying its display name so
/// list views don't need a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Case-insensitive substring match used by every search box.
///
/// An empty (or whitespace-only) query matches everything. Otherwise the
/// query is matched as typed, spaces included. Lowercasing is Unicode-aware;
/// Arabic has no case and compares verbatim.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    labeled_enum! {
        Sample {
            One => ("one", "واحد"),
            Two => ("two", "اثنان"),
        }
    }

    #[test]
    fn labeled_enum_round_trips_keys() {
        for value in Sample::ALL {
            assert_eq!(Sample::parse(value.as_str()), Some(*value));
        }
        assert_eq!(Sample::parse("three"), None);
        assert_eq!(Sample::Two.label(), "اثنان");
    }

    #[test]
    fn labeled_enum_serializes_as_key() {
        assert_eq!(serde_json::to_string(&Sample::One).unwrap(), r#""one""#);
        assert!(serde_json::from_str::<Sample>(r#""One""#).is_err());
    }

    #[test]
    fn matches_query_is_case_insensitive() {
        assert!(matches_query("Ahmed Trading Co.", "trading"));
        assert!(matches_query("Ahmed Trading Co.", "AHMED"));
        assert!(!matches_query("Ahmed Trading Co.", "salem"));
    }

    #[test]
    fn matches_query_handles_arabic_and_blank() {
        assert!(matches_query("شركة النور للتجارة", "النور"));
        assert!(matches_query("anything", "   "));
        assert!(matches_query("", ""));
    }

    #[test]
    fn matches_query_keeps_surrounding_spaces() {
        assert!(matches_query("Noor Al-Harbi", " al"));
        assert!(!matches_query("Alia Nasser", " al"));
        assert!(!matches_query("Alia", "alia "));
    }
}
