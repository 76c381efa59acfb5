use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The clean-code rule catalog. Nine rules, fixed at compile time.
///
/// Each entry carries its wire code (`R002`..`R012`), a category slug, and a
/// one-line description used when rendering the catalog into prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    FunctionLength,
    FunctionNaming,
    ParameterCount,
    GlobalMutation,
    MagicNumber,
    ErrorCodeReturn,
    ClassSize,
    MultipleInheritance,
    FunctionOrder,
}

impl RuleId {
    /// Every rule in catalog order.
    pub const ALL: [RuleId; 9] = [
        RuleId::FunctionLength,
        RuleId::FunctionNaming,
        RuleId::ParameterCount,
        RuleId::GlobalMutation,
        RuleId::MagicNumber,
        RuleId::ErrorCodeReturn,
        RuleId::ClassSize,
        RuleId::MultipleInheritance,
        RuleId::FunctionOrder,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RuleId::FunctionLength => "R002",
            RuleId::FunctionNaming => "R003",
            RuleId::ParameterCount => "R004",
            RuleId::GlobalMutation => "R005",
            RuleId::MagicNumber => "R006",
            RuleId::ErrorCodeReturn => "R008",
            RuleId::ClassSize => "R010",
            RuleId::MultipleInheritance => "R011",
            RuleId::FunctionOrder => "R012",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            RuleId::FunctionLength => "function_length",
            RuleId::FunctionNaming => "naming",
            RuleId::ParameterCount => "parameter_count",
            RuleId::GlobalMutation => "global_mutation",
            RuleId::MagicNumber => "magic_number",
            RuleId::ErrorCodeReturn => "error_code_return",
            RuleId::ClassSize => "class_size",
            RuleId::MultipleInheritance => "inheritance",
            RuleId::FunctionOrder => "function_order",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleId::FunctionLength => "Functions should span 20 lines or fewer",
            RuleId::FunctionNaming => "Function names use lowercase_with_underscores",
            RuleId::ParameterCount => "Functions take at most 3 positional parameters",
            RuleId::GlobalMutation => "Functions do not mutate module-level state via global declarations",
            RuleId::MagicNumber => "Numeric literals other than 0 and 1 belong in named constants",
            RuleId::ErrorCodeReturn => "Failures are raised as exceptions, not returned as constants",
            RuleId::ClassSize => "Classes hold at most 10 direct members",
            RuleId::MultipleInheritance => "Prefer composition over multiple base classes",
            RuleId::FunctionOrder => "The first functions follow setup, process, cleanup order",
        }
    }

    /// Resolve a wire code back to its catalog entry.
    pub fn from_code(code: &str) -> Option<RuleId> {
        RuleId::ALL.iter().copied().find(|r| r.code() == code)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        RuleId::from_code(&code)
            .ok_or_else(|| de::Error::custom(format!("unknown rule code: {code}")))
    }
}

/// Source location of a violation: a 1-based line, or `Unknown` when no
/// single construct is attributable (whole-file ordering violations).
///
/// Serialized as a JSON number or the string `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    Line(u32),
    Unknown,
}

impl std::fmt::Display for LineRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineRef::Line(n) => write!(f, "{n}"),
            LineRef::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for LineRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LineRef::Line(n) => serializer.serialize_u32(*n),
            LineRef::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for LineRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LineRefVisitor;

        impl<'de> Visitor<'de> for LineRefVisitor {
            type Value = LineRef;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a positive line number or the string \"unknown\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LineRef, E> {
                u32::try_from(v)
                    .map(LineRef::Line)
                    .map_err(|_| E::custom(format!("line number out of range: {v}")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LineRef, E> {
                u32::try_from(v)
                    .map(LineRef::Line)
                    .map_err(|_| E::custom(format!("line number out of range: {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LineRef, E> {
                match v {
                    "unknown" => Ok(LineRef::Unknown),
                    other => Err(E::custom(format!("expected \"unknown\", got {other:?}"))),
                }
            }
        }

        deserializer.deserialize_any(LineRefVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_closed_at_nine() {
        assert_eq!(RuleId::ALL.len(), 9);
    }

    #[test]
    fn test_codes_round_trip() {
        for rule in RuleId::ALL {
            assert_eq!(RuleId::from_code(rule.code()), Some(rule));
        }
        assert_eq!(RuleId::from_code("R999"), None);
    }

    #[test]
    fn test_rule_serde_uses_wire_code() {
        let json = serde_json::to_string(&RuleId::FunctionLength).unwrap();
        assert_eq!(json, "\"R002\"");
        let back: RuleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RuleId::FunctionLength);
    }

    #[test]
    fn test_line_ref_serde() {
        assert_eq!(serde_json::to_string(&LineRef::Line(14)).unwrap(), "14");
        assert_eq!(
            serde_json::to_string(&LineRef::Unknown).unwrap(),
            "\"unknown\""
        );
        let line: LineRef = serde_json::from_str("14").unwrap();
        assert_eq!(line, LineRef::Line(14));
        let unknown: LineRef = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(unknown, LineRef::Unknown);
    }

    #[test]
    fn test_line_ref_display() {
        assert_eq!(LineRef::Line(3).to_string(), "3");
        assert_eq!(LineRef::Unknown.to_string(), "unknown");
    }
}
