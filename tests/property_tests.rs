//! Property-based tests for teelog using proptest

use proptest::prelude::*;
use teelog::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Ordering agrees with the numeric rank
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1.cmp(&level2), (level1 as u8).cmp(&(level2 as u8)));
    }

    /// Display names parse back to the same level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Threshold parsing is total and only yields thresholds
    #[test]
    fn test_from_threshold_total(tag in ".*") {
        let level = LogLevel::from_threshold(&tag);
        prop_assert!(level <= LogLevel::Error);
        if !["debug", "warn", "error"].contains(&tag.as_str()) {
            prop_assert_eq!(level, LogLevel::Info);
        }
    }
}

// ============================================================================
// LevelGate Tests
// ============================================================================

proptest! {
    /// A gate admits exactly the levels at or above its threshold
    #[test]
    fn test_gate_enabled_iff_at_or_above(threshold in any_level(), level in any_level()) {
        let gate = LevelGate::new(threshold);
        prop_assert_eq!(gate.enabled(level), level >= threshold);
    }

    /// The last set_level wins
    #[test]
    fn test_gate_set_level(levels in prop::collection::vec(any_level(), 1..10)) {
        let gate = LevelGate::default();
        for level in &levels {
            gate.set_level(*level);
        }
        prop_assert_eq!(gate.level(), *levels.last().unwrap());
    }
}

// ============================================================================
// Format Tag Tests
// ============================================================================

proptest! {
    /// Unknown tags resolve to the documented defaults
    #[test]
    fn test_unknown_tags_use_defaults(tag in "[A-Z]{1,12}") {
        prop_assert_eq!(TimeEncoding::from_tag(&tag), TimeEncoding::Epoch);
        prop_assert_eq!(LevelEncoding::from_tag(&tag), LevelEncoding::Lowercase);
        prop_assert_eq!(DurationEncoding::from_tag(&tag), DurationEncoding::Seconds);
        prop_assert_eq!(CallerEncoding::from_tag(&tag), CallerEncoding::Short);
        prop_assert!(EncoderKind::from_tag(&tag).is_none());
    }

    /// Any JSON config with a string level builds a threshold
    #[test]
    fn test_config_level_never_fails(level in "[a-z]{0,8}") {
        let json = serde_json::json!({ "level": level }).to_string();
        let config = LogConfig::from_json_str(&json).unwrap();
        prop_assert_eq!(config.threshold(), LogLevel::from_threshold(&level));
    }
}

// ============================================================================
// Message Tests
// ============================================================================

proptest! {
    /// Concat joins values with no separator
    #[test]
    fn test_concat_matches_join(parts in prop::collection::vec("[a-z0-9 ]{0,6}", 0..6)) {
        let values: Vec<&dyn std::fmt::Display> =
            parts.iter().map(|p| p as &dyn std::fmt::Display).collect();
        prop_assert_eq!(Concat(&values).to_string(), parts.concat());
    }

    /// Console lines never split, JSON keeps the message exactly
    #[test]
    fn test_message_encoding(message in r"(.|\n|\r|\t){0,32}") {
        let config = EncoderConfig::new().shared();
        let entry = LogEntry::new("p", LogLevel::Info, message.clone());

        let console = ConsoleEncoder::new(config.clone()).format(&entry);
        prop_assert!(!console.contains('\n'));
        prop_assert!(!console.contains('\r'));

        let record = JsonEncoder::new(config).to_value(&entry);
        prop_assert_eq!(record["msg"].as_str(), Some(message.as_str()));
    }
}
