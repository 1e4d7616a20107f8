//! Property-based tests for level_partition_logger using proptest

use level_partition_logger::core::structured_entry::StructuredRecord;
use level_partition_logger::core::template;
use level_partition_logger::prelude::*;
use level_partition_logger::{CallerLocation, Encoder};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
    ]
}

fn any_style() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("lowercase".to_string()),
        Just("capital".to_string()),
        Just("lowercaseColor".to_string()),
        Just("capitalColor".to_string()),
        "[a-zA-Z-]{0,12}",
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Level names parse back to the same level
    #[test]
    fn test_log_level_name_roundtrip(level in any_level()) {
        prop_assert_eq!(level.name().parse::<LogLevel>(), Ok(level));
        prop_assert_eq!(level.to_str().parse::<LogLevel>(), Ok(level));
    }

    /// Ordering follows the discriminants
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a == b, a.file_name() == b.file_name());
    }
}

// ============================================================================
// Encoding Tests
// ============================================================================

proptest! {
    /// The bracketed flag wins over any named style, known or not
    #[test]
    fn test_bracketed_level_regardless_of_style(level in any_level(), style in any_style()) {
        let config = LogConfiguration::new("unused")
            .with_encode_level(style)
            .with_custom_level_encoder(true);
        let encoder = Encoder::build(&config);
        let record = encoder.record(&LogEntry::new(level, "m"));
        prop_assert_eq!(record.level, format!("[{}]", level.to_str()));
    }

    /// Arbitrary messages survive a structured round trip unchanged
    #[test]
    fn test_structured_round_trip(
        level in any_level(),
        message in ".*",
        prefix in "[a-z]{0,8}",
        file in "[a-z]{1,8}/[a-z]{1,8}\\.rs",
        line in 1u32..100_000u32,
        trace in proptest::option::of(".*"),
    ) {
        let config = LogConfiguration::new("unused")
            .with_format("json")
            .with_prefix(prefix.clone());
        let encoder = Encoder::build(&config);

        let mut entry = LogEntry::new(level, message.clone())
            .with_logger_name(&prefix)
            .with_caller(CallerLocation::new(file.clone(), line));
        if let Some(ref trace) = trace {
            entry = entry.with_stacktrace(trace.clone());
        }

        let encoded = encoder.encode(&entry);
        prop_assert!(!encoded.contains('\n'));

        let decoded = StructuredRecord::from_json(&encoded, encoder.stacktrace_key()).unwrap();
        prop_assert_eq!(decoded, encoder.record(&entry));
    }

    /// Text records never span more than one line
    #[test]
    fn test_text_records_single_line(level in any_level(), message in ".*") {
        let encoder = Encoder::build(&LogConfiguration::new("unused"));
        let encoded = encoder.encode(&LogEntry::new(level, message).with_stacktrace("a\nb"));
        prop_assert!(!encoded.contains('\n'));
        prop_assert!(!encoded.contains('\r'));
    }
}

// ============================================================================
// Template Tests
// ============================================================================

proptest! {
    /// Rendering never panics, whatever the template
    #[test]
    fn test_render_is_total(tpl in ".*", args in proptest::collection::vec(".*", 0..4)) {
        let refs: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        let rendered = template::render(&tpl, &refs);
        for arg in &args {
            prop_assert!(rendered.contains(arg.as_str()));
        }
    }

    /// Brace-free templates with matching placeholders render strictly
    #[test]
    fn test_render_strict_substitution(parts in proptest::collection::vec("[^{}]*", 1..5)) {
        let tpl = parts.join("{}");
        let values: Vec<usize> = (0..parts.len() - 1).collect();
        let refs: Vec<&dyn std::fmt::Display> =
            values.iter().map(|v| v as &dyn std::fmt::Display).collect();

        let mut expected = parts[0].clone();
        for (value, part) in values.iter().zip(&parts[1..]) {
            expected.push_str(&value.to_string());
            expected.push_str(part);
        }
        prop_assert_eq!(template::render(&tpl, &refs), expected);
    }
}
