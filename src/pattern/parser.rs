//! Pattern compiler
//!
//! Parses a format pattern string into an ordered sequence of converters.
//! The grammar is literal text mixed with `%<name>` specifier tokens, where
//! `name` is a run of ASCII letters optionally followed by a single
//! `{option}`. `%%` renders a literal percent sign.
//!
//! Compilation never aborts: an unknown or malformed specifier is substituted
//! with a literal converter rendering the raw token verbatim, and the error is
//! recorded so one bad token cannot disable the rest of the pattern.

use super::converter::Converter;
use super::converters::LiteralConverter;
use super::registry::ConverterRegistry;
use crate::core::PipelineError;
use std::sync::Arc;

/// Result of compiling a pattern: one converter per literal or specifier
/// segment, in pattern order, plus every error encountered along the way.
pub struct CompiledPattern {
    pub converters: Vec<Arc<dyn Converter>>,
    pub errors: Vec<PipelineError>,
}

/// Compile `pattern` against `registry`.
pub fn compile(pattern: &str, registry: &ConverterRegistry) -> CompiledPattern {
    let mut converters: Vec<Arc<dyn Converter>> = Vec::new();
    let mut errors = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }

        match chars.peek() {
            // Escaped percent stays part of the surrounding literal run.
            Some((_, '%')) => {
                chars.next();
                literal.push('%');
            }
            Some((_, c)) if c.is_ascii_alphabetic() => {
                flush_literal(&mut literal, &mut converters);

                let mut name = String::new();
                while let Some((_, c)) = chars.peek() {
                    if c.is_ascii_alphabetic() {
                        name.push(*c);
                        chars.next();
                    } else {
                        break;
                    }
                }

                let mut token = format!("%{}", name);
                let mut options = Vec::new();
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    let mut option = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        option.push(c);
                    }
                    token.push('{');
                    token.push_str(&option);
                    if !closed {
                        errors.push(PipelineError::pattern(
                            &token,
                            position,
                            "unterminated converter option",
                        ));
                        converters.push(Arc::new(LiteralConverter::new(&token)));
                        continue;
                    }
                    token.push('}');
                    options.push(option);
                }

                match registry.new_instance(&name, &options) {
                    Some(converter) => converters.push(converter),
                    None => {
                        errors.push(PipelineError::pattern(
                            &token,
                            position,
                            "unknown conversion specifier",
                        ));
                        converters.push(Arc::new(LiteralConverter::new(&token)));
                    }
                }
            }
            // A lone or dangling '%' falls back to literal text.
            _ => {
                errors.push(PipelineError::pattern(
                    "%",
                    position,
                    "dangling '%' without a conversion specifier",
                ));
                literal.push('%');
            }
        }
    }

    flush_literal(&mut literal, &mut converters);

    CompiledPattern { converters, errors }
}

fn flush_literal(literal: &mut String, converters: &mut Vec<Arc<dyn Converter>>) {
    if !literal.is_empty() {
        converters.push(Arc::new(LiteralConverter::new(literal.clone())));
        literal.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogEvent, LogLevel};

    fn render(compiled: &CompiledPattern, event: &LogEvent) -> String {
        let mut out = String::new();
        for converter in &compiled.converters {
            converter.format(event, &mut out).unwrap();
        }
        out
    }

    #[test]
    fn test_literal_only_pattern() {
        let registry = ConverterRegistry::with_defaults();
        let compiled = compile("plain text, no specifiers", &registry);
        assert_eq!(compiled.converters.len(), 1);
        assert!(compiled.errors.is_empty());

        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(render(&compiled, &event), "plain text, no specifiers");
    }

    #[test]
    fn test_mixed_pattern_segments() {
        let registry = ConverterRegistry::with_defaults();
        // literal, %p, literal, %c, literal, %m
        let compiled = compile("[%p] %c - %m", &registry);
        assert_eq!(compiled.converters.len(), 6);
        assert!(compiled.errors.is_empty());

        let event = LogEvent::new("app.db", LogLevel::Warn, "slow query");
        assert_eq!(render(&compiled, &event), "[WARN] app.db - slow query");
    }

    #[test]
    fn test_escaped_percent() {
        let registry = ConverterRegistry::with_defaults();
        let compiled = compile("load: 42%% of %m", &registry);
        assert!(compiled.errors.is_empty());

        let event = LogEvent::new("app", LogLevel::Info, "capacity");
        assert_eq!(render(&compiled, &event), "load: 42% of capacity");
    }

    #[test]
    fn test_unknown_specifier_becomes_placeholder() {
        let registry = ConverterRegistry::with_defaults();
        let compiled = compile("%q %m", &registry);

        // segments: %q, " ", %m
        assert_eq!(compiled.converters.len(), 3);
        assert_eq!(compiled.errors.len(), 1);
        assert!(compiled.errors[0]
            .to_string()
            .contains("unknown conversion specifier"));

        let event = LogEvent::new("app", LogLevel::Info, "hello");
        assert_eq!(render(&compiled, &event), "%q hello");
    }

    #[test]
    fn test_specifier_with_option() {
        let registry = ConverterRegistry::with_defaults();
        let compiled = compile("%d{UNIX}", &registry);
        assert_eq!(compiled.converters.len(), 1);
        assert!(compiled.errors.is_empty());

        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(
            render(&compiled, &event),
            event.timestamp.timestamp().to_string()
        );
    }

    #[test]
    fn test_unterminated_option_degrades_to_literal() {
        let registry = ConverterRegistry::with_defaults();
        let compiled = compile("%d{UNIX", &registry);
        assert_eq!(compiled.converters.len(), 1);
        assert_eq!(compiled.errors.len(), 1);

        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(render(&compiled, &event), "%d{UNIX");
    }

    #[test]
    fn test_dangling_percent_is_literal() {
        let registry = ConverterRegistry::with_defaults();
        let compiled = compile("100%", &registry);
        assert_eq!(compiled.converters.len(), 1);
        assert_eq!(compiled.errors.len(), 1);

        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(render(&compiled, &event), "100%");
    }

    #[test]
    fn test_empty_pattern() {
        let registry = ConverterRegistry::with_defaults();
        let compiled = compile("", &registry);
        assert!(compiled.converters.is_empty());
        assert!(compiled.errors.is_empty());
    }
}
