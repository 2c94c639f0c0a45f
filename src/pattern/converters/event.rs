//! Converters for the event's own fields: message, logger, thread, level,
//! timestamp, line separator

use crate::core::{LogEvent, Result, TimestampFormat};
use crate::pattern::converter::Converter;
use colored::Colorize;
use std::sync::{Arc, OnceLock};

/// Renders the event message verbatim.
pub struct MessageConverter;

impl MessageConverter {
    pub fn new_instance(_options: &[String]) -> Arc<dyn Converter> {
        static INSTANCE: OnceLock<Arc<MessageConverter>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(MessageConverter)).clone()
    }
}

impl Converter for MessageConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        out.push_str(&event.message);
        Ok(())
    }

    fn name(&self) -> &str {
        "Message"
    }
}

/// Renders the logger (category) name verbatim.
///
/// The root logger has no category name, so it renders as nothing.
pub struct LoggerConverter;

impl LoggerConverter {
    pub fn new_instance(_options: &[String]) -> Arc<dyn Converter> {
        static INSTANCE: OnceLock<Arc<LoggerConverter>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(LoggerConverter)).clone()
    }
}

impl Converter for LoggerConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        out.push_str(&event.logger);
        Ok(())
    }

    fn name(&self) -> &str {
        "Logger"
    }
}

/// Renders the thread name, falling back to the thread id for unnamed threads.
pub struct ThreadConverter;

impl ThreadConverter {
    pub fn new_instance(_options: &[String]) -> Arc<dyn Converter> {
        static INSTANCE: OnceLock<Arc<ThreadConverter>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(ThreadConverter)).clone()
    }
}

impl Converter for ThreadConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        out.push_str(event.thread_name.as_ref().unwrap_or(&event.thread_id));
        Ok(())
    }

    fn name(&self) -> &str {
        "Thread"
    }
}

/// Renders the severity level, optionally colorized for terminals.
///
/// Two shared instances exist process-wide: a plain one and one selected by
/// the `color` option.
pub struct LevelConverter {
    colorize: bool,
}

impl LevelConverter {
    pub fn new_instance(options: &[String]) -> Arc<dyn Converter> {
        if options.first().map(String::as_str) == Some("color") {
            static COLOR: OnceLock<Arc<LevelConverter>> = OnceLock::new();
            return COLOR
                .get_or_init(|| Arc::new(LevelConverter { colorize: true }))
                .clone();
        }
        static PLAIN: OnceLock<Arc<LevelConverter>> = OnceLock::new();
        PLAIN
            .get_or_init(|| Arc::new(LevelConverter { colorize: false }))
            .clone()
    }
}

impl Converter for LevelConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        if self.colorize {
            out.push_str(
                &event
                    .level
                    .to_str()
                    .color(event.level.color_code())
                    .to_string(),
            );
        } else {
            out.push_str(event.level.to_str());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Level"
    }
}

/// Renders the event timestamp.
///
/// The option selects a [`TimestampFormat`]: recognized names map to the named
/// formats, anything else is a custom strftime string. The default ISO 8601
/// form is a shared instance; configured forms are built per compile.
pub struct DateConverter {
    format: TimestampFormat,
}

impl DateConverter {
    pub fn new_instance(options: &[String]) -> Arc<dyn Converter> {
        match options.first() {
            None => {
                static ISO: OnceLock<Arc<DateConverter>> = OnceLock::new();
                ISO.get_or_init(|| {
                    Arc::new(DateConverter {
                        format: TimestampFormat::Iso8601,
                    })
                })
                .clone()
            }
            Some(option) => {
                let format = TimestampFormat::from_option(option);
                if !format.is_valid() {
                    crate::core::diagnostics::warn(&format!(
                        "[{}] is not a valid timestamp format; using ISO 8601.",
                        option
                    ));
                    return Arc::new(DateConverter {
                        format: TimestampFormat::Iso8601,
                    });
                }
                Arc::new(DateConverter { format })
            }
        }
    }
}

impl Converter for DateConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        out.push_str(&self.format.format(&event.timestamp));
        Ok(())
    }

    fn name(&self) -> &str {
        "Date"
    }
}

/// Renders a line separator.
pub struct LineSeparatorConverter;

impl LineSeparatorConverter {
    pub fn new_instance(_options: &[String]) -> Arc<dyn Converter> {
        static INSTANCE: OnceLock<Arc<LineSeparatorConverter>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| Arc::new(LineSeparatorConverter))
            .clone()
    }
}

impl Converter for LineSeparatorConverter {
    fn format(&self, _event: &LogEvent, out: &mut String) -> Result<()> {
        out.push('\n');
        Ok(())
    }

    fn name(&self) -> &str {
        "LineSeparator"
    }
}
