//! Built-in converter implementations

pub mod event;
pub mod literal;
pub mod location;
pub mod throwable;

pub use event::{
    DateConverter, LevelConverter, LineSeparatorConverter, LoggerConverter, MessageConverter,
    ThreadConverter,
};
pub use literal::LiteralConverter;
pub use location::{FileConverter, FullLocationConverter, LineConverter};
pub use throwable::ThrowableInformationConverter;
