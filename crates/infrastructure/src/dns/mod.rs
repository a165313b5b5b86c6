pub mod message_builder;
pub mod resolv_conf;
pub mod resolver;
pub mod response_parser;
pub mod transport;

pub use message_builder::MessageBuilder;
pub use resolver::UpstreamTxtResolver;
pub use response_parser::{ResponseParser, TxtResponse};
