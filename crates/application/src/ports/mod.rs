mod txt_resolver;

pub use txt_resolver::{TransportProtocol, TxtAnswer, TxtResolver};
