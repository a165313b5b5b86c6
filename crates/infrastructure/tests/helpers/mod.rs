pub mod dns_server_mock;
pub mod wire;

#[allow(unused_imports)]
pub use dns_server_mock::*;
#[allow(unused_imports)]
pub use wire::*;
