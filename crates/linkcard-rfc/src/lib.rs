pub mod rfc;
