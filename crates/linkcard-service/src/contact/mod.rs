//! Contact links: short-lived URLs that download a generated vCard.

pub mod service;
