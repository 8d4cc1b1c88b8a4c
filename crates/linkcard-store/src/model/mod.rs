pub mod contact;
pub mod id;
