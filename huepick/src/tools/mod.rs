pub mod convert;
pub mod pick;
