/// All logic for writing [`Instance`](crate::entities::Instance)s in the flat text format
pub mod export;

/// All logic for reading [`Instance`](crate::entities::Instance)s from the flat text format
pub mod import;

#[doc(inline)]
pub use export::InstanceText;
#[doc(inline)]
pub use export::write_instance;
#[doc(inline)]
pub use import::parse_instance;
