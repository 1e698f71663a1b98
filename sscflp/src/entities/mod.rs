mod instance;
mod point;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use point::Point;
