/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod distr;
mod prng;

#[doc(inline)]
pub use distr::CanonicalUniform;
#[doc(inline)]
pub use distr::IntervalUniform;
#[doc(inline)]
pub use distr::canonical;
#[doc(inline)]
pub use prng::MtRng;
