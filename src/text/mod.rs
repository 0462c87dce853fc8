//! Title text processing: normalization, tokenization and phonetic codes.
//!
//! Both query titles and corpus titles pass through the same [`normalize`] so every
//! comparison downstream is symmetric.

pub mod normalize;
pub mod phonetic;
pub mod title;


pub use normalize::{normalize, tokenize};
pub use phonetic::{PhoneticCode, PhoneticEncoder, phonetic_match};
pub use title::Title;
