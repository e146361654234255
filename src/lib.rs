pub mod codec;
pub mod digest;
pub mod random;
pub mod seeded;
pub mod shadow;
