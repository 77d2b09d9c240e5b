pub mod emojis;
pub mod glizzys;
