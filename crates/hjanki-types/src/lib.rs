pub mod types;

pub use types::{
    DetailedSense, ExampleSentence, HomographCandidate, SenseEntry, ShortSense, WordInfo,
};
