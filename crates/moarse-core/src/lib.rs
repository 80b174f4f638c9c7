//! Core Morse transcoding: the alphabet table, encode/decode, the key-timing
//! classifier and the message buffer that ties them together.

pub mod alphabet;
pub mod buffer;
pub mod settings;
pub mod symbol;
pub mod timing;
pub mod transcode;

pub use alphabet::AlphabetTable;
pub use buffer::MessageBuffer;
pub use symbol::{Code, Symbol};
pub use timing::{KeyTransition, TimingClassifier, TimingConfig};
pub use transcode::{decode, encode, encode_report, EncodeReport, SENTINEL};
