//! Core types: Topic, NoteName and the file name codec

mod note_name;
mod topic;

pub use note_name::{
    DATE_FORMAT, DATE_SEPARATOR, NOTE_EXTENSION, NoteName, ParseNoteNameError, UNPARSABLE, decode,
    encode,
};
pub use topic::{ParseTopicError, Topic};
