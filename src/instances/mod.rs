//! Instances module - per-story fact files on disk
//!
//! The instance file name is the cross-reference key of the whole
//! pipeline: the batch driver keys its results by it, and the
//! downstream QA module derives it back from an instance id to fetch
//! supporting facts.

mod writer;

pub use writer::{
    compile_corpus, instance_file_name, story_key, write_instance, StoryRecord, INSTANCE_EXT,
};
