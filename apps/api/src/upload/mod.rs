// Resume uploads: acceptance policy, multipart form reading, and on-disk storage.

pub mod form;
pub mod handlers;
pub mod picker;
pub mod storage;
