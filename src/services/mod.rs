mod download;
mod error;
mod fs;
mod json;
mod random;
mod remote;
mod shutdown;
mod slug;
mod sniff;
mod toolkit;
mod upload;

pub use error::{
    ConfigError, EncodeError, JsonError, PartialUpload, RemoteError, SlugError, UploadError,
};
pub use random::CHARSET;
pub use shutdown::ShutdownHook;
pub use sniff::{detect_content_type, SNIFF_LEN};
pub use toolkit::Toolkit;
