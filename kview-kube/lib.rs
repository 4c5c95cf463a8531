pub use self::cache::{CacheError, CacheKey, CacheQuery, MemoryCache, ObjectCache};
pub use self::kind::{CORE_VERSION, Kind};
pub use self::paths::{Category, PathBuilder, PathError, ResourcePath};

pub mod cache;
pub mod utils;

mod kind;
mod paths;
