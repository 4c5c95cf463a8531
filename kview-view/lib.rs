pub use self::component::{Component, Container, Containers, Labels, Link, Text, Timestamp};
pub use self::errors::ViewError;
pub use self::navigation::{Navigation, overview_navigation};
pub use self::summary::{Summary, SummarySection};
pub use self::table::{Table, TableCol, TableRow};

mod component;
mod errors;
mod navigation;
mod summary;
mod table;
