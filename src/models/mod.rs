pub mod enums;
pub mod notice;
pub mod user;
pub mod visit;

pub use enums::{join_symptoms, Language, Symptom, YesNo};
pub use notice::{Notice, NoticeLevel};
pub use user::UserRecord;
pub use visit::Visit;
