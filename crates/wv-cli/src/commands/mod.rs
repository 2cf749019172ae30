pub mod chat;
pub mod dispatch;
pub mod draft;
pub mod gate;
pub mod insight;
pub mod perks;
pub mod schema;
pub mod tone;
