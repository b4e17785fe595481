pub mod if_match;
pub mod player_id;
pub mod room_id;
pub mod validated_json;

pub use if_match::IfMatchVersion;
pub use player_id::PlayerId;
pub use room_id::RoomId;
pub use validated_json::ValidatedJson;
