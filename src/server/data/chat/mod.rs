//! Chat rooms, their participants and messages.

pub mod message;
pub mod participant;
pub mod room;

pub use message::MessageRepository;
pub use participant::ParticipantRepository;
pub use room::RoomRepository;
