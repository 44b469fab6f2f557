//! In-process registry of realtime chat connections.
//!
//! Each WebSocket connection registers here and receives an unbounded channel of
//! [`ServerEvent`]s, drained by the connection's writer task. Rooms map to the set of
//! connections that joined them. State lives in this process only.

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use dashmap::DashMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::server::model::socket::ServerEvent;

/// Identifies one WebSocket connection. A user may hold several.
pub type ConnectionId = u64;

struct Connection {
    user_id: i32,
    sender: UnboundedSender<ServerEvent>,
    rooms: HashSet<i32>,
}

#[derive(Default)]
struct HubState {
    next_id: AtomicU64,
    connections: DashMap<ConnectionId, Connection>,
    rooms: DashMap<i32, HashSet<ConnectionId>>,
}

/// Cloneable handle to the shared connection registry.
#[derive(Clone, Default)]
pub struct ChatHub {
    state: Arc<HubState>,
}

impl ChatHub {
    /// Registers a connection for `user_id` and returns its ID and outbound queue.
    pub fn register(&self, user_id: i32) -> (ConnectionId, UnboundedReceiver<ServerEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let connection_id = self.state.next_id.fetch_add(1, Ordering::Relaxed);

        self.state.connections.insert(
            connection_id,
            Connection {
                user_id,
                sender,
                rooms: HashSet::new(),
            },
        );

        (connection_id, receiver)
    }

    /// Removes a connection and its room memberships, returning the user that owned it.
    pub fn unregister(&self, connection_id: ConnectionId) -> Option<i32> {
        let (_, connection) = self.state.connections.remove(&connection_id)?;

        for room_id in &connection.rooms {
            self.remove_member(*room_id, connection_id);
        }

        Some(connection.user_id)
    }

    /// Adds a connection to a room, returns false if the connection is unknown.
    pub fn join(&self, connection_id: ConnectionId, room_id: i32) -> bool {
        match self.state.connections.get_mut(&connection_id) {
            Some(mut connection) => {
                connection.rooms.insert(room_id);
            }
            None => return false,
        }

        self.state
            .rooms
            .entry(room_id)
            .or_default()
            .insert(connection_id);

        true
    }

    /// Removes a connection from a room, returns true if it had joined.
    pub fn leave(&self, connection_id: ConnectionId, room_id: i32) -> bool {
        let was_member = self
            .state
            .connections
            .get_mut(&connection_id)
            .is_some_and(|mut connection| connection.rooms.remove(&room_id));

        self.remove_member(room_id, connection_id);

        was_member
    }

    pub fn is_in_room(&self, connection_id: ConnectionId, room_id: i32) -> bool {
        self.state
            .connections
            .get(&connection_id)
            .is_some_and(|connection| connection.rooms.contains(&room_id))
    }

    /// Sends an event to a single connection.
    pub fn send_to(&self, connection_id: ConnectionId, event: ServerEvent) {
        if let Some(connection) = self.state.connections.get(&connection_id) {
            // Receiver is gone once the writer task ends, the read loop cleans up
            let _ = connection.sender.send(event);
        }
    }

    /// Sends an event to every connection.
    pub fn broadcast_all(&self, event: ServerEvent) {
        for connection in self.state.connections.iter() {
            let _ = connection.sender.send(event.clone());
        }
    }

    /// Sends an event to every connection that joined `room_id`.
    pub fn broadcast_room(&self, room_id: i32, event: ServerEvent) {
        self.send_to_members(room_id, None, event);
    }

    /// Sends an event to every connection in `room_id` except `except`.
    pub fn broadcast_room_except(&self, room_id: i32, except: ConnectionId, event: ServerEvent) {
        self.send_to_members(room_id, Some(except), event);
    }

    fn send_to_members(&self, room_id: i32, except: Option<ConnectionId>, event: ServerEvent) {
        // Copy the member set so the room shard is unlocked before touching connections
        let members: Vec<ConnectionId> = match self.state.rooms.get(&room_id) {
            Some(members) => members.iter().copied().collect(),
            None => return,
        };

        for connection_id in members.into_iter().filter(|id| Some(*id) != except) {
            self.send_to(connection_id, event.clone());
        }
    }

    fn remove_member(&self, room_id: i32, connection_id: ConnectionId) {
        self.state.rooms.remove_if_mut(&room_id, |_, members| {
            members.remove(&connection_id);
            members.is_empty()
        });
    }
}
