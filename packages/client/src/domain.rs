//! Client-side synchronization state for the current room.
//!
//! The server broadcasts every accepted message back to all room members,
//! including the sender, and replies to each `join_room` with a full
//! history replay. This module owns the reconciliation: optimistic local
//! appends, suppression of the sender's own echo, and discarding of stale
//! history replies after a quick room switch.
//!
//! Replies carry no room name on the wire. The server processes a
//! connection's events in order, so the k-th `load_messages` answers the
//! k-th `join_room`; `pending_joins` records the outstanding joins in
//! send order to make that attribution.
//!
//! Everything here is pure state transitions, which keeps it testable
//! without a socket.

use std::collections::VecDeque;

use tamariba_shared::protocol::{ClientEvent, MessageDto};

use crate::error::SendError;

/// Where the client is in the join handshake for its current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// No room requested yet.
    Idle,
    /// `join_room` sent, waiting for the history replay.
    AwaitingRoomData,
    /// History applied; the local view tracks the room.
    Synced,
}

/// Result of feeding a `load_messages` reply into the state.
#[derive(Debug, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// The reply answered the latest join; the local view was replaced.
    Applied,
    /// The reply answered a join that is no longer current.
    StaleDiscarded,
}

/// Result of feeding a broadcast `chat_message` into the state.
#[derive(Debug, PartialEq, Eq)]
pub enum BroadcastOutcome {
    /// A message from someone else, appended to the local view.
    Appended(MessageDto),
    /// The client's own message coming back; already in the view from
    /// the optimistic append.
    EchoSuppressed,
    /// Arrived while not synced; the upcoming history replay is
    /// authoritative, so the broadcast is dropped.
    Discarded,
}

/// The client's view of one room, reconciled against server events.
#[derive(Debug)]
pub struct ClientSyncState {
    sender: String,
    current_room: Option<String>,
    phase: SyncPhase,
    local_view: Vec<MessageDto>,
    pending_joins: VecDeque<String>,
}

impl ClientSyncState {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            current_room: None,
            phase: SyncPhase::Idle,
            local_view: Vec::new(),
            pending_joins: VecDeque::new(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn current_room(&self) -> Option<&str> {
        self.current_room.as_deref()
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn local_view(&self) -> &[MessageDto] {
        &self.local_view
    }

    /// Request a switch to `room`.
    ///
    /// Clears the local view and moves to `AwaitingRoomData`; the caller
    /// must put the returned `join_room` event on the wire. Returns `None`
    /// for a whitespace-only room name, leaving the state untouched.
    /// Re-joining the current room is a valid transition and triggers a
    /// fresh replay.
    pub fn switch_room(&mut self, room: &str) -> Option<ClientEvent> {
        let room = room.trim();
        if room.is_empty() {
            return None;
        }

        self.current_room = Some(room.to_string());
        self.phase = SyncPhase::AwaitingRoomData;
        self.local_view.clear();
        self.pending_joins.push_back(room.to_string());

        Some(ClientEvent::JoinRoom {
            room_name: room.to_string(),
        })
    }

    /// Reconcile a `load_messages` reply against the outstanding joins.
    ///
    /// The reply is applied only when it answers the newest join and that
    /// join targets the current room; anything else is a leftover from a
    /// room the user already navigated away from.
    pub fn on_load_messages(&mut self, messages: Vec<MessageDto>) -> HistoryOutcome {
        let Some(answered_room) = self.pending_joins.pop_front() else {
            tracing::warn!("Received load_messages with no join outstanding");
            return HistoryOutcome::StaleDiscarded;
        };

        let is_latest = self.pending_joins.is_empty();
        if is_latest && Some(answered_room.as_str()) == self.current_room() {
            self.local_view = messages;
            self.phase = SyncPhase::Synced;
            HistoryOutcome::Applied
        } else {
            HistoryOutcome::StaleDiscarded
        }
    }

    /// Prepare an outgoing message: optimistic append plus the wire event.
    ///
    /// The local copy is added immediately so the sent message is visible
    /// without waiting for the server's echo; [`Self::on_broadcast`]
    /// suppresses that echo when it arrives.
    pub fn send_local(&mut self, content: &str) -> Result<ClientEvent, SendError> {
        if self.phase != SyncPhase::Synced {
            return Err(SendError::NotSynced);
        }
        if content.trim().is_empty() {
            return Err(SendError::EmptyContent);
        }
        // Synced implies a current room.
        let room_name = self
            .current_room
            .clone()
            .ok_or(SendError::NotSynced)?;

        self.local_view.push(MessageDto {
            sender: self.sender.clone(),
            content: content.to_string(),
        });

        Ok(ClientEvent::ChatMessage {
            sender: self.sender.clone(),
            content: content.to_string(),
            room_name,
        })
    }

    /// Reconcile a broadcast `chat_message`.
    ///
    /// Echo suppression keys on the sender identity alone; the server
    /// attaches no message id the client could match on.
    pub fn on_broadcast(&mut self, message: MessageDto) -> BroadcastOutcome {
        if self.phase != SyncPhase::Synced {
            return BroadcastOutcome::Discarded;
        }
        if message.sender == self.sender {
            return BroadcastOutcome::EchoSuppressed;
        }

        self.local_view.push(message.clone());
        BroadcastOutcome::Appended(message)
    }
}
