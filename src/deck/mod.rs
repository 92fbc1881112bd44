//! Deck lifecycle: the session state machine and what presenters see of it.
//!
//! ## Key Types
//!
//! - `DeckSession`: active/current/discarded pools and the operations on them
//! - `DeckState`: lifecycle state derived from the pools
//! - `DeckView`: serializable snapshot for presenters
//! - `SharedDeck`: lock-protected session for concurrent hosts

pub mod session;
pub mod shared;
pub mod state;
pub mod view;

pub use session::DeckSession;
pub use shared::SharedDeck;
pub use state::DeckState;
pub use view::DeckView;
