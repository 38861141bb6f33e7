//! Two-signal readiness rendezvous.
//!
//! The page is finalized only when two independent signals have both fired:
//!
//! - **content ready**: resolution and rendering are complete; the payload
//!   is the resolved document.
//! - **animations ready**: the motion and page scripts are in place; the
//!   payload describes the written assets.
//!
//! Each slot is set exactly once. Whichever call fills the second slot gets
//! the joined [`Ready`] value back; that is the single point where the
//! consumer proceeds. The browser-side `site.js` performs the same join to
//! lift the loading overlay.
//!
//! ```text
//!             set_content(c)            set_animations(a)
//! Waiting{-,-} ─────────────► Waiting{c,-} ─────────────► Open ──► Ready{c,a}
//!      │      set_animations(a)                set_content(c)  ▲
//!      └──────────────────► Waiting{-,a} ─────────────────────┘
//! ```

use std::fmt;
use thiserror::Error;

/// Which of the two signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Content,
    Animations,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Content => f.write_str("content"),
            Slot::Animations => f.write_str("animations"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GateError {
    #[error("{0} ready signal already received")]
    AlreadySet(Slot),
    #[error("readiness gate already opened")]
    AlreadyOpen,
    #[error("{0} ready signal never arrived")]
    Incomplete(Slot),
}

/// Both payloads, handed to the consumer once.
#[derive(Debug, PartialEq, Eq)]
pub struct Ready<C, A> {
    pub content: C,
    pub animations: A,
}

#[derive(Debug)]
enum GateState<C, A> {
    Waiting {
        content: Option<C>,
        animations: Option<A>,
    },
    Open,
}

/// Explicit two-slot rendezvous.
#[derive(Debug)]
pub struct ReadinessGate<C, A> {
    state: GateState<C, A>,
}

impl<C, A> Default for ReadinessGate<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> ReadinessGate<C, A> {
    pub fn new() -> Self {
        Self {
            state: GateState::Waiting {
                content: None,
                animations: None,
            },
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, GateState::Open)
    }

    /// Whether the given slot has been filled (always true once open).
    pub fn has(&self, slot: Slot) -> bool {
        match &self.state {
            GateState::Open => true,
            GateState::Waiting {
                content,
                animations,
            } => match slot {
                Slot::Content => content.is_some(),
                Slot::Animations => animations.is_some(),
            },
        }
    }

    /// The first slot still empty, or `None` once open.
    pub fn missing(&self) -> Option<Slot> {
        [Slot::Content, Slot::Animations]
            .into_iter()
            .find(|slot| !self.has(*slot))
    }

    /// Record the content-ready signal.
    pub fn set_content(&mut self, value: C) -> Result<Option<Ready<C, A>>, GateError> {
        match &mut self.state {
            GateState::Open => return Err(GateError::AlreadyOpen),
            GateState::Waiting { content, .. } => {
                if content.is_some() {
                    return Err(GateError::AlreadySet(Slot::Content));
                }
                *content = Some(value);
            }
        }
        Ok(self.try_open())
    }

    /// Record the animations-ready signal.
    pub fn set_animations(&mut self, value: A) -> Result<Option<Ready<C, A>>, GateError> {
        match &mut self.state {
            GateState::Open => return Err(GateError::AlreadyOpen),
            GateState::Waiting { animations, .. } => {
                if animations.is_some() {
                    return Err(GateError::AlreadySet(Slot::Animations));
                }
                *animations = Some(value);
            }
        }
        Ok(self.try_open())
    }

    fn try_open(&mut self) -> Option<Ready<C, A>> {
        let both_set = matches!(
            &self.state,
            GateState::Waiting {
                content: Some(_),
                animations: Some(_),
            }
        );
        if !both_set {
            return None;
        }
        match std::mem::replace(&mut self.state, GateState::Open) {
            GateState::Waiting {
                content: Some(content),
                animations: Some(animations),
            } => Some(Ready {
                content,
                animations,
            }),
            _ => None,
        }
    }
}
