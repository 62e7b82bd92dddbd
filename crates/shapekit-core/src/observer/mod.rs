//! # Observer Module
//!
//! Synchronous publish/subscribe plumbing used by models to announce changes.
//!
//! ## Overview
//!
//! - Publishers own an [`ObserverList`] and call [`ObserverList::publish`]
//! - Subscribers register a handler and receive a [`SubscriptionId`]
//! - Delivery is synchronous and in registration order; `publish` returns
//!   only after every handler has run
//!
//! The list never hands out references to its subscribers, so a subscriber is
//! kept alive only by its own captured state and is dropped on `unsubscribe`.
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_core::observer::ObserverList;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut observers: ObserverList<u32> = ObserverList::new();
//!
//! let sink = seen.clone();
//! let id = observers.subscribe(move |n: &u32| sink.borrow_mut().push(*n));
//!
//! observers.publish(&7);
//! assert!(observers.unsubscribe(id));
//! observers.publish(&8);
//!
//! assert_eq!(*seen.borrow(), vec![7]);
//! ```

mod list;

pub use list::*;
