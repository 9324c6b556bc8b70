// UI module - page surface, controller and event queue
//
// This module contains:
// - View: Rendering/input-capture surface trait, with the in-memory HtmlPage
// - DirectoryController: Maps UI events to commands and re-renders regions
// - EventLoop: Queues UI events and feeds them to the controller one at a time

pub mod bridge;
pub mod controller;
pub mod view;

pub use bridge::{EVENT_QUEUE_CAPACITY, EventLoop, EventSender};
pub use controller::{Command, DirectoryController, Key, UiEvent};
pub use view::{HtmlPage, Region, View, ViewError};
