//! Block Kit composition objects
//!
//! Each object is a thin declaration on top of [`ComponentDraft`](crate::core::ComponentDraft):
//! it names its fields and attaches validators, nothing more.

pub mod confirm;
pub mod dispatch;
pub mod filter;
pub mod macros;
pub mod option;
pub mod text;

pub use confirm::{Confirm, ConfirmBuilder};
pub use dispatch::DispatchActionConfig;
pub use filter::{Filter, FilterBuilder};
pub use option::{OptionGroup, SelectOption, SelectOptionBuilder};
pub use text::{Text, TextBuilder, TextType, plain_text_only};
