//! Output templates, kept as standalone files and included as constants.
//!
//! Line breaks are explicit (`{{ "\n" }}`) so loops and conditionals never
//! leak stray blank lines.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const QUESTION_TEMPLATE: &str = include_str!("templates/question.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const BANNER_TEMPLATE: &str = include_str!("templates/banner.tmp");
