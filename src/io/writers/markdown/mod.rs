//! Markdown text-markup layer used by the report assembler.

pub mod core;
pub mod formatters;

pub use self::core::{
    criteria, heading, inline_code, lines, link, paragraph, quote, raw, section, table, Block,
    Node,
};
pub use self::formatters::{
    format_stat, format_thousands, join_list, strip_license_suffix, NOT_AVAILABLE,
};
