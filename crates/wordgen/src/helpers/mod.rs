pub(crate) mod readline;

pub use wordgen_cli_helpers::messages;
