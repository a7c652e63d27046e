pub mod bundle_command;
pub mod preview_command;
pub mod print_command;
