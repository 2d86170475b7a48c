/// command line: argument parsing and the one-shot commands
pub mod cli_main;
