pub mod main_shell;
