pub mod app_shell;
