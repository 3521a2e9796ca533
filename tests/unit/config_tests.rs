//! Parsing, defaults, validation and file resolution of `LaunchConfig`.

use sheets_bot_launcher::config::{BotCommand, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
use sheets_bot_launcher::env_block::{SHEET_NAME, SPREADSHEET_ID};
use sheets_bot_launcher::{AppError, LaunchConfig};

fn full_toml() -> &'static str {
    r#"
pause = false
propagate_exit_code = true
export_credentials_json = true

[bot]
program = "python3"
args = ["-u", "bot.py"]

[env]
SPREADSHEET_ID = "1AbC"
STATE_FILE = "state.json"
"#
}

#[test]
fn empty_config_uses_defaults() {
    let config = LaunchConfig::from_toml_str("").expect("config parses");
    assert_eq!(config, LaunchConfig::default());
    assert!(config.pause);
    assert!(!config.propagate_exit_code);
    assert!(!config.export_credentials_json);
    assert_eq!(config.bot.program, "python");
    assert_eq!(config.bot.args, vec!["bot.py"]);
}

#[test]
fn parses_full_config() {
    let config = LaunchConfig::from_toml_str(full_toml()).expect("config parses");
    assert!(!config.pause);
    assert!(config.propagate_exit_code);
    assert!(config.export_credentials_json);
    assert_eq!(config.bot.display(), "python3 -u bot.py");

    let block = config.env_block();
    assert_eq!(block.get(SPREADSHEET_ID), Some("1AbC"));
    assert_eq!(block.get("STATE_FILE"), Some("state.json"));
    assert_eq!(block.get(SHEET_NAME), Some("employees"));
}

#[test]
fn bot_program_without_args_keeps_default_args() {
    let config = LaunchConfig::from_toml_str("[bot]\nprogram = \"py\"\n").expect("parses");
    assert_eq!(config.bot.program, "py");
    assert_eq!(config.bot.args, vec!["bot.py"]);
}

#[test]
fn rejects_empty_program() {
    let err = LaunchConfig::from_toml_str("[bot]\nprogram = \"  \"\n").expect_err("must fail");
    assert!(err.to_string().contains("bot.program must not be empty"));
}

#[test]
fn rejects_invalid_env_name() {
    let err = LaunchConfig::from_toml_str("[env]\n\"A=B\" = \"x\"\n").expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn rejects_malformed_toml() {
    let err = LaunchConfig::from_toml_str("pause = maybe").expect_err("must fail");
    assert!(err.to_string().starts_with("config: invalid config:"));
}

#[test]
fn load_from_path_reports_missing_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let err = LaunchConfig::load_from_path(temp.path().join("absent.toml")).expect_err("missing");
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn bot_command_from_argv() {
    assert_eq!(BotCommand::from_argv(&[]), None);
    let argv = vec!["sh".to_owned(), "-c".to_owned(), "exit 3".to_owned()];
    let cmd = BotCommand::from_argv(&argv).expect("non-empty argv");
    assert_eq!(cmd.program, "sh");
    assert_eq!(cmd.args, vec!["-c", "exit 3"]);
}

#[test]
#[serial_test::serial]
fn resolve_prefers_explicit_path_then_env_then_working_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    let explicit = temp.path().join("explicit.toml");
    let from_env = temp.path().join("env.toml");
    std::fs::write(&explicit, "[bot]\nprogram = \"explicit\"\n").expect("write");
    std::fs::write(&from_env, "[bot]\nprogram = \"from-env\"\n").expect("write");
    std::fs::write(
        temp.path().join(DEFAULT_CONFIG_FILE),
        "[bot]\nprogram = \"from-cwd\"\n",
    )
    .expect("write");

    let original_cwd = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(temp.path()).expect("chdir");
    std::env::set_var(CONFIG_PATH_ENV, &from_env);

    let explicit_cfg = LaunchConfig::resolve(Some(explicit.as_path()));
    let env_cfg = LaunchConfig::resolve(None);
    std::env::remove_var(CONFIG_PATH_ENV);
    let cwd_cfg = LaunchConfig::resolve(None);

    std::env::set_current_dir(original_cwd).expect("restore cwd");

    assert_eq!(explicit_cfg.expect("explicit").bot.program, "explicit");
    assert_eq!(env_cfg.expect("env").bot.program, "from-env");
    assert_eq!(cwd_cfg.expect("cwd").bot.program, "from-cwd");
}

#[test]
#[serial_test::serial]
fn resolve_without_any_file_yields_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let original_cwd = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(temp.path()).expect("chdir");
    std::env::remove_var(CONFIG_PATH_ENV);

    let config = LaunchConfig::resolve(None);

    std::env::set_current_dir(original_cwd).expect("restore cwd");
    assert_eq!(config.expect("defaults"), LaunchConfig::default());
}

#[test]
#[serial_test::serial]
fn resolve_fails_when_env_names_missing_file() {
    std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/launcher.toml");
    let result = LaunchConfig::resolve(None);
    std::env::remove_var(CONFIG_PATH_ENV);
    assert!(matches!(result, Err(AppError::Config(_))));
}
