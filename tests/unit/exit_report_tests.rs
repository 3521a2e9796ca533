//! Exit classification and report lines.

use sheets_bot_launcher::launcher::BotExit;

#[test]
fn code_report_lines() {
    for code in [0, 1, 42] {
        let exit = BotExit::Code(code);
        assert_eq!(exit.report_line(), format!("Bot exited with code {code}"));
        assert_eq!(exit.code(), Some(code));
        assert_eq!(exit.launcher_exit_code(), code);
    }
}

#[test]
fn signal_maps_to_failure_code() {
    assert_eq!(BotExit::Signal.code(), None);
    assert_eq!(BotExit::Signal.launcher_exit_code(), 1);
    assert_eq!(BotExit::Signal.report_line(), "Bot terminated by signal");
}

#[cfg(unix)]
#[test]
fn from_status_reads_exit_code() {
    let status = std::process::Command::new("sh")
        .args(["-c", "exit 7"])
        .status()
        .expect("sh runs");
    assert_eq!(BotExit::from_status(status), BotExit::Code(7));
}

#[cfg(unix)]
#[test]
fn from_status_detects_signal() {
    let status = std::process::Command::new("sh")
        .args(["-c", "kill -9 $$"])
        .status()
        .expect("sh runs");
    assert_eq!(BotExit::from_status(status), BotExit::Signal);
}
