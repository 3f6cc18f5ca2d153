//! Notices printed to the terminal.

use firstaid_core::{Notice, NoticeLevel, NoticeSink};

/// Writes each notice to stderr so stdout carries only results.
pub(crate) struct TerminalNotices;

impl NoticeSink for TerminalNotices {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", format_notice(&notice));
    }
}

pub(crate) fn format_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success | NoticeLevel::Info => notice.message.clone(),
        level => format!("{level}: {}", notice.message),
    }
}
