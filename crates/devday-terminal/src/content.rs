//! Static reference data: help entries, banners, colors and canned messages.
//!
//! Everything here is an in-memory literal loaded once at startup.

use devday_types::error::{DevdayError, Result};

/// Written after every submitted line.
pub const PROMPT: &str = "\r\n$ ";

/// Line break used by every handler.
pub const NEWLINE: &str = "\r\n";

/// Erases the last visible column: backspace, space, backspace.
pub const ERASE: &str = "\x08 \x08";

/// ANSI color escapes.
pub mod colors {
    pub const RED: &str = "\x1b[1;31m";
    pub const WHITE: &str = "\x1b[37m";
    pub const BLUE: &str = "\x1b[36;1m";
    pub const RESET: &str = "\x1b[0m";
}

/// One row of the help menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub command: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// Help menu rows, in display order.
pub const HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry {
        command: "devday start",
        description: " ---- join devday",
        url: "https://gather.town/app/AncfUoSib6cE7E1i/kmong",
    },
    HelpEntry {
        command: "devday readme",
        description: "---- visit notion",
        url: "https://kmong.com",
    },
];

/// Look up a help entry by its exact command string.
pub fn find_help_entry<'a>(entries: &'a [HelpEntry], command: &str) -> Result<&'a HelpEntry> {
    entries
        .iter()
        .find(|entry| entry.command == command)
        .ok_or_else(|| DevdayError::MissingHelpEntry(command.to_string()))
}

/// Appended to every not-found response.
pub const HELP_HINT: &str = "devday --help     display full usage info";

/// Output of `ls`.
pub const ROSTER: [&str; 2] = [
    "bk                edgar               daniel",
    "mincho            vigli",
];

/// Output of `show me the money`.
pub const MONEY: &str = "10,000";

/// Output of `rm -rf`.
pub const PLEASE: &str = "please";

/// Last line of the `devday start` animation.
pub const PROCESS_COMPLETE: &str = "[프로세스 완료됨]";

/// Not-found notice naming the offending input.
pub fn not_found(command: &str) -> String {
    format!(
        "\n\r{red}Usage Error {reset} Command \"{command}\" not found.\r\n\r\n\
         Usage: devday <command>\r\n\r\n\
         where <command> is one of:\n\r    start, readme",
        red = colors::RED,
        reset = colors::RESET,
    )
}

/// `cd` without a usable target.
pub fn no_such_directory() -> String {
    format!(
        "{}WARNING{} bash: cd: desktop: No such file or directory",
        colors::RED,
        colors::WHITE
    )
}

/// `cd` into one of the roster names.
pub fn access_denied(target: &str) -> String {
    format!(
        "{}WARNING{} Access denied for user to database '{target}'.",
        colors::RED,
        colors::WHITE
    )
}

/// `visit to <url>` line used by readme and start.
pub fn visit(url: &str) -> String {
    format!("visit to {url}")
}

/// "KMONG" welcome banner. Rows carry no line break; the player ends each one.
pub const KMONG_BANNER: [&str; 6] = [
    r" __  ___ .___  ___.   ______   .__   __.   _______                          ",
    r"|  |/  / |   \/   |  /  __  \  |  \ |  |  /  _____|                         ",
    r"|  '  /  |  \  /  | |  |  |  | |   \|  | |  |  __                           ",
    r"|    <   |  |\/|  | |  |  |  | |  . `  | |  | |_ |                          ",
    r"|  .  \  |  |  |  | |  `--'  | |  |\   | |  |__| |                          ",
    r"|__|\__\ |__|  |__|  \______/  |__| \__|  \______|                          ",
];

/// "DEVDAY" welcome banner.
pub const DEVDAY_BANNER: [&str; 7] = [
    r"       _______   ___________    ____       _______       ___   ____    ____ ",
    r"      |       \ |   ____\   \  /   /      |       \     /   \  \   \  /   / ",
    r"      |  .--.  ||  |__   \   \/   / ______|  .--.  |   /  ^  \  \   \/   /  ",
    r"      |  |  |  ||   __|   \      / |______|  |  |  |  /  /_\  \  \_    _/   ",
    r"      |  '--'  ||  |____   \    /         |  '--'  | /  _____  \   |  |     ",
    r"      |_______/ |_______|   \__/          |_______/ /__/     \__\  |__|     ",
    r"                                                                            ",
];
