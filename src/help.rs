//! Static help text for the built-in commands.

#[derive(Debug, PartialEq, Eq)]
pub struct CommandHelp {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

pub const CD: CommandHelp = CommandHelp {
    name: "cd",
    summary: "Change the current directory",
    usage: "cd [options] <directory>",
    options: &[
        ("~ or ~/user", "Go to home directory or specified user's home directory"),
        (".", "Stay in the current directory"),
        ("dir", "Go to a subdirectory"),
        ("--help", "Display this help message"),
    ],
};

pub const LS: CommandHelp = CommandHelp {
    name: "ls",
    summary: "List directory contents",
    usage: "ls [options] <directory>",
    options: &[
        ("-l", "Show list in long format"),
        ("-r", "Print list in reverse order"),
        ("-R", "Display content of sub-directories also"),
        ("~", "Give the contents of home directory"),
        ("../", "Give the contents of parent directory"),
        ("--help", "Display this help message"),
    ],
};

pub const MV: CommandHelp = CommandHelp {
    name: "mv",
    summary: "Move or rename files",
    usage: "mv [options] <source> <destination>",
    options: &[
        ("-i", "Ask for permission to overwrite"),
        ("*", "Move multiple files to a specific directory"),
        ("--suffix", "Take backup before overwriting"),
        ("-u", "Only move those files that don't exist"),
        ("--help", "Display this help message"),
    ],
};

pub const RM: CommandHelp = CommandHelp {
    name: "rm",
    summary: "Remove files or directories",
    usage: "rm [options] <file/directory>",
    options: &[
        ("-r, -R", "Remove directory recursively"),
        ("-i", "Remove file interactively"),
        ("-rf", "Remove directory forcefully"),
        ("-f", "Force removal, ignores non-existent files and overrides prompts"),
        ("--help", "Display this help message"),
    ],
};

pub const CP: CommandHelp = CommandHelp {
    name: "cp",
    summary: "Copy files",
    usage: "cp [options] <source> <destination>",
    options: &[
        ("--copy-contents", "Copy special file contents when recursive"),
        ("-d", "Equivalent to --no-dereference --preserve=links"),
        ("--link, -l", "Specify hard link files rather than copying"),
        ("--recursive, -r, -R", "Recursively copy directories"),
        ("--help", "Display this help message"),
    ],
};

pub const COMMANDS: &[&CommandHelp] = &[&CD, &LS, &MV, &RM, &CP];

pub fn format_help(cmd: &CommandHelp) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} - {}\n\n", cmd.name, cmd.summary));
    out.push_str(&format!("Usage: {}\n", cmd.usage));
    if !cmd.options.is_empty() {
        out.push_str("\nOptions:\n");
        for (opt, desc) in cmd.options {
            out.push_str(&format!("  {:20} {}\n", opt, desc));
        }
    }
    out
}
