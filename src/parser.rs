//! Command dispatch and per-command option resolution
//!
//! [`resolve`] maps a token sequence to an [`Operation`]: the first token
//! selects a resolver by exact match, the resolver validates its option
//! tokens and produces a request the executor can carry out. Resolution
//! never touches the filesystem; every rejection (usage, unknown option,
//! conflicting options) happens before any mutation.

use crate::ast::{
    CdRequest, CdTarget, CpRequest, LsRequest, LsTarget, MvRequest, Operation, RmMode, RmRequest,
};
use crate::error::{ShellError, ShellResult};
use crate::help;

const CD_USAGE: &str = "Usage: cd [options] <directory>";
const MV_USAGE: &str = "Usage: mv [options] <source> <destination>";
const RM_USAGE: &str = "Usage: rm [options] <file/directory>";
const CP_USAGE: &str = "Usage: cp [options] <source> <destination>";

/// Resolve a token sequence into an operation. An empty sequence is not an
/// error; it resolves to nothing.
pub fn resolve(tokens: &[String]) -> ShellResult<Option<Operation>> {
    let Some(command) = tokens.first() else {
        return Ok(None);
    };
    let args = &tokens[1..];

    let op = match command.as_str() {
        "cd" => resolve_cd(args)?,
        "ls" => resolve_ls(args)?,
        "mv" => resolve_mv(args)?,
        "rm" => resolve_rm(args)?,
        "cp" => resolve_cp(args)?,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(Some(op))
}

/// Partition the tokens after the command word into the leading run of
/// option-shaped tokens (starting with `-` or `*`) and the remaining
/// positionals. Classification stops permanently at the first
/// non-option-shaped token.
fn split_options(args: &[String]) -> (&[String], &[String]) {
    let split = args
        .iter()
        .position(|t| !t.starts_with('-') && !t.starts_with('*'))
        .unwrap_or(args.len());
    args.split_at(split)
}

fn resolve_cd(args: &[String]) -> ShellResult<Operation> {
    let Some(option) = args.first() else {
        return Err(ShellError::Usage(CD_USAGE));
    };
    // Tokens beyond the first are ignored.

    if option == "--help" {
        return Ok(Operation::Help(&help::CD));
    }

    let target = if option == "~" {
        CdTarget::Home
    } else if let Some(user) = option.strip_prefix("~/") {
        CdTarget::UserHome(user.to_string())
    } else if option == "." {
        CdTarget::Stay
    } else {
        CdTarget::Path(option.clone())
    };

    Ok(Operation::Cd(CdRequest { target }))
}

/// `ls` scans every argument rather than prefix-splitting: flag tokens set
/// flags, anything else sets the target, and the last target token wins.
fn resolve_ls(args: &[String]) -> ShellResult<Operation> {
    let mut request = LsRequest {
        long: false,
        reverse: false,
        recursive: false,
        target: LsTarget::Cwd,
    };

    for arg in args {
        match arg.as_str() {
            "-l" => request.long = true,
            "-r" => request.reverse = true,
            "-R" => request.recursive = true,
            "~" => request.target = LsTarget::Home,
            "../" => request.target = LsTarget::Parent,
            "--help" => return Ok(Operation::Help(&help::LS)),
            other => request.target = LsTarget::Path(other.to_string()),
        }
    }

    Ok(Operation::Ls(request))
}

fn resolve_mv(args: &[String]) -> ShellResult<Operation> {
    if args.len() < 2 {
        return Err(ShellError::Usage(MV_USAGE));
    }

    let (options, positionals) = split_options(args);
    let Some(source) = positionals.first() else {
        return Err(ShellError::Usage(MV_USAGE));
    };
    let Some(destination) = positionals.get(1) else {
        return Err(ShellError::Usage(MV_USAGE));
    };

    let mut request = MvRequest {
        interactive: false,
        wildcard: false,
        suffix_backup: false,
        skip_existing: false,
        source: source.clone(),
        destination: destination.clone(),
    };

    for opt in options {
        match opt.as_str() {
            "-i" => request.interactive = true,
            "*" => request.wildcard = true,
            "--suffix" => request.suffix_backup = true,
            "-u" => request.skip_existing = true,
            "--help" => return Ok(Operation::Help(&help::MV)),
            other => return Err(ShellError::UnknownOption(other.to_string())),
        }
    }

    Ok(Operation::Mv(request))
}

fn resolve_rm(args: &[String]) -> ShellResult<Operation> {
    if args.is_empty() {
        return Err(ShellError::Usage(RM_USAGE));
    }

    let (options, positionals) = split_options(args);
    // The positional check precedes option processing, so a bare
    // `rm --help` prints usage rather than help.
    let Some(target) = positionals.first() else {
        return Err(ShellError::Usage(RM_USAGE));
    };

    let mut recursive = false;
    let mut interactive = false;
    let mut force = false;
    let mut force_recursive = false;

    for opt in options {
        match opt.as_str() {
            "-r" | "-R" => recursive = true,
            "-i" => interactive = true,
            "-rf" => force_recursive = true,
            "-f" => force = true,
            "--help" => return Ok(Operation::Help(&help::RM)),
            other => return Err(ShellError::UnknownOption(other.to_string())),
        }
    }

    if recursive && force_recursive {
        return Err(ShellError::OptionConflict("-r and -rf"));
    }

    let mode = if force_recursive {
        RmMode::ForceRecursive
    } else if recursive {
        RmMode::Recursive
    } else if force {
        RmMode::Force
    } else if interactive {
        RmMode::Interactive
    } else {
        RmMode::Plain
    };

    Ok(Operation::Rm(RmRequest {
        mode,
        target: target.clone(),
    }))
}

fn resolve_cp(args: &[String]) -> ShellResult<Operation> {
    if args.len() < 2 {
        return Err(ShellError::Usage(CP_USAGE));
    }

    let (options, positionals) = split_options(args);
    let Some(source) = positionals.first() else {
        return Err(ShellError::Usage(CP_USAGE));
    };
    let Some(destination) = positionals.get(1) else {
        return Err(ShellError::Usage(CP_USAGE));
    };

    let mut request = CpRequest {
        copy_contents: false,
        dereference: false,
        hard_link: false,
        recursive: false,
        source: source.clone(),
        destination: destination.clone(),
    };

    for opt in options {
        match opt.as_str() {
            "--copy-contents" => request.copy_contents = true,
            "-d" => request.dereference = true,
            "--link" | "-l" => request.hard_link = true,
            "--recursive" | "-r" | "-R" => request.recursive = true,
            "--help" => return Ok(Operation::Help(&help::CP)),
            other => return Err(ShellError::UnknownOption(other.to_string())),
        }
    }

    if request.hard_link && request.recursive {
        return Err(ShellError::OptionConflict("--link and --recursive"));
    }

    Ok(Operation::Cp(request))
}
