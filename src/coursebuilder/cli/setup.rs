use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coursebuilder",
    bin_name = "coursebuilder",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Assemble an ordered list of course modules, links and files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the user-wide course
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Add,
    Item,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Add => "Add Commands:",
            CommandGroup::Item => "Per-Item Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "module" | "link" | "upload" => Some(CommandGroup::Add),
            "edit" | "delete" | "move" | "download" => Some(CommandGroup::Item),
            "config" | "init" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Add, CommandGroup::Item, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("coursebuilder {version}\n"));
    output.push_str("Assemble an ordered list of course modules, links and files\n");
    output.push('\n');
    output.push_str("Usage: coursebuilder [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -g, --global     Operate on the user-wide course\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Add(AddCommands),

    #[command(flatten)]
    Item(ItemCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add(c) => match c {
                AddCommands::List => "list",
                AddCommands::Module { .. } => "module",
                AddCommands::Link { .. } => "link",
                AddCommands::Upload { .. } => "upload",
            },
            Commands::Item(c) => match c {
                ItemCommands::Edit { .. } => "edit",
                ItemCommands::Delete { .. } => "delete",
                ItemCommands::Move { .. } => "move",
                ItemCommands::Download { .. } => "download",
            },
            Commands::Misc(c) => match c {
                MiscCommands::Config { .. } => "config",
                MiscCommands::Init => "init",
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// List the course's items
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Create a new module
    #[command(alias = "m", display_order = 2)]
    Module {
        /// Module name words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Add a link
    #[command(alias = "l", display_order = 3)]
    Link {
        /// Display name
        name: String,

        /// URL the link points to
        url: String,
    },

    /// Upload a file
    #[command(alias = "u", display_order = 4)]
    Upload {
        /// File to upload
        path: PathBuf,

        /// Display name (defaults to the file name)
        #[arg(short, long, default_value = "")]
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Edit an item
    #[command(alias = "e", display_order = 10)]
    Edit {
        /// Position of the item (as shown by list)
        position: usize,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New URL (links only)
        #[arg(long)]
        url: Option<String>,

        /// Replacement file (files only)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Delete one or more items
    #[command(alias = "rm", display_order = 11)]
    Delete {
        /// Positions of the items (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Move an item to another position
    #[command(alias = "mv", display_order = 12)]
    Move {
        /// Current position
        from: usize,

        /// New position
        to: usize,
    },

    /// Save an uploaded file
    #[command(alias = "dl", display_order = 13)]
    Download {
        /// Position of the file item
        position: usize,

        /// Destination directory (defaults to download-dir or the current directory)
        #[arg(short, long)]
        to: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (storage-key, download-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the course store
    #[command(display_order = 21)]
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("coursebuilder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn module_name_words_are_collected() {
        let cli = parse(&["module", "Week", "1"]);
        match cli.command {
            Some(Commands::Add(AddCommands::Module { name })) => {
                assert_eq!(name, vec!["Week", "1"])
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn edit_accepts_optional_fields() {
        let cli = parse(&["edit", "2", "--url", "http://y"]);
        match cli.command {
            Some(Commands::Item(ItemCommands::Edit {
                position,
                name,
                url,
                file,
            })) => {
                assert_eq!(position, 2);
                assert_eq!(name, None);
                assert_eq!(url.as_deref(), Some("http://y"));
                assert!(file.is_none());
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = parse(&["ls", "-g", "-v"]);
        assert!(cli.global);
        assert!(cli.verbose);
        assert_eq!(cli.command.unwrap().name(), "list");
    }

    #[test]
    fn delete_requires_a_position() {
        assert!(Cli::try_parse_from(["coursebuilder", "delete"]).is_err());
    }

    #[test]
    fn grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for name in [
            "list", "module", "link", "upload", "edit", "delete", "move", "download", "config",
            "init",
        ] {
            assert!(help.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
