use crate::cmd::CmdRunner;
use crate::config::Config;
use crate::handler::{
    AddHandler, AddOptions, GitHandler, InitHandler, Only, ScanHandler, StatusHandler,
    SyncHandler, SyncOptions,
};
use crate::logging;
use crate::path::{config_path, home_dir};
use crate::prompt::StdinPrompt;
use crate::workspace::Workspace;
use anyhow::Result;
use clap::{command, Arg, ArgMatches, Command};
use std::path::PathBuf;

#[derive(Default)]
pub struct Cli;

impl Cli {
    pub fn exec(&self) -> Result<()> {
        let matches = match build().try_get_matches() {
            Ok(matches) => matches,
            Err(err) => {
                err.print()?;
                // Usage errors, including unknown commands, exit 1.
                std::process::exit(if err.use_stderr() { 1 } else { 0 });
            }
        };

        if let Some(level) = matches.value_of("log") {
            logging::init(level)?
        }

        let home = home_dir()?;
        log::debug!("Home directory: {:?}", home);

        let config_path = config_path()?;
        let config = Config::load(&config_path)?;
        let workspace = Workspace::from_config(home, &config);
        log::debug!("Managed root: {:?}", workspace.root);

        match matches.subcommand() {
            Some(("init", _)) => {
                let handler = InitHandler::new(
                    Box::new(StdinPrompt {}),
                    Box::new(CmdRunner),
                    workspace,
                );
                handler.init()?;
            }
            Some(("add", matches)) => {
                let path = match matches.value_of("path") {
                    Some(path) => PathBuf::from(path),
                    None => unreachable!("path is required"),
                };
                let options = AddOptions {
                    dryrun: matches.is_present("dryrun"),
                };
                let handler = AddHandler::new(
                    Box::new(StdinPrompt {}),
                    Box::new(CmdRunner),
                    workspace,
                    options,
                );
                handler.add(&path)?;
            }
            Some(("status", matches)) => {
                let handler = StatusHandler::new(workspace);
                handler.status(matches.is_present("brief"))?;
            }
            Some(("scan", matches)) => {
                let only = get_only(matches)?;
                let handler = ScanHandler::new(workspace, &config.scan_ignore(), only)?;
                handler.scan()?;
            }
            Some(("sync", matches)) => {
                let options = SyncOptions {
                    commit: matches.value_of("commit").map(|s| s.to_string()),
                    pull: !matches.is_present("no-pull"),
                    push: matches.is_present("push"),
                };
                let handler = SyncHandler::new(Box::new(CmdRunner), workspace, options);
                handler.sync()?;
            }
            Some(("git", matches)) => {
                let args = match matches.values_of("args") {
                    Some(args) => args.map(|a| a.to_string()).collect::<Vec<String>>(),
                    None => vec![],
                };
                let handler = GitHandler::new(Box::new(CmdRunner), workspace);
                handler.git(&args)?;
            }
            _ => unreachable!(),
        }

        Ok(())
    }
}

fn build() -> Command<'static> {
    command!()
        .about("Move dotfiles into ~/.dots and link them back with stow")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log")
                .help("Display logs.")
                .long("log")
                .global(true)
                .takes_value(true)
                .min_values(0)
                .require_equals(true)
                .possible_values(["trace", "debug", "info", "warn", "error"])
                .default_missing_value("info"),
        )
        .subcommand(Command::new("init").about(
            "Create the managed root, optionally cloning it from a git repository.",
        ))
        .subcommand(
            Command::new("add")
                .about("Move a file or folder into the managed root and link it back.")
                .arg(
                    Arg::new("path")
                        .help("File or folder under the home directory.")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::new("dryrun")
                        .long("dryrun")
                        .help("Only print what would be moved."),
                ),
        )
        .subcommand(
            Command::new("status")
                .alias("st")
                .about("Display which managed files are linked into home.")
                .arg(
                    Arg::new("brief")
                        .long("brief")
                        .short('b')
                        .help("Only display files that are not linked."),
                ),
        )
        .subcommand(
            Command::new("scan")
                .about("Scan home for dot files that are not managed yet.")
                .arg(
                    Arg::new("only")
                        .help("Only include paths matching patterns specified. Pattern uses glob by default. Set --regex to use regular expressions.")
                        .long("only")
                        .short('o')
                        .takes_value(true)
                        .multiple_occurrences(true)
                        .required(false),
                )
                .arg(
                    Arg::new("regex")
                        .help("Use regular expressions in patterns specified in --only.")
                        .long("regex")
                        .short('r'),
                ),
        )
        .subcommand(
            Command::new("sync")
                .about("Pull the managed root and relink every group.")
                .arg(
                    Arg::new("commit")
                        .help("Commit all changes with this message before pulling.")
                        .long("commit")
                        .short('C')
                        .takes_value(true),
                )
                .arg(
                    Arg::new("push")
                        .help("Run git push after pulling.")
                        .long("push"),
                )
                .arg(
                    Arg::new("no-pull")
                        .help("Do not run git pull.")
                        .long("no-pull"),
                ),
        )
        .subcommand(
            Command::new("git")
                .trailing_var_arg(true)
                .about("Run arbitrary git command in the managed root.")
                .long_about(
                    "Runs an arbitrary git command in the managed root.
Usage: dotties git <...>
Example: dotties git status",
                )
                .arg(
                    Arg::new("args")
                        .takes_value(true)
                        .multiple_values(true)
                        .allow_hyphen_values(true),
                ),
        )
}

fn get_only(matches: &ArgMatches) -> Result<Option<Only>> {
    match matches.values_of("only") {
        Some(patterns) => {
            let patterns: Vec<String> = patterns.map(|s| s.to_string()).collect();
            log::debug!("Got --only: {:?}", &patterns);
            let o = match matches.is_present("regex") {
                true => Only::from_regex(&patterns)?,
                false => Only::from_glob(&patterns)?,
            };
            Ok(Some(o))
        }
        None => Ok(None),
    }
}
