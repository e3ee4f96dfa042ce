// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use std::env;
use std::io::{self, IsTerminal};
use taglog::commands::{EmitCommand, ResolveCommand};
use taglog::config::{ENV_NO_COLOR, new_taglog_config};
use taglog::error::{Result, format_error_with_color, get_exit_code};
use taglog::level::LevelInput;
use taglog::logging;

#[derive(Parser)]
#[command(name = "taglog")]
#[command(author, version, about = "Tagged, leveled logging from the command line", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a message through a tagged logger
    #[command(visible_alias = "e")]
    Emit {
        /// Message words; several words become separate arguments
        #[arg(required = true)]
        message: Vec<String>,

        /// Tag shown in the header
        #[arg(short, long)]
        tag: Option<String>,

        /// Threshold as a number (0-5) or level name (e.g., "debug", "warn")
        #[arg(short, long, allow_negative_numbers = true)]
        level: Option<String>,

        /// Level code of the message (f, e, w, i, d, v)
        #[arg(short, long, default_value = "i")]
        code: String,

        /// Print surface: console, log or silent
        #[arg(long)]
        surface: Option<String>,

        /// Disable coloured headers
        #[arg(long)]
        no_color: bool,
    },

    /// Show how a level name or number resolves
    #[command(visible_alias = "r")]
    Resolve {
        /// Level name, code or number
        #[arg(allow_negative_numbers = true)]
        level: String,

        /// Reject anything but exact level names, codes and digits
        #[arg(long)]
        strict: bool,
    },
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn main() {
    let cli = Cli::parse();

    setup_logger(&cli);

    // Until a config says otherwise, follow NO_COLOR and whether stderr is a terminal
    let mut use_color = env::var_os(ENV_NO_COLOR).is_none() && io::stderr().is_terminal();

    let result: Result<()> = (|| {
        match cli.command {
            Commands::Emit {
                message,
                tag,
                level,
                code,
                surface,
                no_color,
            } => {
                let mut config = new_taglog_config()?;
                use_color &= config.color;

                if let Some(tag) = tag {
                    config.tag = Some(tag);
                }
                if let Some(level) = level {
                    config.level = Some(LevelInput::Text(level));
                }
                if let Some(surface) = surface {
                    config.surface = surface.parse()?;
                }
                if no_color {
                    config.color = false;
                    use_color = false;
                }

                let command = EmitCommand::new(&config)?;
                command.execute(&code, &message)?;
            }
            Commands::Resolve { level, strict } => {
                let command = ResolveCommand::new()?;
                command.execute(&level, strict)?;
            }
        }
        Ok(())
    })();

    if let Err(e) = result {
        eprint!("{}", format_error_with_color(&e, use_color));
        std::process::exit(get_exit_code(&e));
    }
}
