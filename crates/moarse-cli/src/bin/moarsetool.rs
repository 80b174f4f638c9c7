use std::path::PathBuf;

use clap::{Parser, Subcommand};

use moarse_cli::commands::{config_ops, replay_ops, transcode_ops};

#[derive(Parser)]
#[command(name = "moarsetool", about = "Morse transcoding and keyer diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text to Morse (characters without a code are dropped)
    Encode {
        /// Text to encode
        text: String,
        /// Render with display glyphs instead of dots and dashes
        #[arg(long)]
        glyphs: bool,
        /// Output as JSON, including dropped characters
        #[arg(long)]
        json: bool,
    },
    /// Decode Morse (`.`/`-`, letters separated by spaces or `/`)
    Decode {
        /// Code to decode
        code: String,
    },
    /// List the alphabet table
    Table {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Feed a recorded key-event script through an editing session
    Replay {
        /// Path to the script file
        script_file: PathBuf,
        /// Settings TOML (defaults to the built-in settings)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in alphabet TOML
    AlphabetExport,
    /// Check an alphabet TOML file (edits to the built-in table)
    AlphabetValidate {
        /// Alphabet TOML file
        file: PathBuf,
    },
    /// Print the built-in settings TOML
    SettingsExport,
    /// Check a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: PathBuf,
    },
}

fn main() {
    moarse_cli::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { text, glyphs, json } => transcode_ops::encode(&text, glyphs, json),
        Command::Decode { code } => transcode_ops::decode_code(&code),
        Command::Table { json } => transcode_ops::table(json),
        Command::Replay {
            script_file,
            config,
            json,
        } => replay_ops::replay(&script_file, config.as_deref(), json),
        Command::AlphabetExport => config_ops::alphabet_export(),
        Command::AlphabetValidate { file } => config_ops::alphabet_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
