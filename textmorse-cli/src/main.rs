//! Command-line interface for textmorse
//! Tokenize delimited text, and encode / decode / play Morse code.
//!
//! Usage:
//!   textmorse tokenize [PATH] [-d CHARS] [-q CHARS] [-e CHARS] [--span] [-f FORMAT]
//!   textmorse encode [PATH | -t TEXT...] [--binary]
//!   textmorse decode [PATH | -t MORSE]
//!   textmorse play [PATH | -t TEXT...] [--unit-ms N] [--frequency N] [--dry-run]
//!
//! Every command reads stdin when given neither PATH nor --text, and accepts
//! `--config FILE` to layer a TOML file over the built-in defaults.

mod formats;
mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use textmorse::diagnostics::{Diagnostic, DiagnosticSink};
use textmorse::morse::{self, EncodeInput, KeyState, SleepKeyer, TimelineKeyer};
use textmorse::tokenizer::tokenize;
use textmorse_config::{Loader, TextmorseConfig};

fn main() {
    logging::init_tracing();

    let matches = Command::new("textmorse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize delimited text and convert text to and from Morse code")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Split text into tokens")
                .arg(path_arg("Path to the text to tokenize"))
                .arg(
                    Arg::new("delimiters")
                        .long("delimiters")
                        .short('d')
                        .help("Delimiter characters (each character is one delimiter)"),
                )
                .arg(
                    Arg::new("qualifiers")
                        .long("qualifiers")
                        .short('q')
                        .help("Qualifier (quote) characters"),
                )
                .arg(
                    Arg::new("escapes")
                        .long("escapes")
                        .short('e')
                        .help("Characters that escape a qualifier inside a quoted token"),
                )
                .arg(
                    Arg::new("line-join")
                        .long("line-join")
                        .help("Inserted where a spanning token crosses a line break"),
                )
                .arg(flag_arg(
                    "no-double-qualifier",
                    "A doubled qualifier closes the token instead of embedding one",
                ))
                .arg(flag_arg("span", "Quoted tokens may continue across lines"))
                .arg(flag_arg("group-lines", "Emit one group of tokens per line"))
                .arg(flag_arg(
                    "ignore-consecutive",
                    "Runs of delimiters produce no empty tokens",
                ))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: lines, json or yaml")
                        .default_value("lines"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode text as Morse code")
                .arg(path_arg("Path to the text to encode"))
                .arg(text_arg("Text to encode, one argument per line"))
                .arg(flag_arg("binary", "Print the on/off pulse stream instead")),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode Morse code into text")
                .arg(path_arg("Path to the Morse code to decode"))
                .arg(
                    Arg::new("text")
                        .long("text")
                        .short('t')
                        .conflicts_with("path")
                        .help("Morse code to decode"),
                ),
        )
        .subcommand(
            Command::new("play")
                .about("Encode text and key it out")
                .arg(path_arg("Path to the text to play"))
                .arg(text_arg("Text to play, one argument per line"))
                .arg(
                    Arg::new("unit-ms")
                        .long("unit-ms")
                        .value_parser(clap::value_parser!(u64))
                        .help("Length of one Morse unit in milliseconds (50-500)"),
                )
                .arg(
                    Arg::new("frequency")
                        .long("frequency")
                        .value_parser(clap::value_parser!(u32))
                        .help("Tone frequency in Hz (37-32767)"),
                )
                .arg(flag_arg(
                    "dry-run",
                    "Print the keying timeline instead of playing it",
                )),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("tokenize", sub)) => handle_tokenize_command(&matches, sub),
        Some(("encode", sub)) => handle_encode_command(sub),
        Some(("decode", sub)) => handle_decode_command(sub),
        Some(("play", sub)) => handle_play_command(&matches, sub),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_arg(help: &'static str) -> Arg {
    Arg::new("path").help(help).index(1)
}

fn text_arg(help: &'static str) -> Arg {
    Arg::new("text")
        .long("text")
        .short('t')
        .num_args(1..)
        .conflicts_with("path")
        .help(help)
}

fn flag_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

/// Defaults, then `--config`, then the per-command overrides
fn load_config(
    global: &ArgMatches,
    sub: &ArgMatches,
    overrides: &[(&str, &str)],
) -> Result<TextmorseConfig, String> {
    let mut loader = Loader::new();
    let config_path = sub
        .get_one::<String>("config")
        .or_else(|| global.get_one::<String>("config"));
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }

    for (key, arg) in overrides {
        if let Some(value) = sub.get_one::<String>(arg) {
            loader = loader
                .set_override(key, value.as_str())
                .map_err(|e| format!("Invalid --{}: {}", arg, e))?;
        }
    }
    for (key, flag) in [
        ("tokenizer.span", "span"),
        ("tokenizer.group_lines", "group-lines"),
        ("tokenizer.ignore_consecutive_delimiters", "ignore-consecutive"),
    ] {
        if sub.try_get_one::<bool>(flag).ok().flatten() == Some(&true) {
            loader = loader
                .set_override(key, true)
                .map_err(|e| format!("Invalid --{}: {}", flag, e))?;
        }
    }
    if sub.try_get_one::<bool>("no-double-qualifier").ok().flatten() == Some(&true) {
        loader = loader
            .set_override("tokenizer.double_qualifier_escape", false)
            .map_err(|e| format!("Invalid --no-double-qualifier: {}", e))?;
    }
    if let Ok(Some(unit)) = sub.try_get_one::<u64>("unit-ms") {
        loader = loader
            .set_override("playback.unit_ms", *unit)
            .map_err(|e| format!("Invalid --unit-ms: {}", e))?;
    }
    if let Ok(Some(frequency)) = sub.try_get_one::<u32>("frequency") {
        loader = loader
            .set_override("playback.frequency_hz", *frequency as u64)
            .map_err(|e| format!("Invalid --frequency: {}", e))?;
    }

    loader
        .build()
        .map_err(|e| format!("Configuration error: {}", e))
}

/// Encoder input: `--text` values, the file at PATH, or stdin
fn read_encode_input(sub: &ArgMatches) -> Result<EncodeInput, String> {
    if let Some(texts) = sub.get_many::<String>("text") {
        return Ok(EncodeInput::Lines(texts.cloned().collect()));
    }
    match sub.get_one::<String>("path") {
        Some(path) => Ok(EncodeInput::File(path.into())),
        None => Ok(EncodeInput::Lines(vec![read_source(sub)?])),
    }
}

fn read_source(sub: &ArgMatches) -> Result<String, String> {
    match sub.get_one::<String>("path") {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("Error reading file '{}': {}", path, e))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("Error reading stdin: {}", e))?;
            Ok(source)
        }
    }
}

fn handle_tokenize_command(global: &ArgMatches, sub: &ArgMatches) -> Result<(), String> {
    let config = load_config(
        global,
        sub,
        &[
            ("tokenizer.delimiters", "delimiters"),
            ("tokenizer.qualifiers", "qualifiers"),
            ("tokenizer.escapes", "escapes"),
            ("tokenizer.line_join", "line-join"),
        ],
    )?;
    let tokenizer = config.tokenizer.to_tokenizer_config();
    let format = sub
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("lines");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match sub.get_one::<String>("path") {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|e| format!("Error reading file '{}': {}", path, e))?;
            formats::write_tokens(&mut out, tokenize([source], &tokenizer), format)
        }
        None => {
            // Stream stdin line by line so tokens show up as soon as they are complete.
            // A read error ends the stream and is reported once the output is written.
            let mut read_error = None;
            let lines = io::stdin().lock().lines().map_while(|line| match line {
                Ok(line) => Some(line),
                Err(e) => {
                    read_error = Some(e);
                    None
                }
            });
            formats::write_tokens(&mut out, tokenize(lines, &tokenizer), format)?;
            match read_error {
                Some(e) => Err(format!("Error reading stdin: {}", e)),
                None => Ok(()),
            }
        }
    }
}

fn handle_encode_command(sub: &ArgMatches) -> Result<(), String> {
    let input = read_encode_input(sub)?;
    let binary = sub.get_flag("binary");

    let output = match morse::encode_input(&input, binary).map_err(|e| e.to_string())? {
        morse::Encoded::Text(text) => text,
        morse::Encoded::Pulses(pulses) => pulse_string(&pulses),
    };
    println!("{}", output);
    Ok(())
}

/// Reports missing terminators on stderr, everything else through tracing
struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            eprintln!("warning: {}", diagnostic);
        } else {
            tracing::debug!("{}", diagnostic);
        }
    }
}

fn handle_decode_command(sub: &ArgMatches) -> Result<(), String> {
    let source = match sub.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => read_source(sub)?,
    };

    for line in morse::decode_with(&source, &mut StderrSink) {
        println!("{}", line);
    }
    Ok(())
}

fn handle_play_command(global: &ArgMatches, sub: &ArgMatches) -> Result<(), String> {
    let config = load_config(global, sub, &[])?;
    let settings = config
        .playback
        .to_settings()
        .map_err(|e| format!("Invalid playback settings: {}", e))?;

    let input = read_encode_input(sub)?;
    let encoded = morse::encode_input(&input, true).map_err(|e| e.to_string())?;
    let pulses = encoded.as_pulses().unwrap_or_default();

    if sub.get_flag("dry-run") {
        let mut keyer = TimelineKeyer::new();
        morse::play(pulses, &settings, &mut keyer);
        println!("{}", timeline_string(&keyer));
        println!(
            "{} units, {} ms at {} Hz",
            pulses.len(),
            keyer.total().as_millis(),
            settings.frequency_hz()
        );
        return Ok(());
    }

    let mut keyer = SleepKeyer::new(io::stdout());
    morse::play(pulses, &settings, &mut keyer);
    io::stdout()
        .flush()
        .map_err(|e| format!("Write failed: {}", e))
}

fn pulse_string(pulses: &[u8]) -> String {
    pulses
        .iter()
        .map(|&pulse| if pulse == 0 { '0' } else { '1' })
        .collect()
}

fn timeline_string(keyer: &TimelineKeyer) -> String {
    keyer
        .segments
        .iter()
        .map(|(state, _)| match state {
            KeyState::Down => '#',
            KeyState::Up => '_',
        })
        .collect()
}
