use crate::reed_solomon::FieldPreset;
use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

fn field_arg() -> Arg {
    Arg::new("field")
        .short('f')
        .long("field")
        .help("Barcode family whose field to use")
        .value_name("PRESET")
        .required(true)
        .value_parser(|s: &str| s.parse::<FieldPreset>())
}

fn ec_arg() -> Arg {
    Arg::new("ec")
        .short('e')
        .long("ec")
        .help("Number of error correction codewords")
        .value_name("COUNT")
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

fn hex_arg() -> Arg {
    Arg::new("hex")
        .long("hex")
        .help("Read and write codewords as hex bytes (fields of at most 256 elements)")
        .action(ArgAction::SetTrue)
}

fn codewords_arg(help: &'static str) -> Arg {
    Arg::new("codewords")
        .help(help)
        .required(true)
        .num_args(1..)
}

pub fn build_cli() -> Command {
    Command::new("barcode-ecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon error correction for barcode codewords")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Append error correction codewords to data codewords")
                .arg(field_arg())
                .arg(ec_arg())
                .arg(hex_arg())
                .arg(codewords_arg("Data codewords")),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Correct a received block of codewords")
                .arg(field_arg())
                .arg(ec_arg())
                .arg(hex_arg())
                .arg(
                    Arg::new("erasures")
                        .long("erasures")
                        .help("Comma-separated positions known to be unreliable")
                        .value_name("POSITIONS"),
                )
                .arg(
                    Arg::new("slack")
                        .long("slack")
                        .help("Erasures allowed beyond half the correction codewords [default: 3]")
                        .value_name("COUNT")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(codewords_arg("Received codewords, data followed by correction")),
        )
        .subcommand(Command::new("fields").about("List the supported barcode fields"))
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}

/// Parse positional codeword arguments as decimal integers or concatenated hex bytes
pub fn parse_codewords(values: &[String], hex: bool) -> Result<Vec<u16>> {
    if hex {
        let joined: String = values.concat();
        let bytes = hex::decode(&joined).with_context(|| format!("Invalid hex input '{}'", joined))?;
        return Ok(bytes.into_iter().map(u16::from).collect());
    }
    values
        .iter()
        .map(|v| {
            v.parse::<u16>()
                .with_context(|| format!("Invalid codeword '{}'", v))
        })
        .collect()
}

pub fn format_codewords(codewords: &[u16], hex: bool) -> Result<String> {
    if hex {
        let bytes = codewords
            .iter()
            .map(|&c| u8::try_from(c))
            .collect::<std::result::Result<Vec<u8>, _>>()
            .context("Codeword does not fit in a hex byte")?;
        return Ok(hex::encode(bytes));
    }
    Ok(codewords
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" "))
}

pub fn parse_erasures(list: &str) -> Result<Vec<usize>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("Invalid erasure position '{}'", s))
        })
        .collect()
}

/// Reject `--hex` for fields whose elements do not fit in a byte
pub fn check_hex_field(preset: FieldPreset, hex: bool) -> Result<()> {
    if hex && preset.field().size() > 256 {
        bail!(
            "--hex needs a field of at most 256 elements, {} has {}",
            preset,
            preset.field().size()
        );
    }
    Ok(())
}
