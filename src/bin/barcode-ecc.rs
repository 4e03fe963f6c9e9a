//! Command-line front end for barcode Reed-Solomon encoding and correction
//!
//! Exit status: 0 on success, 1 on bad input, 2 when a block cannot be corrected.

use anyhow::{Context, Result};
use barcode_ecc::args::{
    check_hex_field, format_codewords, parse_args, parse_codewords, parse_erasures,
};
use barcode_ecc::{ErasureBudget, FieldPreset};
use clap::ArgMatches;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some(("fields", _)) => {
            handle_fields();
            Ok(())
        }
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => anyhow::bail!("No command specified"),
    }
}

struct BlockArgs {
    preset: FieldPreset,
    num_correction_words: usize,
    hex: bool,
    codewords: Vec<u16>,
}

fn block_args(matches: &ArgMatches) -> Result<BlockArgs> {
    let preset = *matches
        .get_one::<FieldPreset>("field")
        .context("--field is required")?;
    let num_correction_words = *matches
        .get_one::<usize>("ec")
        .context("--ec is required")?;
    let hex = matches.get_flag("hex");
    check_hex_field(preset, hex)?;

    let values: Vec<String> = matches
        .get_many::<String>("codewords")
        .context("No codewords given")?
        .cloned()
        .collect();
    let codewords = parse_codewords(&values, hex)?;

    Ok(BlockArgs {
        preset,
        num_correction_words,
        hex,
        codewords,
    })
}

fn handle_encode(matches: &ArgMatches) -> Result<()> {
    let args = block_args(matches)?;

    let block = args
        .preset
        .encoder()
        .encode_to_vec(&args.codewords, args.num_correction_words)
        .with_context(|| format!("Failed to encode {} block", args.preset))?;

    println!("{}", format_codewords(&block, args.hex)?);
    Ok(())
}

fn handle_decode(matches: &ArgMatches) -> Result<()> {
    let mut args = block_args(matches)?;
    let erasures = match matches.get_one::<String>("erasures") {
        Some(list) => parse_erasures(list)?,
        None => Vec::new(),
    };
    let mut budget = ErasureBudget::default();
    if let Some(&slack) = matches.get_one::<usize>("slack") {
        budget.slack = slack;
    }
    budget
        .admit(erasures.len(), args.num_correction_words)
        .context("Erasures rejected")?;

    let decoder = args.preset.decoder();
    match decoder.decode(&mut args.codewords, args.num_correction_words, &erasures) {
        Ok(corrections) => {
            println!("{}", format_codewords(&args.codewords, args.hex)?);
            println!("corrections: {}", corrections);
            Ok(())
        }
        Err(e) if e.is_uncorrectable() => {
            eprintln!("Block is not correctable: {}", e);
            std::process::exit(2);
        }
        Err(e) => Err(e).with_context(|| format!("Failed to decode {} block", args.preset)),
    }
}

fn handle_fields() {
    for preset in FieldPreset::ALL {
        println!("{:<12} {}", preset.name(), preset.field());
    }
}
