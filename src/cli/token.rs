//! Token command implementations

use crate::cli::context::output_format;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::folders::{decode_token, encode_token};
use crate::models::TokenDisplay;
use crate::output::Formattable;

/// Run the token encode command
pub fn encode(opts: &GlobalOptions, offset: u64) -> Result<()> {
    let row = TokenDisplay {
        offset: i128::from(offset),
        token: encode_token(offset),
    };
    print_row(row, output_format(opts)?)
}

/// Run the token decode command
pub fn decode(opts: &GlobalOptions, token: &str) -> Result<()> {
    let row = TokenDisplay {
        offset: decode_token(token)?,
        token: token.to_string(),
    };
    print_row(row, output_format(opts)?)
}

fn print_row(row: TokenDisplay, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            println!("{} -> {}", row.offset, row.token);
            Ok(())
        }
        _ => vec![row].print(format),
    }
}
