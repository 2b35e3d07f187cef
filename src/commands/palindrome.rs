//! `drills palindrome`

use drills_core::error::Result;
use drills_core::palindrome::highest_palindrome;
use serde_json::json;

use crate::cli::{OutputFormat, PalindromeArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header, quoted};

/// Execute `drills palindrome`
pub fn execute(ctx: &CommandContext, args: &PalindromeArgs) -> Result<()> {
    let palindrome = highest_palindrome(&args.number, args.changes)?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "number": args.number,
            "changes": args.changes,
            "palindrome": palindrome,
        }))?,
        OutputFormat::Human => println!("{}", palindrome),
        OutputFormat::Records => {
            print_records_header(
                "palindrome",
                &[("number", quoted(&args.number)), ("changes", args.changes.to_string())],
            );
            println!("R {}", quoted(&palindrome));
        }
    }
    Ok(())
}
