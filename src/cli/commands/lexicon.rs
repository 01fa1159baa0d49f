//! Lexicon command - Print the effective lexicon
//!
//! The output is a valid lexicon file: edit it and pass it back with
//! `--lexicon` or the `lexicon` config key.

use super::{load_engine, write_output, LexiconArgs};
use crate::cli::exit_codes;
use crate::cli::GlobalOptions;
use crate::error::ContentGuardError;
use crate::lexicon::Lexicon;

pub fn execute(args: LexiconArgs, options: &GlobalOptions) -> Result<i32, ContentGuardError> {
    let rendered = if args.embedded {
        Lexicon::embedded_toml().to_string()
    } else {
        load_engine(options)?.lexicon().to_toml()?
    };

    write_output(args.output.as_deref(), &rendered)?;

    Ok(exit_codes::SUCCESS)
}
