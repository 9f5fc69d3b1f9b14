//! Gen step: direct access to the code synthesizer.
use crate::cli::GenArgs;
use crate::ean;
use anyhow::Result;

/// Print one code per line: a deterministic one for `--seed`, otherwise
/// `--count` codes drawn from the thread-local random source.
pub(crate) fn run_gen(args: &GenArgs) -> Result<()> {
    if let Some(seed) = &args.seed {
        println!("{}", ean::create_ean13(seed)?);
        return Ok(());
    }
    let mut rng = rand::thread_rng();
    for _ in 0..args.count {
        println!("{}", ean::create_ean13_random(&mut rng)?);
    }
    Ok(())
}
