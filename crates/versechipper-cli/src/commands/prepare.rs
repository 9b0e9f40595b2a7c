use std::io::Write;

use versechipper::vocab::io::write_base64_symbol_vocab;

use crate::{
    input_output::open_writer,
    logging::{LogArgs, PREPARE_VERBOSITY},
    pipeline_args::PipelineArgs,
};

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Optional base64 vocabulary output file; "-" may be used to indicate stdout.
    #[arg(long, default_value = None)]
    vocab_output: Option<String>,

    #[clap(flatten)]
    logging: LogArgs,
}

impl PrepareArgs {
    /// Run the prepare command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(PREPARE_VERBOSITY)?;

        let assembler = self.pipeline.assembler()?;
        let results = self.pipeline.build()?;

        let stats = results.corpus.stats();
        log::info!(
            "Corpus: {} samples, {} symbols, lengths {}..={} (mean {:.1})",
            stats.sample_count,
            stats.total_symbols,
            stats.min_len,
            stats.max_len,
            stats.mean_len()
        );
        log::info!(
            "Embedding size: {} (padding token {}, unknown token {})",
            results.vocab.embedding_size(),
            results.vocab.padding_token(),
            results.vocab.unknown_token()
        );
        if results.vocab.has_collisions() {
            log::warn!("The vocabulary maps some symbols to more than one position");
        }

        if let Some(path) = &self.vocab_output {
            log::info!("Writing vocabulary: {path}");
            let mut writer = open_writer(path)?;
            write_base64_symbol_vocab(&results.vocab, &mut writer)?;
            writer.flush()?;
        }

        let batches = assembler.assemble_with_vocab(&results.sequences, &results.vocab);
        if let (Some(first), Some(last)) = (batches.first(), batches.last()) {
            log::info!(
                "Batch shapes: first {:?}, last {:?}",
                first.inputs.dim(),
                last.inputs.dim()
            );
        }

        Ok(())
    }
}
