use std::io::Write;

use versechipper::{batching::TrainingBatch, vocab::SymbolVocab};

use crate::{
    logging::{INSPECT_VERBOSITY, LogArgs},
    pipeline_args::PipelineArgs,
};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Number of batches to print.
    #[arg(long, default_value = "1")]
    count: usize,

    #[clap(flatten)]
    logging: LogArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(INSPECT_VERBOSITY)?;

        let assembler = self.pipeline.assembler()?;
        let results = self.pipeline.build()?;
        let pad = results.vocab.padding_token();

        let mut writer = std::io::stdout().lock();
        for (idx, batch) in assembler
            .batches(&results.sequences, pad)
            .take(self.count)
            .enumerate()
        {
            write_batch(&mut writer, idx, &batch, &results.vocab)?;
        }
        writer.flush()?;

        Ok(())
    }
}

fn write_batch(
    writer: &mut dyn Write,
    idx: usize,
    batch: &TrainingBatch<u32>,
    vocab: &SymbolVocab<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(writer, "batch {idx}: shape {:?}", batch.inputs.dim())?;
    for ((inputs, targets), len) in batch
        .inputs
        .rows()
        .into_iter()
        .zip(batch.targets.rows())
        .zip(&batch.row_lengths)
    {
        let x = vocab.try_decode_to_string(&inputs.to_vec())?;
        let y = vocab.try_decode_to_string(&targets.to_vec())?;
        writeln!(writer, "  x[{len:>3}] {x:?}")?;
        writeln!(writer, "  y       {y:?}")?;
    }
    Ok(())
}
