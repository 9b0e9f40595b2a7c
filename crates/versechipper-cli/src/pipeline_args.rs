use versechipper::{
    batching::{BatchAssembler, BatchAssemblerOptions},
    builder::{VocabBuildResults, VocabularyBuilderOptions},
    corpus::{DEFAULT_MAX_BODY_LEN, DEFAULT_MIN_BODY_LEN, io::read_poem_lines},
};

use crate::input_output::InputArgs;

/// Corpus and batching arg group.
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Sequences per batch.
    #[arg(long)]
    pub batch_size: usize,

    /// Exclusive lower bound on poem body length, in symbols.
    #[arg(long, default_value_t = DEFAULT_MIN_BODY_LEN)]
    pub min_body_len: usize,

    /// Exclusive upper bound on poem body length, in symbols.
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_LEN)]
    pub max_body_len: usize,
}

impl PipelineArgs {
    /// Read the input and build the vocabulary and encoded sequences.
    pub fn build(&self) -> Result<VocabBuildResults<u32>, Box<dyn std::error::Error>> {
        let builder = VocabularyBuilderOptions::default()
            .with_body_len_bounds(self.min_body_len, self.max_body_len)
            .try_init()?;

        log::info!("Reading poems: {}", self.input.name());
        let lines = read_poem_lines(self.input.open_reader()?)?;

        Ok(builder.build(lines)?)
    }

    /// Build the batch assembler.
    pub fn assembler(&self) -> Result<BatchAssembler, Box<dyn std::error::Error>> {
        Ok(BatchAssemblerOptions::new(self.batch_size).try_init()?)
    }
}
