use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Poem input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Poem file of `title:body` lines; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// A display name for the input.
    pub fn name(&self) -> &str {
        match &self.input {
            Some(p) if p != "-" => p,
            _ => "<stdin>",
        }
    }
}

/// Open a buffered writer; `"-"` is stdout.
pub fn open_writer(path: &str) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
    Ok(match squash_standard_io(&Some(path.to_string())) {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}
