use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use batch::Input;
pub use cli::CLIParser;
use error::Error;

pub mod batch;
mod cli;
pub mod error;
pub mod huffman;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    texts: Vec<String>,
    input_files: Vec<PathBuf>,
    number_of_threads: usize,
    show_tree: bool,
}

fn read_input_file(file_path: &Path) -> Result<String> {
    let path = file_path.to_string_lossy().into_owned();
    fs::read_to_string(file_path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => Error::InputFileIsNotValidText(path),
        _ => Error::UnableToOpenInputFileForReading(path, e),
    })
}

fn collect_inputs(arguments: &Arguments) -> Result<Vec<Input>> {
    let mut inputs: Vec<Input> = arguments
        .texts
        .iter()
        .enumerate()
        .map(|(index, text)| Input::new(format!("text #{}", index + 1), text.as_str()))
        .collect();
    for file_path in &arguments.input_files {
        let text = read_input_file(file_path)?;
        inputs.push(Input::new(file_path.to_string_lossy(), text));
    }
    if inputs.is_empty() {
        return Err(Error::NoInputProvided);
    }
    Ok(inputs)
}

/// Builds a code table for every text and input file and prints one report
/// per input. Reports that fail are logged; the first failure is returned
/// after all successful reports were printed.
pub fn encode_inputs(arguments: &Arguments) -> Result<()> {
    let inputs = collect_inputs(arguments)?;
    log::info!(
        "Encoding {} inputs on {} threads",
        inputs.len(),
        arguments.number_of_threads
    );
    let results = batch::encode_all(inputs, arguments.number_of_threads, arguments.show_tree)?;
    let mut first_error = None;
    for result in results {
        match result {
            Ok(report) => println!("{}", report),
            Err(e) => {
                log::error!("{}", e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
