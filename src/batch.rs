use std::sync::mpsc::channel;

use threadpool::ThreadPool;

use crate::error::Error;
use crate::report::Report;
use crate::Result;

/// One text to build a coding for, together with the label it is reported
/// under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    pub label: String,
    pub text: String,
}

impl Input {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Builds and encodes every input on its own worker. Results are returned
/// in input order. Failing inputs do not affect the others.
pub fn encode_all(
    inputs: Vec<Input>,
    number_of_threads: usize,
    show_tree: bool,
) -> Result<Vec<Result<Report>>> {
    let input_count = inputs.len();
    let threadpool = ThreadPool::new(number_of_threads.max(1));
    let (sender, receiver) = channel();

    for (index, input) in inputs.into_iter().enumerate() {
        let sender = sender.clone();
        threadpool.execute(move || {
            let report = Report::new(&input.label, &input.text, show_tree);
            // the receiver only disappears when the caller gave up
            let _ = sender.send((index, report));
        });
    }
    drop(sender);

    let mut results: Vec<Option<Result<Report>>> = (0..input_count).map(|_| None).collect();
    for (index, report) in receiver.iter() {
        results[index] = Some(report);
    }

    let missing = results.iter().filter(|result| result.is_none()).count();
    if missing > 0 {
        log::error!("{} of {} jobs did not report back", missing, input_count);
        return Err(Error::WorkerPoolTerminatedEarly(missing));
    }
    Ok(results.into_iter().flatten().collect())
}
