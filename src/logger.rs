use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use crate::huffman::CodeTable;

const CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        init_fallback();
        log::debug!("Logger configuration '{}' not loaded: {}", CONFIG_FILE, e);
    }
}

// warnings and errors only, written to stderr so reports stay clean
fn init_fallback() {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

pub fn log_code_table(label: &str, codes: &CodeTable) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let entries: Vec<String> = codes
        .iter()
        .map(|entry| format!("{:?}={}", entry.symbol, entry.code))
        .collect();
    log::debug!("{}: {}", label, entries.join(" "));
}
