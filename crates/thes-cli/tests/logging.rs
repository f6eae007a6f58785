//! Tests for the log subscriber.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use thes_cli::logging::{LogConfig, LogFormat, build_subscriber};
use thes_core::{Aggregator, StaticProvider, Thesaurus, ThesaurusOptions};
use thes_model::{Category, FilterSet};
use thes_report::ReportOptions;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf-8")
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn unknown_required_list_is_warned_at_default_level() {
    let captured = Captured::default();
    let config = LogConfig {
        level_filter: LevelFilter::WARN,
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Compact,
        ..LogConfig::default()
    };
    let subscriber = build_subscriber(&config, captured.clone());

    tracing::subscriber::with_default(subscriber, || {
        let filters = FilterSet::from_map([("Basic", vec!["happy"])]).expect("filters");
        let provider =
            StaticProvider::new("static").with("happy", Category::Synonyms, ["happy", "glad"]);
        let thes = Thesaurus::new(
            Aggregator::default().with_provider(provider),
            filters,
            &ThesaurusOptions::default().with_required(["Missing"]),
            ReportOptions::default(),
        );
        thes.lookup("happy", None).expect("lookup");
    });

    let output = captured.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("required word list is not loaded"), "{output}");
    assert!(output.contains("missing"), "{output}");
    assert!(!output.contains("lookup complete"), "{output}");
}
