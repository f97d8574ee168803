// Application state module
// Holds the loaded configuration and the inspector shared by all connections

use super::types::Config;
use crate::inspector::Inspector;
use crate::logger::InfoLog;
use crate::ua::UaParser;

/// Inspector wired to the rama-ua backed parser and the global info log
pub type IndexInspector = Inspector<UaParser, InfoLog>;

/// Application state
pub struct AppState {
    pub config: Config,
    pub inspector: IndexInspector,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let inspector = Inspector::new(
            UaParser::new(config.inspector.max_user_agent_length),
            InfoLog,
            config.logging.agent_format(),
        );

        Self {
            config: config.clone(),
            inspector,
        }
    }
}
